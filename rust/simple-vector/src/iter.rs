//! By-value iteration over a [`SimpleVector`](crate::SimpleVector).

use std::iter::FusedIterator;
use std::ptr;

use crate::array_ptr::ArrayPtr;

/// Iterator that moves the elements out of a `SimpleVector`.
///
/// Owns the array's block; elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T> {
    items: ArrayPtr<T>,
    /// Next position to yield from the front.
    start: usize,
    /// One past the next position to yield from the back.
    end: usize,
}

impl<T> IntoIter<T> {
    /// `items` must hold live values at `[0, len)`.
    pub(crate) fn new(items: ArrayPtr<T>, len: usize) -> IntoIter<T> {
        debug_assert!(len <= items.capacity());
        IntoIter {
            items,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            std::slice::from_raw_parts(self.items.as_ptr().add(self.start), self.end - self.start)
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            std::slice::from_raw_parts_mut(
                self.items.as_mut_ptr().add(self.start),
                self.end - self.start,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        Some(unsafe { self.items.get_unchecked(index).assume_init_read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        Some(unsafe { self.items.get_unchecked(self.end).assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        // Mark everything consumed before running destructors.
        self.start = self.end;
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::SimpleVector;

    #[test]
    fn test_into_iter_yields_in_order() {
        let v = SimpleVector::from([String::from("a"), String::from("b"), String::from("c")]);
        let collected: Vec<String> = v.into_iter().collect();
        assert_eq!(collected, ["a", "b", "c"]);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let mut it = SimpleVector::from([1, 2, 3, 4]).into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_into_iter_partial_consumption() {
        let v = SimpleVector::from([vec![1], vec![2, 2], vec![3, 3, 3]]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(vec![1]));
        assert_eq!(format!("{it:?}"), "IntoIter([[2, 2], [3, 3, 3]])");
    }

    #[test]
    fn test_into_iter_empty() {
        let v = SimpleVector::<String>::new();
        assert_eq!(v.into_iter().count(), 0);
    }
}
