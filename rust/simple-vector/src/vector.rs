//! `SimpleVector<T>`: a growable, contiguous array on top of [`ArrayPtr`].

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::SliceIndex;

use crate::array_ptr::ArrayPtr;
use crate::error::Error;
use crate::iter::IntoIter;
use crate::reserve::{ReserveProxyObj, reserve};
use crate::result::{Result, infallible, verify_index};

/// A resizable array with a logical size and a separately tracked capacity.
///
/// Elements live at positions `[0, len)` of a single owned [`ArrayPtr`] block with
/// `capacity` slots. Appending to a full array reallocates to capacity 1 when it was
/// empty and doubles it otherwise, so `n` appends cost amortized O(1) each.
/// Explicit [`reserve`](SimpleVector::reserve) and [`resize`](SimpleVector::resize)
/// allocate exactly what was asked for.
///
/// Every operation that may allocate returns a [`Result`]; on
/// [`Error::AllocationFailure`] the array is left exactly as it was.
///
/// # Examples
///
/// ```
/// use simple_vector::simple_vector;
///
/// let mut v = simple_vector![1, 2, 3];
/// v.push_back(4).unwrap();
/// v.insert(0, 0).unwrap();
/// v.erase(2);
/// assert_eq!(v, [0, 1, 3, 4]);
/// assert!(v.at(10).is_err());
/// ```
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty array with no allocation.
    #[inline]
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: ArrayPtr::new(),
            size: 0,
        }
    }

    /// Creates an empty array with exactly `hint.capacity()` slots allocated.
    pub fn with_reserve(hint: ReserveProxyObj) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            items: ArrayPtr::allocate(hint.capacity())?,
            size: 0,
        })
    }

    /// Creates an array of `len` default values; capacity equals `len`.
    pub fn with_len(len: usize) -> Result<SimpleVector<T>>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Creates an array of `len` copies of `value`; capacity equals `len`.
    pub fn from_value(len: usize, value: T) -> Result<SimpleVector<T>>
    where
        T: Clone,
    {
        Self::from_fn(len, |_| value.clone())
    }

    /// Creates an array holding a copy of `data`; capacity equals its length.
    pub fn from_slice(data: &[T]) -> Result<SimpleVector<T>>
    where
        T: Clone,
    {
        Self::from_fn(data.len(), |i| data[i].clone())
    }

    /// Creates an array by moving the elements of `values` in order.
    pub fn from_array<const N: usize>(values: [T; N]) -> Result<SimpleVector<T>> {
        let mut v = Self::with_reserve(reserve(N))?;
        let values = ManuallyDrop::new(values);
        unsafe {
            ptr::copy_nonoverlapping(values.as_ptr(), v.items.as_mut_ptr(), N);
        }
        v.size = N;
        Ok(v)
    }

    /// Creates an array of `len` elements produced by `f(index)`.
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> T) -> Result<SimpleVector<T>> {
        let mut v = Self::with_reserve(reserve(len))?;
        while v.size < len {
            let value = f(v.size);
            unsafe { v.items.get_unchecked_mut(v.size).write(value) };
            v.size += 1;
        }
        Ok(v)
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.items.as_ptr(), self.size) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.items.as_mut_ptr(), self.size) }
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns the element at `index`, or [`Error::IndexOutOfRange`] if
    /// `index >= len()`.
    ///
    /// This is the only accessor that reports a bad index as an error. `v[i]` panics
    /// instead, and [`get_unchecked`](SimpleVector::get_unchecked) does not check at all.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.size)?;
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Mutable counterpart of [`at`](SimpleVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.size)?;
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](SimpleVector::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        unsafe { self.items.get_unchecked(index).assume_init_ref() }
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](SimpleVector::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        unsafe { self.items.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Drops all elements. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements at `[len, self.len())`. No-op if `len >= self.len()`.
    /// Capacity is kept.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.size {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(
            unsafe { self.items.as_mut_ptr().add(len) },
            self.size - len,
        );
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.size = len;
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Sets the length to `new_size`.
    ///
    /// Shrinking drops the trailing elements and keeps the capacity. Growing within
    /// capacity default-constructs the new elements in place. Growing past capacity
    /// reallocates to exactly `new_size` slots first.
    pub fn resize(&mut self, new_size: usize) -> Result<()>
    where
        T: Default,
    {
        self.resize_with(new_size, T::default)
    }

    /// Like [`resize`](SimpleVector::resize), producing new elements with `f`.
    pub fn resize_with(&mut self, new_size: usize, mut f: impl FnMut() -> T) -> Result<()> {
        if new_size <= self.size {
            self.truncate(new_size);
            return Ok(());
        }
        if new_size > self.capacity() {
            self.reallocate(new_size)?;
        }
        while self.size < new_size {
            let value = f();
            unsafe { self.items.get_unchecked_mut(self.size).write(value) };
            self.size += 1;
        }
        Ok(())
    }

    /// Ensures room for `new_capacity` elements in total.
    ///
    /// Does nothing if the capacity is already sufficient; otherwise reallocates to
    /// exactly `new_capacity` slots. The length never changes.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.reallocate(new_capacity)
    }

    /// Appends `value` and returns a reference to it.
    pub fn push_back(&mut self, value: T) -> Result<&mut T> {
        self.emplace_back(|| value)
    }

    /// Appends the value produced by `make` and returns a reference to it.
    ///
    /// `make` runs after any growth, so a failed allocation never constructs it.
    pub fn emplace_back(&mut self, make: impl FnOnce() -> T) -> Result<&mut T> {
        if self.size == self.capacity() {
            let new_capacity = self.grown_capacity()?;
            self.reallocate(new_capacity)?;
        }
        let value = make();
        let index = self.size;
        self.size += 1;
        Ok(unsafe { self.items.get_unchecked_mut(index) }.write(value))
    }

    /// Inserts `value` before position `index` and returns `index`.
    ///
    /// `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize> {
        self.emplace(index, || value)
    }

    /// Inserts the value produced by `make` before position `index` and returns `index`.
    ///
    /// A full array is grown in a single pass: the prefix, the new element and the
    /// suffix are written straight into the new block. Otherwise the suffix is
    /// shifted one slot to the right in place.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn emplace(&mut self, index: usize, make: impl FnOnce() -> T) -> Result<usize> {
        let len = self.size;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );

        if len == self.capacity() {
            let new_capacity = self.grown_capacity()?;
            let mut new_items = ArrayPtr::allocate(new_capacity)?;
            let value = make();
            log::trace!(
                "SimpleVector: growing {} -> {} slots for insert at {index}",
                self.capacity(),
                new_capacity
            );
            unsafe {
                let src = self.items.as_ptr();
                let dst = new_items.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
            }
            self.items.swap(&mut new_items);
        } else {
            let value = make();
            unsafe {
                let p = self.items.as_mut_ptr().add(index);
                ptr::copy(p, p.add(1), len - index);
                p.write(value);
            }
        }
        self.size = len + 1;
        Ok(index)
    }

    /// Drops the last element. Does nothing on an empty array.
    ///
    /// Use [`pop`](SimpleVector::pop) to find out whether anything was removed.
    #[inline]
    pub fn pop_back(&mut self) {
        self.truncate(self.size.saturating_sub(1));
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(unsafe { self.items.get_unchecked(self.size).assume_init_read() })
    }

    /// Removes the element at `index`, shifting the following elements left by one.
    ///
    /// Returns `index`, which now holds the element that followed the removed one
    /// (or equals `len()` if the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting the following elements
    /// left by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.size;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        unsafe {
            let p = self.items.as_mut_ptr().add(index);
            let value = p.read();
            ptr::copy(p.add(1), p, len - index - 1);
            self.size = len - 1;
            value
        }
    }

    /// Exchanges contents with `other` without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Returns a deep copy whose capacity equals `self.len()`.
    pub fn try_clone(&self) -> Result<SimpleVector<T>>
    where
        T: Clone,
    {
        Self::from_slice(self.as_slice())
    }

    /// Replaces the contents with a copy of `source` (copy-and-swap).
    ///
    /// If copying fails, `self` is left unmodified.
    pub fn assign_from(&mut self, source: &SimpleVector<T>) -> Result<()>
    where
        T: Clone,
    {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> SimpleVector<T> {
    /// Capacity to grow to when appending to a full array: 1, then doubling.
    #[inline]
    fn grown_capacity(&self) -> Result<usize> {
        let capacity = self.capacity();
        if capacity == 0 {
            Ok(1)
        } else {
            capacity
                .checked_mul(2)
                .ok_or_else(|| Error::allocation_failure(usize::MAX, None))
        }
    }

    /// Moves the live elements into a fresh block of exactly `new_capacity` slots.
    ///
    /// The new block is allocated before anything is touched, so on failure the
    /// array is unchanged.
    #[cold]
    fn reallocate(&mut self, new_capacity: usize) -> Result<()> {
        debug_assert!(new_capacity >= self.size);
        let mut new_items = ArrayPtr::allocate(new_capacity)?;
        log::trace!(
            "SimpleVector: reallocating {} -> {} slots ({} live)",
            self.capacity(),
            new_capacity,
            self.size
        );
        unsafe {
            ptr::copy_nonoverlapping(self.items.as_ptr(), new_items.as_mut_ptr(), self.size);
        }
        // The old block now only holds moved-from bits; its owner just frees it.
        self.items.swap(&mut new_items);
        Ok(())
    }

    /// Hands the block and length to an owning iterator.
    pub(crate) fn into_raw_parts(self) -> (ArrayPtr<T>, usize) {
        let mut this = ManuallyDrop::new(self);
        (std::mem::take(&mut this.items), this.size)
    }
}

/// Exchanges the contents of two arrays. See [`SimpleVector::swap`].
#[inline]
pub fn swap<T>(lhs: &mut SimpleVector<T>, rhs: &mut SimpleVector<T>) {
    lhs.swap(rhs);
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        infallible(self.assign_from(source))
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for SimpleVector<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            infallible(self.push_back(value));
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            infallible(self.push_back(value));
        }
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = SimpleVector::new();
        for value in iter {
            infallible(v.push_back(value));
        }
        v
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (items, len) = self.into_raw_parts();
        IntoIter::new(items, len)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        infallible(SimpleVector::from_array(values))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(data: &[T]) -> Self {
        infallible(SimpleVector::from_slice(data))
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Moves the elements out of `vec`; the result's capacity equals `vec.len()`.
    fn from(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut v = infallible(SimpleVector::with_reserve(reserve(len)));
        unsafe {
            ptr::copy_nonoverlapping(vec.as_ptr(), v.items.as_mut_ptr(), len);
            vec.set_len(0);
        }
        v.size = len;
        v
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(v: SimpleVector<T>) -> Self {
        v.into_iter().collect()
    }
}

impl<T> From<ReserveProxyObj> for SimpleVector<T> {
    fn from(hint: ReserveProxyObj) -> Self {
        infallible(SimpleVector::with_reserve(hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let v = SimpleVector::<i32>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert_eq!(v, SimpleVector::default());
    }

    #[test]
    fn test_sized_constructors() {
        let v = SimpleVector::<i32>::with_len(5).unwrap();
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 5);
        assert!(v.iter().all(|&x| x == 0));

        let v = SimpleVector::from_value(3, 42).unwrap();
        assert_eq!(v, [42, 42, 42]);
        assert_eq!(v.capacity(), 3);

        let v = SimpleVector::<String>::with_len(0).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_with_reserve() {
        let v = SimpleVector::<String>::with_reserve(reserve(5)).unwrap();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 5);
        assert!(v.is_empty());
    }

    #[test]
    fn test_push_back_doubles_capacity() {
        let mut v = SimpleVector::new();
        let mut capacities = Vec::new();
        for i in 0..9 {
            *v.push_back(i).unwrap() += 100;
            capacities.push(v.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v.len(), 9);
        assert_eq!(v[8], 108);
    }

    #[test]
    fn test_emplace_back_returns_new_element() {
        let mut v = SimpleVector::<String>::new();
        let s = v.emplace_back(|| "abc".repeat(2)).unwrap();
        s.push('!');
        assert_eq!(v[0], "abcabc!");
    }

    #[test]
    fn test_at_checks_bounds() {
        let mut v = SimpleVector::from([1, 2, 3]);
        assert_eq!(*v.at(2).unwrap(), 3);
        assert_eq!(
            v.at(3).unwrap_err(),
            Error::IndexOutOfRange { index: 3, len: 3 }
        );
        *v.at_mut(0).unwrap() = 10;
        assert_eq!(v[0], 10);
        assert!(v.at_mut(100).unwrap_err().is_index_out_of_range());

        v.clear();
        assert!(v.at(0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = SimpleVector::from([1, 2, 3]);
        let _ = v[3];
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_resize() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.resize(5).unwrap();
        assert_eq!(v, [1, 2, 3, 0, 0]);
        assert_eq!(v.capacity(), 5);

        v.resize(2).unwrap();
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 5);

        v.resize(4).unwrap();
        assert_eq!(v, [1, 2, 0, 0]);
        assert_eq!(v.capacity(), 5);

        v.resize(0).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_reserve() {
        let mut v = SimpleVector::from([1, 2]);
        v.reserve(1).unwrap();
        assert_eq!(v.capacity(), 2);
        v.reserve(10).unwrap();
        assert_eq!(v.capacity(), 10);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_insert_grows_in_one_pass() {
        let mut v = SimpleVector::from([1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.insert(0, 0).unwrap(), 0);
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(v.capacity(), 6);

        assert_eq!(v.insert(2, 9).unwrap(), 2);
        assert_eq!(v, [0, 1, 9, 2, 3]);
        assert_eq!(v.insert(5, 7).unwrap(), 5);
        assert_eq!(v, [0, 1, 9, 2, 3, 7]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut v = SimpleVector::new();
        v.insert(0, "a").unwrap();
        assert_eq!(v, ["a"]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn test_insert_past_end_panics() {
        let mut v = SimpleVector::from([1]);
        let _ = v.insert(2, 5);
    }

    #[test]
    fn test_erase() {
        let mut v = SimpleVector::from([1, 2, 3]);
        assert_eq!(v.erase(1), 1);
        assert_eq!(v, [1, 3]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.erase(1), 1);
        assert_eq!(v, [1]);
        assert_eq!(v.remove(0), 1);
        assert!(v.is_empty());
    }

    #[test]
    fn test_pop_back_on_empty_is_noop() {
        let mut v = SimpleVector::from([1, 2]);
        v.pop_back();
        assert_eq!(v, [1]);
        v.pop_back();
        v.pop_back();
        assert!(v.is_empty());
        assert_eq!(v.pop(), None);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_copy_is_deep_and_trims_capacity() {
        let mut original = SimpleVector::with_reserve(reserve(10)).unwrap();
        original.extend([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), 3);
        copy[0] = 100;
        copy.push_back(4).unwrap();
        assert_eq!(original, [1, 2, 3]);
    }

    #[test]
    fn test_assign_from() {
        let source = SimpleVector::from([String::from("x"), String::from("y")]);
        let mut target = SimpleVector::from([String::from("z")]);
        target.assign_from(&source).unwrap();
        assert_eq!(target, source);

        let mut target = SimpleVector::new();
        target.clone_from(&source);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn test_move_leaves_source_empty() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let ptr = a.as_ptr();
        let b = std::mem::take(&mut a);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.as_ptr(), ptr);
    }

    #[test]
    fn test_swap() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let mut b = SimpleVector::with_reserve(reserve(8)).unwrap();
        b.push_back(9).unwrap();
        let (a_ptr, b_ptr) = (a.as_ptr(), b.as_ptr());

        swap(&mut a, &mut b);
        assert_eq!(a, [9]);
        assert_eq!(a.capacity(), 8);
        assert_eq!(a.as_ptr(), b_ptr);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.capacity(), 3);
        assert_eq!(b.as_ptr(), a_ptr);
    }

    #[test]
    fn test_comparisons() {
        let a = SimpleVector::from([1, 2, 3]);
        let mut b = SimpleVector::from([1, 2, 3]);
        assert!(a == b);
        assert!(a <= b && a >= b);

        b.push_back(0).unwrap();
        assert!(a != b);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= b);
        assert!(b >= a);

        let c = SimpleVector::from([1, 3]);
        assert!(a < c);
        assert!(b < c);
        assert_eq!(
            SimpleVector::<i32>::new().cmp(&SimpleVector::new()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_iteration() {
        let mut v = SimpleVector::from([1, 2, 3]);
        for x in &mut v {
            *x *= 2;
        }
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
        assert_eq!(v.iter().rev().next(), Some(&6));
        assert_eq!((&v).into_iter().len(), 3);

        let collected: SimpleVector<_> = (0..5).collect();
        assert_eq!(collected, [0, 1, 2, 3, 4]);
        assert_eq!(collected.capacity(), 8);
    }

    #[test]
    fn test_vec_conversions() {
        let v = SimpleVector::from(vec![String::from("a"), String::from("b")]);
        assert_eq!(v.capacity(), 2);
        let back: Vec<String> = v.into();
        assert_eq!(back, ["a", "b"]);

        let v = SimpleVector::from(&[1u8, 2][..]);
        assert_eq!(v, vec![1, 2]);
        let bytes: &[u8] = &[1, 2];
        assert!(v == *bytes);
        assert!(v == bytes);
        assert!(v != bytes[..1]);
    }

    #[test]
    fn test_debug_format() {
        let v = SimpleVector::from([1, 2]);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }
}
