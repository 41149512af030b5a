//! Capacity hint for constructing an empty array with preallocated storage.

/// Requested capacity for [`SimpleVector::with_reserve`](crate::SimpleVector::with_reserve).
///
/// The hint exists only to tell "reserve `n` slots, hold no elements" apart from
/// "hold `n` default elements" ([`SimpleVector::with_len`](crate::SimpleVector::with_len)).
/// It carries nothing but the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveProxyObj {
    capacity: usize,
}

impl ReserveProxyObj {
    pub const fn new(capacity: usize) -> ReserveProxyObj {
        ReserveProxyObj { capacity }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveProxyObj::new`].
///
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let v = SimpleVector::<i32>::with_reserve(reserve(5)).unwrap();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 5);
/// ```
#[inline]
pub const fn reserve(capacity_to_reserve: usize) -> ReserveProxyObj {
    ReserveProxyObj::new(capacity_to_reserve)
}
