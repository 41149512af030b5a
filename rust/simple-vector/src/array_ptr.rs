//! Exclusive owner of a single heap block of element slots.
//!
//! `ArrayPtr<T>` is the raw storage layer underneath [`SimpleVector`](crate::SimpleVector).
//! It knows how many slots it owns but not which of them hold live values: slots are
//! exposed as `MaybeUninit<T>` and the buffer never runs element destructors. Dropping
//! an `ArrayPtr` only returns the memory to the global allocator.
//!
//! Ownership is singular. The type is not `Clone`; a block changes hands only by moving
//! the owner, by [`ArrayPtr::swap`], or by [`ArrayPtr::release`] followed by
//! [`ArrayPtr::from_raw_parts`].

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::{Result, error::Error};

/// Owns zero or one contiguous block of `capacity` slots for values of type `T`.
pub struct ArrayPtr<T> {
    /// Start of the block, dangling when nothing is owned or `T` is zero-sized.
    ptr: NonNull<T>,
    /// Number of slots in the block. Zero means the owner is empty.
    capacity: usize,
    _owns: PhantomData<T>,
}

impl<T> ArrayPtr<T> {
    /// Creates an owner that holds no block.
    #[inline]
    pub const fn new() -> ArrayPtr<T> {
        ArrayPtr {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates a block of exactly `capacity` slots.
    ///
    /// A zero `capacity` yields an empty owner without touching the allocator. For a
    /// zero-sized `T` the allocator is not called either, but the owner keeps a
    /// dangling pointer, records `capacity` and reports [`ArrayPtr::is_allocated`].
    /// The slots are left uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the byte size of the block overflows
    /// or the global allocator cannot provide the memory.
    pub fn allocate(capacity: usize) -> Result<ArrayPtr<T>> {
        if capacity == 0 {
            return Ok(ArrayPtr::new());
        }

        let layout =
            Layout::array::<T>(capacity).map_err(|_| Error::allocation_failure(capacity, None))?;
        if layout.size() == 0 {
            return Ok(ArrayPtr {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }

        let raw = unsafe { alloc::alloc(layout) } as *mut T;
        match NonNull::new(raw) {
            Some(ptr) => Ok(ArrayPtr {
                ptr,
                capacity,
                _owns: PhantomData,
            }),
            None => {
                log::debug!(
                    "ArrayPtr: allocation of {capacity} slots ({} bytes) failed",
                    layout.size()
                );
                Err(Error::allocation_failure(capacity, Some(layout)))
            }
        }
    }

    /// Takes ownership of a block produced elsewhere.
    ///
    /// # Safety
    ///
    /// - `ptr` must come from [`ArrayPtr::release`] with the same `capacity`, or have
    ///   been allocated by the global allocator with `Layout::array::<T>(capacity)`
    ///   (dangling is allowed when `capacity` is zero or `T` is zero-sized).
    /// - No other owner may access or free the block afterwards.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> ArrayPtr<T> {
        ArrayPtr {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    /// Gives up ownership of the block and returns it together with its capacity.
    ///
    /// The owner becomes empty and will no longer free anything; the caller is now
    /// responsible for the memory, typically by handing it back to
    /// [`ArrayPtr::from_raw_parts`]. Returns `None` if nothing was owned.
    #[must_use = "the released block leaks unless it is adopted again"]
    pub fn release(&mut self) -> Option<(NonNull<T>, usize)> {
        if self.capacity == 0 {
            return None;
        }
        let parts = (self.ptr, self.capacity);
        self.ptr = NonNull::dangling();
        self.capacity = 0;
        Some(parts)
    }

    /// Number of slots in the owned block, zero when empty.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if a block is currently owned.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0
    }

    /// Raw pointer to the first slot. Dangling (but aligned) when nothing is owned.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable raw pointer to the first slot. Dangling (but aligned) when nothing
    /// is owned.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::capacity`].
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(index < self.capacity);
        unsafe { &*(self.ptr.as_ptr().add(index) as *const MaybeUninit<T>) }
    }

    /// Returns the slot at `index` mutably without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`ArrayPtr::capacity`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity);
        unsafe { &mut *(self.ptr.as_ptr().add(index) as *mut MaybeUninit<T>) }
    }

    /// Exchanges the blocks owned by `self` and `other`. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(self, other);
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::new()
    }
}

impl<T> Drop for ArrayPtr<T> {
    /// Returns the owned block to the global allocator.
    ///
    /// Slot contents are not dropped; the owner of the logical elements must have
    /// dropped or moved them out already.
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(layout) = Layout::array::<T>(self.capacity) {
            if layout.size() != 0 {
                unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
            }
        }
    }
}

// SAFETY: ArrayPtr uniquely owns its block, so sending it is as safe as sending the
// values it may hold.
unsafe impl<T: Send> Send for ArrayPtr<T> {}

// SAFETY: shared access only hands out shared references to slots.
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> std::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}
