use std::alloc::Layout;

use thiserror::Error;

/// Errors reported by [`SimpleVector`](crate::SimpleVector) and
/// [`ArrayPtr`](crate::ArrayPtr).
///
/// Kept flat and allocation-free: an `AllocationFailure` has to be constructible
/// when the allocator has just refused us memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Storage for `capacity` elements could not be obtained.
    ///
    /// `layout` is `None` when the requested size does not even fit in a
    /// `Layout` (the byte size overflows `isize`).
    #[error("failed to allocate storage for {capacity} elements")]
    AllocationFailure {
        capacity: usize,
        layout: Option<Layout>,
    },

    /// Checked access past the logical end of the array.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl Error {
    pub fn allocation_failure(capacity: usize, layout: Option<Layout>) -> Error {
        Error::AllocationFailure { capacity, layout }
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Error {
        Error::IndexOutOfRange { index, len }
    }

    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Error::AllocationFailure { .. })
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Error::IndexOutOfRange { .. })
    }

    /// Escalates the error the way std collections do for their infallible APIs:
    /// a known layout goes to the allocation error handler, anything else panics.
    #[cold]
    #[inline(never)]
    pub(crate) fn raise(self) -> ! {
        match self {
            Error::AllocationFailure {
                layout: Some(layout),
                ..
            } => std::alloc::handle_alloc_error(layout),
            Error::AllocationFailure { layout: None, .. } => panic!("capacity overflow"),
            other => panic!("{other}"),
        }
    }
}
