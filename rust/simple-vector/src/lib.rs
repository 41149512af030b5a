//! A minimal growable array built on an exclusively owned raw buffer.
//!
//! - [`ArrayPtr`]: sole owner of one heap block of uninitialized slots. Allocates,
//!   frees, swaps and releases the block; knows nothing about live elements.
//! - [`SimpleVector`]: logical size on top of an `ArrayPtr`, with append, insert,
//!   erase, resize and reserve. Appending to a full array grows capacity to 1, then
//!   doubles it.
//! - [`reserve()`]/[`ReserveProxyObj`]: a capacity hint selecting the
//!   "capacity `n`, no elements" constructor.
//!
//! Operations that may allocate return [`Result`]. The only other error is
//! [`Error::IndexOutOfRange`], reported by the checked accessors
//! [`SimpleVector::at`] and [`SimpleVector::at_mut`].
//!
//! The `serde` feature serializes a `SimpleVector` as a plain sequence.

mod macros;

pub mod array_ptr;
pub mod error;
pub mod iter;
pub mod reserve;
pub mod result;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod vector;

pub use array_ptr::ArrayPtr;
pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{ReserveProxyObj, reserve};
pub use result::Result;
pub use vector::{SimpleVector, swap};
