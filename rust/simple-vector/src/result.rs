pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        index_out_of_range(index, len)
    }
}

#[cold]
pub fn index_out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::Error::index_out_of_range(index, len))
}

/// Unwraps the result of an allocating operation for use in trait impls that
/// cannot return errors (`Clone`, `From`, `Extend`, ...).
#[inline]
pub(crate) fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => e.raise(),
    }
}
