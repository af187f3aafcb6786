//! Errors reported by [`List`](crate::List) and [`Text`](crate::Text) operations.
//!
//! Every failing operation leaves its buffer exactly as it was before the call. Errors fall into
//! three classes, see [`ErrorKind`]: bad arguments detected before anything is touched, requests
//! that would exceed the byte budget, and allocations the allocator refused.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index was past the end of the buffer.
    ///
    /// For insertions the valid range is `0..=len`, for everything else `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the buffer at the time of the call.
        len: usize,
    },

    /// A count of zero was passed to a bulk operation, or a range ran past the end.
    #[error("count {count} is invalid at index {index} for length {len}")]
    InvalidCount {
        /// Index the range started at.
        index: usize,
        /// The requested number of elements.
        count: usize,
        /// The length of the buffer at the time of the call.
        len: usize,
    },

    /// A zero-length substring was requested.
    #[error("zero-length request")]
    ZeroCount,

    /// A list was constructed with an element size of zero.
    #[error("element size must be non-zero")]
    ZeroElementSize,

    /// An element slice did not match the list's element size.
    #[error("expected {expected} bytes of element data, got {actual}")]
    ElementSize {
        /// Bytes required.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// The effective input was empty.
    #[error("input is empty")]
    EmptyInput,

    /// The operation needs at least one element or character.
    #[error("buffer is empty")]
    Empty,

    /// A zero byte was supplied where text content was expected.
    #[error("zero byte is reserved for the terminator")]
    NulByte,

    /// A text capacity too small to hold the terminator was requested.
    #[error("capacity {0} cannot hold the terminator")]
    InvalidCapacity(usize),

    /// The request would exceed the byte budget, or growth could not make room.
    #[error("request exceeds the byte budget of {budget} bytes")]
    CapacityExceeded {
        /// The budget that was hit.
        budget: usize,
    },

    /// The allocator could not provide the requested block.
    #[error("allocation of {bytes} bytes failed")]
    AllocFailed {
        /// Size of the refused request.
        bytes: usize,
    },
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected before any mutation: bad index, count, size or input.
    InvalidArgument,
    /// The byte budget does not allow the request.
    CapacityExhausted,
    /// The heap could not satisfy the request.
    AllocationFailed,
}

impl Error {
    /// Returns the class of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use growbuf::{Error, ErrorKind};
    /// assert_eq!(Error::Empty.kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(Error::AllocFailed { bytes: 8 }.kind(), ErrorKind::AllocationFailed);
    /// ```
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IndexOutOfBounds { .. }
            | Self::InvalidCount { .. }
            | Self::ZeroCount
            | Self::ZeroElementSize
            | Self::ElementSize { .. }
            | Self::EmptyInput
            | Self::Empty
            | Self::NulByte
            | Self::InvalidCapacity(_) => ErrorKind::InvalidArgument,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExhausted,
            Self::AllocFailed { .. } => ErrorKind::AllocationFailed,
        }
    }
}

/// Allocates a zero-filled block of exactly `bytes` bytes, reporting refusal instead of aborting.
pub(crate) fn alloc_zeroed(bytes: usize) -> Result<Vec<u8>> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(bytes)
        .map_err(|e| {
            tracing::debug!(bytes, error = %e, "allocation refused");
            Error::AllocFailed { bytes }
        })?;
    block.resize(bytes, 0);
    Ok(block)
}
