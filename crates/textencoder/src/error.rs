use alloc::collections::TryReserveError;

use thiserror::Error;

/// Failure of a fallible-allocation encode.
///
/// Malformed UTF-16 is never an error: lone surrogates are encoded as U+FFFD.
/// The only failure mode is running out of memory for the output, reported by
/// [`TextEncoderImpl::try_encode`].
///
/// [`TextEncoderImpl::try_encode`]: crate::TextEncoderImpl::try_encode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The output buffer could not be grown.
    #[error("failed to reserve {requested} bytes for encoded output")]
    Reserve {
        /// Exact number of bytes the encoded chunk needed.
        requested: usize,
        /// Allocator error.
        #[source]
        source: TryReserveError,
    },
}
