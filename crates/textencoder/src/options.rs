/// Per-call options for [`TextEncoderImpl::encode`] and
/// [`TextEncoderImpl::encode_into`].
///
/// # Examples
///
/// ```rust
/// use textencoder::{EncodeOptions, TextEncoder};
///
/// let mut encoder = TextEncoder::new();
/// // A lone high surrogate at the end of a streamed chunk is held back...
/// assert!(encoder.encode(&[0xD835], EncodeOptions::stream()).is_empty());
/// // ...and joined with the low surrogate from the next chunk.
/// assert_eq!(
///     encoder.encode(&[0xDD73], EncodeOptions::stream()),
///     [0xF0, 0x9D, 0x95, 0xB3]
/// );
/// ```
///
/// # Default
///
/// `stream` defaults to `false`.
///
/// [`TextEncoderImpl::encode`]: crate::TextEncoderImpl::encode
/// [`TextEncoderImpl::encode_into`]: crate::TextEncoderImpl::encode_into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Whether more input will follow this call.
    ///
    /// When `true`, a high surrogate at the very end of the input is kept by
    /// the encoder and prepended to the next call's input instead of being
    /// emitted as U+FFFD.
    ///
    /// When `false`, anything buffered by an earlier streaming call is
    /// resolved now: joined with a leading low surrogate, or replaced.
    ///
    /// # Default
    ///
    /// `false`
    pub stream: bool,
}

impl EncodeOptions {
    /// Options for a call that will be followed by more input.
    #[must_use]
    pub const fn stream() -> Self {
        Self { stream: true }
    }

    /// Options for the final call of a stream, or a standalone call.
    #[must_use]
    pub const fn flush() -> Self {
        Self { stream: false }
    }
}

/// Outcome of [`TextEncoderImpl::encode_into`].
///
/// [`TextEncoderImpl::encode_into`]: crate::TextEncoderImpl::encode_into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeIntoResult {
    /// UTF-16 code units consumed from this call's input. Units carried over
    /// from an earlier call are not counted.
    pub read: usize,
    /// Bytes written to the front of the destination.
    pub written: usize,
}
