//! A streaming UTF-16 to UTF-8 encoder with the shape of the web
//! `TextEncoder` (`encode`, `encodeInto`, `encoding`), plus correct handling
//! of surrogate pairs split across input chunks.
//!
//! A plain encoder sees a chunk that ends in a high surrogate as malformed and
//! emits U+FFFD for it, corrupting the character once its low half arrives in
//! the next chunk. [`TextEncoder`] instead holds such a unit back when the call
//! is marked as streaming, and joins it with the next chunk.
//!
//! ```rust
//! use textencoder::{EncodeOptions, TextEncoder};
//!
//! let mut encoder = TextEncoder::new();
//! assert_eq!(encoder.encode_str("hello", EncodeOptions::default()), b"hello");
//!
//! // U+1D573 split across two chunks.
//! assert!(encoder.encode(&[0xD835], EncodeOptions::stream()).is_empty());
//! assert_eq!(
//!     encoder.encode(&[0xDD73], EncodeOptions::stream()),
//!     [0xF0, 0x9D, 0x95, 0xB3]
//! );
//!
//! // Without streaming, a lone surrogate becomes U+FFFD.
//! assert_eq!(encoder.encode(&[0xD835], EncodeOptions::flush()), [0xEF, 0xBF, 0xBD]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod backend;
mod encoder;
mod error;
mod options;
mod pending;
mod unit;

#[cfg(test)]
mod tests;

pub use backend::{CoreBackend, EncodingRsBackend, Utf8Backend};
pub use encoder::{ENCODING, TextEncoder, TextEncoderImpl};
pub use error::EncodeError;
pub use options::{EncodeIntoResult, EncodeOptions};
pub use unit::{REPLACEMENT_UTF8, encoded_len, is_high_surrogate, is_low_surrogate, unit_size};
