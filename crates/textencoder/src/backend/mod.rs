//! UTF-8 primitives the encoder delegates byte production to.
//!
//! The encoder decides *which* code units to encode in a call; a
//! [`Utf8Backend`] decides *how*. Every backend must agree on the following:
//!
//! - a high surrogate immediately followed by a low surrogate is one
//!   supplementary character and encodes to four bytes;
//! - any other surrogate encodes to U+FFFD (`EF BF BD`);
//! - bounded encoding writes only inside the destination, never splits a
//!   character, and reports units read and bytes written.
//!
//! Given those rules the byte count of any input is known in advance
//! ([`encoded_len`](crate::encoded_len)), which is what lets the encoder size
//! destinations before delegating.

mod char_backend;
mod encoding_rs_backend;

use alloc::vec::Vec;

pub use char_backend::CoreBackend;
pub use encoding_rs_backend::EncodingRsBackend;
use crate::EncodeIntoResult;

/// A standards-compliant UTF-16 to UTF-8 converter.
pub trait Utf8Backend {
    /// Appends the UTF-8 encoding of `units` to `out`.
    fn encode_to_vec(&self, units: &[u16], out: &mut Vec<u8>);

    /// Encodes as much of `units` as fits into `dst`, returning units read and
    /// bytes written. Bytes past `written` are left untouched.
    fn encode_into_slice(&self, units: &[u16], dst: &mut [u8]) -> EncodeIntoResult;
}

impl<T: Utf8Backend + ?Sized> Utf8Backend for &T {
    fn encode_to_vec(&self, units: &[u16], out: &mut Vec<u8>) {
        (**self).encode_to_vec(units, out);
    }

    fn encode_into_slice(&self, units: &[u16], dst: &mut [u8]) -> EncodeIntoResult {
        (**self).encode_into_slice(units, dst)
    }
}
