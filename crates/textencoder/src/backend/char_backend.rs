use alloc::vec::Vec;
use core::char::{REPLACEMENT_CHARACTER, decode_utf16};

use super::Utf8Backend;
use crate::EncodeIntoResult;

/// Backend built on [`core::char::decode_utf16`].
///
/// Decodes one scalar value at a time, substituting U+FFFD for unpaired
/// surrogates. Slower than [`EncodingRsBackend`](super::EncodingRsBackend)
/// but has no dependencies, which makes it a useful reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreBackend;

impl Utf8Backend for CoreBackend {
    fn encode_to_vec(&self, units: &[u16], out: &mut Vec<u8>) {
        let mut tmp = [0u8; 4];
        for ch in decode_utf16(units.iter().copied()) {
            let ch = ch.unwrap_or(REPLACEMENT_CHARACTER);
            out.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
        }
    }

    fn encode_into_slice(&self, units: &[u16], dst: &mut [u8]) -> EncodeIntoResult {
        let mut read = 0;
        let mut written = 0;
        for ch in decode_utf16(units.iter().copied()) {
            // An unpaired surrogate is a single unit; U+FFFD also has length 1.
            let (ch, consumed) = match ch {
                Ok(ch) => (ch, ch.len_utf16()),
                Err(_) => (REPLACEMENT_CHARACTER, 1),
            };
            let len = ch.len_utf8();
            if written + len > dst.len() {
                break;
            }
            ch.encode_utf8(&mut dst[written..written + len]);
            written += len;
            read += consumed;
        }
        EncodeIntoResult { read, written }
    }
}
