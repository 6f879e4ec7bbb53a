use alloc::vec::Vec;

use encoding_rs::mem::convert_utf16_to_utf8_partial;

use super::Utf8Backend;
use crate::{
    EncodeIntoResult,
    unit::{encoded_len, fitting_prefix},
};

/// Backend built on `encoding_rs`'s UTF-16 to UTF-8 converter.
///
/// This is the backend used by [`TextEncoder`](crate::TextEncoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodingRsBackend;

impl Utf8Backend for EncodingRsBackend {
    fn encode_to_vec(&self, units: &[u16], out: &mut Vec<u8>) {
        let start = out.len();
        out.resize(start + encoded_len(units), 0);
        let res = self.encode_into_slice(units, &mut out[start..]);
        debug_assert_eq!(res.read, units.len());
        out.truncate(start + res.written);
    }

    fn encode_into_slice(&self, units: &[u16], dst: &mut [u8]) -> EncodeIntoResult {
        if units.is_empty() {
            return EncodeIntoResult::default();
        }
        // The converter may use the whole destination as scratch space, so hand
        // it exactly the bytes the fitting prefix needs.
        let (count, bytes) = fitting_prefix(units, dst.len());
        let (read, written) = convert_utf16_to_utf8_partial(&units[..count], &mut dst[..bytes]);
        debug_assert_eq!((read, written), (count, bytes));
        EncodeIntoResult { read, written }
    }
}
