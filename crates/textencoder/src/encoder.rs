//! Streaming UTF-16 to UTF-8 encoder.
//!
//! Overview
//! - Input arrives as chunks of UTF-16 code units (`&[u16]`). A supplementary
//!   character is two units, and a chunk boundary may fall between them.
//! - When a call is marked as streaming and its input ends in a high
//!   surrogate, that unit is held back in a one-unit carry-over slot instead
//!   of being encoded as U+FFFD. The next call sees it prepended to its own
//!   input, so the pair is encoded whole.
//! - A non-streaming call resolves whatever is carried over: it pairs with a
//!   leading low surrogate or becomes U+FFFD.
//!
//! Staging
//! - Every call starts by staging `pending ++ input`. When nothing is pending
//!   the input is borrowed as is; otherwise the carried unit and the input are
//!   copied into one owned buffer so the backend sees a contiguous slice.
//!
//! Bounded output
//! - `encode_into` sizes the staged units with [`unit_size`] and keeps the
//!   longest prefix that fits in the destination. A surrogate pair is sized 4
//!   at its high unit and 0 at its low unit, so the cut never lands inside a
//!   pair. The backend then writes exactly that prefix.
//! - `read` counts units of *this call's* input only. A carried unit that ends
//!   up encoded was already counted by the call that buffered it.
//!
//! [`unit_size`]: crate::unit_size

use alloc::{borrow::Cow, vec::Vec};

use log::trace;

use crate::{
    EncodeError, EncodeIntoResult, EncodeOptions,
    backend::{EncodingRsBackend, Utf8Backend},
    pending::PendingSurrogate,
    unit::{encoded_len, fitting_prefix, is_high_surrogate, is_low_surrogate},
};

/// Name of the output encoding, as reported by
/// [`TextEncoderImpl::encoding`].
pub const ENCODING: &str = "utf-8";

/// Streaming encoder using the default [`EncodingRsBackend`].
pub type TextEncoder = TextEncoderImpl<EncodingRsBackend>;

/// UTF-16 to UTF-8 encoder that keeps split surrogate pairs intact across
/// calls.
///
/// The encoder owns a single carry-over slot. Calls that touch it take
/// `&mut self`, so one instance cannot be driven from two places at once;
/// separate instances share nothing.
///
/// # Examples
///
/// ```rust
/// use textencoder::{EncodeOptions, TextEncoder};
///
/// let text: Vec<u16> = "A\u{1D573}B".encode_utf16().collect();
/// let mut encoder = TextEncoder::new();
///
/// // Split between the two halves of U+1D573.
/// let mut out = encoder.encode(&text[..2], EncodeOptions::stream());
/// out.extend(encoder.encode(&text[2..], EncodeOptions::flush()));
///
/// assert_eq!(out, "A\u{1D573}B".as_bytes());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextEncoderImpl<B> {
    backend: B,
    pending: PendingSurrogate,
}

impl TextEncoder {
    /// Creates an encoder with nothing buffered.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_backend(EncodingRsBackend)
    }
}

impl<B: Utf8Backend> TextEncoderImpl<B> {
    /// Creates an encoder that delegates byte production to `backend`.
    pub const fn with_backend(backend: B) -> Self {
        Self {
            backend,
            pending: PendingSurrogate::new(),
        }
    }

    /// The output encoding, always `"utf-8"`.
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        ENCODING
    }

    /// The backend this encoder delegates to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The high surrogate carried over from the last streaming call, if any.
    #[must_use]
    pub fn pending(&self) -> Option<u16> {
        self.pending.get()
    }

    /// Whether a high surrogate is waiting for its partner.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drops any carried-over unit without emitting it.
    pub fn reset(&mut self) {
        if let Some(unit) = self.pending.take() {
            trace!("discarding pending high surrogate {unit:#06X}");
        }
    }

    /// Encodes `input`, preceded by any carried-over unit, and returns the
    /// bytes.
    ///
    /// With `options.stream` set, a trailing high surrogate is carried over to
    /// the next call instead of being emitted. Otherwise every surrogate in
    /// the staged input is resolved: pairs become four bytes and orphans
    /// become U+FFFD (`EF BF BD`).
    pub fn encode(&mut self, input: &[u16], options: EncodeOptions) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_to_vec(input, options, &mut out);
        out
    }

    /// Like [`encode`](Self::encode), for Rust string input.
    ///
    /// A `&str` never ends in half a pair, but a unit carried over from an
    /// earlier call is still paired or resolved here.
    pub fn encode_str(&mut self, input: &str, options: EncodeOptions) -> Vec<u8> {
        let units: Vec<u16> = input.encode_utf16().collect();
        self.encode(&units, options)
    }

    /// Like [`encode`](Self::encode), but appends to `out`. Returns the number
    /// of bytes appended.
    pub fn encode_to_vec(
        &mut self,
        input: &[u16],
        options: EncodeOptions,
        out: &mut Vec<u8>,
    ) -> usize {
        let carried = self.pending.take();
        let units = self.stage_for_encode(carried, input, options);

        let start = out.len();
        self.backend.encode_to_vec(&units, out);
        out.len() - start
    }

    /// Like [`encode`](Self::encode), but reports allocation failure instead
    /// of aborting.
    ///
    /// The output is reserved up front with its exact size.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Reserve`] if the output cannot be allocated. The
    /// carry-over slot is then left as it was before the call, so the same
    /// input may be retried.
    pub fn try_encode(
        &mut self,
        input: &[u16],
        options: EncodeOptions,
    ) -> Result<Vec<u8>, EncodeError> {
        let carried = self.pending.take();
        let units = self.stage_for_encode(carried, input, options);

        let requested = encoded_len(&units);
        let mut out = Vec::new();
        if let Err(source) = out.try_reserve_exact(requested) {
            self.pending.restore(carried);
            return Err(EncodeError::Reserve { requested, source });
        }
        self.backend.encode_to_vec(&units, &mut out);
        Ok(out)
    }

    /// Emits any carried-over unit as U+FFFD.
    ///
    /// Equivalent to `encode(&[], EncodeOptions::flush())`.
    pub fn flush(&mut self) -> Vec<u8> {
        self.encode(&[], EncodeOptions::flush())
    }

    /// Encodes as much of `input`, preceded by any carried-over unit, as fits
    /// into `dst`.
    ///
    /// Returns how many units of `input` were consumed and how many bytes were
    /// written to the front of `dst`. A surrogate pair is written whole or
    /// not at all. Units past `read` were not consumed and should be passed
    /// again.
    ///
    /// With `options.stream` set, a high surrogate that ends the input and
    /// fits into `dst` is carried over instead of written, and counts as read.
    /// A high surrogate followed by anything but a low surrogate is written as
    /// U+FFFD even when streaming.
    ///
    /// If not even one character fits, nothing is written and a carried-over
    /// unit stays carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textencoder::{EncodeIntoResult, EncodeOptions, TextEncoder};
    ///
    /// let input: Vec<u16> = "hello world".encode_utf16().collect();
    /// let mut dst = [0u8; 5];
    /// let res = TextEncoder::new().encode_into(&input, &mut dst, EncodeOptions::default());
    ///
    /// assert_eq!(res, EncodeIntoResult { read: 5, written: 5 });
    /// assert_eq!(&dst, b"hello");
    /// ```
    pub fn encode_into(
        &mut self,
        input: &[u16],
        dst: &mut [u8],
        options: EncodeOptions,
    ) -> EncodeIntoResult {
        let carried_len = self.pending.len();
        let carried = self.pending.take();
        let units = stage(carried, input);

        let (mut end, size) = fitting_prefix(&units, dst.len());

        if end < carried_len {
            // The carried unit itself did not fit; keep it for later.
            self.pending.restore(carried);
            return EncodeIntoResult::default();
        }

        let read = end - carried_len;
        let mut expected = size;

        // Only a high surrogate that ends the staged units can still be
        // paired. One followed by anything else is an orphan: a low surrogate
        // after it would have been admitted at size 0.
        if options.stream && end == units.len() && end > 0 && is_high_surrogate(units[end - 1]) {
            end -= 1;
            self.pending.hold(units[end]);
            expected -= 3;
            trace!("holding trailing high surrogate {:#06X}", units[end]);
        } else {
            log_resolved(carried, &units[..end]);
        }

        let res = self.backend.encode_into_slice(&units[..end], dst);
        debug_assert_eq!(res.read, end, "backend stopped short of the sized prefix");
        debug_assert_eq!(res.written, expected, "backend output differs from classified size");

        EncodeIntoResult {
            read,
            written: res.written,
        }
    }

    /// Stages `carried ++ input` for a full encode, moving a trailing high
    /// surrogate into the carry-over slot when streaming.
    fn stage_for_encode<'a>(
        &mut self,
        carried: Option<u16>,
        input: &'a [u16],
        options: EncodeOptions,
    ) -> Cow<'a, [u16]> {
        let units = stage(carried, input);

        let trailing_high = units
            .last()
            .copied()
            .filter(|&u| options.stream && is_high_surrogate(u));
        let Some(last) = trailing_high else {
            log_resolved(carried, &units);
            return units;
        };

        self.pending.hold(last);
        trace!("holding trailing high surrogate {last:#06X}");
        match units {
            Cow::Borrowed(b) => Cow::Borrowed(&b[..b.len() - 1]),
            Cow::Owned(mut o) => {
                o.pop();
                Cow::Owned(o)
            }
        }
    }
}

/// Prepends the carried-over unit, if any, to `input`.
fn stage(carried: Option<u16>, input: &[u16]) -> Cow<'_, [u16]> {
    match carried {
        None => Cow::Borrowed(input),
        Some(high) => {
            let mut units = Vec::with_capacity(input.len() + 1);
            units.push(high);
            units.extend_from_slice(input);
            Cow::Owned(units)
        }
    }
}

/// Traces what happened to a carried-over unit that is about to be encoded.
fn log_resolved(carried: Option<u16>, units: &[u16]) {
    let Some(high) = carried else {
        return;
    };
    match units.get(1) {
        Some(&low) if is_low_surrogate(low) => {
            trace!("paired carried high surrogate {high:#06X} with {low:#06X}");
        }
        _ if units.is_empty() => {}
        _ => trace!("carried high surrogate {high:#06X} is orphaned; emitting U+FFFD"),
    }
}
