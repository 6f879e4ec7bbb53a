//! UTF-16 code unit classification.
//!
//! [`unit_size`] reports how many UTF-8 bytes the unit at a given index
//! contributes once the sequence is encoded. A surrogate pair's four bytes are
//! attributed to its high unit and the low unit reports zero, so any prefix cut
//! chosen by summing unit sizes keeps pairs whole.
//!
//! Lone surrogates are encoded as U+FFFD, which is three bytes in UTF-8, the
//! same footprint as every other unit above U+07FF. The classifier relies on
//! that and does not distinguish the two cases.

/// UTF-8 encoding of U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_UTF8: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Returns `true` for a leading (high) surrogate, `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Returns `true` for a trailing (low) surrogate, `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Number of UTF-8 bytes contributed by `units[index]`.
///
/// | unit                                   | bytes |
/// |----------------------------------------|-------|
/// | `0x0000..=0x007F`                      | 1     |
/// | `0x0080..=0x07FF`                      | 2     |
/// | high surrogate followed by a low one   | 4     |
/// | low surrogate preceded by a high one   | 0     |
/// | anything else (incl. lone surrogates)  | 3     |
///
/// # Panics
///
/// Panics if `index` is out of bounds.
#[inline]
#[must_use]
pub fn unit_size(units: &[u16], index: usize) -> usize {
    let unit = units[index];

    if unit <= 0x7F {
        return 1;
    }

    if unit <= 0x7FF {
        return 2;
    }

    if is_high_surrogate(unit) && units.get(index + 1).copied().is_some_and(is_low_surrogate) {
        return 4;
    }

    if is_low_surrogate(unit) && index > 0 && is_high_surrogate(units[index - 1]) {
        return 0;
    }

    3
}

/// Exact length in bytes of the UTF-8 encoding of `units`, with lone
/// surrogates counted as U+FFFD.
#[must_use]
pub fn encoded_len(units: &[u16]) -> usize {
    (0..units.len()).map(|i| unit_size(units, i)).sum()
}

/// Scans `units` and returns `(count, bytes)`: the longest prefix whose
/// encoding fits in `capacity` bytes, and that encoding's size.
pub(crate) fn fitting_prefix(units: &[u16], capacity: usize) -> (usize, usize) {
    let mut size = 0;
    let mut i = 0;
    while i < units.len() {
        let unit_bytes = unit_size(units, i);
        if size + unit_bytes > capacity {
            break;
        }
        size += unit_bytes;
        i += 1;
    }
    (i, size)
}
