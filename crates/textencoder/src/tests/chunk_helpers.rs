use alloc::vec::Vec;

/// Split `units` into pieces at the cut points derived from `splits`.
///
/// Cuts ignore surrogate pairs, so a piece may end in a high surrogate whose
/// low half starts the next piece. Every piece except possibly the last is
/// non-empty.
pub(crate) fn split_units<'a>(units: &'a [u16], splits: &[usize]) -> Vec<&'a [u16]> {
    let mut chunks = Vec::new();
    let mut rest = units;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + s % rest.len());
        chunks.push(head);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

#[test]
fn split_units_covers_input() {
    let units: Vec<u16> = (0..10).collect();
    let chunks = split_units(&units, &[0, 3, 100]);
    assert_eq!(chunks[0], [0]);
    assert_eq!(chunks[1], [1, 2, 3, 4]);
    assert_eq!(chunks.concat(), units);
}

#[test]
fn split_units_may_cut_a_pair() {
    let units: Vec<u16> = "a\u{1D573}".encode_utf16().collect();
    let chunks = split_units(&units, &[1]);
    assert_eq!(chunks, [&[0x61, 0xD835][..], &[0xDD73][..]]);
}
