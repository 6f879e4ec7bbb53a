#![expect(missing_docs)]

use rstest::rstest;
use textencoder::{
    CoreBackend, EncodeIntoResult, EncodeOptions, ENCODING, REPLACEMENT_UTF8, TextEncoder,
    TextEncoderImpl,
};

const HIGH: u16 = 0xD835;
const LOW: u16 = 0xDD73;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn encoding_is_utf8() {
    assert_eq!(TextEncoder::new().encoding(), "utf-8");
    assert_eq!(ENCODING, "utf-8");
}

#[test]
fn calls_without_stream_are_independent() {
    let mut encoder = TextEncoder::new();
    assert_eq!(encoder.encode_str("Hello", EncodeOptions::default()), b"Hello");
    assert_eq!(encoder.encode_str("World", EncodeOptions::default()), b"World");
}

#[test]
fn stream_and_non_stream_differ_on_split_pair() {
    let mut plain = TextEncoder::new();
    assert_eq!(plain.encode(&[HIGH], EncodeOptions::default()), REPLACEMENT_UTF8);
    assert_eq!(plain.encode(&[LOW], EncodeOptions::default()), REPLACEMENT_UTF8);

    let mut streaming = TextEncoder::new();
    assert!(streaming.encode(&[HIGH], EncodeOptions::stream()).is_empty());
    assert_eq!(
        streaming.encode(&[LOW], EncodeOptions::stream()),
        [240, 157, 149, 179]
    );
}

#[test]
fn state_survives_unrelated_calls() {
    let mut encoder = TextEncoder::new();
    encoder.encode_str("test", EncodeOptions::stream());
    encoder.encode(&[HIGH], EncodeOptions::stream());
    assert_eq!(
        encoder.encode(&[LOW], EncodeOptions::stream()),
        [240, 157, 149, 179]
    );
}

#[rstest]
#[case::high_high(&[0xD835, 0xD836])]
#[case::low_high(&[0xDC00, 0xD835])]
fn malformed_sequences_become_two_replacements(#[case] units: &[u16]) {
    let mut encoder = TextEncoder::new();
    assert_eq!(
        encoder.encode(units, EncodeOptions::default()),
        [0xEF, 0xBF, 0xBD, 0xEF, 0xBF, 0xBD]
    );
}

#[test]
fn escaped_nul_is_plain_ascii() {
    let mut encoder = TextEncoder::new();
    assert_eq!(
        encoder.encode_str("hello\\0world", EncodeOptions::default()),
        [104, 101, 108, 108, 111, 92, 48, 119, 111, 114, 108, 100]
    );
}

#[test]
fn long_ascii_input() {
    let mut encoder = TextEncoder::new();
    let out = encoder.encode_str(&"a".repeat(10_000), EncodeOptions::default());
    assert_eq!(out.len(), 10_000);
    assert!(out.iter().all(|&b| b == b'a'));
}

#[rstest]
#[case::fits("hello", 10, 5, 5)]
#[case::overflow("hello world", 5, 5, 5)]
#[case::two_byte("café", 10, 4, 5)]
#[case::two_byte_cut("café", 4, 3, 3)]
#[case::pair_fits("\u{1F680}", 4, 2, 4)]
#[case::pair_cut("\u{1F680}", 3, 0, 0)]
#[case::empty_destination("abc", 0, 0, 0)]
fn encode_into_prefixes(
    #[case] input: &str,
    #[case] capacity: usize,
    #[case] read: usize,
    #[case] written: usize,
) {
    let units = utf16(input);
    let mut dst = vec![0u8; capacity];
    let mut encoder = TextEncoder::new();
    let res = encoder.encode_into(&units, &mut dst, EncodeOptions::default());
    assert_eq!(res, EncodeIntoResult { read, written });
    assert_eq!(&dst[..written], &input.as_bytes()[..written]);
}

#[rstest]
fn backends_agree_over_a_stream(#[values(1, 2, 3, 7)] chunk_len: usize) {
    let units: Vec<u16> = utf16("mixed \u{1D573} café 你好 \u{1F680}")
        .into_iter()
        .chain([0xD800, 0x41, 0xDFFF])
        .collect();

    let mut reference = TextEncoderImpl::with_backend(CoreBackend);
    let mut default = TextEncoder::new();
    let mut a = Vec::new();
    let mut b = Vec::new();
    for chunk in units.chunks(chunk_len) {
        reference.encode_to_vec(chunk, EncodeOptions::stream(), &mut a);
        default.encode_to_vec(chunk, EncodeOptions::stream(), &mut b);
    }
    a.extend(reference.flush());
    b.extend(default.flush());
    assert_eq!(a, b);
    assert_eq!(a, default.encode(&units, EncodeOptions::default()));
}
