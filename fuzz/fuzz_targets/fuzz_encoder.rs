#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textencoder::{
    CoreBackend, EncodeOptions, TextEncoder, TextEncoderImpl, encoded_len,
};

#[derive(Debug, Arbitrary)]
struct Input {
    units: Vec<u16>,
    /// Piece lengths; cuts ignore surrogate pairs.
    splits: Vec<u8>,
    /// Destination size for the bounded pass, at least 4 bytes.
    capacity: u8,
}

/// Split `units` into pieces whose lengths come from `splits`.
fn pieces<'a>(units: &'a [u16], splits: &[u8]) -> Vec<&'a [u16]> {
    let mut out = Vec::new();
    let mut rest = units;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at((usize::from(s) % rest.len()) + 1);
        out.push(head);
        rest = tail;
    }
    out.push(rest);
    out
}

fn encoder(input: Input) {
    let expected = TextEncoder::new().encode(&input.units, EncodeOptions::default());
    assert_eq!(expected.len(), encoded_len(&input.units));

    let reference = TextEncoderImpl::with_backend(CoreBackend)
        .encode(&input.units, EncodeOptions::default());
    assert_eq!(expected, reference);

    let chunks = pieces(&input.units, &input.splits);

    // Full encode, streamed.
    let mut streamed = TextEncoder::new();
    let mut out = Vec::new();
    for chunk in &chunks {
        streamed.encode_to_vec(chunk, EncodeOptions::stream(), &mut out);
    }
    out.extend(streamed.flush());
    assert_eq!(out, expected);

    // Bounded encode, streamed.
    let capacity = 4 + usize::from(input.capacity);
    let mut bounded = TextEncoder::new();
    let mut dst = vec![0u8; capacity];
    let mut out = Vec::new();
    let mut read = 0;
    for chunk in &chunks {
        let mut rest = *chunk;
        while !rest.is_empty() {
            let res = bounded.encode_into(rest, &mut dst, EncodeOptions::stream());
            assert!(res.written <= capacity);
            assert!(res.read > 0 || res.written > 0, "no progress");
            out.extend_from_slice(&dst[..res.written]);
            read += res.read;
            rest = &rest[res.read..];
        }
    }
    out.extend(bounded.flush());
    assert_eq!(out, expected);
    assert_eq!(read, input.units.len());
}

fuzz_target!(|input: Input| encoder(input));
