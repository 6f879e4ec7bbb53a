//! Pipes UTF-16 text, delivered in irregular chunks, through a small fixed
//! output buffer, the way a byte-oriented sink with a bounded write window
//! would consume it.
//!
//! The chunk boundaries deliberately fall between the two halves of
//! surrogate pairs. Each chunk is drained with `encode_into` in streaming mode
//! and the unread tail of a chunk is fed again on the next call.
//!
//! Run with
//!
//! ```bash
//! cargo run -p textencoder --example fixed_buffer_pipe
//! ```

use textencoder::{EncodeOptions, TextEncoder};

fn main() {
    let text = "rocket \u{1F680} fraktur \u{1D573} café";
    let units: Vec<u16> = text.encode_utf16().collect();

    // Cut after units 8 and 19: both land inside a surrogate pair.
    let chunks = [&units[..8], &units[8..19], &units[19..]];

    let mut encoder = TextEncoder::new();
    let mut window = [0u8; 6];
    let mut sink = Vec::new();

    for (n, chunk) in chunks.iter().enumerate() {
        let mut rest = *chunk;
        loop {
            let res = encoder.encode_into(rest, &mut window, EncodeOptions::stream());
            println!(
                "chunk {n}: read {} units, wrote {} bytes {:02X?}",
                res.read,
                res.written,
                &window[..res.written]
            );
            sink.extend_from_slice(&window[..res.written]);
            rest = &rest[res.read..];
            if rest.is_empty() {
                break;
            }
        }
        if let Some(unit) = encoder.pending() {
            println!("chunk {n}: holding {unit:#06X} for the next chunk");
        }
    }
    sink.extend(encoder.flush());

    assert_eq!(sink, text.as_bytes());
    println!("{}", String::from_utf8_lossy(&sink));
}
