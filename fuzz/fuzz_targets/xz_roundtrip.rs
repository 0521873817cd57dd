#![no_main]
use std::io::{Read as _, Write as _};

use libfuzzer_sys::fuzz_target;
use xz_stream::{read::XzDecoder, write::XzEncoder, Level};

fuzz_target!(|data: Vec<Vec<u8>>| {
    let expected: Vec<u8> = data.iter().flatten().copied().collect();

    let mut encoder = XzEncoder::new(Vec::<u8>::new(), Level::Fastest);
    for chunk in &data {
        encoder.write_all(chunk).unwrap();
    }
    let compressed = encoder.finish().unwrap();

    let mut decoded = Vec::new();
    XzDecoder::new(&compressed[..])
        .read_to_end(&mut decoded)
        .unwrap();
    assert_eq!(expected, decoded);
});
