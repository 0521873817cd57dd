#![no_main]
use std::io::Read as _;

use libfuzzer_sys::fuzz_target;
use xz_stream::read::{DecoderConfig, XzDecoder};

// Arbitrary input must only ever produce errors, never panics, and errors must stick.
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig::new().memlimit(64 << 20);
    let mut decoder = XzDecoder::with_config(data, config);
    let mut output = Vec::new();
    if let Err(first) = decoder.read_to_end(&mut output) {
        let again = decoder.read(&mut [0; 16]).unwrap_err();
        assert_eq!(first.to_string(), again.to_string());
    }
});
