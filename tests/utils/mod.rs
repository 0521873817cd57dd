#![allow(dead_code, unused_imports)] // Different tests use a different subset of functions

mod input_stream;
mod tracked;

use std::io::{Read, Write};

use rand::{rngs::StdRng, Rng, SeedableRng};
pub use xz_stream::{
    read::{DecoderConfig, XzDecoder},
    write::XzEncoder,
    Error, ErrorCode, Level,
};

pub use self::{input_stream::InputStream, tracked::Tracked};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .without_time()
        .with_ansi(false)
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn compress(input: &[u8]) -> Vec<u8> {
    compress_with(Level::Fastest, [input])
}

/// Compress by writing each chunk separately, checking every write is fully consumed.
pub fn compress_with<'a>(level: Level, chunks: impl IntoIterator<Item = &'a [u8]>) -> Vec<u8> {
    let mut encoder = XzEncoder::new(Vec::<u8>::new(), level);
    for chunk in chunks {
        assert_eq!(encoder.write(chunk).unwrap(), chunk.len());
    }
    encoder.finish().unwrap()
}

pub fn decompress(input: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    XzDecoder::new(input).read_to_end(&mut output).unwrap();
    output
}

/// Decompress reading into a buffer of `read_size` bytes at a time, with the source handing
/// out at most `chunk_size` compressed bytes per call.
pub fn decompress_chunked(input: &[u8], chunk_size: usize, read_size: usize) -> Vec<u8> {
    let mut decoder = XzDecoder::new(Tracked::new(input).chunked(chunk_size));
    let mut buf = vec![0; read_size];
    let mut output = Vec::new();
    loop {
        match decoder.read(&mut buf).unwrap() {
            0 => break,
            n => output.extend_from_slice(&buf[..n]),
        }
    }
    output
}

/// Downcast an adapter error to the crate's error type.
pub fn inner_error(err: &std::io::Error) -> &Error {
    err.get_ref()
        .and_then(|inner| inner.downcast_ref::<Error>())
        .expect("error raised by xz_stream")
}

/// Data that doesn't compress well, so it spans several engine output buffers.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0; len];
    StdRng::seed_from_u64(0x5eed).fill(&mut bytes[..]);
    bytes
}

pub fn text(len: usize) -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog "
        .iter()
        .cycle()
        .take(len)
        .copied()
        .collect()
}
