//! Decompression over [`Read`](std::io::Read) sources.

mod xz;

pub use self::xz::{DecoderConfig, XzDecoder};
