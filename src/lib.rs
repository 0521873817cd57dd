//! Streaming xz compression and decompression over blocking [`std::io`] types.
//!
//! [`write::XzEncoder`] accepts writes of any size and forwards the compressed stream to an
//! inner [`Write`](std::io::Write), [`read::XzDecoder`] serves reads of any size by pulling
//! compressed bytes from an inner [`Read`](std::io::Read). Both drive liblzma one bounded step
//! at a time and never hold on to caller buffers between calls.
//!
//! ```
//! use std::io::{Read, Write};
//!
//! use xz_stream::{read::XzDecoder, write::XzEncoder, Level};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut encoder = XzEncoder::new(Vec::<u8>::new(), Level::Default);
//! encoder.write_all(b"hello xz")?;
//! let compressed = encoder.finish()?;
//!
//! let mut decoder = XzDecoder::new(&compressed[..]);
//! let mut output = String::new();
//! decoder.read_to_string(&mut output)?;
//! assert_eq!(output, "hello xz");
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Failures are reported as [`std::io::Error`] wrapping an [`Error`]. Once an adapter has seen
//! an error it keeps returning that same error and no longer touches the engine or the inner
//! reader/writer, `close` still releases the engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_copy_implementations,
    missing_debug_implementations
)]

mod codec;
mod error;
mod pump;
mod util;

pub mod read;
pub mod write;

pub use crate::error::{Error, ErrorCode};

/// Size of the buffer liblzma produces into on every step.
pub const OUTPUT_BUFFER_SIZE: usize = codec::OUTPUT_BUFFER_SIZE;

/// Level of compression data should be compressed with.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Level {
    /// Preset 0, fastest compression, usually produces bigger output.
    Fastest,
    /// Preset 9, usually produces the smallest output.
    Best,
    /// Preset 6, the xz default.
    #[default]
    Default,
    /// A precise xz preset. Values outside `0..=9` are clamped to the nearest end of the range.
    Precise(i32),
}

impl Level {
    /// Preset used for [`Level::Fastest`].
    pub const FASTEST_PRESET: u32 = 0;
    /// Preset used for [`Level::Best`].
    pub const BEST_PRESET: u32 = 9;
    /// Preset used for [`Level::Default`].
    pub const DEFAULT_PRESET: u32 = 6;

    /// The liblzma preset this level selects, always within `0..=9`.
    pub fn preset(self) -> u32 {
        match self {
            Self::Fastest => Self::FASTEST_PRESET,
            Self::Best => Self::BEST_PRESET,
            Self::Default => Self::DEFAULT_PRESET,
            Self::Precise(quality) if quality < Self::FASTEST_PRESET as i32 => {
                tracing::warn!(
                    quality,
                    preset = Self::FASTEST_PRESET,
                    "negative xz compression level, clamping"
                );
                Self::FASTEST_PRESET
            }
            Self::Precise(quality) if quality > Self::BEST_PRESET as i32 => {
                tracing::warn!(
                    quality,
                    preset = Self::BEST_PRESET,
                    "xz compression level above maximum, clamping"
                );
                Self::BEST_PRESET
            }
            Self::Precise(quality) => quality as u32,
        }
    }
}
