use std::{fmt, io, sync::Arc};

use thiserror::Error;

/// A non-success result reported by the lzma engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `LZMA_MEM_ERROR`: the engine could not allocate memory.
    Mem,
    /// `LZMA_MEMLIMIT_ERROR`: decoding needs more memory than the configured limit.
    MemLimit,
    /// `LZMA_FORMAT_ERROR`: the input is not in the xz container format.
    Format,
    /// `LZMA_OPTIONS_ERROR`: unsupported options or preset.
    Options,
    /// `LZMA_DATA_ERROR`: the compressed data is corrupt.
    Data,
    /// `LZMA_BUF_ERROR`: no progress is possible, usually because the input ended early.
    Buf,
    /// `LZMA_PROG_ERROR`: the engine was driven incorrectly.
    Program,
    /// `LZMA_NO_CHECK`: the stream has no integrity check.
    NoCheck,
    /// `LZMA_UNSUPPORTED_CHECK`: the integrity check type is unsupported.
    UnsupportedCheck,
    /// `LZMA_GET_CHECK`: the integrity check type became available, never requested here.
    GetCheck,
}

impl ErrorCode {
    fn name(self) -> &'static str {
        match self {
            Self::Mem => "LZMA_MEM_ERROR",
            Self::MemLimit => "LZMA_MEMLIMIT_ERROR",
            Self::Format => "LZMA_FORMAT_ERROR",
            Self::Options => "LZMA_OPTIONS_ERROR",
            Self::Data => "LZMA_DATA_ERROR",
            Self::Buf => "LZMA_BUF_ERROR",
            Self::Program => "LZMA_PROG_ERROR",
            Self::NoCheck => "LZMA_NO_CHECK",
            Self::UnsupportedCheck => "LZMA_UNSUPPORTED_CHECK",
            Self::GetCheck => "LZMA_GET_CHECK",
        }
    }

    fn kind(self) -> io::ErrorKind {
        match self {
            Self::Buf => io::ErrorKind::UnexpectedEof,
            Self::Format | Self::Data | Self::NoCheck | Self::UnsupportedCheck => {
                io::ErrorKind::InvalidData
            }
            Self::Mem | Self::MemLimit => io::ErrorKind::OutOfMemory,
            Self::Options | Self::Program | Self::GetCheck => io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(unreachable_patterns)]
impl From<liblzma::stream::Error> for ErrorCode {
    fn from(err: liblzma::stream::Error) -> Self {
        use liblzma::stream::Error;

        match err {
            Error::Data => Self::Data,
            Error::Options => Self::Options,
            Error::Format => Self::Format,
            Error::MemLimit => Self::MemLimit,
            Error::Mem => Self::Mem,
            Error::Program => Self::Program,
            Error::NoCheck => Self::NoCheck,
            Error::UnsupportedCheck => Self::UnsupportedCheck,
            _ => Self::Program,
        }
    }
}

/// Errors reported by [`XzEncoder`](crate::write::XzEncoder) and
/// [`XzDecoder`](crate::read::XzDecoder).
///
/// Adapters remember the first error they observe and report a clone of it from every later
/// call, so this type is cheap to clone. It reaches callers wrapped in an [`io::Error`] and can
/// be recovered with [`io::Error::get_ref`] and `downcast_ref::<Error>()`.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The lzma engine failed to initialize the session.
    #[error("failed to initialize lzma session: {0}")]
    Init(ErrorCode),

    /// The underlying reader or writer failed.
    #[error(transparent)]
    Io(Arc<io::Error>),

    /// The lzma engine returned an error while coding.
    #[error("lzma engine returned {0}")]
    Codec(ErrorCode),

    /// Input continued after the end of a single xz stream.
    #[error("unexpected data after the end of the xz stream")]
    TrailingData,

    /// The adapter was used after being closed.
    #[error("xz stream has already been closed")]
    Closed,
}

impl Error {
    /// The [`io::ErrorKind`] this error is reported with.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Init(code) | Self::Codec(code) => code.kind(),
            Self::Io(err) => err.kind(),
            Self::TrailingData => io::ErrorKind::InvalidData,
            Self::Closed => io::ErrorKind::Other,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.kind(), err)
    }
}
