//! Compression over [`Write`](std::io::Write) sinks.

mod xz;

pub use self::xz::XzEncoder;
