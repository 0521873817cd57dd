use crate::{util::PartialBuffer, ErrorCode};

mod session;
mod xz;

pub(crate) use self::{
    session::{Session, OUTPUT_BUFFER_SIZE},
    xz::{XzDecoder, XzEncoder},
};

/// What the engine may assume about the input of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// More input may follow.
    Run,
    /// No more input will follow, flush and write the stream terminator.
    Finish,
}

/// Result of one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Code {
    Ok,
    StreamEnd,
    Error(ErrorCode),
}

/// Abstraction over one direction of the lzma engine.
pub(crate) trait Codec {
    /// Advance the engine by one bounded unit of work, consuming from the unwritten part of
    /// `input` and producing into the unwritten part of `output`.
    fn code(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
        action: Action,
    ) -> Code;

    /// Total number of input bytes consumed so far.
    fn total_in(&self) -> u64;
}
