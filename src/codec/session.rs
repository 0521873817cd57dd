use std::fmt;

use crate::{
    codec::{Action, Code, Codec},
    util::PartialBuffer,
    Error, ErrorCode,
};

/// Size of the buffer each session produces into before the output is drained.
pub(crate) const OUTPUT_BUFFER_SIZE: usize = 32 * 1024;

enum State<C> {
    Active(C),
    Degraded(ErrorCode),
    Released,
}

/// Exclusive handle to one direction of the engine plus the bounded buffer it produces into.
///
/// The engine is released by dropping it, either explicitly through [`Session::release`] or
/// when the session itself is dropped, so it can never be released twice.
pub(crate) struct Session<C> {
    state: State<C>,
    output: PartialBuffer<Box<[u8]>>,
}

impl<C: fmt::Debug> fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Session");
        match &self.state {
            State::Active(codec) => debug.field("codec", codec),
            State::Degraded(code) => debug.field("degraded", code),
            State::Released => debug.field("released", &true),
        };
        debug
            .field(
                "output",
                &format_args!("{}/{}", self.output.written().len(), OUTPUT_BUFFER_SIZE),
            )
            .finish()
    }
}

impl<C: Codec> Session<C> {
    /// A failed initialization still yields a session, every step on it reports the failure.
    pub(crate) fn new(codec: Result<C, ErrorCode>) -> Self {
        let state = match codec {
            Ok(codec) => State::Active(codec),
            Err(code) => {
                tracing::error!(%code, "failed to initialize lzma session");
                State::Degraded(code)
            }
        };

        Self {
            state,
            output: PartialBuffer::new(vec![0; OUTPUT_BUFFER_SIZE].into_boxed_slice()),
        }
    }

    /// Cumulative count of input bytes consumed by the engine.
    pub(crate) fn total_in(&self) -> u64 {
        match &self.state {
            State::Active(codec) => codec.total_in(),
            State::Degraded(_) | State::Released => 0,
        }
    }

    /// Run one engine step, appending to the output buffer.
    ///
    /// Output from the previous step must have been taken first.
    pub(crate) fn step(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        action: Action,
    ) -> Result<Code, Error> {
        debug_assert!(
            self.output.written().is_empty(),
            "stepped a session with undrained output"
        );

        match &mut self.state {
            State::Active(codec) => Ok(codec.code(input, &mut self.output, action)),
            State::Degraded(code) => Err(Error::Init(*code)),
            State::Released => Err(Error::Closed),
        }
    }

    /// Bytes produced since the last call, the buffer is empty afterwards.
    pub(crate) fn take_output(&mut self) -> &[u8] {
        let len = self.output.written().len();
        self.output.reset();
        &self.output.get_ref()[..len]
    }

    /// Returns whether this call released the engine.
    pub(crate) fn release(&mut self) -> bool {
        match std::mem::replace(&mut self.state, State::Released) {
            State::Active(_) | State::Degraded(_) => {
                tracing::debug!("released lzma session");
                true
            }
            State::Released => false,
        }
    }

    pub(crate) fn is_released(&self) -> bool {
        matches!(self.state, State::Released)
    }
}
