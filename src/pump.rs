use std::io::Write;

use crate::{
    codec::{Action, Code, Codec, Session},
    util::PartialBuffer,
    Error,
};

/// Drive `session` over `input`, writing everything it produces to `sink`.
///
/// Without `finish` this returns once `input` has been fully consumed. With `finish` it keeps
/// going until the engine reports the end of the stream, after which the stream terminator has
/// been written to `sink`.
///
/// Output is always written to `sink` before the step's code is inspected, and a failing sink
/// takes precedence over whatever the engine reported.
pub(crate) fn pump<C: Codec, W: Write + ?Sized>(
    session: &mut Session<C>,
    input: &mut PartialBuffer<&[u8]>,
    sink: &mut W,
    finish: bool,
) -> Result<(), Error> {
    let mut action = Action::Run;

    loop {
        // The engine must never see a run step without input.
        if action == Action::Run && input.unwritten().is_empty() {
            if !finish {
                return Ok(());
            }
            action = Action::Finish;
        }

        let code = session.step(input, action)?;
        let output = session.take_output();

        tracing::trace!(
            ?action,
            ?code,
            produced = output.len(),
            pending = input.unwritten().len(),
            "lzma step"
        );

        sink.write_all(output)?;

        match code {
            Code::StreamEnd if action == Action::Finish => return Ok(()),
            Code::StreamEnd if !input.unwritten().is_empty() => return Err(Error::TrailingData),
            Code::Error(code) => return Err(Error::Codec(code)),
            Code::Ok | Code::StreamEnd => {}
        }
    }
}
