use liblzma::stream::{Status, Stream};

use crate::{
    codec::{Action, Code},
    util::PartialBuffer,
    ErrorCode,
};

mod decoder;
mod encoder;

pub(crate) use self::{decoder::XzDecoder, encoder::XzEncoder};

impl From<Action> for liblzma::stream::Action {
    fn from(action: Action) -> Self {
        match action {
            Action::Run => Self::Run,
            Action::Finish => Self::Finish,
        }
    }
}

fn process(
    stream: &mut Stream,
    input: &mut PartialBuffer<impl AsRef<[u8]>>,
    output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
    action: Action,
) -> Code {
    let previous_in = stream.total_in() as usize;
    let previous_out = stream.total_out() as usize;

    let result = stream.process(input.unwritten(), output.unwritten_mut(), action.into());

    input.advance(stream.total_in() as usize - previous_in);
    output.advance(stream.total_out() as usize - previous_out);

    match result {
        Ok(Status::Ok) => Code::Ok,
        Ok(Status::StreamEnd) => Code::StreamEnd,
        Ok(Status::GetCheck) => Code::Error(ErrorCode::GetCheck),
        // liblzma reports LZMA_BUF_ERROR as `MemNeeded`
        Ok(Status::MemNeeded) => Code::Error(ErrorCode::Buf),
        Err(err) => Code::Error(err.into()),
    }
}
