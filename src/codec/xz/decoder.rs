use std::fmt;

use liblzma::stream::{Stream, CONCATENATED};

use crate::{
    codec::{Action, Code, Codec},
    util::PartialBuffer,
    ErrorCode,
};

/// Xz decoding stream
pub(crate) struct XzDecoder {
    stream: Stream,
}

impl fmt::Debug for XzDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XzDecoder")
            .field("memlimit", &self.stream.memlimit())
            .field("total_in", &self.stream.total_in())
            .finish_non_exhaustive()
    }
}

impl XzDecoder {
    /// With `multiple_members` the engine keeps decoding concatenated streams and skips stream
    /// padding, and only reports the end of the stream once it is told to finish.
    pub(crate) fn new(memlimit: u64, multiple_members: bool) -> Result<Self, ErrorCode> {
        let flags = if multiple_members { CONCATENATED } else { 0 };
        let stream = Stream::new_stream_decoder(memlimit, flags)?;
        Ok(Self { stream })
    }
}

impl Codec for XzDecoder {
    fn code(
        &mut self,
        input: &mut PartialBuffer<impl AsRef<[u8]>>,
        output: &mut PartialBuffer<impl AsRef<[u8]> + AsMut<[u8]>>,
        action: Action,
    ) -> Code {
        super::process(&mut self.stream, input, output, action)
    }

    fn total_in(&self) -> u64 {
        self.stream.total_in()
    }
}

#[cfg(test)]
mod tests {
    use super::XzDecoder;
    use crate::{
        codec::{Action, Code, Codec},
        util::PartialBuffer,
        ErrorCode,
    };

    #[test]
    fn not_xz_is_a_format_error() {
        let mut decoder = XzDecoder::new(u64::MAX, false).unwrap();
        let mut input = PartialBuffer::new(&b"definitely not an xz stream"[..]);
        let mut output = PartialBuffer::new(vec![0; 64]);

        assert_eq!(
            decoder.code(&mut input, &mut output, Action::Run),
            Code::Error(ErrorCode::Format)
        );
    }

    #[test]
    fn finish_on_empty_input_is_an_error() {
        let mut decoder = XzDecoder::new(u64::MAX, false).unwrap();
        let mut input = PartialBuffer::new(&[][..]);
        let mut output = PartialBuffer::new(vec![0; 64]);

        let mut code = Code::Ok;
        for _ in 0..4 {
            code = decoder.code(&mut input, &mut output, Action::Finish);
            if code != Code::Ok {
                break;
            }
        }

        assert!(matches!(code, Code::Error(_)), "{code:?}");
    }
}
