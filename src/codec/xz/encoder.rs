use std::fmt;

use liblzma::stream::{Check, Stream};

use crate::{
    codec::{Action, Code, Codec},
    util::PartialBuffer,
    ErrorCode,
};

/// Xz encoding stream
pub(crate) struct XzEncoder {
    stream: Stream,
}

impl fmt::Debug for XzEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XzEncoder")
            .field("total_in", &self.stream.total_in())
            .field("total_out", &self.stream.total_out())
            .finish_non_exhaustive()
    }
}

impl XzEncoder {
    /// `preset` must already be clamped to `0..=9`.
    pub(crate) fn new(preset: u32) -> Result<Self, ErrorCode> {
        let stream = Stream::new_easy_encoder(preset, Check::Crc64)?;
        Ok(Self { stream })
    }
}

impl Codec for XzEncoder {
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
