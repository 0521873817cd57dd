use std::{
    collections::VecDeque,
    io::{self, Read},
};

use crate::{
    codec::{self, Session},
    pump::pump,
    util::PartialBuffer,
    Error, OUTPUT_BUFFER_SIZE,
};

/// Options for [`XzDecoder::with_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    memlimit: u64,
    multiple_members: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            memlimit: u64::MAX,
            multiple_members: false,
        }
    }
}

impl DecoderConfig {
    /// Default configuration: no memory limit, a single stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the memory the engine may use while decoding, in bytes.
    ///
    /// Streams needing more fail with [`ErrorCode::MemLimit`](crate::ErrorCode::MemLimit).
    pub fn memlimit(mut self, memlimit: u64) -> Self {
        self.memlimit = memlimit;
        self
    }

    /// Decode concatenated xz streams, and the null padding allowed between them, as a single
    /// stream of output.
    ///
    /// When disabled any data after the first stream is an error.
    pub fn multiple_members(mut self, enabled: bool) -> Self {
        self.multiple_members = enabled;
        self
    }
}

/// An xz decoder, or decompressor.
///
/// This structure implements [`Read`], reading compressed xz data from the underlying reader
/// and serving the decompressed bytes. The end of the decompressed data is reported as
/// `Ok(0)`, a compressed stream that ends early is an error.
#[derive(Debug)]
pub struct XzDecoder<R> {
    reader: R,
    session: Session<codec::XzDecoder>,
    buffer: VecDeque<u8>,
    scratch: Box<[u8]>,
    exhausted: bool,
    error: Option<Error>,
}

impl<R: Read> XzDecoder<R> {
    /// Creates a new decoder which will read compressed data from the given reader and emit the
    /// uncompressed data.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, DecoderConfig::default())
    }

    /// Creates a new decoder with the given configuration.
    pub fn with_config(reader: R, config: DecoderConfig) -> Self {
        Self {
            reader,
            session: Session::new(codec::XzDecoder::new(
                config.memlimit,
                config.multiple_members,
            )),
            buffer: VecDeque::new(),
            scratch: vec![0; OUTPUT_BUFFER_SIZE].into_boxed_slice(),
            exhausted: false,
            error: None,
        }
    }

    /// Releases the engine and drops any decompressed data that has not been read yet.
    ///
    /// This never fails, stopping before the end of the stream is a valid way of using the
    /// decoder.
    pub fn close(&mut self) -> io::Result<()> {
        self.session.release();
        self.buffer = VecDeque::new();
        Ok(())
    }

    /// Reads up to `size_hint` compressed bytes, never more than [`OUTPUT_BUFFER_SIZE`], from the
    /// underlying reader and decodes them into the internal buffer, finishing the stream once
    /// the reader reports its end.
    fn populate(&mut self, size_hint: usize) -> Result<(), Error> {
        if self.exhausted {
            return Ok(());
        }

        let len = size_hint.min(self.scratch.len());
        let read = self.reader.read(&mut self.scratch[..len])?;
        if read == 0 {
            self.exhausted = true;
        }

        let finish = self.exhausted;
        let mut input = PartialBuffer::new(&self.scratch[..read]);
        pump(&mut self.session, &mut input, &mut self.buffer, finish)
    }

    fn fill(&mut self, wanted: usize) -> Result<(), Error> {
        if self.buffer.len() < wanted {
            self.populate(wanted)?;
        }

        // `Ok(0)` means end of stream, so don't return until there is something to hand out.
        while self.buffer.is_empty() && !self.exhausted {
            self.populate(wanted)?;
        }

        Ok(())
    }
}

impl<R> XzDecoder<R> {
    /// Acquires a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Acquires a mutable reference to the underlying reader.
    ///
    /// Note that care must be taken to avoid tampering with the state of the reader which may
    /// otherwise confuse this decoder.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this decoder returning the underlying reader.
    ///
    /// Note that this may discard internal state of this decoder, so care should be taken to
    /// avoid losing resources when this is called.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Read for XzDecoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(err) = &self.error {
            return Err(err.clone().into());
        }
        if self.session.is_released() {
            return Err(Error::Closed.into());
        }

        if let Err(err) = self.fill(buf.len()) {
            // Interrupted reads are retried by the caller, not failures of the stream.
            if err.kind() == io::ErrorKind::Interrupted {
                return Err(err.into());
            }
            return Err(self.error.get_or_insert(err).clone().into());
        }

        self.buffer.read(buf)
    }
}

const _: () = {
    fn _assert() {
        use crate::util::{_assert_send, _assert_sync};

        _assert_send::<XzDecoder<Box<dyn Read + Send>>>();
        _assert_sync::<XzDecoder<Box<dyn Read + Sync>>>();
    }
};
