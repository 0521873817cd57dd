use std::io::{self, Write};

use crate::{
    codec::{self, Session},
    pump::pump,
    util::PartialBuffer,
    Error, Level,
};

/// An xz encoder, or compressor.
///
/// This structure implements [`Write`], taking in uncompressed data and writing the compressed
/// xz stream to the underlying writer. [`XzEncoder::close`] (or [`XzEncoder::finish`]) must be
/// called to write the end of the stream, dropping the encoder without closing it leaves the
/// output truncated.
#[derive(Debug)]
pub struct XzEncoder<W> {
    writer: W,
    session: Session<codec::XzEncoder>,
    error: Option<Error>,
}

impl<W: Write> XzEncoder<W> {
    /// Creates a new encoder which will take in uncompressed data and write it compressed to the
    /// given writer.
    ///
    /// Levels outside of the valid preset range are clamped rather than rejected.
    pub fn new(writer: W, level: Level) -> Self {
        Self {
            writer,
            session: Session::new(codec::XzEncoder::new(level.preset())),
            error: None,
        }
    }

    /// Finishes the stream, writing the stream terminator, and releases the engine.
    ///
    /// The engine is released even when finishing fails. Calling this again after it has
    /// succeeded does nothing, after a failure it returns the same error again.
    pub fn close(&mut self) -> io::Result<()> {
        if self.session.is_released() {
            return self.check();
        }

        let result = match &self.error {
            Some(err) => Err(err.clone()),
            None => self.finish_stream(),
        };
        self.session.release();

        result.map_err(|err| self.latch(err))
    }

    /// Closes the stream and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.close()?;
        Ok(self.writer)
    }

    fn finish_stream(&mut self) -> Result<(), Error> {
        pump(
            &mut self.session,
            &mut PartialBuffer::new(&[][..]),
            &mut self.writer,
            true,
        )?;
        self.writer.flush()?;
        Ok(())
    }

    fn check(&self) -> io::Result<()> {
        match &self.error {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }

    fn latch(&mut self, err: Error) -> io::Error {
        self.error.get_or_insert(err).clone().into()
    }
}

impl<W> XzEncoder<W> {
    /// Acquires a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Acquires a mutable reference to the underlying writer.
    ///
    /// Note that care must be taken to avoid tampering with the state of the writer which may
    /// otherwise confuse this encoder.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this encoder returning the underlying writer.
    ///
    /// Note that this may discard internal state of this encoder, so care should be taken to
    /// avoid losing resources when this is called.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for XzEncoder<W> {
    /// Returns the number of `buf` bytes consumed by the engine, which is unrelated to how many
    /// compressed bytes reached the underlying writer.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check()?;
        if self.session.is_released() {
            return Err(Error::Closed.into());
        }

        let before = self.session.total_in();
        let mut input = PartialBuffer::new(buf);

        match pump(&mut self.session, &mut input, &mut self.writer, false) {
            Ok(()) => Ok((self.session.total_in() - before) as usize),
            Err(err) => Err(self.latch(err)),
        }
    }

    /// Flushes the underlying writer.
    ///
    /// This does not force the engine to emit data it is still holding, that only happens on
    /// [`close`](XzEncoder::close).
    fn flush(&mut self) -> io::Result<()> {
        self.check()?;
        self.writer.flush().map_err(|err| self.latch(err.into()))
    }
}

const _: () = {
    fn _assert() {
        use crate::util::{_assert_send, _assert_sync};

        _assert_send::<XzEncoder<Box<dyn Write + Send>>>();
        _assert_sync::<XzEncoder<Box<dyn Write + Sync>>>();
    }
};
