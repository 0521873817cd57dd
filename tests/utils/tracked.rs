use std::io::{self, Read, Result, Write};

/// Counts the calls made to the wrapped reader or writer and can be told to fail them.
#[derive(Debug, Default)]
pub struct Tracked<T> {
    inner: T,
    calls: usize,
    fail_after: Option<usize>,
    chunk: Option<usize>,
}

impl<T> Tracked<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            calls: 0,
            fail_after: None,
            chunk: None,
        }
    }

    /// Fail every call once `calls` calls have succeeded.
    pub fn fail_after(mut self, calls: usize) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Never move more than `len` bytes per call.
    pub fn chunked(mut self, len: usize) -> Self {
        self.chunk = Some(len);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    fn call(&mut self, len: usize) -> Result<usize> {
        self.calls += 1;
        if self.fail_after.map_or(false, |after| self.calls > after) {
            return Err(io::Error::other(format!("failed call {}", self.calls)));
        }
        Ok(self.chunk.map_or(len, |chunk| chunk.min(len)))
    }
}

impl<R: Read> Read for Tracked<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let len = self.call(buf.len())?;
        self.inner.read(&mut buf[..len])
    }
}

impl<W: Write> Write for Tracked<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let len = self.call(buf.len())?;
        self.inner.write(&buf[..len])
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
