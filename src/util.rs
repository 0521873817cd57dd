pub const fn _assert_send<T: Send>() {}
pub const fn _assert_sync<T: Sync>() {}

/// Buffer containing partially written data.
#[derive(Debug, Default)]
pub struct PartialBuffer<B> {
    /// Underlying buffer.
    buffer: B,
    /// Index up to which data has been written.
    index: usize,
}

impl<B: AsRef<[u8]>> PartialBuffer<B> {
    /// Create a new [`PartialBuffer`] from the given underlying buffer.
    pub fn new(buffer: B) -> Self {
        Self { buffer, index: 0 }
    }

    /// Written part of the buffer.
    pub fn written(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.index]
    }

    /// Unwritten part of the buffer.
    pub fn unwritten(&self) -> &[u8] {
        &self.buffer.as_ref()[self.index..]
    }

    /// Advance the written part.
    pub fn advance(&mut self, amount: usize) {
        self.index += amount;
    }

    /// Forget everything written so far, keeping the underlying buffer.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Reference to the underlying buffer.
    pub fn get_ref(&self) -> &B {
        &self.buffer
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> PartialBuffer<B> {
    /// Mutable reference to the unwritten part of the buffer.
    pub fn unwritten_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[self.index..]
    }
}
