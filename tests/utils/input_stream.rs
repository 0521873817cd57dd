use proptest_derive::Arbitrary;

#[derive(Arbitrary, Debug, Clone)]
pub struct InputStream(Vec<Vec<u8>>);

impl InputStream {
    /// The chunks with empty chunks interleaved before and after each one, so that every point
    /// of the tested stream also sees a zero-length write or read.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        self.0
            .iter()
            .flat_map(|bytes| [&[][..], &bytes[..]])
            .chain(Some(&[][..]))
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.0.iter().flatten().cloned().collect()
    }
}
