//! Varint encoding errors.

use core::fmt;

use crate::Varint;

/// The buffer handed to [`try_encode_varint`](crate::try_encode_varint) could
/// not hold the encoded value.
///
/// The encoded bytes are kept so the caller can write them elsewhere once
/// space is available.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodeError {
    varint: Varint,
    remaining: usize,
}

impl EncodeError {
    pub(crate) fn new(varint: Varint, remaining: usize) -> EncodeError {
        debug_assert!(varint.len() > remaining);
        EncodeError { varint, remaining }
    }

    /// The encoding that did not fit.
    pub fn varint(&self) -> Varint {
        self.varint
    }

    /// Bytes the buffer needed to have free, between 1 and 10.
    pub fn required_capacity(&self) -> usize {
        self.varint.len()
    }

    /// Bytes the buffer actually had free.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "varint of {} bytes does not fit in {} remaining",
            self.varint.len(),
            self.remaining
        )
    }
}

impl core::error::Error for EncodeError {}

#[cfg(feature = "std")]
impl From<EncodeError> for std::io::Error {
    fn from(error: EncodeError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::WriteZero, error)
    }
}
