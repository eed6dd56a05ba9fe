use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;

use ::bytes::{BufMut, Bytes};

use crate::EncodeError;

/// The maximum length in bytes of an encoded `u64`, `ceil(64 / 7)`.
pub const MAX_VARINT_LEN: usize = 10;

/// An encoded LEB128 variable length integer.
///
/// The encoding is held inline, so constructing a `Varint` never allocates.
/// Every byte but the last has its continuation bit (`0x80`) set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Varint {
    // Bytes past `len` are always zero.
    buf: [u8; MAX_VARINT_LEN],
    len: u8,
}

impl Varint {
    /// Encodes an unsigned value.
    #[inline]
    pub fn from_u64(mut value: u64) -> Varint {
        let mut buf = [0; MAX_VARINT_LEN];
        let mut len = 0;
        // Varints are never more than 10 bytes
        for byte in buf.iter_mut() {
            len += 1;
            if value < 0x80 {
                *byte = value as u8;
                break;
            } else {
                *byte = ((value & 0x7F) | 0x80) as u8;
                value >>= 7;
            }
        }
        Varint { buf, len }
    }

    /// Encodes a signed value using ZigZag encoding.
    #[inline]
    pub fn from_i64(value: i64) -> Varint {
        Varint::from_u64(super::zigzag_encode(value))
    }

    /// Returns the encoded bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    /// Returns the encoded length, between 1 and 10 inclusive.
    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// Always `false`: every value has at least one byte of encoding.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for Varint {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Varint {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for Varint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Varint(")?;
        for (i, byte) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        f.write_str(")")
    }
}

impl PartialEq<[u8]> for Varint {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for Varint {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Varint {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl From<Varint> for Vec<u8> {
    fn from(varint: Varint) -> Vec<u8> {
        varint.as_slice().to_vec()
    }
}

impl From<Varint> for Bytes {
    fn from(varint: Varint) -> Bytes {
        Bytes::copy_from_slice(varint.as_slice())
    }
}

/// Encodes an integer value into LEB128 variable length format, and writes it to the buffer.
/// The buffer must have enough remaining space (maximum 10 bytes).
#[inline]
pub fn encode_varint(value: u64, buf: &mut impl BufMut) {
    buf.put_slice(&Varint::from_u64(value));
}

/// Encodes an integer value into LEB128 variable length format, and writes it to the buffer.
///
/// Nothing is written if the buffer has insufficient remaining capacity.
#[inline]
pub fn try_encode_varint(value: u64, buf: &mut impl BufMut) -> Result<(), EncodeError> {
    let varint = Varint::from_u64(value);
    let remaining = buf.remaining_mut();
    if varint.len() > remaining {
        return Err(EncodeError::new(varint, remaining));
    }
    buf.put_slice(&varint);
    Ok(())
}

/// Returns the encoded length of the value in LEB128 variable length format.
/// The returned value will be between 1 and 10, inclusive.
#[inline]
pub fn encoded_len_varint(value: u64) -> usize {
    // Based on [VarintSize64][1].
    // [1]: https://github.com/google/protobuf/blob/3.3.x/src/google/protobuf/io/coded_stream.h#L1301-L1309
    ((((value | 1).leading_zeros() ^ 63) * 9 + 73) / 64) as usize
}
