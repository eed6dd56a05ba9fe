#![doc(html_root_url = "https://docs.rs/pbfint/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

#[doc(hidden)]
pub extern crate alloc;

// Re-export the bytes crate so callers can name the buffer types we write into.
pub use bytes;

mod error;

pub mod encoding;

pub use crate::encoding::varint::{
    encode_varint, encoded_len_varint, try_encode_varint, Varint, MAX_VARINT_LEN,
};
pub use crate::encoding::zigzag_encode;
pub use crate::error::EncodeError;

/// Returns the varint representation of an unsigned number.
#[inline]
pub fn int2str(value: u64) -> Varint {
    encoding::uint64::encode(value)
}

/// Returns the varint representation of a signed number, using ZigZag
/// encoding.
#[inline]
pub fn sint2str(value: i64) -> Varint {
    encoding::sint64::encode(value)
}
