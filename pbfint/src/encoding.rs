//! Utility functions and types for varint encoding of 64-bit integers.

use ::bytes::BufMut;

pub mod varint;
pub use varint::{encode_varint, encoded_len_varint, try_encode_varint, Varint, MAX_VARINT_LEN};

/// Maps a signed value onto the unsigned range so that values of small
/// magnitude stay short: 0 → 0, -1 → 1, 1 → 2, -2 → 3, and so on.
///
/// `i64::MIN` maps to `u64::MAX`.
#[inline]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Macro which emits a module containing a set of encoding functions for a
/// variable width numeric type.
macro_rules! varint {
    ($ty:ty,
     $proto_ty:ident) => (
        varint!($ty,
                $proto_ty,
                to_uint64(value) { value });
    );

    ($ty:ty,
     $proto_ty:ident,
     to_uint64($to_uint64_value:ident) $to_uint64:expr) => (
         pub mod $proto_ty {
            use crate::encoding::*;

            #[inline]
            pub fn encode($to_uint64_value: $ty) -> Varint {
                Varint::from_u64($to_uint64)
            }

            #[inline]
            pub fn encode_to($to_uint64_value: $ty, buf: &mut impl BufMut) {
                encode_varint($to_uint64, buf);
            }

            #[inline]
            pub fn encoded_len($to_uint64_value: $ty) -> usize {
                encoded_len_varint($to_uint64)
            }

            #[cfg(test)]
            fn to_uint64($to_uint64_value: $ty) -> u64 {
                $to_uint64
            }

         }
    );
}
varint!(u64, uint64);
varint!(i64, sint64,
to_uint64(value) {
    zigzag_encode(value)
});
