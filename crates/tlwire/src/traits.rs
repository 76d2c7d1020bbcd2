// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TL serialization traits
//!
//! Defines the encoding/decoding contract for TL primitive types and the
//! generic `Vector<T>` built on top of them.
//!
//! | Rust type | TL type |
//! |-----------|---------|
//! | `i32` / `u32` | `int` (signed / unsigned) |
//! | `i64` / `u64` | `long` |
//! | `i128` / `u128` | `int128` |
//! | [`WideInt`] | `int256` (signed) |
//! | `f64` | `double` |
//! | `bool` | `Bool` |
//! | [`ByteString`] | `bytes` |
//! | `String` / `str` | `string` |
//! | `Vec<T>` / `[T]` | `Vector<T>` |

use crate::boolean::{decode_bool, encode_bool};
use crate::bytes::{decode_bytes, encode_bytes, encoded_bytes_len, ByteString};
use crate::config::DecodeOptions;
use crate::cursor::{Cursor, TlRead};
use crate::error::TlResult;
use crate::float::{decode_double, encode_double};
use crate::int::{
    decode_i128, decode_i32, decode_i64, decode_int, decode_u128, decode_u32, decode_u64,
    encode_i128, encode_i32, encode_i64, encode_int, encode_u128, encode_u32, encode_u64,
    IntWidth, WideInt,
};
use crate::string::{decode_string, encode_string};
use crate::vector::{decode_vector_with, encode_vector_with};

/// TL encoding trait
///
/// Types implementing this trait can be appended to an output buffer in TL
/// wire format. Encoding only reads `self`.
pub trait TlSerialize {
    /// Append the encoding of `self` to `dst`
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()>;

    /// Encoded size in bytes, used to pre-size buffers (0 when unknown)
    fn tl_size_hint(&self) -> usize {
        0
    }
}

/// TL decoding trait
pub trait TlDeserialize: Sized {
    /// Decode a value, advancing `src` past it
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self>;
}

macro_rules! impl_tl_native {
    ($($t:ty => $enc:ident, $dec:ident, $size:expr;)*) => {$(
        impl TlSerialize for $t {
            fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
                $enc(*self, dst);
                Ok(())
            }

            fn tl_size_hint(&self) -> usize {
                $size
            }
        }

        impl TlDeserialize for $t {
            fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
                $dec(src)
            }
        }
    )*};
}

impl_tl_native! {
    i32 => encode_i32, decode_i32, 4;
    u32 => encode_u32, decode_u32, 4;
    i64 => encode_i64, decode_i64, 8;
    u64 => encode_u64, decode_u64, 8;
    i128 => encode_i128, decode_i128, 16;
    u128 => encode_u128, decode_u128, 16;
}

impl TlSerialize for WideInt {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        encode_int(self, IntWidth::Int256, true, dst)
    }

    fn tl_size_hint(&self) -> usize {
        IntWidth::Int256.bytes()
    }
}

impl TlDeserialize for WideInt {
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
        decode_int(src, IntWidth::Int256, true)
    }
}

impl TlSerialize for f64 {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        encode_double(*self, dst);
        Ok(())
    }

    fn tl_size_hint(&self) -> usize {
        8
    }
}

impl TlDeserialize for f64 {
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
        decode_double(src)
    }
}

impl TlSerialize for bool {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        encode_bool(*self, dst);
        Ok(())
    }

    fn tl_size_hint(&self) -> usize {
        4
    }
}

impl TlDeserialize for bool {
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
        decode_bool(src)
    }
}

impl TlSerialize for ByteString {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        encode_bytes(&self.0, dst)
    }

    fn tl_size_hint(&self) -> usize {
        encoded_bytes_len(self.0.len())
    }
}

impl TlDeserialize for ByteString {
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
        decode_bytes(src).map(ByteString)
    }
}

impl TlSerialize for str {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        encode_string(self, dst)
    }

    fn tl_size_hint(&self) -> usize {
        encoded_bytes_len(self.len())
    }
}

impl TlSerialize for String {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        self.as_str().serialize_tl(dst)
    }

    fn tl_size_hint(&self) -> usize {
        self.as_str().tl_size_hint()
    }
}

impl TlDeserialize for String {
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
        decode_string(src)
    }
}

impl<T: TlSerialize> TlSerialize for [T] {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        encode_vector_with(self, dst, |item, out| item.serialize_tl(out))
    }

    fn tl_size_hint(&self) -> usize {
        8 + self.iter().map(|item| item.tl_size_hint()).sum::<usize>()
    }
}

impl<T: TlSerialize> TlSerialize for Vec<T> {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        self.as_slice().serialize_tl(dst)
    }

    fn tl_size_hint(&self) -> usize {
        self.as_slice().tl_size_hint()
    }
}

/// Elements are realigned to 4 bytes under `PaddingPolicy::Leave`, so
/// vectors of byte strings decode the same under either padding policy.
impl<T: TlDeserialize> TlDeserialize for Vec<T> {
    fn deserialize_tl<S: TlRead>(src: &mut S) -> TlResult<Self> {
        decode_vector_with(src, T::deserialize_tl)
    }
}

impl<T: TlSerialize + ?Sized> TlSerialize for &T {
    fn serialize_tl(&self, dst: &mut Vec<u8>) -> TlResult<()> {
        (**self).serialize_tl(dst)
    }

    fn tl_size_hint(&self) -> usize {
        (**self).tl_size_hint()
    }
}

/// Serialize a value into a new buffer
pub fn to_bytes<T: TlSerialize + ?Sized>(value: &T) -> TlResult<Vec<u8>> {
    let mut out = Vec::with_capacity(value.tl_size_hint());
    value.serialize_tl(&mut out)?;
    Ok(out)
}

/// Deserialize a value from the start of `buf` with default options
///
/// Trailing bytes after the value are ignored.
pub fn from_bytes<T: TlDeserialize>(buf: &[u8]) -> TlResult<T> {
    from_bytes_partial(buf, DecodeOptions::default()).map(|(value, _)| value)
}

/// Deserialize a value from the start of `buf`
///
/// # Returns
/// Tuple of (decoded value, bytes consumed)
pub fn from_bytes_partial<T: TlDeserialize>(
    buf: &[u8],
    options: DecodeOptions,
) -> TlResult<(T, usize)> {
    let mut cursor = Cursor::with_options(buf, options);
    let value = T::deserialize_tl(&mut cursor)?;
    Ok((value, cursor.offset()))
}
