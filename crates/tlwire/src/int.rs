// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed-width integer codec (int, long, int128, int256).
//!
//! All four TL integer types share one layout: `width` bytes, little-endian,
//! two's complement when signed. They differ only in width, so a single
//! routine handles them all:
//!
//! - [`encode_int`] / [`decode_int`] - any width, explicit signedness,
//!   values carried as [`WideInt`]
//! - `encode_i32` / `decode_u64` / ... - native-type shortcuts with the same
//!   byte layout, used by the other codecs
//!
//! # Example
//!
//! ```
//! use tlwire::{decode_int, encode_int, Cursor, IntWidth, WideInt};
//!
//! let mut out = Vec::new();
//! encode_int(&WideInt::from(-1i32), IntWidth::Int, true, &mut out).unwrap();
//! assert_eq!(out, [0xFF, 0xFF, 0xFF, 0xFF]);
//!
//! let back = decode_int(&mut Cursor::new(&out), IntWidth::Int, false).unwrap();
//! assert_eq!(u32::try_from(back).unwrap(), u32::MAX);
//! ```

use crate::cursor::TlRead;
use crate::error::{TlError, TlResult};
use std::cmp::Ordering;
use std::fmt;

/// Storage size of the widest TL integer
const WIDE_BYTES: usize = 32;

/// Byte width of a TL integer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// `int` - 4 bytes
    Int = 4,
    /// `long` - 8 bytes
    Long = 8,
    /// `int128` - 16 bytes
    Int128 = 16,
    /// `int256` - 32 bytes
    Int256 = 32,
}

impl IntWidth {
    pub const ALL: [IntWidth; 4] = [
        IntWidth::Int,
        IntWidth::Long,
        IntWidth::Int128,
        IntWidth::Int256,
    ];

    pub const fn bytes(self) -> usize {
        self as usize
    }

    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntWidth::Int => "int",
            IntWidth::Long => "long",
            IntWidth::Int128 => "int128",
            IntWidth::Int256 => "int256",
        };
        f.write_str(name)
    }
}

/// Integer value of up to 256 bits, signed or unsigned
///
/// Stored as sign + little-endian magnitude so that both the full unsigned
/// 256-bit range and the full signed 256-bit range are representable.
/// Zero is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideInt {
    negative: bool,
    magnitude: [u8; WIDE_BYTES],
}

impl WideInt {
    pub const ZERO: WideInt = WideInt {
        negative: false,
        magnitude: [0u8; WIDE_BYTES],
    };

    /// Build from a sign and a little-endian magnitude
    pub fn from_magnitude(negative: bool, magnitude_le: [u8; WIDE_BYTES]) -> Self {
        let mut value = Self {
            negative: false,
            magnitude: magnitude_le,
        };
        value.negative = negative && !value.is_zero();
        value
    }

    /// Interpret `bytes` (at most 32) as a little-endian integer
    ///
    /// When `signed` is set and the top bit of the last byte is 1, the value
    /// is negative (two's complement); otherwise it is zero-extended.
    ///
    /// # Errors
    /// `TlError::InvalidLength` when `bytes` is wider than `int256`.
    pub fn from_le_slice(bytes: &[u8], signed: bool) -> TlResult<Self> {
        if bytes.len() > WIDE_BYTES {
            return Err(TlError::InvalidLength {
                length: bytes.len(),
                limit: WIDE_BYTES,
            });
        }
        let negative = signed && bytes.last().is_some_and(|&b| b & 0x80 != 0);
        let fill = if negative { 0xFF } else { 0x00 };
        let mut magnitude = [fill; WIDE_BYTES];
        magnitude[..bytes.len()].copy_from_slice(bytes);
        if negative {
            twos_complement(&mut magnitude);
        }
        Ok(Self::from_magnitude(negative, magnitude))
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.iter().all(|&b| b == 0)
    }

    /// Little-endian magnitude (absolute value)
    pub fn magnitude_le(&self) -> &[u8; WIDE_BYTES] {
        &self.magnitude
    }

    /// Number of significant bits in the magnitude
    fn magnitude_bits(&self) -> usize {
        match self.magnitude.iter().rposition(|&b| b != 0) {
            Some(i) => i * 8 + (8 - self.magnitude[i].leading_zeros() as usize),
            None => 0,
        }
    }

    /// Whether the value is exactly 2^(bits-1), the one negative magnitude
    /// that needs all `bits` bits
    fn is_min_signed(&self, bits: usize) -> bool {
        let top = bits - 1;
        self.magnitude_bits() == bits && {
            let (byte, bit) = (top / 8, top % 8);
            self.magnitude[byte] == 1 << bit && self.magnitude[..byte].iter().all(|&b| b == 0)
        }
    }

    /// Whether the value is representable in `width` with the given signedness
    pub fn fits(&self, width: IntWidth, signed: bool) -> bool {
        let bits = width.bits();
        let used = self.magnitude_bits();
        match (signed, self.negative) {
            (false, true) => false,
            (false, false) => used <= bits,
            (true, false) => used < bits,
            (true, true) => used < bits || self.is_min_signed(bits),
        }
    }

    /// Write the `width.bytes()`-byte little-endian representation into `dst`
    pub fn write_le(&self, width: IntWidth, signed: bool, dst: &mut [u8]) -> TlResult<()> {
        debug_assert_eq!(dst.len(), width.bytes());
        if !self.fits(width, signed) {
            return Err(TlError::IntegerOverflow { width, signed });
        }
        let mut repr = self.magnitude;
        if self.negative {
            twos_complement(&mut repr);
        }
        dst.copy_from_slice(&repr[..width.bytes()]);
        Ok(())
    }
}

/// In-place two's complement negation over the full 256-bit buffer
fn twos_complement(bytes: &mut [u8; WIDE_BYTES]) {
    let mut carry = true;
    for b in bytes.iter_mut() {
        let (sum, overflow) = (!*b).overflowing_add(u8::from(carry));
        *b = sum;
        carry = overflow;
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for WideInt {
            fn from(value: $t) -> Self {
                let abs = value.unsigned_abs().to_le_bytes();
                let mut magnitude = [0u8; WIDE_BYTES];
                magnitude[..abs.len()].copy_from_slice(&abs);
                WideInt::from_magnitude(value < 0, magnitude)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for WideInt {
            fn from(value: $t) -> Self {
                let le = value.to_le_bytes();
                let mut magnitude = [0u8; WIDE_BYTES];
                magnitude[..le.len()].copy_from_slice(&le);
                WideInt::from_magnitude(false, magnitude)
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

/// Narrowing conversions back to the native types of the TL widths
macro_rules! impl_try_from_wide {
    ($($t:ty => $width:ident, $signed:expr;)*) => {$(
        impl TryFrom<WideInt> for $t {
            type Error = TlError;

            fn try_from(value: WideInt) -> TlResult<Self> {
                let mut buf = [0u8; IntWidth::$width.bytes()];
                value.write_le(IntWidth::$width, $signed, &mut buf)?;
                Ok(<$t>::from_le_bytes(buf))
            }
        }
    )*};
}

impl_try_from_wide! {
    i32 => Int, true;
    u32 => Int, false;
    i64 => Long, true;
    u64 => Long, false;
    i128 => Int128, true;
    u128 => Int128, false;
}

impl PartialOrd for WideInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WideInt {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_magnitude = self.magnitude.iter().rev().cmp(other.magnitude.iter().rev());
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => by_magnitude,
            (true, true) => by_magnitude.reverse(),
        }
    }
}

impl fmt::Display for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        if self.magnitude_bits() <= 128 {
            let mut low = [0u8; 16];
            low.copy_from_slice(&self.magnitude[..16]);
            return write!(f, "{}{}", sign, u128::from_le_bytes(low));
        }
        write!(f, "{}0x", sign)?;
        let mut digits = self.magnitude.iter().rev().skip_while(|&&b| b == 0);
        if let Some(first) = digits.next() {
            write!(f, "{:x}", first)?;
        }
        for b in digits {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Encode `value` as a `width`-byte little-endian integer
///
/// # Errors
/// `TlError::IntegerOverflow` when `value` is outside the range of `width`
/// under the given signedness (negative values never fit unsigned).
pub fn encode_int(
    value: &WideInt,
    width: IntWidth,
    signed: bool,
    dst: &mut Vec<u8>,
) -> TlResult<()> {
    let mut buf = [0u8; WIDE_BYTES];
    value.write_le(width, signed, &mut buf[..width.bytes()])?;
    dst.extend_from_slice(&buf[..width.bytes()]);
    Ok(())
}

/// Decode a `width`-byte little-endian integer, consuming exactly `width` bytes
pub fn decode_int<S: TlRead>(src: &mut S, width: IntWidth, signed: bool) -> TlResult<WideInt> {
    let mut buf = [0u8; WIDE_BYTES];
    src.read_exact_into(&mut buf[..width.bytes()])?;
    WideInt::from_le_slice(&buf[..width.bytes()], signed)
}

/// Generate native-type encode/decode pairs (same layout as `encode_int`)
macro_rules! impl_native_int {
    ($enc:ident, $dec:ident, $t:ty, $size:expr) => {
        #[inline]
        pub fn $enc(value: $t, dst: &mut Vec<u8>) {
            dst.extend_from_slice(&value.to_le_bytes());
        }

        #[inline]
        pub fn $dec<S: TlRead>(src: &mut S) -> TlResult<$t> {
            Ok(<$t>::from_le_bytes(src.read_array::<$size>()?))
        }
    };
}

impl_native_int!(encode_i32, decode_i32, i32, 4);
impl_native_int!(encode_u32, decode_u32, u32, 4);
impl_native_int!(encode_i64, decode_i64, i64, 8);
impl_native_int!(encode_u64, decode_u64, u64, 8);
impl_native_int!(encode_i128, decode_i128, i128, 16);
impl_native_int!(encode_u128, decode_u128, u128, 16);
