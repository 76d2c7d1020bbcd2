// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `double` codec: 8-byte IEEE-754, little-endian.
//!
//! NaN and infinities travel as their raw bit patterns.

use crate::cursor::TlRead;
use crate::error::TlResult;

/// Encode f64 (8 bytes, LE)
#[inline]
pub fn encode_double(value: f64, dst: &mut Vec<u8>) {
    dst.extend_from_slice(&value.to_bits().to_le_bytes());
}

/// Decode f64 (8 bytes, LE)
#[inline]
pub fn decode_double<S: TlRead>(src: &mut S) -> TlResult<f64> {
    Ok(f64::from_bits(u64::from_le_bytes(src.read_array::<8>()?)))
}
