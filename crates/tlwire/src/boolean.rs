// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `Bool` codec.
//!
//! A boolean is a boxed constructor id, not a byte: `boolTrue` or
//! `boolFalse` written as an unsigned 32-bit integer.
//!
//! Decoding compares against `BOOL_TRUE` only. The `boolFalse` id *and
//! every unrecognized id* decode to `false`; this is not an error.

use crate::constants::{BOOL_FALSE, BOOL_TRUE};
use crate::cursor::TlRead;
use crate::error::TlResult;
use crate::int::{decode_u32, encode_u32};

/// Encode bool as its constructor id (4 bytes)
#[inline]
pub fn encode_bool(value: bool, dst: &mut Vec<u8>) {
    encode_u32(if value { BOOL_TRUE } else { BOOL_FALSE }, dst);
}

/// Decode bool: `true` iff the id equals `BOOL_TRUE`
#[inline]
pub fn decode_bool<S: TlRead>(src: &mut S) -> TlResult<bool> {
    Ok(decode_u32(src)? == BOOL_TRUE)
}
