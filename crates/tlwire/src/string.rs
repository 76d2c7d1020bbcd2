// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `string` codec: UTF-8 text carried as a TL byte string.
//!
//! Decoding never fails on malformed UTF-8; invalid sequences are replaced
//! with U+FFFD. Encoding only reads its input.

use crate::bytes::{decode_bytes, encode_bytes};
use crate::cursor::TlRead;
use crate::error::TlResult;

/// Encode a string (UTF-8 bytes, `bytes` layout)
#[inline]
pub fn encode_string(value: &str, dst: &mut Vec<u8>) -> TlResult<()> {
    encode_bytes(value.as_bytes(), dst)
}

/// Decode a string, repairing invalid UTF-8
pub fn decode_string<S: TlRead>(src: &mut S) -> TlResult<String> {
    let raw = decode_bytes(src)?;
    Ok(match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => {
            log::trace!(
                "[tlwire::string] invalid UTF-8 at byte {}, replacing",
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
