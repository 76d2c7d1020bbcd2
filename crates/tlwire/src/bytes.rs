// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `bytes` codec: length-prefixed opaque payload, zero-padded to 4 bytes.
//!
//! ```text
//! n <= 253:  [n] [payload ...] [0x00 * pad]
//! n >= 254:  [0xFE] [n: 3 bytes LE] [payload ...] [0x00 * pad]
//!
//! pad = (4 - (prefix_len + n) % 4) % 4
//! ```
//!
//! The padding depends only on the encoded value itself, never on where the
//! value sits in the enclosing buffer.
//!
//! Whether decode consumes the padding is governed by
//! [`PaddingPolicy`](crate::PaddingPolicy) on the read source. With
//! `PaddingPolicy::Leave` the source is left right after the payload and the
//! caller must skip [`padding_for`]`(prefix + n)` bytes itself. The vector
//! decoder does this for its elements.

use crate::config::PaddingPolicy;
use crate::constants::{
    BYTES_LONG_LEN_WIDTH, BYTES_LONG_MARKER, BYTES_MAX_LEN, BYTES_SHORT_MAX, TL_ALIGNMENT,
};
use crate::cursor::{Cursor, TlRead};
use crate::error::{TlError, TlResult};
use std::ops::Deref;

/// Zero bytes needed after `len` bytes to reach the 4-byte boundary
#[inline]
pub const fn padding_for(len: usize) -> usize {
    (TL_ALIGNMENT - len % TL_ALIGNMENT) % TL_ALIGNMENT
}

/// Size of the length prefix for an `n`-byte payload
#[inline]
pub const fn prefix_len(n: usize) -> usize {
    if n <= BYTES_SHORT_MAX {
        1
    } else {
        1 + BYTES_LONG_LEN_WIDTH
    }
}

/// Total encoded size (prefix + payload + padding) of an `n`-byte payload
#[inline]
pub const fn encoded_bytes_len(n: usize) -> usize {
    let raw = prefix_len(n) + n;
    raw + padding_for(raw)
}

/// Encode a byte string
///
/// # Errors
/// `TlError::InvalidLength` when the payload is longer than `BYTES_MAX_LEN`
/// (the long-form prefix only has 3 length bytes).
pub fn encode_bytes(payload: &[u8], dst: &mut Vec<u8>) -> TlResult<()> {
    let n = payload.len();
    if n > BYTES_MAX_LEN {
        return Err(TlError::InvalidLength {
            length: n,
            limit: BYTES_MAX_LEN,
        });
    }

    dst.reserve(encoded_bytes_len(n));
    if n <= BYTES_SHORT_MAX {
        dst.push(n as u8);
    } else {
        dst.push(BYTES_LONG_MARKER);
        dst.extend_from_slice(&(n as u32).to_le_bytes()[..BYTES_LONG_LEN_WIDTH]);
    }
    dst.extend_from_slice(payload);

    let pad = padding_for(prefix_len(n) + n);
    dst.resize(dst.len() + pad, 0);
    Ok(())
}

/// Parse the length prefix, returning `(prefix_len, n)`
fn read_len_prefix<S: TlRead>(src: &mut S) -> TlResult<(usize, usize)> {
    let [first] = src.read_array::<1>()?;
    let (prefix, n) = match first {
        short if usize::from(short) <= BYTES_SHORT_MAX => (1, usize::from(short)),
        BYTES_LONG_MARKER => {
            let [b0, b1, b2] = src.read_array::<BYTES_LONG_LEN_WIDTH>()?;
            let n = u32::from_le_bytes([b0, b1, b2, 0]) as usize;
            log::trace!("[tlwire::bytes] long-form length {}", n);
            (1 + BYTES_LONG_LEN_WIDTH, n)
        }
        // 0xFF is neither a short length nor the long-form marker.
        reserved => {
            return Err(TlError::InvalidLength {
                length: usize::from(reserved),
                limit: BYTES_SHORT_MAX,
            })
        }
    };

    let limit = src.options().max_bytes_len;
    if n > limit {
        return Err(TlError::InvalidLength { length: n, limit });
    }
    Ok((prefix, n))
}

fn finish_padding<S: TlRead>(src: &mut S, prefix: usize, n: usize) -> TlResult<()> {
    match src.options().padding {
        PaddingPolicy::Consume => src.skip(padding_for(prefix + n)),
        PaddingPolicy::Leave => Ok(()),
    }
}

/// Decode a byte string into an owned buffer
///
/// # Errors
/// - `TlError::StreamUnderrun` if the prefix, payload or (under
///   `PaddingPolicy::Consume`) padding is truncated
/// - `TlError::InvalidLength` for a reserved prefix byte (0xFF) or a length
///   above the source's `max_bytes_len`
pub fn decode_bytes<S: TlRead>(src: &mut S) -> TlResult<Vec<u8>> {
    let (prefix, n) = read_len_prefix(src)?;
    let payload = src.read_vec(n)?;
    finish_padding(src, prefix, n)?;
    Ok(payload)
}

/// Decode a byte string without copying (borrowed from the cursor's buffer)
pub fn decode_bytes_borrowed<'a>(src: &mut Cursor<'a>) -> TlResult<&'a [u8]> {
    let (prefix, n) = read_len_prefix(src)?;
    let payload = src.read_bytes(n)?;
    finish_padding(src, prefix, n)?;
    Ok(payload)
}

/// Owned TL `bytes` value
///
/// Distinguishes an opaque byte string from a `Vec<T>` vector when going
/// through [`TlSerialize`](crate::TlSerialize).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for ByteString {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}
