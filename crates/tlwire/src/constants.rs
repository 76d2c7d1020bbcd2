// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! TL wire constants - single source of truth.
//!
//! Constructor ids and length-prefix limits used by the primitive codecs.
//! **NEVER hardcode these values elsewhere!**

/// Constructor id of `boolTrue` (encoded as an unsigned 32-bit integer)
pub const BOOL_TRUE: u32 = 0x9972_75b5;

/// Constructor id of `boolFalse` (encoded as an unsigned 32-bit integer)
pub const BOOL_FALSE: u32 = 0xbc79_9737;

/// Constructor id of the boxed `vector` type
pub const VECTOR_CONSTRUCTOR: u32 = 0x1cb5_c415;

/// Largest payload length that fits the 1-byte short length prefix
pub const BYTES_SHORT_MAX: usize = 253;

/// First byte of a long-form length prefix, followed by a 3-byte LE length
pub const BYTES_LONG_MARKER: u8 = 0xFE;

/// Width of the long-form length field (after the marker byte)
pub const BYTES_LONG_LEN_WIDTH: usize = 3;

/// Largest payload length representable by the 3-byte long-form prefix
pub const BYTES_MAX_LEN: usize = (1 << 24) - 1;

/// Every byte string is zero-padded to a multiple of this many bytes
pub const TL_ALIGNMENT: usize = 4;

/// Smallest encoded size of any boxed or bare TL value
///
/// Used to bound speculative allocations when decoding vectors.
pub const MIN_ENCODED_SIZE: usize = 4;
