// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! tlwire - TL primitive type codec
//!
//! Bit-exact encoder/decoder for the primitive types of the TL (Type
//! Language) wire format: the layer every schema-generated message is
//! built from.
//!
//! ## Wire Format
//!
//! All integers are little-endian.
//!
//! | Type | Layout |
//! |------|--------|
//! | `int` / `long` / `int128` / `int256` | raw 4 / 8 / 16 / 32-byte integer |
//! | `double` | raw 8-byte IEEE-754 |
//! | `Bool` | constructor id `0x997275b5` (true) / `0xbc799737` (false) |
//! | `bytes` | `[len <= 253]` or `[0xFE][len: 3 bytes]`, payload, zero padding to 4 |
//! | `string` | same as `bytes`, payload is UTF-8 |
//! | `Vector<T>` | `0x1cb5c415`, `u32` count, `count` elements |
//!
//! ## Quick Start
//!
//! ```
//! use tlwire::{from_bytes, to_bytes, ByteString};
//!
//! let buf = to_bytes(&ByteString(b"ab".to_vec())).unwrap();
//! assert_eq!(buf, [0x02, 0x61, 0x62, 0x00]);
//!
//! let ids: Vec<i64> = vec![7, -1, 42];
//! let back: Vec<i64> = from_bytes(&to_bytes(&ids).unwrap()).unwrap();
//! assert_eq!(back, ids);
//! ```
//!
//! ## Scope
//!
//! No schema handling, framing, encryption or RPC. Callers hand in an
//! output `Vec<u8>` (encode) or a [`TlRead`] source already positioned at
//! the value (decode). Nothing here holds connection or session state.

#![forbid(unsafe_code)]

pub mod boolean;
pub mod bytes;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod float;
pub mod int;
pub mod string;
pub mod traits;
pub mod vector;

pub use boolean::{decode_bool, encode_bool};
pub use bytes::{
    decode_bytes, decode_bytes_borrowed, encode_bytes, encoded_bytes_len, padding_for,
    ByteString,
};
pub use config::{ConstructorCheck, DecodeOptions, PaddingPolicy};
pub use cursor::{Cursor, StreamReader, TlRead};
pub use error::{TlError, TlResult};
pub use float::{decode_double, encode_double};
pub use int::{decode_int, encode_int, IntWidth, WideInt};
pub use string::{decode_string, encode_string};
pub use traits::{from_bytes, from_bytes_partial, to_bytes, TlDeserialize, TlSerialize};
pub use vector::{decode_vector_with, encode_vector_with};
