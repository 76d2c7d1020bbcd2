// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `Vector<T>` codec.
//!
//! ```text
//! [0x1cb5c415: u32 LE] [count: u32 LE] [T] [T] ... (count elements)
//! ```
//!
//! The element codec is supplied by the caller, either as closures
//! ([`encode_vector_with`] / [`decode_vector_with`]) or through the
//! [`TlSerialize`](crate::TlSerialize) / [`TlDeserialize`](crate::TlDeserialize)
//! impls on `Vec<T>`. No padding is added at the vector level; elements
//! that need alignment pad themselves.
//!
//! Decoding aborts on the first failing element; no partial vector is
//! returned.
//!
//! Every TL element encodes to a multiple of 4 bytes. Under
//! [`PaddingPolicy::Leave`](crate::PaddingPolicy) a byte-string element stops
//! before its padding, so the vector decoder realigns the source after each
//! element. A vector decode therefore always consumes whole elements,
//! whatever the padding policy.

use crate::bytes::padding_for;
use crate::config::{ConstructorCheck, PaddingPolicy};
use crate::constants::{MIN_ENCODED_SIZE, VECTOR_CONSTRUCTOR};
use crate::cursor::TlRead;
use crate::error::{TlError, TlResult};
use crate::int::{decode_u32, encode_u32};

/// Upper bound on slots reserved upfront when the source size is unknown
const STREAM_PREALLOC_LIMIT: usize = 1024;

/// Encode the vector constructor id and element count
pub fn encode_vector_header(len: usize, dst: &mut Vec<u8>) -> TlResult<()> {
    let count = u32::try_from(len).map_err(|_| TlError::InvalidLength {
        length: len,
        limit: u32::MAX as usize,
    })?;
    encode_u32(VECTOR_CONSTRUCTOR, dst);
    encode_u32(count, dst);
    Ok(())
}

/// Decode the vector constructor id and element count
///
/// The id is checked according to the source's `ConstructorCheck`.
pub fn decode_vector_header<S: TlRead>(src: &mut S) -> TlResult<usize> {
    let at = src.position();
    let id = decode_u32(src)?;
    if id != VECTOR_CONSTRUCTOR {
        match src.options().vector_constructor {
            ConstructorCheck::Strict => {
                return Err(TlError::UnexpectedConstructor {
                    expected: VECTOR_CONSTRUCTOR,
                    found: id,
                })
            }
            ConstructorCheck::Lenient => log::debug!(
                "[tlwire::vector] accepting constructor {:#010x} at offset {} as vector",
                id,
                at
            ),
        }
    }
    let count = decode_u32(src)? as usize;
    log::trace!("[tlwire::vector] count={} at offset {}", count, at);
    Ok(count)
}

/// Encode a vector, serializing each element with `encode_fn`
pub fn encode_vector_with<T, F>(items: &[T], dst: &mut Vec<u8>, mut encode_fn: F) -> TlResult<()>
where
    F: FnMut(&T, &mut Vec<u8>) -> TlResult<()>,
{
    encode_vector_header(items.len(), dst)?;
    for item in items {
        encode_fn(item, dst)?;
    }
    Ok(())
}

/// Decode a vector, deserializing each element with `decode_fn`
///
/// `decode_fn` is called exactly `count` times, in order. Its errors
/// propagate unchanged. Under `PaddingPolicy::Leave` the padding an element
/// left unread is skipped before the next one.
pub fn decode_vector_with<S, T, F>(src: &mut S, mut decode_fn: F) -> TlResult<Vec<T>>
where
    S: TlRead,
    F: FnMut(&mut S) -> TlResult<T>,
{
    let count = decode_vector_header(src)?;

    // A hostile count must not turn into a huge allocation.
    let bound = src
        .remaining_hint()
        .map_or(STREAM_PREALLOC_LIMIT, |left| left / MIN_ENCODED_SIZE);
    let mut items = Vec::with_capacity(count.min(bound));

    let realign = src.options().padding == PaddingPolicy::Leave;
    for _ in 0..count {
        let start = src.position();
        items.push(decode_fn(src)?);
        if realign {
            src.skip(padding_for(src.position() - start))?;
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecodeOptions;
    use crate::cursor::Cursor;
    use crate::int::{decode_i32, encode_i32};
    use crate::string::{decode_string, encode_string};

    fn encode_ints(values: &[i32]) -> Vec<u8> {
        let mut out = Vec::new();
        encode_vector_with(values, &mut out, |v, dst| {
            encode_i32(*v, dst);
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn test_empty_vector() {
        let out = encode_ints(&[]);
        assert_eq!(out, [0x15, 0xc4, 0xb5, 0x1c, 0, 0, 0, 0]);
        let decoded = decode_vector_with(&mut Cursor::new(&out), decode_i32).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_int_vector_preserves_order() {
        let out = encode_ints(&[3, -1, 7]);
        assert_eq!(
            out,
            [
                0x15, 0xc4, 0xb5, 0x1c, 0x03, 0, 0, 0, 0x03, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0x07,
                0, 0, 0
            ]
        );
        let mut cursor = Cursor::new(&out);
        assert_eq!(
            decode_vector_with(&mut cursor, decode_i32).unwrap(),
            vec![3, -1, 7]
        );
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_string_elements_pad_themselves() {
        let words = ["a", "bcdef", ""];
        let mut out = Vec::new();
        encode_vector_with(&words, &mut out, |w, dst| encode_string(w, dst)).unwrap();
        // header 8 + "a" 4 + "bcdef" 8 + "" 4
        assert_eq!(out.len(), 24);

        let decoded = decode_vector_with(&mut Cursor::new(&out), decode_string).unwrap();
        assert_eq!(decoded, words);
    }

    #[test]
    fn test_strict_constructor_mismatch() {
        let mut out = encode_ints(&[1]);
        out[0] = 0x00;
        let err = decode_vector_with(&mut Cursor::new(&out), decode_i32).unwrap_err();
        assert!(matches!(
            err,
            TlError::UnexpectedConstructor {
                expected: VECTOR_CONSTRUCTOR,
                found: 0x1cb5_c400
            }
        ));
    }

    #[test]
    fn test_lenient_constructor_accepts_any_id() {
        let mut out = encode_ints(&[1, 2]);
        out[..4].copy_from_slice(&0xdead_beefu32.to_le_bytes());
        let opts = DecodeOptions::default().with_vector_constructor(ConstructorCheck::Lenient);
        let mut cursor = Cursor::with_options(&out, opts);
        assert_eq!(
            decode_vector_with(&mut cursor, decode_i32).unwrap(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_element_failure_aborts_whole_vector() {
        let out = encode_ints(&[10, 20, 30]);
        let mut calls = 0;
        let err = decode_vector_with(&mut Cursor::new(&out), |src| {
            calls += 1;
            let v = decode_i32(src)?;
            if v == 20 {
                return Err(TlError::InvalidLength {
                    length: 20,
                    limit: 0,
                });
            }
            Ok(v)
        })
        .unwrap_err();
        assert_eq!(calls, 2);
        assert!(matches!(err, TlError::InvalidLength { length: 20, .. }));
    }

    #[test]
    fn test_truncated_vector_is_underrun() {
        let out = encode_ints(&[1, 2, 3]);
        for cut in 0..out.len() {
            let err = decode_vector_with(&mut Cursor::new(&out[..cut]), decode_i32).unwrap_err();
            assert!(err.is_underrun(), "cut at {}", cut);
        }
    }

    #[test]
    fn test_leave_policy_realigns_string_elements() {
        let words = ["a", "b", "bcdef", ""];
        let mut out = Vec::new();
        encode_vector_with(&words, &mut out, |w, dst| encode_string(w, dst)).unwrap();

        for opts in [
            DecodeOptions::default().with_padding(PaddingPolicy::Leave),
            DecodeOptions::observed(),
        ] {
            let mut cursor = Cursor::with_options(&out, opts);
            let decoded = decode_vector_with(&mut cursor, decode_string).unwrap();
            assert_eq!(decoded, words);
            assert!(cursor.is_eof());
        }
    }

    #[test]
    fn test_leave_policy_keeps_fixed_width_elements() {
        let out = encode_ints(&[5, -6]);
        let opts = DecodeOptions::default().with_padding(PaddingPolicy::Leave);
        let mut cursor = Cursor::with_options(&out, opts);
        assert_eq!(
            decode_vector_with(&mut cursor, decode_i32).unwrap(),
            vec![5, -6]
        );
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_hostile_count_does_not_preallocate() {
        let mut out = Vec::new();
        encode_u32(VECTOR_CONSTRUCTOR, &mut out);
        encode_u32(u32::MAX, &mut out);
        let err = decode_vector_with(&mut Cursor::new(&out), decode_i32).unwrap_err();
        assert!(err.is_underrun());
    }
}
