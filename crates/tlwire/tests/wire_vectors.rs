// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// TL golden vectors: byte-exact reference encodings.
//
// Each test encodes a known deterministic value, compares against the
// reference bytes, then verifies roundtrip: encode -> decode -> re-encode ==
// original bytes, with decode consuming the whole encoding.

#![allow(clippy::unreadable_literal)]

use tlwire::{
    encode_int, from_bytes_partial, to_bytes, ByteString, DecodeOptions, IntWidth, TlDeserialize,
    TlSerialize, WideInt,
};

/// Core golden vector check.
fn golden_test<T: TlSerialize + TlDeserialize + PartialEq + std::fmt::Debug>(
    name: &str,
    val: &T,
    expected: &[u8],
) {
    let encoded = to_bytes(val).unwrap();
    assert_eq!(
        encoded,
        expected,
        "{name}: encoded bytes differ from golden ({} bytes encoded vs {} expected)",
        encoded.len(),
        expected.len()
    );

    let (decoded, consumed) = from_bytes_partial::<T>(&encoded, DecodeOptions::default()).unwrap();
    assert_eq!(consumed, encoded.len(), "{name}: consumed != encoded length");
    assert_eq!(&decoded, val, "{name}: roundtrip value mismatch");

    let re_encoded = to_bytes(&decoded).unwrap();
    assert_eq!(re_encoded, encoded, "{name}: re-encoded bytes differ from original");
}

#[test]
fn golden_int() {
    golden_test("int_minus_one", &-1i32, &[0xFF, 0xFF, 0xFF, 0xFF]);
    golden_test("int_one", &1i32, &[0x01, 0x00, 0x00, 0x00]);
    golden_test("int_unsigned_max", &u32::MAX, &[0xFF, 0xFF, 0xFF, 0xFF]);
    golden_test("int_mixed", &0x1234_5678i32, &[0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn golden_long() {
    golden_test(
        "long_minus_two",
        &-2i64,
        &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
    );
    golden_test(
        "long_mixed",
        &0x0102_0304_0506_0708u64,
        &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01],
    );
}

#[test]
fn golden_int128_and_int256() {
    let mut expected = [0u8; 16];
    expected[0] = 0x2A;
    golden_test("int128_42", &42i128, &expected);

    let mut expected = [0xFFu8; 32];
    expected[0] = 0xD6;
    golden_test("int256_minus_42", &WideInt::from(-42i32), &expected);
}

#[test]
fn golden_unsigned_int256_via_generic_routine() {
    let mut out = Vec::new();
    encode_int(&WideInt::from(u128::MAX), IntWidth::Int256, false, &mut out).unwrap();
    let mut expected = [0u8; 32];
    expected[..16].fill(0xFF);
    assert_eq!(out, expected);
}

#[test]
fn golden_double() {
    golden_test(
        "double_one",
        &1.0f64,
        &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F],
    );
    golden_test(
        "double_minus_half",
        &-0.5f64,
        &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE0, 0xBF],
    );
}

#[test]
fn golden_bool() {
    golden_test("bool_true", &true, &[0xB5, 0x75, 0x72, 0x99]);
    golden_test("bool_false", &false, &[0x37, 0x97, 0x79, 0xBC]);
}

#[test]
fn golden_bytes() {
    golden_test("bytes_ab", &ByteString(b"ab".to_vec()), &[0x02, 0x61, 0x62, 0x00]);
    golden_test("bytes_empty", &ByteString::default(), &[0x00, 0x00, 0x00, 0x00]);
    golden_test(
        "bytes_seven",
        &ByteString(b"1234567".to_vec()),
        &[0x07, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37],
    );

    let mut long = vec![0xFE, 0x00, 0x01, 0x00];
    long.extend(std::iter::repeat(0x5A).take(256));
    golden_test("bytes_256", &ByteString(vec![0x5A; 256]), &long);
}

#[test]
fn golden_string() {
    golden_test(
        "string_hello",
        &String::from("hello"),
        &[0x05, b'h', b'e', b'l', b'l', b'o', 0x00, 0x00],
    );
    golden_test(
        "string_utf8",
        &String::from("\u{e9}"),
        &[0x02, 0xC3, 0xA9, 0x00],
    );
}

#[test]
fn golden_vector() {
    golden_test(
        "vector_empty",
        &Vec::<i32>::new(),
        &[0x15, 0xC4, 0xB5, 0x1C, 0x00, 0x00, 0x00, 0x00],
    );
    golden_test(
        "vector_bool",
        &vec![true, false],
        &[
            0x15, 0xC4, 0xB5, 0x1C, 0x02, 0x00, 0x00, 0x00, 0xB5, 0x75, 0x72, 0x99, 0x37, 0x97,
            0x79, 0xBC,
        ],
    );
    golden_test(
        "vector_string",
        &vec![String::from("a"), String::from("bc")],
        &[
            0x15, 0xC4, 0xB5, 0x1C, 0x02, 0x00, 0x00, 0x00, 0x01, b'a', 0x00, 0x00, 0x02, b'b',
            b'c', 0x00,
        ],
    );
}
