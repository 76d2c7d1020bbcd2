// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for TL primitive decoding
//!
//! Feeds arbitrary bytes to every decoder. None of them may panic, and any
//! value that decodes must re-encode to exactly the bytes it was read from.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tlwire::{
    decode_bool, decode_bytes, decode_int, decode_string, from_bytes_partial, to_bytes,
    ByteString, Cursor, DecodeOptions, IntWidth, StreamReader, TlDeserialize, WideInt,
};

/// Decode `T`, then require encode(decoded) == consumed input
fn check_stable<T: TlDeserialize + tlwire::TlSerialize>(data: &[u8]) {
    if let Ok((value, used)) = from_bytes_partial::<T>(data, DecodeOptions::default()) {
        let again = to_bytes(&value).expect("decoded value must re-encode");
        assert_eq!(again, &data[..used], "re-encoding differs from input");
    }
}

fuzz_target!(|data: &[u8]| {
    // ----------------------------------------------------------------
    // 1. Integers at every width and signedness - must not panic
    // ----------------------------------------------------------------
    for width in IntWidth::ALL {
        for signed in [true, false] {
            let _ = decode_int(&mut Cursor::new(data), width, signed);
        }
    }
    check_stable::<i32>(data);
    check_stable::<u64>(data);
    check_stable::<i128>(data);
    check_stable::<WideInt>(data);

    // ----------------------------------------------------------------
    // 2. Bool, bytes and string - must not panic
    // ----------------------------------------------------------------
    let _ = decode_bool(&mut Cursor::new(data));
    let _ = decode_string(&mut Cursor::new(data));
    let _ = decode_bytes(&mut Cursor::new(data));
    let _ = decode_bytes(&mut Cursor::with_options(data, DecodeOptions::observed()));
    let _ = decode_bytes(&mut StreamReader::new(data));

    // Byte strings only round-trip when the padding was zero.
    if let Ok((value, used)) = from_bytes_partial::<ByteString>(data, DecodeOptions::default()) {
        let again = to_bytes(&value).expect("decoded bytes must re-encode");
        assert_eq!(again.len(), used);
    }

    // ----------------------------------------------------------------
    // 3. Vectors, including nested and hostile counts - must not panic
    // ----------------------------------------------------------------
    let _ = <Vec<i64>>::deserialize_tl(&mut Cursor::new(data));
    let _ = <Vec<String>>::deserialize_tl(&mut Cursor::new(data));
    let _ = <Vec<Vec<bool>>>::deserialize_tl(&mut StreamReader::new(data));

    // Padding policy must not change what a vector of byte strings decodes to.
    if let Ok(consumed) = from_bytes_partial::<Vec<ByteString>>(data, DecodeOptions::default()) {
        let observed = from_bytes_partial::<Vec<ByteString>>(data, DecodeOptions::observed())
            .expect("observed decode of a valid vector");
        assert_eq!(observed, consumed, "padding policy changed vector decode");
    }
});
