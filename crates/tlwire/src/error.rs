// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the TL primitive codecs

use crate::int::IntWidth;
use thiserror::Error;

/// Result type for TL encode/decode operations
pub type TlResult<T> = std::result::Result<T, TlError>;

/// Error type for TL encode/decode operations
///
/// UTF-8 problems are never reported: text decoding repairs invalid
/// sequences with U+FFFD instead.
#[derive(Debug, Error)]
pub enum TlError {
    /// Fewer bytes left than a fixed-width or length-prefixed read requires
    ///
    /// `available` is `None` when reading from a live stream whose
    /// remaining size is unknown.
    #[error("stream underrun at offset {offset}: need {needed} bytes, {}", fmt_available(.available))]
    StreamUnderrun {
        offset: usize,
        needed: usize,
        available: Option<usize>,
    },

    /// Length field that cannot be satisfied
    #[error("invalid length {length} (limit {limit})")]
    InvalidLength { length: usize, limit: usize },

    /// Integer value outside the range of the declared width/signedness
    #[error("integer does not fit {width} ({})", signedness(.signed))]
    IntegerOverflow { width: IntWidth, signed: bool },

    /// Constructor id differs from the one the decoded type requires
    #[error("unexpected constructor {found:#010x}, expected {expected:#010x}")]
    UnexpectedConstructor { expected: u32, found: u32 },

    /// Underlying stream failure (other than end of stream)
    #[error("stream I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_available(available: &Option<usize>) -> String {
    match available {
        Some(n) => format!("{} available", n),
        None => "stream ended".to_string(),
    }
}

fn signedness(signed: &bool) -> &'static str {
    if *signed {
        "signed"
    } else {
        "unsigned"
    }
}

impl TlError {
    /// True for truncated input (as opposed to malformed or oversized input)
    pub fn is_underrun(&self) -> bool {
        matches!(self, TlError::StreamUnderrun { .. })
    }
}
