// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decode policy configuration
//!
//! The wire format leaves two behaviors to the implementation: whether a
//! byte-string decode swallows its own alignment padding, and whether a
//! vector header's constructor id is checked. Both are explicit here and
//! travel with the read cursor, so every codec in a decode pass applies the
//! same policy.
//!
//! # Example
//!
//! ```
//! use tlwire::{Cursor, DecodeOptions, PaddingPolicy, TlRead};
//!
//! let opts = DecodeOptions::default().with_padding(PaddingPolicy::Leave);
//! let cursor = Cursor::with_options(&[0x02, b'a', b'b', 0x00], opts);
//! assert_eq!(cursor.options().padding, PaddingPolicy::Leave);
//! ```

use crate::constants::BYTES_MAX_LEN;

/// What a byte-string decode does with the 0..=3 padding bytes after the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Skip the padding so decode consumes exactly what encode produced
    #[default]
    Consume,
    /// Stop right after the payload; the caller skips padding itself
    ///
    /// Vector decoding is the caller for its elements and realigns after
    /// each one, so `Vec<ByteString>` and `Vec<String>` still decode whole.
    Leave,
}

/// How a vector header's constructor id is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstructorCheck {
    /// Reject any id other than `VECTOR_CONSTRUCTOR`
    #[default]
    Strict,
    /// Accept any id (logged at debug level)
    Lenient,
}

/// Decode-time policy carried by a [`crate::TlRead`] source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub padding: PaddingPolicy,
    pub vector_constructor: ConstructorCheck,
    /// Upper bound for a decoded byte-string length (clamped to `BYTES_MAX_LEN`)
    pub max_bytes_len: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            padding: PaddingPolicy::Consume,
            vector_constructor: ConstructorCheck::Strict,
            max_bytes_len: BYTES_MAX_LEN,
        }
    }
}

impl DecodeOptions {
    /// Lazy padding handling and unchecked vector headers, as deployed
    /// peers historically decoded.
    ///
    /// Only a top-level byte string stops before its padding; vector
    /// elements are realigned by the vector decoder.
    pub fn observed() -> Self {
        Self {
            padding: PaddingPolicy::Leave,
            vector_constructor: ConstructorCheck::Lenient,
            max_bytes_len: BYTES_MAX_LEN,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_vector_constructor(mut self, check: ConstructorCheck) -> Self {
        self.vector_constructor = check;
        self
    }

    /// Values above `BYTES_MAX_LEN` are clamped; the long-form prefix cannot
    /// express more anyway.
    #[must_use]
    pub fn with_max_bytes_len(mut self, max: usize) -> Self {
        self.max_bytes_len = max.min(BYTES_MAX_LEN);
        self
    }
}
