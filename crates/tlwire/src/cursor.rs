// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Forward-only read sources for TL decoding.
//!
//! Decoders pull bytes through the [`TlRead`] trait. Two sources exist:
//!
//! - [`Cursor`] - bounds-checked, zero-copy reads over an in-memory buffer
//! - [`StreamReader`] - reads from a live `std::io::Read` stream
//!
//! Reads advance irreversibly. A source must not be shared between
//! concurrent decodes without external synchronization.

use crate::config::DecodeOptions;
use crate::error::{TlError, TlResult};
use std::io::{self, Read};

/// Sequential byte source consumed by the TL decoders
pub trait TlRead {
    /// Fill `dst` completely or fail with `TlError::StreamUnderrun`
    fn read_exact_into(&mut self, dst: &mut [u8]) -> TlResult<()>;

    /// Read exactly `len` bytes into a new vector
    fn read_vec(&mut self, len: usize) -> TlResult<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.read_exact_into(&mut out)?;
        Ok(out)
    }

    /// Discard exactly `len` bytes
    fn skip(&mut self, len: usize) -> TlResult<()>;

    /// Bytes consumed so far
    fn position(&self) -> usize;

    /// Bytes left, when the source knows it (`None` for live streams)
    fn remaining_hint(&self) -> Option<usize>;

    /// Decode policy applied by every codec reading from this source
    fn options(&self) -> &DecodeOptions;

    /// Read a fixed-size little-endian field
    fn read_array<const N: usize>(&mut self) -> TlResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact_into(&mut buf)?;
        Ok(buf)
    }
}

/// Immutable cursor for reading (bounds-checked, zero-copy)
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
    options: DecodeOptions,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_options(buffer, DecodeOptions::default())
    }

    pub fn with_options(buffer: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            buffer,
            offset: 0,
            options,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Unread tail of the buffer (does not advance)
    pub fn rest(&self) -> &'a [u8] {
        &self.buffer[self.offset.min(self.buffer.len())..]
    }

    /// Borrow the next `len` bytes and advance past them
    pub fn read_bytes(&mut self, len: usize) -> TlResult<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(TlError::StreamUnderrun {
                offset: self.offset,
                needed: len,
                available: Some(available),
            });
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }
}

impl TlRead for Cursor<'_> {
    fn read_exact_into(&mut self, dst: &mut [u8]) -> TlResult<()> {
        let src = self.read_bytes(dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }

    fn read_vec(&mut self, len: usize) -> TlResult<Vec<u8>> {
        Ok(self.read_bytes(len)?.to_vec())
    }

    fn skip(&mut self, len: usize) -> TlResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    fn position(&self) -> usize {
        self.offset
    }

    fn remaining_hint(&self) -> Option<usize> {
        Some(self.remaining())
    }

    fn options(&self) -> &DecodeOptions {
        &self.options
    }
}

/// Read source over a live byte stream
///
/// The stream is expected to be positioned at the first byte of the value
/// by whatever framing layer owns it. End of stream in the middle of a
/// value surfaces as `TlError::StreamUnderrun`; any other I/O failure as
/// `TlError::Io`.
pub struct StreamReader<R> {
    inner: R,
    position: usize,
    options: DecodeOptions,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, DecodeOptions::default())
    }

    pub fn with_options(inner: R, options: DecodeOptions) -> Self {
        Self {
            inner,
            position: 0,
            options,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn underrun(&self, start: usize, needed: usize) -> TlError {
        TlError::StreamUnderrun {
            offset: start,
            needed,
            available: None,
        }
    }
}

impl<R: Read> TlRead for StreamReader<R> {
    fn read_exact_into(&mut self, dst: &mut [u8]) -> TlResult<()> {
        let start = self.position;
        let mut filled = 0;
        while filled < dst.len() {
            match self.inner.read(&mut dst[filled..]) {
                Ok(0) => return Err(self.underrun(start, dst.len())),
                Ok(n) => {
                    filled += n;
                    self.position += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    // Grows with the data actually received instead of trusting `len` upfront.
    fn read_vec(&mut self, len: usize) -> TlResult<Vec<u8>> {
        let start = self.position;
        let mut out = Vec::new();
        Counted::new(&mut self.inner, &mut self.position)
            .take(len as u64)
            .read_to_end(&mut out)?;
        if out.len() < len {
            return Err(self.underrun(start, len));
        }
        Ok(out)
    }

    fn skip(&mut self, len: usize) -> TlResult<()> {
        let start = self.position;
        let got = io::copy(
            &mut Counted::new(&mut self.inner, &mut self.position).take(len as u64),
            &mut io::sink(),
        )?;
        if (got as usize) < len {
            return Err(self.underrun(start, len));
        }
        Ok(())
    }

    fn position(&self) -> usize {
        self.position
    }

    fn remaining_hint(&self) -> Option<usize> {
        None
    }

    fn options(&self) -> &DecodeOptions {
        &self.options
    }
}

/// Adds every byte read through it to `count`, including reads that precede
/// an I/O error
struct Counted<'r, R> {
    inner: &'r mut R,
    count: &'r mut usize,
}

impl<'r, R: Read> Counted<'r, R> {
    fn new(inner: &'r mut R, count: &'r mut usize) -> Self {
        Self { inner, count }
    }
}

impl<R: Read> Read for Counted<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        *self.count += n;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_read_overflow_reports_offset() {
        let buffer = [0xAAu8; 3];
        let mut cursor = Cursor::new(&buffer);
        assert_eq!(cursor.read_bytes(2).expect("2 bytes available"), &[0xAA, 0xAA]);

        let err = cursor.read_bytes(4).unwrap_err();
        match err {
            TlError::StreamUnderrun {
                offset,
                needed,
                available,
            } => {
                assert_eq!(offset, 2);
                assert_eq!(needed, 4);
                assert_eq!(available, Some(1));
            }
            other => panic!("unexpected error {:?}", other),
        }
        // A failed read does not advance.
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_cursor_read_array_and_skip() {
        let buffer = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut cursor = Cursor::new(&buffer);
        assert_eq!(cursor.read_array::<2>().unwrap(), [1, 2]);
        cursor.skip(3).unwrap();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.rest(), &[6, 7, 8]);
        assert_eq!(cursor.remaining_hint(), Some(3));
        assert!(cursor.skip(4).is_err());
        cursor.skip(3).unwrap();
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_zero_length_read_at_eof() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(cursor.read_array::<1>().unwrap_err().is_underrun());
    }

    #[test]
    fn test_stream_reader_reads_and_tracks_position() {
        let data = vec![9u8, 8, 7, 6, 5];
        let mut reader = StreamReader::new(io::Cursor::new(data));
        assert_eq!(reader.read_array::<2>().unwrap(), [9, 8]);
        assert_eq!(reader.read_vec(2).unwrap(), vec![7, 6]);
        assert_eq!(reader.position(), 4);
        assert_eq!(reader.remaining_hint(), None);
    }

    #[test]
    fn test_stream_reader_eof_is_underrun() {
        let mut reader = StreamReader::new(io::Cursor::new(vec![1u8, 2, 3]));
        let err = reader.read_array::<4>().unwrap_err();
        match err {
            TlError::StreamUnderrun {
                offset,
                needed,
                available,
            } => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 4);
                assert_eq!(available, None);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_stream_reader_read_vec_and_skip_short() {
        let mut reader = StreamReader::new(io::Cursor::new(vec![0u8; 6]));
        reader.skip(4).unwrap();
        assert!(reader.read_vec(3).unwrap_err().is_underrun());

        let mut reader = StreamReader::new(io::Cursor::new(vec![0u8; 2]));
        assert!(reader.skip(3).unwrap_err().is_underrun());
    }

    /// Yields `good` bytes one at a time, then fails with `ConnectionReset`
    struct FailAfter {
        good: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.good == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            if buf.is_empty() {
                return Ok(0);
            }
            buf[0] = 0x5A;
            self.good -= 1;
            Ok(1)
        }
    }

    #[test]
    fn test_stream_reader_position_survives_io_error() {
        let mut reader = StreamReader::new(FailAfter { good: 10 });
        let err = reader.read_vec(64).unwrap_err();
        assert!(matches!(err, TlError::Io(_)));
        assert_eq!(reader.position(), 10);

        let mut reader = StreamReader::new(FailAfter { good: 6 });
        let err = reader.skip(64).unwrap_err();
        assert!(matches!(err, TlError::Io(_)));
        assert_eq!(reader.position(), 6);

        let mut reader = StreamReader::new(FailAfter { good: 3 });
        assert!(reader.read_array::<8>().is_err());
        assert_eq!(reader.position(), 3);
    }
}
