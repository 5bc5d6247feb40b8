//! Capabilities the decoder is built from and exposes.
//!
//! [`Inflate`] is the raw DEFLATE (RFC 1951) primitive the member decoder
//! delegates to. [`GzipDecompress`] is what the transport layer consumes: a
//! whole-member GZIP decompressor, implemented both by a library primitive and
//! by the from-scratch member decoder.

use crate::error::Result;

/// Raw DEFLATE decompression.
pub trait Inflate {
    /// Inflate a complete raw DEFLATE stream.
    ///
    /// An empty `input` yields an empty output. When `limit` is set, producing
    /// more than `limit` bytes fails with
    /// [`DecodeError::OutputLimitExceeded`](crate::DecodeError::OutputLimitExceeded).
    fn inflate(&self, input: &[u8], limit: Option<usize>) -> Result<Vec<u8>>;
}

impl<T: Inflate + ?Sized> Inflate for &T {
    fn inflate(&self, input: &[u8], limit: Option<usize>) -> Result<Vec<u8>> {
        (**self).inflate(input, limit)
    }
}

/// Decompression of one complete GZIP member.
pub trait GzipDecompress {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decode `member` into its original payload.
    fn decompress(&self, member: &[u8]) -> Result<Vec<u8>>;
}

impl<T: GzipDecompress + ?Sized> GzipDecompress for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decompress(&self, member: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(member)
    }
}
