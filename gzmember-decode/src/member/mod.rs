//! GZIP member decoding (RFC 1952).
//!
//! A member is a fixed 10-byte header, optional header fields, a raw DEFLATE
//! body and an 8-byte trailer. Decoding validates the header strictly before
//! touching any variable-length field, keeps every optional field inside the
//! region that precedes the trailer, inflates the body and checks the result
//! against the trailer. Any failure aborts the decode with no partial output.
//!
//! Only one member is decoded; bytes of a following member would be treated
//! as part of the body and rejected by the trailer check.
//!
//! ## Example
//!
//! ```rust
//! use flate2::{Compression, GzBuilder};
//! use gzmember_decode::member;
//! use std::io::Write;
//!
//! let mut encoder = GzBuilder::new()
//!     .filename("a.txt")
//!     .write(Vec::new(), Compression::default());
//! encoder.write_all(b"hello").unwrap();
//! let raw = encoder.finish().unwrap();
//!
//! let decoded = member::decode_member(&raw).unwrap();
//! assert_eq!(decoded.header.filename, Some(&b"a.txt"[..]));
//! assert_eq!(decoded.payload, b"hello");
//! ```

mod header;
mod trailer;

pub use header::{CM_DEFLATE, FIXED_HEADER_LEN, GZIP_MAGIC, GzipHeader, MIN_MEMBER_LEN, flags};
pub use trailer::GzipTrailer;

use crate::inflate::Flate2Inflater;
use gzmember_core::{DecodeError, GzipDecompress, GzipField, Inflate, Result};

/// Whether `bytes` starts with the GZIP magic.
///
/// This is the sniff the transport layer performs before handing a body to a
/// decoder; it says nothing about whether the rest is well formed.
#[inline]
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// A decoded member: payload plus the framing it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GzipMember<'a> {
    /// Parsed header; optional fields borrow from the input buffer.
    pub header: GzipHeader<'a>,
    /// Header length, i.e. offset of the compressed body.
    pub header_len: usize,
    /// Verified trailer.
    pub trailer: GzipTrailer,
    /// Decompressed payload.
    pub payload: Vec<u8>,
}

impl GzipMember<'_> {
    /// Length of the compressed body within a member of `member_len` bytes.
    pub fn body_len(&self, member_len: usize) -> usize {
        member_len.saturating_sub(self.header_len + GzipTrailer::LEN)
    }

    /// Drop the framing and keep the payload.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

/// Decoder for single GZIP members over a raw inflate primitive.
#[derive(Debug, Clone, Default)]
pub struct MemberDecoder<I = Flate2Inflater> {
    inflater: I,
    max_output_size: Option<usize>,
}

impl MemberDecoder {
    /// Create a decoder backed by [`Flate2Inflater`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: Inflate> MemberDecoder<I> {
    /// Create a decoder backed by a custom inflate primitive.
    pub fn with_inflater(inflater: I) -> Self {
        Self {
            inflater,
            max_output_size: None,
        }
    }

    /// Cap the decoded size; `None` removes the cap.
    pub fn max_output_size(mut self, limit: Option<usize>) -> Self {
        self.max_output_size = limit;
        self
    }

    /// Decode `raw` and return the payload along with its header and trailer.
    pub fn decode_member<'a>(&self, raw: &'a [u8]) -> Result<GzipMember<'a>> {
        let (header, header_len) = GzipHeader::parse(raw)?;

        // An empty body is allowed through; the trailer decides.
        let body_end = raw.len() - GzipTrailer::LEN;
        let body = raw
            .get(header_len..body_end)
            .ok_or(DecodeError::truncated(GzipField::Body))?;

        let payload = self.inflater.inflate(body, self.max_output_size)?;

        let trailer = GzipTrailer::read(raw)?;
        trailer.verify(&payload)?;

        Ok(GzipMember {
            header,
            header_len,
            trailer,
            payload,
        })
    }

    /// Decode `raw` into its payload.
    pub fn decode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        self.decode_member(raw).map(GzipMember::into_payload)
    }
}

impl<I: Inflate> GzipDecompress for MemberDecoder<I> {
    fn name(&self) -> &'static str {
        "member"
    }

    fn decompress(&self, member: &[u8]) -> Result<Vec<u8>> {
        self.decode(member)
    }
}

/// Decode one GZIP member with the default inflate primitive.
pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
    MemberDecoder::new().decode(raw)
}

/// Decode one GZIP member, keeping its header and trailer.
pub fn decode_member(raw: &[u8]) -> Result<GzipMember<'_>> {
    MemberDecoder::new().decode_member(raw)
}
