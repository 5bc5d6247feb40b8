//! Error types for GZIP member decoding.
//!
//! Every failure is local and deterministic: malformed input never becomes
//! valid on retry, and no variant carries a partial payload.

use std::fmt;
use thiserror::Error;

/// Variable-length region of a GZIP member that can run past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GzipField {
    /// Length-prefixed extra field (FEXTRA).
    ExtraField,
    /// Zero-terminated original filename (FNAME).
    Filename,
    /// Zero-terminated comment (FCOMMENT).
    Comment,
    /// Two-byte header checksum (FHCRC).
    HeaderCrc,
    /// Compressed body between header and trailer.
    Body,
}

impl fmt::Display for GzipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ExtraField => "extra field",
            Self::Filename => "filename",
            Self::Comment => "comment",
            Self::HeaderCrc => "header CRC",
            Self::Body => "compressed body",
        };
        f.write_str(name)
    }
}

/// Why a buffer could not be decoded as a GZIP member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Missing `1F 8B` magic, or a buffer shorter than the 18-byte minimum.
    #[error("Not GZIP data: missing magic bytes or shorter than a minimal member")]
    NotGzip,

    /// Compression method other than DEFLATE.
    #[error("Unsupported compression method: {method}")]
    UnsupportedMethod {
        /// Method byte found at offset 2.
        method: u8,
    },

    /// Flag byte has bits outside FTEXT, FHCRC, FEXTRA, FNAME and FCOMMENT.
    #[error("Reserved flag bits set: {flags:#04x}")]
    ReservedBitsSet {
        /// Flag byte found at offset 3.
        flags: u8,
    },

    /// A variable-length field extends into the trailer or past the buffer.
    #[error("Truncated member: {field} runs past the end of the header region")]
    Truncated {
        /// Field that did not fit.
        field: GzipField,
    },

    /// Stored header CRC-16 differs from the computed one.
    #[error("Header CRC mismatch: stored {stored:#06x}, computed {computed:#06x}")]
    HeaderChecksumMismatch {
        /// Value stored in the header.
        stored: u16,
        /// Low 16 bits of the CRC-32 over the preceding header bytes.
        computed: u16,
    },

    /// The DEFLATE stream itself is malformed.
    #[error("Inflate failed: {message}")]
    InflateFailed {
        /// Detail reported by the inflate primitive.
        message: String,
    },

    /// Decoded size or CRC-32 disagrees with the trailer.
    #[error(
        "Trailer mismatch: stored crc {stored_crc:#010x} size {stored_size}, \
         computed crc {computed_crc:#010x} size {actual_size}"
    )]
    TrailerMismatch {
        /// CRC-32 recorded in the trailer.
        stored_crc: u32,
        /// CRC-32 of the inflated output.
        computed_crc: u32,
        /// Original size (mod 2^32) recorded in the trailer.
        stored_size: u32,
        /// Inflated length mod 2^32.
        actual_size: u32,
    },

    /// Inflated output grew beyond the configured cap.
    #[error("Decoded output exceeds limit of {limit} bytes")]
    OutputLimitExceeded {
        /// Configured maximum decoded size.
        limit: usize,
    },
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {
    /// Create a truncation error for `field`.
    pub fn truncated(field: GzipField) -> Self {
        Self::Truncated { field }
    }

    /// Create an inflate failure carrying the primitive's detail.
    pub fn inflate_failed(message: impl Into<String>) -> Self {
        Self::InflateFailed {
            message: message.into(),
        }
    }

    /// Create an output limit error.
    pub fn output_limit(limit: usize) -> Self {
        Self::OutputLimitExceeded { limit }
    }

    /// Whether the error is caused by the input bytes themselves.
    ///
    /// Only [`DecodeError::OutputLimitExceeded`] depends on caller policy.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::OutputLimitExceeded { .. })
    }
}
