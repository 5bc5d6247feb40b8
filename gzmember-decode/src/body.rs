//! Transport-facing decoding of response bodies.
//!
//! A body that starts with the GZIP magic is decoded by the configured
//! [`GzipDecompress`] capability; any other body is passed through untouched.
//! Errors propagate to the caller unchanged and are never retried here.

use crate::config::{DecodeConfig, InflateStrategy};
use crate::member::{MemberDecoder, is_gzip};
use gzmember_core::{GzipDecompress, Result};
use std::fmt;
use tracing::{debug, trace, warn};

/// How a body arrived on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Not gzip encoded; bytes are as received.
    Identity,
    /// Gzip encoded; bytes are the decoded payload.
    Gzip {
        /// Size of the encoded body.
        compressed_size: usize,
    },
}

/// A response body after content decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    /// Decoded bytes.
    pub bytes: Vec<u8>,
    /// Encoding the body arrived in.
    pub encoding: BodyEncoding,
}

impl DecodedBody {
    fn identity(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            encoding: BodyEncoding::Identity,
        }
    }

    /// Length of the decoded content.
    pub fn content_size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the body was gzip encoded.
    pub fn was_compressed(&self) -> bool {
        matches!(self.encoding, BodyEncoding::Gzip { .. })
    }

    /// Percentage of the decoded size saved on the wire.
    ///
    /// `None` for identity bodies and for empty decoded content. Negative when
    /// compression made the body larger.
    pub fn space_savings(&self) -> Option<f64> {
        match self.encoding {
            BodyEncoding::Gzip { compressed_size } if !self.bytes.is_empty() => {
                let raw = self.bytes.len() as f64;
                Some((raw - compressed_size as f64) / raw * 100.0)
            }
            _ => None,
        }
    }

    /// Take the decoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Decodes response bodies with an injected gzip capability.
pub struct BodyDecoder {
    decompressor: Box<dyn GzipDecompress + Send + Sync>,
}

impl BodyDecoder {
    /// Select the gzip capability from `config`.
    ///
    /// The native primitive is preferred; the member decoder is used when
    /// asked for, or when the `native` feature is not compiled in.
    pub fn new(config: DecodeConfig) -> Self {
        let limit = config.max_output_size;
        let decompressor: Box<dyn GzipDecompress + Send + Sync> = match config.strategy {
            #[cfg(feature = "native")]
            InflateStrategy::Native => Box::new(crate::native::NativeGzip::new().max_output_size(limit)),
            #[cfg(not(feature = "native"))]
            InflateStrategy::Native => {
                debug!("native gzip primitive not compiled in, using member decoder");
                Box::new(MemberDecoder::new().max_output_size(limit))
            }
            InflateStrategy::Fallback => Box::new(MemberDecoder::new().max_output_size(limit)),
        };

        debug!(
            strategy = %config.strategy,
            decompressor = decompressor.name(),
            max_output_size = ?limit,
            "selected gzip decompressor"
        );
        Self { decompressor }
    }

    /// Use `decompressor` for every gzip body.
    pub fn with_decompressor<D>(decompressor: D) -> Self
    where
        D: GzipDecompress + Send + Sync + 'static,
    {
        Self {
            decompressor: Box::new(decompressor),
        }
    }

    /// Name of the active gzip capability.
    pub fn decompressor_name(&self) -> &'static str {
        self.decompressor.name()
    }

    /// Decode a buffer already known to hold a GZIP member.
    pub fn decompress(&self, member: &[u8]) -> Result<Vec<u8>> {
        self.decompressor.decompress(member)
    }

    /// Decode `body` if it is gzip encoded, otherwise hand it back as is.
    pub fn decode_body(&self, body: Vec<u8>) -> Result<DecodedBody> {
        if !is_gzip(&body) {
            trace!(len = body.len(), "body not gzip encoded, passing through");
            return Ok(DecodedBody::identity(body));
        }

        let compressed_size = body.len();
        let bytes = self.decompressor.decompress(&body).inspect_err(|e| {
            warn!(
                decompressor = self.decompressor.name(),
                compressed_size,
                error = %e,
                "failed to decode gzip body"
            );
        })?;

        let decoded = DecodedBody {
            bytes,
            encoding: BodyEncoding::Gzip { compressed_size },
        };
        match decoded.space_savings() {
            Some(saved) => debug!(
                raw = decoded.content_size(),
                compressed = compressed_size,
                saved_percent = saved,
                "decoded gzip body"
            ),
            None => debug!(
                raw = 0,
                compressed = compressed_size,
                "decoded gzip body, savings N/A"
            ),
        }
        Ok(decoded)
    }
}

impl Default for BodyDecoder {
    fn default() -> Self {
        Self::new(DecodeConfig::DEFAULT)
    }
}

impl fmt::Debug for BodyDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyDecoder")
            .field("decompressor", &self.decompressor.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gzmember_core::DecodeError;

    /// Stored-block member, built by hand so no encoder is needed.
    fn stored_member(payload: &[u8]) -> Vec<u8> {
        let mut raw = vec![0x1F, 0x8B, 8, 0, 0, 0, 0, 0, 0, 255, 0x01];
        let len = payload.len() as u16;
        raw.extend_from_slice(&len.to_le_bytes());
        raw.extend_from_slice(&(!len).to_le_bytes());
        raw.extend_from_slice(payload);
        raw.extend_from_slice(&gzmember_core::Crc32::compute(payload).to_le_bytes());
        raw.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        raw
    }

    struct Refuse;

    impl GzipDecompress for Refuse {
        fn name(&self) -> &'static str {
            "refuse"
        }

        fn decompress(&self, _member: &[u8]) -> Result<Vec<u8>> {
            Err(DecodeError::inflate_failed("refused"))
        }
    }

    #[test]
    fn test_identity_passthrough() {
        let decoder = BodyDecoder::with_decompressor(Refuse);
        let body = b"{\"status\":true,\"data\":[]}".to_vec();
        let decoded = decoder.decode_body(body.clone()).unwrap();
        assert_eq!(decoded.bytes, body);
        assert_eq!(decoded.encoding, BodyEncoding::Identity);
        assert_eq!(decoded.space_savings(), None);
    }

    #[test]
    fn test_gzip_body_fallback() {
        let decoder = BodyDecoder::new(DecodeConfig::FALLBACK);
        assert_eq!(decoder.decompressor_name(), "member");

        let payload = b"abcdefgh".repeat(8);
        let raw = stored_member(&payload);
        let decoded = decoder.decode_body(raw.clone()).unwrap();
        assert_eq!(decoded.bytes, payload);
        assert_eq!(
            decoded.encoding,
            BodyEncoding::Gzip {
                compressed_size: raw.len()
            }
        );
        assert!(decoded.was_compressed());
        // Stored blocks only add framing, so nothing is saved.
        assert!(decoded.space_savings().unwrap() < 0.0);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_native_preferred() {
        assert_eq!(BodyDecoder::default().decompressor_name(), "native");
    }

    #[test]
    fn test_errors_propagate() {
        let decoder = BodyDecoder::with_decompressor(Refuse);
        assert_eq!(
            decoder.decode_body(stored_member(b"x")),
            Err(DecodeError::inflate_failed("refused"))
        );
    }

    #[test]
    fn test_magic_only_body_is_rejected() {
        let decoder = BodyDecoder::new(DecodeConfig::FALLBACK);
        assert_eq!(
            decoder.decode_body(vec![0x1F, 0x8B, 0x08]),
            Err(DecodeError::NotGzip)
        );
    }

    #[test]
    fn test_empty_payload_has_no_savings() {
        let decoder = BodyDecoder::new(DecodeConfig::FALLBACK);
        let decoded = decoder.decode_body(stored_member(b"")).unwrap();
        assert_eq!(decoded.content_size(), 0);
        assert_eq!(decoded.space_savings(), None);
    }

    #[test]
    fn test_limit_applies_to_both_strategies() {
        let raw = stored_member(&[1u8; 300]);
        for strategy in [InflateStrategy::Native, InflateStrategy::Fallback] {
            let config = DecodeConfig::new()
                .with_strategy(strategy)
                .with_max_output_size(200);
            assert_eq!(
                BodyDecoder::new(config).decode_body(raw.clone()),
                Err(DecodeError::output_limit(200))
            );
        }
    }
}
