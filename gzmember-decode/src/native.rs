//! `flate2`'s gzip decoder as a [`GzipDecompress`] strategy.

use crate::member::{MIN_MEMBER_LEN, is_gzip};
use flate2::read::GzDecoder;
use gzmember_core::{DecodeError, GzipDecompress, Result};
use std::io::Read;

/// Library gzip primitive (single member).
///
/// Header and trailer problems surface as [`DecodeError::InflateFailed`]
/// since `flate2` reports them as I/O errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeGzip {
    max_output_size: Option<usize>,
}

impl NativeGzip {
    /// Create the decoder without a size cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the decoded size; `None` removes the cap.
    pub fn max_output_size(mut self, limit: Option<usize>) -> Self {
        self.max_output_size = limit;
        self
    }
}

impl GzipDecompress for NativeGzip {
    fn name(&self) -> &'static str {
        "native"
    }

    fn decompress(&self, member: &[u8]) -> Result<Vec<u8>> {
        if member.len() < MIN_MEMBER_LEN || !is_gzip(member) {
            return Err(DecodeError::NotGzip);
        }

        let mut decoder = GzDecoder::new(member);
        let mut output = Vec::new();
        let read = match self.max_output_size {
            Some(limit) => decoder
                .by_ref()
                .take((limit as u64).saturating_add(1))
                .read_to_end(&mut output),
            None => decoder.read_to_end(&mut output),
        };
        read.map_err(|e| DecodeError::inflate_failed(e.to_string()))?;

        match self.max_output_size {
            Some(limit) if output.len() > limit => Err(DecodeError::output_limit(limit)),
            _ => Ok(output),
        }
    }
}
