//! GZIP member trailer (CRC-32 and ISIZE).

use gzmember_core::{Crc32, DecodeError, Result};

/// The 8 bytes closing every member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipTrailer {
    /// CRC-32 of the uncompressed data.
    pub crc32: u32,
    /// Uncompressed length modulo 2^32.
    pub isize: u32,
}

impl GzipTrailer {
    /// Encoded trailer length.
    pub const LEN: usize = 8;

    /// Read the trailer from the last 8 bytes of `member`.
    pub fn read(member: &[u8]) -> Result<Self> {
        let bytes: &[u8; GzipTrailer::LEN] = member.last_chunk().ok_or(DecodeError::NotGzip)?;
        Ok(Self {
            crc32: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            isize: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        })
    }

    /// Check that `payload` is what the trailer describes.
    pub fn verify(&self, payload: &[u8]) -> Result<()> {
        let computed_crc = Crc32::compute(payload);
        // ISIZE is defined modulo 2^32.
        let actual_size = payload.len() as u32;

        if computed_crc != self.crc32 || actual_size != self.isize {
            return Err(DecodeError::TrailerMismatch {
                stored_crc: self.crc32,
                computed_crc,
                stored_size: self.isize,
                actual_size,
            });
        }
        Ok(())
    }
}
