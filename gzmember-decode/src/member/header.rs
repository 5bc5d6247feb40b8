//! GZIP member header parsing.

use super::trailer::GzipTrailer;
use gzmember_core::{Crc32, DecodeError, GzipField, Result};
use std::borrow::Cow;

/// GZIP magic bytes.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// GZIP compression method: DEFLATE.
pub const CM_DEFLATE: u8 = 8;

/// Length of the fixed part of the header.
pub const FIXED_HEADER_LEN: usize = 10;

/// Smallest possible member: fixed header plus trailer.
pub const MIN_MEMBER_LEN: usize = FIXED_HEADER_LEN + GzipTrailer::LEN;

/// GZIP header flags.
pub mod flags {
    /// Payload is probably text.
    pub const FTEXT: u8 = 0x01;
    /// Header CRC present.
    pub const FHCRC: u8 = 0x02;
    /// Extra field present.
    pub const FEXTRA: u8 = 0x04;
    /// Original filename present.
    pub const FNAME: u8 = 0x08;
    /// Comment present.
    pub const FCOMMENT: u8 = 0x10;
    /// Every defined bit; anything else is reserved.
    pub const DEFINED: u8 = FTEXT | FHCRC | FEXTRA | FNAME | FCOMMENT;
}

/// Parsed GZIP member header.
///
/// Optional fields borrow from the member buffer they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GzipHeader<'a> {
    /// Compression method (always 8 once parsed).
    pub method: u8,
    /// Flag byte.
    pub flags: u8,
    /// Modification time (Unix timestamp, 0 if unknown).
    pub mtime: u32,
    /// Extra flags.
    pub xfl: u8,
    /// Operating system byte.
    pub os: u8,
    /// Extra field payload, without its length prefix (FEXTRA).
    pub extra: Option<&'a [u8]>,
    /// Original filename, without terminator (FNAME).
    pub filename: Option<&'a [u8]>,
    /// Comment, without terminator (FCOMMENT).
    pub comment: Option<&'a [u8]>,
    /// Stored header CRC-16 (FHCRC).
    pub header_crc: Option<u16>,
}

impl<'a> GzipHeader<'a> {
    /// Parse and validate the header at the front of `member`.
    ///
    /// Returns the header and its length, i.e. the offset of the compressed
    /// body. Optional fields must end before the 8 trailer bytes.
    pub fn parse(member: &'a [u8]) -> Result<(Self, usize)> {
        if member.len() < MIN_MEMBER_LEN || member[..2] != GZIP_MAGIC {
            return Err(DecodeError::NotGzip);
        }

        let method = member[2];
        if method != CM_DEFLATE {
            return Err(DecodeError::UnsupportedMethod { method });
        }

        let flag_byte = member[3];
        if flag_byte & !flags::DEFINED != 0 {
            return Err(DecodeError::ReservedBitsSet { flags: flag_byte });
        }

        let mtime = u32::from_le_bytes([member[4], member[5], member[6], member[7]]);
        let xfl = member[8];
        let os = member[9];

        let mut cursor = HeaderCursor {
            region: &member[..member.len() - GzipTrailer::LEN],
            pos: FIXED_HEADER_LEN,
        };

        let extra = if flag_byte & flags::FEXTRA != 0 {
            let xlen = cursor.take_u16_le(GzipField::ExtraField)?;
            Some(cursor.take(xlen as usize, GzipField::ExtraField)?)
        } else {
            None
        };

        let filename = if flag_byte & flags::FNAME != 0 {
            Some(cursor.take_zero_terminated(GzipField::Filename)?)
        } else {
            None
        };

        let comment = if flag_byte & flags::FCOMMENT != 0 {
            Some(cursor.take_zero_terminated(GzipField::Comment)?)
        } else {
            None
        };

        let header_crc = if flag_byte & flags::FHCRC != 0 {
            let computed = Crc32::compute(&member[..cursor.pos]) as u16;
            let stored = cursor.take_u16_le(GzipField::HeaderCrc)?;
            if stored != computed {
                return Err(DecodeError::HeaderChecksumMismatch { stored, computed });
            }
            Some(stored)
        } else {
            None
        };

        let header = Self {
            method,
            flags: flag_byte,
            mtime,
            xfl,
            os,
            extra,
            filename,
            comment,
            header_crc,
        };
        Ok((header, cursor.pos))
    }

    /// Whether the FTEXT hint is set.
    pub fn is_text(&self) -> bool {
        self.flags & flags::FTEXT != 0
    }

    /// Original filename decoded as ISO-8859-1.
    pub fn filename_lossy(&self) -> Option<Cow<'a, str>> {
        self.filename.map(latin1)
    }

    /// Comment decoded as ISO-8859-1.
    pub fn comment_lossy(&self) -> Option<Cow<'a, str>> {
        self.comment.map(latin1)
    }

    /// Name of the operating system recorded in the header.
    pub fn os_name(&self) -> &'static str {
        match self.os {
            0 => "FAT",
            1 => "Amiga",
            2 => "VMS",
            3 => "Unix",
            4 => "VM/CMS",
            5 => "Atari TOS",
            6 => "HPFS",
            7 => "Macintosh",
            8 => "Z-System",
            9 => "CP/M",
            10 => "TOPS-20",
            11 => "NTFS",
            12 => "QDOS",
            13 => "Acorn RISCOS",
            _ => "unknown",
        }
    }
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn latin1(bytes: &[u8]) -> Cow<'_, str> {
    if bytes.is_ascii() {
        // ASCII is valid UTF-8 as is.
        Cow::Borrowed(std::str::from_utf8(bytes).unwrap_or_default())
    } else {
        Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
    }
}

/// Read position inside the header region (everything before the trailer).
struct HeaderCursor<'a> {
    region: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn take(&mut self, len: usize, field: GzipField) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.region.len())
            .ok_or(DecodeError::truncated(field))?;
        let bytes = &self.region[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn take_u16_le(&mut self, field: GzipField) -> Result<u16> {
        let bytes = self.take(2, field)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn take_zero_terminated(&mut self, field: GzipField) -> Result<&'a [u8]> {
        let rest = &self.region[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::truncated(field))?;
        self.pos += nul + 1;
        Ok(&rest[..nul])
    }
}
