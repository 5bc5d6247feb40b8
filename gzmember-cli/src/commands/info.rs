//! Info command implementation.

use crate::utils::{read_input, savings};
use gzmember_decode::{GzipMember, decode_member, member::flags};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON document describing one member.
#[derive(Debug, Serialize, Deserialize)]
struct MemberInfoJson {
    file: String,
    size: usize,
    header_len: usize,
    compressed_size: usize,
    decoded_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    savings: Option<f64>,
    flags: u8,
    text: bool,
    mtime: u32,
    os: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_crc: Option<u16>,
    crc32: u32,
    isize: u32,
}

impl MemberInfoJson {
    fn from_member(file: &Path, size: usize, member: &GzipMember<'_>) -> Self {
        let header = &member.header;
        Self {
            file: file.display().to_string(),
            size,
            header_len: member.header_len,
            compressed_size: member.body_len(size),
            decoded_size: member.payload.len(),
            savings: savings(member.payload.len(), size),
            flags: header.flags,
            text: header.is_text(),
            mtime: header.mtime,
            os: header.os_name().to_string(),
            filename: header.filename_lossy().map(|s| s.into_owned()),
            comment: header.comment_lossy().map(|s| s.into_owned()),
            extra_len: header.extra.map(<[u8]>::len),
            header_crc: header.header_crc,
            crc32: member.trailer.crc32,
            isize: member.trailer.isize,
        }
    }
}

fn flag_names(flag_byte: u8) -> String {
    let names: Vec<&str> = [
        (flags::FTEXT, "FTEXT"),
        (flags::FHCRC, "FHCRC"),
        (flags::FEXTRA, "FEXTRA"),
        (flags::FNAME, "FNAME"),
        (flags::FCOMMENT, "FCOMMENT"),
    ]
    .into_iter()
    .filter(|(bit, _)| flag_byte & bit != 0)
    .map(|(_, name)| name)
    .collect();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" ")
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;
    let member = decode_member(&raw)?;
    let info = MemberInfoJson::from_member(input, raw.len(), &member);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("GZIP Member Information");
    println!("=======================");
    println!("File: {}", info.file);
    println!("Size: {} bytes", info.size);
    println!();
    println!("Header:");
    println!("  Length: {} bytes", info.header_len);
    println!("  Flags: {}", flag_names(info.flags));
    if info.mtime > 0 {
        println!("  Modification time: {} (Unix timestamp)", info.mtime);
    }
    println!("  OS: {}", info.os);
    if let Some(name) = &info.filename {
        println!("  Original filename: {}", name);
    }
    if let Some(comment) = &info.comment {
        println!("  Comment: {}", comment);
    }
    if let Some(len) = info.extra_len {
        println!("  Extra field: {} bytes", len);
    }
    if let Some(crc) = info.header_crc {
        println!("  Header CRC: {:#06x}", crc);
    }
    println!();
    println!("Trailer:");
    println!("  CRC-32: {:#010x}", info.crc32);
    println!("  Original size: {} bytes", info.isize);
    println!();
    println!("Contents:");
    println!("  Compressed body: {} bytes", info.compressed_size);
    println!("  Decoded size: {} bytes", info.decoded_size);
    if let Some(saved) = info.savings {
        println!("  Space saved: {:.1}%", saved);
    }

    Ok(())
}
