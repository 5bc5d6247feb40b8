//! Decode command implementation.

use crate::utils::{default_output_path, read_input, savings};
use dialoguer::Confirm;
use filetime::FileTime;
use gzmember_decode::{BodyDecoder, DecodeConfig, GzipHeader, InflateStrategy};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for decoding a member to disk.
pub struct DecodeOptions {
    pub output: Option<PathBuf>,
    pub strategy: InflateStrategy,
    pub max_size: Option<usize>,
    pub force: bool,
}

pub fn cmd_decode(input: &Path, options: &DecodeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;
    let (header, _) = GzipHeader::parse(&raw)?;

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input, &header));

    if output.exists() && !options.force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Skipped {}", output.display());
            return Ok(());
        }
    }

    let mut config = DecodeConfig::new().with_strategy(options.strategy);
    if let Some(limit) = options.max_size {
        config = config.with_max_output_size(limit);
    }
    let decoder = BodyDecoder::new(config);
    let payload = decoder.decompress(&raw)?;

    std::fs::write(&output, &payload)?;
    if header.mtime > 0 {
        filetime::set_file_mtime(&output, FileTime::from_unix_time(header.mtime as i64, 0))?;
    }

    info!(
        input = %input.display(),
        output = %output.display(),
        decoder = decoder.decompressor_name(),
        "decoded member"
    );

    let saved = savings(payload.len(), raw.len())
        .map(|s| format!("{:.1}%", s))
        .unwrap_or_else(|| "N/A".to_string());
    println!(
        "{} -> {} ({} bytes, {} compressed, saved {})",
        input.display(),
        output.display(),
        payload.len(),
        raw.len(),
        saved
    );

    Ok(())
}
