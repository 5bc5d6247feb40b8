//! Utility functions for the CLI.

use gzmember_decode::GzipHeader;
use indicatif::{ProgressBar, ProgressStyle};
use memmap2::Mmap;
use std::fs::File;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Contents of an input file, memory-mapped when non-empty.
pub enum InputBytes {
    /// Mapped file contents.
    Mapped(Mmap),
    /// Zero-length file (cannot be mapped on every platform).
    Empty,
}

impl Deref for InputBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(map) => map,
            Self::Empty => &[],
        }
    }
}

/// Open `path` read-only and map it.
pub fn read_input(path: &Path) -> io::Result<InputBytes> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(InputBytes::Empty);
    }
    // SAFETY: the map is read-only and only lives for one command; a file
    // truncated underneath us is outside what the CLI guards against.
    let map = unsafe { Mmap::map(&file)? };
    Ok(InputBytes::Mapped(map))
}

/// Output path for a decoded member.
///
/// Uses the stored filename (last path component only, so a crafted name
/// cannot escape the input's directory), else strips `.gz`/`.gzip` from the
/// input, else appends `.out`.
pub fn default_output_path(input: &Path, header: &GzipHeader<'_>) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));

    if let Some(stored) = header.filename_lossy() {
        if let Some(name) = Path::new(stored.as_ref()).file_name() {
            return dir.join(name);
        }
    }

    match input.extension().and_then(|ext| ext.to_str()) {
        Some("gz" | "gzip") => input.with_extension(""),
        _ => {
            let mut name = input.as_os_str().to_owned();
            name.push(".out");
            PathBuf::from(name)
        }
    }
}

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Percentage of `raw` saved by compressing it to `compressed` bytes.
pub fn savings(raw: usize, compressed: usize) -> Option<f64> {
    (raw > 0).then(|| (raw as f64 - compressed as f64) / raw as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_name(name: Option<&'static [u8]>) -> GzipHeader<'static> {
        GzipHeader {
            method: 8,
            flags: 0,
            mtime: 0,
            xfl: 0,
            os: 3,
            extra: None,
            filename: name,
            comment: None,
            header_crc: None,
        }
    }

    #[test]
    fn test_output_from_stored_name() {
        let header = header_with_name(Some(b"../../etc/passwd"));
        assert_eq!(
            default_output_path(Path::new("dl/resp.gz"), &header),
            PathBuf::from("dl/passwd")
        );
    }

    #[test]
    fn test_output_strips_gz() {
        let header = header_with_name(None);
        assert_eq!(
            default_output_path(Path::new("dl/resp.json.gz"), &header),
            PathBuf::from("dl/resp.json")
        );
        assert_eq!(
            default_output_path(Path::new("dl/blob"), &header),
            PathBuf::from("dl/blob.out")
        );
    }

    #[test]
    fn test_savings() {
        assert_eq!(savings(0, 20), None);
        assert_eq!(savings(100, 25), Some(75.0));
    }
}
