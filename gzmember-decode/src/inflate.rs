//! Raw DEFLATE (RFC 1951) adapter over `flate2`.

use flate2::{Decompress, FlushDecompress, Status};
use gzmember_core::{DecodeError, Inflate, Result};

/// Output growth step while inflating.
const CHUNK: usize = 32 * 1024;

/// [`Inflate`] implementation driving `flate2`'s low-level decompressor.
///
/// The stream must reach its final block: running out of input first is an
/// error rather than a short read. Bytes after the final block are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flate2Inflater;

impl Inflate for Flate2Inflater {
    fn inflate(&self, input: &[u8], limit: Option<usize>) -> Result<Vec<u8>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut stream = Decompress::new(false);
        let mut output = Vec::with_capacity(initial_capacity(input.len(), limit));

        loop {
            if output.len() == output.capacity() {
                output.reserve(CHUNK);
            }

            let in_before = stream.total_in();
            let out_before = stream.total_out();
            let remaining = input.get(in_before as usize..).unwrap_or_default();

            let status = stream
                .decompress_vec(remaining, &mut output, FlushDecompress::None)
                .map_err(|e| DecodeError::inflate_failed(e.to_string()))?;

            match limit {
                Some(limit) if output.len() > limit => {
                    return Err(DecodeError::output_limit(limit));
                }
                _ => {}
            }

            match status {
                Status::StreamEnd => return Ok(output),
                Status::Ok | Status::BufError => {
                    if stream.total_in() == in_before && stream.total_out() == out_before {
                        return Err(DecodeError::inflate_failed(
                            "deflate stream ends before its final block",
                        ));
                    }
                }
            }
        }
    }
}

fn initial_capacity(input_len: usize, limit: Option<usize>) -> usize {
    let guess = input_len.saturating_mul(4).clamp(256, 8 * CHUNK);
    match limit {
        // One byte past the cap is enough to detect overflow.
        Some(limit) => guess.min(limit.saturating_add(1)),
        None => guess,
    }
}
