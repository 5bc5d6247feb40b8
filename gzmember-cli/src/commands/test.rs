//! Test command implementation.

use crate::utils::{create_progress_bar, read_input};
use gzmember_decode::decode;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::debug;

pub fn cmd_test(inputs: &[PathBuf], progress: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_progress_bar(inputs.len() as u64, progress);

    // Members are independent, so each one is verified on its own thread.
    let results: Vec<(&PathBuf, Result<usize, String>)> = inputs
        .par_iter()
        .map(|path| {
            let outcome = read_input(path)
                .map_err(|e| e.to_string())
                .and_then(|raw| decode(&raw).map(|payload| payload.len()).map_err(|e| e.to_string()));
            debug!(path = %path.display(), ok = outcome.is_ok(), "verified member");
            pb.inc(1);
            (path, outcome)
        })
        .collect();

    pb.finish_and_clear();

    let mut errors: Vec<(&PathBuf, String)> = Vec::new();
    for (path, outcome) in results {
        match outcome {
            Ok(size) => println!("  OK: {} ({} bytes)", path.display(), size),
            Err(e) => {
                println!("  FAILED: {} - {}", path.display(), e);
                errors.push((path, e));
            }
        }
    }

    println!();
    println!("Test results:");
    println!("  Total members: {}", inputs.len());
    println!("  OK: {}", inputs.len() - errors.len());
    println!("  Failed: {}", errors.len());

    if !errors.is_empty() {
        return Err(format!("{} member(s) failed verification", errors.len()).into());
    }

    println!();
    println!("All members OK");
    Ok(())
}
