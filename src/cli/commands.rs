//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI mode.

use std::path::Path;

use log::{error, info};

use crate::batch::{BatchSummary, BatchWalker, FileOutcome};
use crate::convert::{convert_file, has_8svx_header, Conversion};
use crate::error::{ConvertError, Result};

/// Convert a single raw sample file.
///
/// A file that already has an 8SVX header is left alone, and an empty file
/// produces no output. A read or write failure is reported and returned as
/// `FileOutcome::Failed`. Only usage errors come back as `Err`.
pub fn convert_single(input: &Path, output: &Path, sample_rate: u32) -> Result<FileOutcome> {
    info!("Converting file: {}", input.display());

    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.display().to_string(),
        });
    }

    if has_8svx_header(input) {
        println!(
            "File {} already has 8SVX header, skipping conversion",
            input.display()
        );
        return Ok(FileOutcome::Tagged);
    }

    match convert_file(input, output, sample_rate) {
        Ok(Conversion::Converted { frames }) => {
            println!("Converted: {} -> {}", input.display(), output.display());
            println!("Frames: {} @ {} Hz", frames, sample_rate);
            Ok(FileOutcome::Converted { frames })
        }
        Ok(Conversion::Empty) => {
            println!("Warning: {} is empty, skipping...", input.display());
            Ok(FileOutcome::Empty)
        }
        Err(e) if !e.is_fatal() => {
            let code = e.error_code();
            error!("Error converting {}: {:#}", input.display(), anyhow::Error::from(e));
            Ok(FileOutcome::Failed { code })
        }
        Err(e) => Err(e),
    }
}

/// Convert a directory tree and print the summary.
pub fn convert_batch(
    input_dir: &Path,
    output_dir: &Path,
    sample_rate: u32,
    json: bool,
) -> Result<BatchSummary> {
    info!(
        "Batch converting {} into {} at {} Hz",
        input_dir.display(),
        output_dir.display(),
        sample_rate
    );

    let walker = BatchWalker::with_sample_rate(sample_rate);
    let summary = walker.convert_tree(input_dir, output_dir)?;

    if json {
        println!("{}", summary.to_json()?);
    } else {
        print_summary(&summary);
    }

    Ok(summary)
}

fn print_summary(summary: &BatchSummary) {
    for dir in &summary.directories {
        println!(
            "Directory {}: {} files converted, {} files skipped",
            dir.input_dir.display(),
            dir.converted,
            dir.skipped
        );
    }

    println!("{:-<60}", "");
    println!(
        "Total: {} files converted, {} files skipped",
        summary.converted, summary.skipped
    );
    if summary.tagged() > 0 {
        println!("{} files already had an 8SVX header", summary.tagged());
    }
    if summary.failed() > 0 {
        println!("{} files failed, see log for details", summary.failed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_convert_single_missing_input() {
        let dir = tempdir().unwrap();
        let err = convert_single(
            &dir.path().join("Alien"),
            &dir.path().join("Alien.wav"),
            8000,
        )
        .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_convert_single_tagged() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Tagged");
        let output = dir.path().join("Tagged.wav");
        std::fs::write(&input, b"FORM\x00\x00\x00\x108SVX").unwrap();

        let outcome = convert_single(&input, &output, 8000).unwrap();
        assert_eq!(outcome, FileOutcome::Tagged);
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_single_writes_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Alien");
        let output = dir.path().join("Alien.wav");
        std::fs::write(&input, [0x10, 0x20, 0x30]).unwrap();

        let outcome = convert_single(&input, &output, 8000).unwrap();
        assert_eq!(outcome, FileOutcome::Converted { frames: 3 });
        assert!(output.exists());
    }

    #[test]
    fn test_convert_single_write_failure_is_outcome() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Alien");
        let output = dir.path().join("missing_dir").join("Alien.wav");
        std::fs::write(&input, [0x10, 0x20]).unwrap();

        let outcome = convert_single(&input, &output, 8000).unwrap();
        assert_eq!(outcome, FileOutcome::Failed { code: "WRITE_FAILED" });
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_batch_json() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        std::fs::write(input.path().join("Alien"), [0x10]).unwrap();

        let summary = convert_batch(input.path(), output.path(), 8000, true).unwrap();
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped, 0);
    }
}
