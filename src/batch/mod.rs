//! Batch Walker
//!
//! Converts every raw sample in a directory, or in each subdirectory of the
//! collection root. Files that already carry an 8SVX header are skipped.
//! A file that fails to convert is logged and counted as skipped; it never
//! stops the rest of the batch.

mod summary;

pub use summary::{BatchSummary, DirectorySummary, FileOutcome};

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::{ConvertOptions, WAV_EXTENSION};
use crate::convert::{convert_file, has_8svx_header, validate_sample_rate, Conversion};
use crate::error::{ConvertError, Result};

/// Walks input directories and converts the raw samples found there.
#[derive(Debug, Clone)]
pub struct BatchWalker {
    /// Sample rate written into every output file
    pub sample_rate: u32,

    /// Directory name whose children are converted as separate batches
    pub sentinel_name: String,
}

impl Default for BatchWalker {
    fn default() -> Self {
        Self::new(&ConvertOptions::default())
    }
}

impl BatchWalker {
    /// Create a walker from conversion options
    pub fn new(options: &ConvertOptions) -> Self {
        Self {
            sample_rate: options.sample_rate,
            sentinel_name: options.sentinel_name.clone(),
        }
    }

    /// Create a walker with the default sentinel and a custom sample rate
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        Self::new(&ConvertOptions::with_sample_rate(sample_rate))
    }

    /// Whether `dir` is the collection root
    pub fn is_sentinel(&self, dir: &Path) -> bool {
        dir.file_name()
            .map(|name| name.to_string_lossy() == self.sentinel_name.as_str())
            .unwrap_or(false)
    }

    /// Convert a directory, or each child of the collection root.
    ///
    /// When `input_dir` is named like the sentinel, every immediate
    /// subdirectory becomes its own batch written to
    /// `<output_dir>/<subdirectory name>`. Otherwise `input_dir` is a single
    /// batch written to `output_dir`.
    ///
    /// # Errors
    /// * `InvalidSampleRate` - If the walker's sample rate is zero
    /// * `InputNotFound` - If `input_dir` does not exist
    /// * `NotADirectory` - If `input_dir` is a file
    /// * `Io` - If an output directory cannot be created
    pub fn convert_tree(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
        validate_sample_rate(self.sample_rate)?;
        ensure_directory(input_dir)?;

        let mut summary = BatchSummary::default();

        if self.is_sentinel(input_dir) {
            let subdirs = list_entries(input_dir, EntryKind::Directory);
            debug!(
                "{} is a collection root with {} subdirectories",
                input_dir.display(),
                subdirs.len()
            );

            for subdir in subdirs {
                let name = subdir.file_name().unwrap_or_default();
                let sub_output = output_dir.join(name);
                summary.push(self.convert_directory(&subdir, &sub_output)?);
            }
        } else {
            summary.push(self.convert_directory(input_dir, output_dir)?);
        }

        info!(
            "Total: {} files converted, {} files skipped",
            summary.converted, summary.skipped
        );

        Ok(summary)
    }

    /// Convert every file directly inside `input_dir` into `output_dir`.
    ///
    /// The output directory is created if needed. Each file `name` becomes
    /// `<output_dir>/<name>.wav`. Subdirectories are not entered.
    pub fn convert_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<DirectorySummary> {
        validate_sample_rate(self.sample_rate)?;
        ensure_directory(input_dir)?;
        fs::create_dir_all(output_dir)?;

        let mut summary = DirectorySummary::new(input_dir, output_dir);

        for file in list_entries(input_dir, EntryKind::File) {
            let outcome = self.convert_entry(&file, output_dir);
            summary.record(&outcome);
        }

        info!(
            "Directory {}: {} files converted, {} files skipped",
            input_dir.display(),
            summary.converted,
            summary.skipped
        );

        Ok(summary)
    }

    /// Probe and convert one file, turning every result into an outcome.
    pub fn convert_entry(&self, file: &Path, output_dir: &Path) -> FileOutcome {
        let name = file.file_name().unwrap_or_default().to_string_lossy();

        if has_8svx_header(file) {
            info!("Skipping {} (already has 8SVX header)", name);
            return FileOutcome::Tagged;
        }

        let output = output_path_for(file, output_dir);
        match convert_file(file, &output, self.sample_rate) {
            Ok(Conversion::Converted { frames }) => {
                info!("Converted: {} -> {}", file.display(), output.display());
                FileOutcome::Converted { frames }
            }
            Ok(Conversion::Empty) => {
                warn!("{} is empty, skipping", file.display());
                FileOutcome::Empty
            }
            Err(e) => {
                let code = e.error_code();
                error!("Error converting {}: {:#}", file.display(), anyhow::Error::from(e));
                FileOutcome::Failed { code }
            }
        }
    }
}

/// Output path for `file` inside `output_dir`: `<output_dir>/<file name>.wav`
pub fn output_path_for(file: &Path, output_dir: &Path) -> PathBuf {
    let mut name = file.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(WAV_EXTENSION);
    output_dir.join(name)
}

// ============================================================================
// Internal helper functions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(ConvertError::InputNotFound {
            path: dir.display().to_string(),
        });
    }
    if !dir.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: dir.display().to_string(),
        });
    }
    Ok(())
}

/// Immediate children of `dir` of the given kind, sorted by file name
fn list_entries(dir: &Path, kind: EntryKind) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Cannot read entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| match kind {
            EntryKind::File => entry.file_type().is_file(),
            EntryKind::Directory => entry.file_type().is_dir(),
        })
        .map(|entry| entry.into_path())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
