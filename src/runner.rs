//! Run orchestration.
//!
//! Drives the whole merge: load the input document, scan the target
//! directory, and take each file through path resolution, key merging, and
//! write-back. Fatal preconditions abort before any file is touched;
//! per-file failures are reported and the run moves on to the next file.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::config::Config;
use crate::errors::MergeError;
use crate::input::InputDocument;
use crate::merge::merge_keys;
use crate::report;
use crate::resolve::resolve_prefix;
use crate::scanner::{self, TargetFile};
use crate::writer;

/// Per-run outcome counts, reported in the completion line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files merged and written back.
    pub merged: usize,
    /// Files skipped: no input data, or the prefix path failed to resolve.
    pub skipped: usize,
    /// Files that could not be read, parsed, or written.
    pub failed: usize,
}

enum FileOutcome {
    Merged,
    Skipped,
    Failed,
}

/// Execute a full merge run.
///
/// Progress, warnings, and per-file errors are written to `out` as the run
/// proceeds; the returned summary mirrors what the completion line reports.
///
/// # Errors
///
/// Returns a fatal [`MergeError`] when a precondition fails (missing or
/// invalid input document, missing target directory) or when `out` itself
/// stops accepting writes. Per-file failures never abort the run.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, MergeError> {
    let input = InputDocument::load(&config.input_file)?;
    let files = scanner::scan(&config.target_dir)?;
    report::write_run_banner(&mut *out, &config.target_dir, config.mode)?;

    let mut summary = RunSummary::default();
    for file in &files {
        match process_file(config, &input, file, &mut *out)? {
            FileOutcome::Merged => summary.merged += 1,
            FileOutcome::Skipped => summary.skipped += 1,
            FileOutcome::Failed => summary.failed += 1,
        }
    }
    report::write_completion(&mut *out, &summary)?;
    Ok(summary)
}

/// Take one scanned file through the Skipped | PathFailed | Merged states.
///
/// The document is only persisted after the prefix path fully resolves and
/// the keys are merged; any earlier failure leaves the on-disk file
/// untouched.
fn process_file<W: Write>(
    config: &Config,
    input: &InputDocument,
    file: &TargetFile,
    out: &mut W,
) -> Result<FileOutcome, MergeError> {
    let Some(new_keys) = input.language(&file.lang) else {
        report::write_no_input_data(&mut *out, &file.lang)?;
        return Ok(FileOutcome::Skipped);
    };
    report::write_processing(&mut *out, &file.lang, &file.path)?;

    let mut document = match load_target(&file.path) {
        Ok(document) => document,
        Err(err) => {
            report::write_file_error(&mut *out, &file.path, &err)?;
            return Ok(FileOutcome::Failed);
        }
    };
    let Some(root) = document.as_object_mut() else {
        let err = MergeError::TargetRootNotObject {
            path: file.path.clone(),
        };
        report::write_file_error(&mut *out, &file.path, &err)?;
        return Ok(FileOutcome::Failed);
    };

    let target = match resolve_prefix(root, &config.prefix, config.mode) {
        Ok(target) => target,
        Err(err) => {
            report::write_path_failure(&mut *out, &config.prefix, &err)?;
            return Ok(FileOutcome::Skipped);
        }
    };
    let outcomes = merge_keys(target, new_keys, config.mode);
    report::write_key_outcomes(&mut *out, &config.prefix, &outcomes)?;

    match writer::write_document(&file.path, &document) {
        Ok(()) => {
            report::write_file_updated(&mut *out, &file.path)?;
            Ok(FileOutcome::Merged)
        }
        Err(err) => {
            report::write_file_error(&mut *out, &file.path, &err)?;
            Ok(FileOutcome::Failed)
        }
    }
}

fn load_target(path: &Path) -> Result<Value, MergeError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|_| MergeError::TargetNotValidJson {
        path: path.to_owned(),
    })
}
