//! User-visible run output.
//!
//! Every decision the tool takes — add, update, skip, warn, fail — is one
//! human-readable line on standard output. Functions here render to any
//! writer so behaviour can be unit tested without capturing stdout; the
//! `print_fatal` wrapper locks stdout and tolerates a closed pipe.

use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::cli_args::Mode;
use crate::errors::MergeError;
use crate::merge::{KeyAction, KeyOutcome};
use crate::resolve::PrefixPath;
use crate::runner::RunSummary;

/// Write the opening banner for a run.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_run_banner<W: Write>(mut out: W, dir: &Path, mode: Mode) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Updating all JSON files in the '{}' directory... (Action: {mode})",
        dir.display()
    )?;
    writeln!(out)
}

/// Announce that a matched language file is about to be processed.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_processing<W: Write>(mut out: W, lang: &str, path: &Path) -> std::io::Result<()> {
    writeln!(
        out,
        "-> Processing '{lang}' language file: {}",
        path.display()
    )
}

/// Warn that a scanned file has no matching entry in the input document.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_no_input_data<W: Write>(mut out: W, lang: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "Warning: no input data found for '{lang}', skipping file."
    )
}

/// Write one line per merged key, in input order.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_key_outcomes<W: Write>(
    mut out: W,
    prefix: &PrefixPath,
    outcomes: &[KeyOutcome],
) -> std::io::Result<()> {
    for outcome in outcomes {
        let dotted = prefix.join(&outcome.key);
        match outcome.action {
            KeyAction::Added => writeln!(out, "'{dotted}' key added.")?,
            KeyAction::Updated => writeln!(out, "'{dotted}' key updated.")?,
            KeyAction::SkippedExisting => writeln!(
                out,
                "Warning: '{dotted}' key already exists, 'add' operation is being skipped."
            )?,
        }
    }
    Ok(())
}

/// Report a failed prefix resolution for one file.
///
/// A non-object segment gets an error line naming the segment before the
/// skip warning; a merely absent path (update mode) gets the warning alone.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_path_failure<W: Write>(
    mut out: W,
    prefix: &PrefixPath,
    err: &MergeError,
) -> std::io::Result<()> {
    if let MergeError::PathNotAMapping { segment } = err {
        writeln!(
            out,
            "Error: '{segment}' key is not an object. The path '{}' cannot be used.",
            prefix.as_str()
        )?;
    }
    writeln!(
        out,
        "Warning: the path '{}' does not exist or is invalid. Skipping file.",
        prefix.as_str()
    )
}

/// Confirm that a merged document reached disk.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_file_updated<W: Write>(mut out: W, path: &Path) -> std::io::Result<()> {
    writeln!(out, "File successfully updated: {}", path.display())?;
    writeln!(out)
}

/// Report a per-file failure (unreadable, unparseable, or unwritable).
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_file_error<W: Write>(
    mut out: W,
    path: &Path,
    err: &MergeError,
) -> std::io::Result<()> {
    match err {
        MergeError::TargetNotValidJson { .. } => {
            writeln!(out, "Error: '{}' has an invalid JSON format.", path.display())
        }
        MergeError::TargetRootNotObject { .. } => writeln!(
            out,
            "Error: '{}' does not contain a JSON object at the top level.",
            path.display()
        ),
        other => writeln!(
            out,
            "Error: an unexpected error occurred while processing '{}': {other}",
            path.display()
        ),
    }
}

/// Write the closing line; emitted regardless of per-file outcomes.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_completion<W: Write>(mut out: W, summary: &RunSummary) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "All operations completed. ({} updated, {} skipped, {} failed)",
        summary.merged, summary.skipped, summary.failed
    )
}

/// Render a fatal precondition failure.
///
/// # Errors
///
/// Returns an error if writing to the provided output fails.
pub fn write_fatal<W: Write>(mut out: W, err: &MergeError) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")
}

/// Print a fatal precondition failure to stdout.
///
/// Failures and errors are part of the tool's normal output stream, so this
/// goes to stdout rather than stderr.
pub fn print_fatal(err: &MergeError) {
    if let Err(e) = write_fatal(std::io::stdout().lock(), err) {
        if e.kind() == ErrorKind::BrokenPipe {
            return;
        }
        eprintln!("Failed to report error: {e}");
    }
}
