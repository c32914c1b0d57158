//! Immutable run configuration.
//!
//! Built once from the parsed CLI arguments and passed explicitly into each
//! component; nothing in the pipeline reads process-wide state.

use std::path::PathBuf;

use crate::cli_args::{Cli, Mode};
use crate::errors::MergeError;
use crate::resolve::PrefixPath;

/// Everything a merge run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source of the new-key data.
    pub input_file: PathBuf,
    /// Directory holding the `<lang>.json` files to update.
    pub target_dir: PathBuf,
    /// Nested insertion point inside each target document.
    pub prefix: PrefixPath,
    /// Merge mode.
    pub mode: Mode,
}

impl Config {
    /// Build the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidPrefixPath`] when the dotted path is
    /// empty or contains an empty segment.
    pub fn from_cli(cli: Cli) -> Result<Self, MergeError> {
        let prefix = PrefixPath::parse(&cli.prefix_path)?;
        Ok(Self {
            input_file: cli.input_file,
            target_dir: cli.target_directory,
            prefix,
            mode: cli.action,
        })
    }
}
