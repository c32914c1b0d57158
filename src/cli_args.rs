//! Command-line argument structures.
//!
//! Isolates the clap derivations so `main.rs` stays focused on runtime
//! logic. The long help documents the input file format, which is the one
//! piece of contract users cannot discover from the flags alone.

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

const INPUT_FORMAT_HELP: &str = r#"INPUT FILE FORMAT:

The input file must be a JSON object with language codes as top-level keys.
Each value is an object holding the keys to merge for that language.

Example:

  {
    "en": {
      "newFeatureTitle": "Exciting New Feature",
      "welcomeMessage": "Welcome to our app! We have a new feature for you.",
      "buttonLabel": "Check it out"
    }
  }

Language codes must match the target file names (e.g. 'en' for 'en.json')."#;

/// Merge mode applied to keys under the prefix path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Insert only keys that are not already present; collisions are kept
    /// as-is and reported. Missing prefix levels are created.
    Add,
    /// Overwrite keys unconditionally. The full prefix path must already
    /// exist in the target document.
    Update,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Update => f.write_str("update"),
        }
    }
}

/// Command-line surface of the tool.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "locmerge",
    about = "Add or update data in all language JSON files within a directory",
    after_long_help = INPUT_FORMAT_HELP
)]
pub struct Cli {
    /// Path to the input JSON document keyed by language code
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Directory containing the <lang>.json files to update
    #[arg(short = 't', long, value_name = "DIR")]
    pub target_directory: PathBuf,
    /// Dotted key path under which new keys are merged (e.g. update.releaseNotes)
    #[arg(short = 'p', long, value_name = "PATH")]
    pub prefix_path: String,
    /// Merge mode
    #[arg(short = 'a', long = "action", value_enum, default_value_t = Mode::Add)]
    pub action: Mode,
}
