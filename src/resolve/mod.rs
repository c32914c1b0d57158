//! Prefix path parsing and nested-mapping resolution.
//!
//! [`PrefixPath`] carries the dotted key path supplied on the command line;
//! [`resolve_prefix`] walks (and, in add mode, creates) the nested mappings
//! of a target document down to the merge target.

use serde_json::{Map, Value};

use crate::cli_args::Mode;
use crate::errors::MergeError;


/// Dotted key path identifying the nested insertion point, e.g. `a.b.c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPath {
    raw: String,
    segments: Vec<String>,
}

impl PrefixPath {
    /// Parse a dotted path into its segments.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::InvalidPrefixPath`] when the input is empty or
    /// contains an empty segment (`a..b`, a leading or a trailing `.`).
    pub fn parse(raw: &str) -> Result<Self, MergeError> {
        let segments: Vec<String> = raw.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            return Err(MergeError::InvalidPrefixPath(raw.to_owned()));
        }
        Ok(Self {
            raw: raw.to_owned(),
            segments,
        })
    }

    /// The original dotted form, as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render a key under this prefix in dotted form (`prefix.key`).
    #[must_use]
    pub fn join(&self, key: &str) -> String {
        format!("{}.{key}", self.raw)
    }
}

/// Follow `prefix` down the document and return the innermost mapping.
///
/// In add mode an absent segment is created as an empty object; in update
/// mode it fails the resolution. A segment that is present but not an object
/// fails in either mode. Creation happens in memory only: the caller
/// persists the document strictly after resolution succeeds, so a partial
/// descent never reaches disk.
///
/// # Errors
///
/// Returns [`MergeError::PathNotFound`] for an absent segment in update mode
/// and [`MergeError::PathNotAMapping`] for a present non-object segment.
pub fn resolve_prefix<'a>(
    root: &'a mut Map<String, Value>,
    prefix: &PrefixPath,
    mode: Mode,
) -> Result<&'a mut Map<String, Value>, MergeError> {
    let mut current = root;
    for segment in prefix.segments() {
        let slot = match mode {
            Mode::Add => current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new())),
            Mode::Update => {
                current
                    .get_mut(segment)
                    .ok_or_else(|| MergeError::PathNotFound {
                        prefix: prefix.as_str().to_owned(),
                    })?
            }
        };
        current = match slot {
            Value::Object(next) => next,
            _ => {
                return Err(MergeError::PathNotAMapping {
                    segment: segment.clone(),
                });
            }
        };
    }
    Ok(current)
}
