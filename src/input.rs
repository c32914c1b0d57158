//! Input document loading and validation.
//!
//! The input document maps language codes to the new-keys object for that
//! language. It is loaded once, validated up front, and read-only
//! afterwards; any failure here aborts the run before a target file is
//! touched.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::MergeError;

/// Validated input document keyed by language code.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct InputDocument(Map<String, Value>);

impl InputDocument {
    /// Load and validate the document at `path`.
    ///
    /// The decode goes through `serde_path_to_error` so a structurally wrong
    /// document reports the JSON path of the offending value, not just a
    /// line/column pair.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MissingInputFile`] when the path does not
    /// exist, [`MergeError::InvalidJson`] when the content is not a JSON
    /// object, [`MergeError::InvalidLanguageEntry`] when a language value is
    /// not itself an object, and [`MergeError::Io`] for any other read
    /// failure.
    pub fn load(path: &Path) -> Result<Self, MergeError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                MergeError::MissingInputFile(path.to_owned())
            } else {
                MergeError::Io(e)
            }
        })?;
        let mut de = serde_json::Deserializer::from_str(&content);
        let doc: Self =
            serde_path_to_error::deserialize(&mut de).map_err(|e| MergeError::InvalidJson {
                path: path.to_owned(),
                message: e.to_string(),
            })?;
        de.end().map_err(|e| MergeError::InvalidJson {
            path: path.to_owned(),
            message: e.to_string(),
        })?;
        for (lang, entry) in &doc.0 {
            if !entry.is_object() {
                return Err(MergeError::InvalidLanguageEntry { lang: lang.clone() });
            }
        }
        Ok(doc)
    }

    /// New-keys mapping for `lang`, if the document has one.
    ///
    /// Matching is case-sensitive and exact; language codes are never
    /// normalized.
    #[must_use]
    pub fn language(&self, lang: &str) -> Option<&Map<String, Value>> {
        self.0.get(lang).and_then(Value::as_object)
    }
}
