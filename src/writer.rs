//! Target document write-back.
//!
//! Serializes the merged document over its source file with stable
//! formatting: 4-space indentation, non-ASCII characters kept literal, and
//! a trailing newline. The write is a plain overwrite; there is no
//! temp-file-and-rename step, so an interrupted write can leave a partially
//! persisted file.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::MergeError;

/// Serialize `document` and overwrite the file at `path`.
///
/// # Errors
///
/// Returns [`MergeError::Io`] when serialization or the write fails.
pub fn write_document(path: &Path, document: &Value) -> Result<(), MergeError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut ser)
        .map_err(|e| MergeError::Io(e.into()))?;
    buf.push(b'\n');
    fs::write(path, buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_document;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_four_space_indentation_and_trailing_newline() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("en.json");

        write_document(&path, &json!({"app": {"title": "Hi"}})).expect("write");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(
            content,
            "{\n    \"app\": {\n        \"title\": \"Hi\"\n    }\n}\n",
        );
    }

    #[test]
    fn non_ascii_characters_stay_literal() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("tr.json");

        write_document(&path, &json!({"greeting": "Günaydın, dünya 🌍"})).expect("write");

        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.contains("Günaydın, dünya 🌍"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn overwrites_previous_content_entirely() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("en.json");
        fs::write(&path, "{\"stale\": true, \"padding\": \"xxxxxxxxxxxxxxxx\"}")
            .expect("seed file");

        write_document(&path, &json!({"fresh": true})).expect("write");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "{\n    \"fresh\": true\n}\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("absent").join("en.json");

        assert!(write_document(&path, &json!({})).is_err());
    }
}
