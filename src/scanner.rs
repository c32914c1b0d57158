//! Target directory scanning.
//!
//! Enumerates the `<lang>.json` files of the target directory and derives
//! each file's language code from its name. The listing is sorted by file
//! name so output and test expectations do not depend on filesystem
//! enumeration order.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::MergeError;

/// One candidate localization file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    /// The file name minus the `.json` suffix, matched case-sensitively
    /// against the input document's top-level keys.
    pub lang: String,
    pub path: PathBuf,
}

/// List the `*.json` files of `dir`, sorted by file name.
///
/// Directories and files without the literal `.json` suffix are ignored.
///
/// # Errors
///
/// Returns [`MergeError::MissingTargetDirectory`] when `dir` does not exist
/// or is not a directory, and [`MergeError::Io`] when the listing itself
/// fails.
pub fn scan(dir: &Path) -> Result<Vec<TargetFile>, MergeError> {
    if !dir.is_dir() {
        return Err(MergeError::MissingTargetDirectory(dir.to_owned()));
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("skipping non-UTF-8 file name in {}", dir.display());
            continue;
        };
        let Some(lang) = name.strip_suffix(".json") else {
            continue;
        };
        files.push(TargetFile {
            lang: lang.to_owned(),
            path: path.clone(),
        });
    }
    files.sort_by(|a, b| a.lang.cmp(&b.lang));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::scan;
    use crate::errors::MergeError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempdir().expect("create temp dir");
        let err = scan(&dir.path().join("absent")).expect_err("missing directory");
        assert!(matches!(err, MergeError::MissingTargetDirectory(_)));
    }

    #[test]
    fn file_path_is_reported_as_missing_directory() {
        let dir = tempdir().expect("create temp dir");
        let file = dir.path().join("en.json");
        fs::write(&file, "{}").expect("write file");
        let err = scan(&file).expect_err("not a directory");
        assert!(matches!(err, MergeError::MissingTargetDirectory(_)));
    }

    #[test]
    fn lists_json_files_sorted_by_name() {
        let dir = tempdir().expect("create temp dir");
        for name in ["fr.json", "de.json", "en.json"] {
            fs::write(dir.path().join(name), "{}").expect("write file");
        }

        let files = scan(dir.path()).expect("scan");
        let langs: Vec<_> = files.iter().map(|f| f.lang.as_str()).collect();
        assert_eq!(langs, ["de", "en", "fr"]);
    }

    #[test]
    fn ignores_other_suffixes_and_directories() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("en.json"), "{}").expect("write file");
        fs::write(dir.path().join("notes.txt"), "").expect("write file");
        fs::write(dir.path().join("en.JSON"), "{}").expect("write file");
        fs::create_dir(dir.path().join("nested.json")).expect("create dir");

        let files = scan(dir.path()).expect("scan");
        let langs: Vec<_> = files.iter().map(|f| f.lang.as_str()).collect();
        assert_eq!(langs, ["en"]);
    }

    #[test]
    fn derives_language_code_from_file_name() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("pt-BR.json"), "{}").expect("write file");

        let files = scan(dir.path()).expect("scan");
        assert_eq!(files.first().map(|f| f.lang.as_str()), Some("pt-BR"));
    }
}
