use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub const FURNITURE_LABELS_FILE: &str = "furniture_labels";
pub const BLACKLIST_FILE: &str = "blacklist";
pub const STANDALONE_BLACKLIST_FILE: &str = "standalone_blacklist";

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The three word lists that drive candidate filtering.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionaries {
    /// Candidate labels handed to the model, also the substring allowlist.
    pub furniture_labels: Vec<String>,
    /// Rejected when the lowercased candidate equals an entry.
    pub blacklist: Vec<String>,
    /// Rejected when the candidate equals an entry ignoring case.
    pub standalone_blacklist: Vec<String>,
}

impl Dictionaries {
    pub fn new(
        furniture_labels: Vec<String>,
        blacklist: Vec<String>,
        standalone_blacklist: Vec<String>,
    ) -> Self {
        Self {
            furniture_labels,
            blacklist,
            standalone_blacklist,
        }
    }
}

/// Load all three lists from `dir`. Any missing or unreadable file is fatal.
pub fn load_dictionaries(dir: &Path) -> Result<Dictionaries, DictionaryError> {
    let dictionaries = Dictionaries {
        furniture_labels: load_word_list(&dir.join(FURNITURE_LABELS_FILE))?,
        blacklist: load_word_list(&dir.join(BLACKLIST_FILE))?,
        standalone_blacklist: load_word_list(&dir.join(STANDALONE_BLACKLIST_FILE))?,
    };

    info!(
        dir = %dir.display(),
        furniture_labels = dictionaries.furniture_labels.len(),
        blacklist = dictionaries.blacklist.len(),
        standalone_blacklist = dictionaries.standalone_blacklist.len(),
        "Loaded dictionaries"
    );

    Ok(dictionaries)
}

/// Read a UTF-8 file with one term per line, dropping blank lines and
/// surrounding whitespace. Line order is preserved.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, DictionaryError> {
    let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&contents))
}

fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_lists(dir: &Path, labels: &str, blacklist: &str, standalone: &str) {
        fs::write(dir.join(FURNITURE_LABELS_FILE), labels).unwrap();
        fs::write(dir.join(BLACKLIST_FILE), blacklist).unwrap();
        fs::write(dir.join(STANDALONE_BLACKLIST_FILE), standalone).unwrap();
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let parsed = parse_word_list("  chair \n\n\ttable\r\n   \nsofa bed\n");
        assert_eq!(parsed, vec!["chair", "table", "sofa bed"]);
    }

    #[test]
    fn test_load_dictionaries_preserves_line_order() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), "table\nchair\nwardrobe\n", "stool\n", "seat\nset\n");

        let dictionaries = load_dictionaries(dir.path()).unwrap();

        assert_eq!(dictionaries.furniture_labels, vec!["table", "chair", "wardrobe"]);
        assert_eq!(dictionaries.blacklist, vec!["stool"]);
        assert_eq!(dictionaries.standalone_blacklist, vec!["seat", "set"]);
    }

    #[test]
    fn test_empty_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        write_lists(dir.path(), "chair\n", "", "\n\n");

        let dictionaries = load_dictionaries(dir.path()).unwrap();

        assert!(dictionaries.blacklist.is_empty());
        assert!(dictionaries.standalone_blacklist.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FURNITURE_LABELS_FILE), "chair\n").unwrap();

        let err = load_dictionaries(dir.path()).unwrap_err();

        match err {
            DictionaryError::Read { path, source } => {
                assert!(path.ends_with(BLACKLIST_FILE));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
        }
    }

    #[test]
    fn test_shipped_word_lists_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let dictionaries = load_dictionaries(&dir).unwrap();
        assert!(dictionaries.furniture_labels.iter().any(|l| l == "chair"));
        assert!(!dictionaries.blacklist.is_empty());
        assert!(!dictionaries.standalone_blacklist.is_empty());
    }
}
