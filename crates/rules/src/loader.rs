//! Filesystem rule loader: discovery, parsing, and multi-file merge.
//!
//! Rule files are named `*.rules.json`. Loading several files is a
//! structural merge: sections concatenate in input-path order with no
//! deduplication or override semantics, participants concatenate, and the
//! first non-empty title wins. A file that fails to read or parse aborts
//! the whole load with an error naming the file; partially loaded files
//! never enter the set.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::schema::{Participant, Purpose, RuleFile, Section};

/// Errors that can occur while loading rule files.
#[derive(Debug, thiserror::Error)]
pub enum RuleFileError {
    /// Filesystem I/O error for a specific rule file.
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse/deserialization error for a specific rule file.
    #[error("failed to parse rule file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Merged, immutable rule set for one search run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    pub title: Option<String>,
    pub participants: Vec<Participant>,
    pub sections: Vec<Section>,
}

impl RuleSet {
    /// Sections carrying the given purpose tag.
    ///
    /// Tag comparison is case-insensitive; wire-level case was already
    /// normalized when [`Purpose`] deserialized.
    pub fn sections_by_purpose(&self, purpose: &Purpose) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| &s.purpose == purpose)
            .collect()
    }

    /// Sections that apply to records from the given provider.
    pub fn sections_for_provider(&self, provider: &str) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.applies_to_provider(provider))
            .collect()
    }
}

/// Parse a single rule file.
pub fn load_file(path: &Path) -> Result<RuleFile, RuleFileError> {
    let contents = fs::read_to_string(path).map_err(|source| RuleFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: RuleFile =
        serde_json::from_str(&contents).map_err(|source| RuleFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), sections = file.sections.len(), "loaded rule file");
    Ok(file)
}

/// Load and merge one or more rule files, in path order.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<RuleSet, RuleFileError> {
    let mut set = RuleSet::default();
    for path in paths {
        let file = load_file(path.as_ref())?;
        if set.title.is_none() {
            set.title = file.title.filter(|t| !t.is_empty());
        }
        set.participants.extend(file.participants);
        set.sections.extend(file.sections);
    }
    Ok(set)
}

/// Find `*.rules.json` files directly under a directory, sorted
/// lexicographically by filename.
pub fn discover(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let is_rule_file = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".rules.json"));
        if is_rule_file {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}
