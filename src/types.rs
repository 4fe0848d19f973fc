use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Whether a candidate entry is a file or a directory.
///
/// Some exclusion rule kinds only apply to one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathKind {
    File,
    Dir,
}

/// A filesystem entry under evaluation.
///
/// Candidates are built transiently per directory listing and dropped once
/// their inclusion decision is made.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The full path on disk.
    pub path: PathBuf,
    /// The path relative to the scan root, slash-separated.
    pub relative: String,
    /// The final path component.
    pub name: String,
    pub kind: PathKind,
}

impl Candidate {
    pub fn new(path: impl Into<PathBuf>, relative: impl Into<String>, kind: PathKind) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            relative: relative.into(),
            name,
            kind,
        }
    }
}

/// The outcome of one traversal.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TreecatReport {
    /// Number of file frames emitted to the sink.
    pub files_emitted: usize,
    /// Number of matched files that could not be read.
    ///
    /// These are reported inline in the output stream, never as errors.
    pub read_errors: usize,
}

impl TreecatReport {
    /// True once any file has been emitted.
    pub fn found(&self) -> bool {
        self.files_emitted > 0
    }
}

/// Extension helper shared by the type filter and the binary classifier.
pub(crate) fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_string(),
        None => String::new(),
    }
}
