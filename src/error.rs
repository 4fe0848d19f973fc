use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreecatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read directory {0}")]
    InvalidRoot(String),
}
impl TreecatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreecatError::Io {
            path: path.into(),
            source,
        }
    }
}
