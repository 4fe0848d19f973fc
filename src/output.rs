//! Output sink for concatenated file frames.
//!
//! A sink appends either to stdout or to an output file. A file target is
//! truncated once when the sink is created and only appended to afterwards.
//! File content is copied byte-for-byte, never line-transformed.

use crate::error::TreecatError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the concatenated stream goes.
#[derive(Debug)]
pub enum Sink {
    Stdout(io::Stdout),
    File { path: PathBuf, file: File },
}

/// What happened to one matched file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Emitted,
    /// The file could not be read; an inline marker was written instead and
    /// the walk continues.
    ReadError,
}

impl Sink {
    /// Opens the sink. A file target is created if missing and truncated.
    pub fn create(target: Option<&Path>) -> Result<Self, TreecatError> {
        match target {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .truncate(true)
                    .write(true)
                    .open(path)
                    .map_err(|e| TreecatError::io(path, e))?;
                Ok(Sink::File {
                    path: path.to_path_buf(),
                    file,
                })
            }
            None => Ok(Sink::Stdout(io::stdout())),
        }
    }

    /// Appends `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) -> Result<(), TreecatError> {
        match self {
            Sink::Stdout(stdout) => writeln!(stdout.lock(), "{}", text)
                .map_err(|e| TreecatError::io("<stdout>", e)),
            Sink::File { path, file } => {
                writeln!(file, "{}", text).map_err(|e| TreecatError::io(path.as_path(), e))
            }
        }
    }

    /// Appends the raw bytes of `source` verbatim.
    pub fn copy_file(&mut self, source: &mut File) -> io::Result<u64> {
        match self {
            Sink::Stdout(stdout) => io::copy(source, &mut stdout.lock()),
            Sink::File { file, .. } => io::copy(source, file),
        }
    }

    /// Writes one framed file:
    ///
    /// ```text
    /// filename -> <display_path>:
    /// ---
    /// <raw file bytes>
    /// ---
    /// ---
    /// ```
    ///
    /// A file that cannot be opened produces a single inline error line in
    /// place of the frame; a read failure mid-copy produces an inline error
    /// line and the frame is still closed. Neither aborts the run.
    pub fn emit_frame(
        &mut self,
        display_path: &str,
        source: &Path,
    ) -> Result<FrameOutcome, TreecatError> {
        let mut file = match File::open(source) {
            Ok(f) => f,
            Err(e) => {
                self.write_line(&format!("Error reading {}: {}", display_path, e))?;
                return Ok(FrameOutcome::ReadError);
            }
        };
        self.write_line(&format!("filename -> {}:", display_path))?;
        self.write_line("---")?;
        let outcome = match self.copy_file(&mut file) {
            Ok(_) => FrameOutcome::Emitted,
            Err(e) => {
                self.write_line(&format!("Error reading {}: {}", display_path, e))?;
                FrameOutcome::ReadError
            }
        };
        self.write_line("---")?;
        self.write_line("---")?;
        Ok(outcome)
    }
}
