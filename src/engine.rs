use crate::error::TreecatError;
use crate::filter::is_type_excluded;
use crate::matcher::ExcludeMatcher;
use crate::options::TreecatOptions;
use crate::output::{FrameOutcome, Sink};
use crate::types::{Candidate, PathKind, TreecatReport};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

struct Walker<'a> {
    options: &'a TreecatOptions,
    matcher: ExcludeMatcher,
    // Both forms of the output path, so the tool never concatenates its own
    // output file into itself however the path was spelled.
    output_literal: Option<PathBuf>,
    output_resolved: Option<PathBuf>,
}

impl<'a> Walker<'a> {
    fn new(options: &'a TreecatOptions) -> Self {
        let output_literal = options.output.clone();
        let output_resolved = options
            .output
            .as_deref()
            .and_then(|p| fs::canonicalize(p).ok());
        Self {
            options,
            matcher: ExcludeMatcher::new(&options.exclude_patterns),
            output_literal,
            output_resolved,
        }
    }

    fn max_depth(&self) -> usize {
        if self.options.recurse {
            self.options.max_depth
        } else {
            0
        }
    }

    fn name_matches_type(&self, name: &str) -> bool {
        self.options.file_type == "*" || name.ends_with(&format!(".{}", self.options.file_type))
    }

    fn is_output_target(&self, path: &Path) -> bool {
        if self.output_literal.as_deref() == Some(path) {
            return true;
        }
        match (&self.output_resolved, fs::canonicalize(path)) {
            (Some(resolved), Ok(candidate)) => *resolved == candidate,
            _ => false,
        }
    }

    /// One directory node: files first, then subdirectory recursion, both in
    /// the filesystem's natural listing order.
    fn walk_dir(
        &self,
        dir: &Path,
        depth: usize,
        prefix: &str,
        sink: &mut Sink,
        report: &mut TreecatReport,
    ) -> Result<(), TreecatError> {
        #[cfg(feature = "logging")]
        tracing::debug!("scanning {} at depth {}", dir.display(), depth);
        let entries = match fs::read_dir(dir) {
            Ok(iter) => iter,
            Err(_) if depth == 0 => {
                return Err(TreecatError::InvalidRoot(dir.display().to_string()));
            }
            Err(e) => {
                // An unlistable subdirectory is isolated like an unreadable
                // file: marked inline, never fatal.
                sink.write_line(&format!("Error reading {}: {}", prefix.trim_end_matches('/'), e))?;
                report.read_errors += 1;
                return Ok(());
            }
        };
        let mut subdirs: Vec<(PathBuf, String)> = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if file_type.is_dir() {
                subdirs.push((entry.path(), name));
                continue;
            }
            if !file_type.is_file() || !self.name_matches_type(&name) {
                continue;
            }
            let path = entry.path();
            if self.is_output_target(&path) {
                continue;
            }
            if is_type_excluded(
                &path,
                &self.options.exclude_types,
                self.options.include_binary,
                self.options.binary_detection,
            ) {
                #[cfg(feature = "logging")]
                tracing::debug!("type-excluded: {}", path.display());
                continue;
            }
            let candidate = Candidate::new(&path, format!("{}{}", prefix, name), PathKind::File);
            if self.matcher.is_excluded(&candidate) {
                #[cfg(feature = "logging")]
                tracing::debug!("pattern-excluded: {}", candidate.relative);
                continue;
            }
            match sink.emit_frame(&candidate.relative, &path)? {
                FrameOutcome::Emitted => report.files_emitted += 1,
                FrameOutcome::ReadError => report.read_errors += 1,
            }
        }
        if depth >= self.max_depth() {
            return Ok(());
        }
        for (path, name) in subdirs {
            let candidate = Candidate::new(&path, format!("{}{}", prefix, name), PathKind::Dir);
            if self.matcher.is_excluded(&candidate) {
                #[cfg(feature = "logging")]
                tracing::debug!("pattern-excluded dir: {}", candidate.relative);
                continue;
            }
            let child_prefix = format!("{}{}/", prefix, name);
            self.walk_dir(&path, depth + 1, &child_prefix, sink, report)?;
        }
        Ok(())
    }
}

/// Walks `options.root` and writes every matched file through `sink`.
///
/// This is the seam for embedders and tests that want to supply their own
/// sink; [`treecat`] is the common entry point.
pub fn treecat_with_sink(
    options: &TreecatOptions,
    sink: &mut Sink,
) -> Result<TreecatReport, TreecatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("starting treecat with root: {}", options.root.display());
    let walker = Walker::new(options);
    let mut report = TreecatReport::default();
    walker.walk_dir(&options.root, 0, "", sink, &mut report)?;
    Ok(report)
}

/// Opens the configured output target (truncating an output file once) and
/// concatenates every matched file into it.
pub fn treecat(options: &TreecatOptions) -> Result<TreecatReport, TreecatError> {
    let mut sink = Sink::create(options.output.as_deref())?;
    treecat_with_sink(options, &mut sink)
}
