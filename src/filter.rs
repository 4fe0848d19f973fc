//! Extension-based type filtering.

use crate::binary;
use crate::options::BinaryDetection;
use std::path::Path;

/// Whether a file is excluded by its type.
///
/// The extension is everything after the last `.` of the basename; a file
/// with no dot has the empty extension, which only matches an explicitly
/// listed empty entry in `exclude_types`. Files that survive the extension
/// list are still excluded when binary, unless `include_binary` is set.
pub fn is_type_excluded(
    path: &Path,
    exclude_types: &[String],
    include_binary: bool,
    detection: BinaryDetection,
) -> bool {
    let ext = crate::types::extension_of(path);
    if exclude_types.iter().any(|t| *t == ext) {
        return true;
    }
    !include_binary && binary::is_binary(path, detection)
}
