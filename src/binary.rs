//! Binary file classification.
//!
//! A fixed table of known-binary extensions answers without touching the
//! file; everything else gets a bounded content sniff. The sniff is a
//! heuristic and occasionally wrong in both directions; that is accepted.

use crate::options::BinaryDetection;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// Extensions that are binary by definition, no content read needed.
const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "jpg", "jpeg", "png", "gif", "bmp", "ico", "tif", "tiff", "webp",
    // audio
    "mp3", "wav", "ogg", "flac", "m4a", "aac",
    // video
    "mp4", "avi", "mkv", "mov", "wmv", "flv", "webm",
    // archives
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "jar",
    // office documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods",
    // compiled objects and fonts
    "o", "a", "so", "dll", "dylib", "exe", "bin", "class", "pyc", "wasm", "ttf", "otf", "woff",
    "woff2",
];

const SNIFF_LEN: usize = 4096;

/// Returns true when the file should be treated as binary.
///
/// Read failures yield `false` (fail open): classification must never abort
/// a traversal, so an unreadable file passes through to the reader, which
/// reports the error inline.
pub fn is_binary(path: &Path, detection: BinaryDetection) -> bool {
    let ext = crate::types::extension_of(path).to_ascii_lowercase();
    if BINARY_EXTENSIONS.contains(&ext.as_str()) {
        return true;
    }
    if detection == BinaryDetection::None {
        return false;
    }
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut first_chunk = Vec::with_capacity(SNIFF_LEN);
    if file
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut first_chunk)
        .is_err()
    {
        return false;
    }
    match detection {
        BinaryDetection::Simple => first_chunk.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&first_chunk).is_binary(),
        BinaryDetection::None => false,
    }
}
