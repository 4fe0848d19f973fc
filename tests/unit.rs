use std::fs;
use std::path::Path;
use tempfile::tempdir;
use treecat::{BinaryDetection, Candidate, ExcludeMatcher, PathKind, is_binary, is_type_excluded};

fn file(rel: &str) -> Candidate {
    Candidate::new(rel, rel, PathKind::File)
}
fn dir(rel: &str) -> Candidate {
    Candidate::new(rel, rel, PathKind::Dir)
}
fn matcher(patterns: &[&str]) -> ExcludeMatcher {
    let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
    ExcludeMatcher::new(&owned)
}

#[test]
fn bare_name_matches_basename_at_any_depth() {
    let m = matcher(&["config.json"]);
    assert!(m.is_excluded(&file("config.json")));
    assert!(m.is_excluded(&file("deep/nested/config.json")));
    assert!(!m.is_excluded(&file("myconfig.json")));
    assert!(!m.is_excluded(&file("config.json.bak")));
}

#[test]
fn relative_path_matches_exactly() {
    let m = matcher(&["path/to/dir"]);
    assert!(m.is_excluded(&dir("path/to/dir")));
    assert!(!m.is_excluded(&dir("other/path/to/dir")));
    assert!(!m.is_excluded(&dir("dir")));
}

#[test]
fn glob_matches_file_basenames_only() {
    let m = matcher(&["*.log"]);
    assert!(m.is_excluded(&file("debug.log")));
    assert!(m.is_excluded(&file("sub/debug.log")));
    assert!(!m.is_excluded(&dir("archive.log")));
    assert!(!m.is_excluded(&file("debug.logs")));
}

#[test]
fn children_pattern_matches_immediate_children_only() {
    let m = matcher(&["dirA/*"]);
    assert!(m.is_excluded(&file("dirA/a.txt")));
    assert!(m.is_excluded(&dir("dirA/sub")));
    assert!(!m.is_excluded(&dir("dirA")));
    assert!(!m.is_excluded(&file("dirA/sub/b.txt")));
    assert!(!m.is_excluded(&file("dirAx/a.txt")));
}

#[test]
fn subtree_pattern_matches_base_and_descendants() {
    let m = matcher(&["dirA/**"]);
    assert!(m.is_excluded(&dir("dirA")));
    assert!(m.is_excluded(&file("dirA/x.txt")));
    assert!(m.is_excluded(&file("dirA/deep/down/y.txt")));
    assert!(!m.is_excluded(&dir("dirB")));
    assert!(!m.is_excluded(&file("dirAx/y.txt")));
}

#[test]
fn negation_reincludes_subtree_and_its_ancestors() {
    let m = matcher(&["dirA/**", "!dirA/sub"]);
    assert!(!m.is_excluded(&dir("dirA")));
    assert!(!m.is_excluded(&dir("dirA/sub")));
    assert!(!m.is_excluded(&file("dirA/sub/kept.txt")));
    assert!(m.is_excluded(&file("dirA/dropped.txt")));
    assert!(m.is_excluded(&dir("dirA/other")));
}

#[test]
fn later_pattern_reexcludes_after_negation() {
    let m = matcher(&["dirA/**", "!dirA/sub", "dirA/sub/secret.txt"]);
    assert!(!m.is_excluded(&file("dirA/sub/kept.txt")));
    assert!(m.is_excluded(&file("dirA/sub/secret.txt")));
}

#[test]
fn pattern_order_decides_the_verdict() {
    let early_negate = matcher(&["!dirA/sub", "dirA/**"]);
    assert!(early_negate.is_excluded(&file("dirA/sub/x.txt")));
    let late_negate = matcher(&["dirA/**", "!dirA/sub"]);
    assert!(!late_negate.is_excluded(&file("dirA/sub/x.txt")));
}

#[test]
fn malformed_glob_never_matches() {
    let m = matcher(&["*["]);
    assert!(!m.is_excluded(&file("anything.txt")));
    assert!(!m.is_excluded(&file("*[")));
}

#[test]
fn type_filter_uses_last_dot_extension() {
    let dir = tempdir().unwrap();
    let tarball = dir.path().join("archive.tar.gz");
    fs::write(&tarball, "data").unwrap();
    let excluded = vec!["gz".to_string()];
    assert!(is_type_excluded(
        &tarball,
        &excluded,
        true,
        BinaryDetection::Simple
    ));
    let tar = dir.path().join("archive.tar");
    fs::write(&tar, "data").unwrap();
    assert!(!is_type_excluded(
        &tar,
        &excluded,
        true,
        BinaryDetection::Simple
    ));
}

#[test]
fn dotless_file_has_empty_extension() {
    let dir = tempdir().unwrap();
    let readme = dir.path().join("README");
    fs::write(&readme, "hello").unwrap();
    assert!(!is_type_excluded(
        &readme,
        &["txt".to_string()],
        true,
        BinaryDetection::Simple
    ));
    assert!(is_type_excluded(
        &readme,
        &[String::new()],
        true,
        BinaryDetection::Simple
    ));
}

#[test]
fn type_filter_drops_binary_unless_included() {
    let dir = tempdir().unwrap();
    let blob = dir.path().join("blob.dat");
    fs::write(&blob, [0u8, 1, 2, 3]).unwrap();
    assert!(is_type_excluded(
        &blob,
        &[],
        false,
        BinaryDetection::Simple
    ));
    assert!(!is_type_excluded(&blob, &[], true, BinaryDetection::Simple));
}

#[test]
fn binary_extension_table_short_circuits() {
    // Content is plain text, but the extension alone classifies it.
    let dir = tempdir().unwrap();
    let fake_png = dir.path().join("image.png");
    fs::write(&fake_png, "not really an image").unwrap();
    assert!(is_binary(&fake_png, BinaryDetection::Simple));
    assert!(is_binary(&fake_png, BinaryDetection::None));
}

#[test]
fn nul_byte_marks_binary() {
    let dir = tempdir().unwrap();
    let blob = dir.path().join("blob.dat");
    fs::write(&blob, b"text\0more").unwrap();
    assert!(is_binary(&blob, BinaryDetection::Simple));
    let text = dir.path().join("plain.dat");
    fs::write(&text, "just text").unwrap();
    assert!(!is_binary(&text, BinaryDetection::Simple));
}

#[test]
fn unreadable_file_fails_open() {
    assert!(!is_binary(
        Path::new("/nonexistent/never/here.dat"),
        BinaryDetection::Simple
    ));
}
