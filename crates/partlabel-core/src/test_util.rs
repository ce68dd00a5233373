//! Shared helpers for `partlabel-core` unit tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to a fresh store file inside a temporary directory.
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn store_with(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("partition_info.yaml");
    std::fs::write(&path, content).expect("write store file");
    (dir, path)
}
