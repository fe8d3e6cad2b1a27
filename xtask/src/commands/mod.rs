//! Task implementations.

pub mod completions;
pub mod man;

use std::path::PathBuf;

/// Root of the cargo workspace (one level above this crate).
pub fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf()
}
