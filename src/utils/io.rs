// src/utils/io.rs
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Per-user config directory for rust_passgen, created on first use.
/// `None` when the platform has no home directory or creation fails.
pub fn get_app_config_dir() -> Option<PathBuf> {
    let dir = ProjectDirs::from("org", "rustpassgen", "rust_passgen")?
        .config_dir()
        .to_path_buf();

    // Runs before the logger exists, so report on stderr
    match fs::create_dir_all(&dir) {
        Ok(()) => Some(dir),
        Err(e) => {
            eprintln!("⚠️ Cannot use config directory {}: {}", dir.display(), e);
            None
        }
    }
}
