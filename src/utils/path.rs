//! Path utilities: resolve the home-relative locations and expand ~.

use std::path::PathBuf;

/// Home directory, or the current directory when it cannot be resolved.
pub fn home_or_current() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return home_or_current();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return home_or_current().join(rest);
    }
    PathBuf::from(path)
}
