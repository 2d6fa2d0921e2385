//! Store location resolution.
//!
//! The data directory is resolved through the chain: explicit override >
//! `PACER_DATA_DIR` env var > platform data directory > current directory.

use std::path::PathBuf;

/// Resolved location of the on-disk store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Resolve the data directory. `override_dir` wins over everything
    /// (typically a CLI flag or config-file value).
    pub fn resolve(override_dir: Option<PathBuf>) -> Self {
        let data_dir = override_dir
            .or_else(|| std::env::var_os("PACER_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(default_data_dir);
        Self { data_dir }
    }
}

/// Platform data directory for pacer, e.g. `~/.local/share/pacer` on Linux.
/// Falls back to the current directory when no home is available.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pacer")
}
