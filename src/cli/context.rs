use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static SIGNET_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the process-wide signet home directory.
///
/// Priority: the `--home` flag (or `SIGNET_HOME`), then the platform
/// data directory, then `.signet` in the working directory.
pub fn init(custom: Option<&str>) {
    let dir = custom.map(PathBuf::from).unwrap_or_else(default_dir);
    let _ = SIGNET_DIR.set(dir);
}

/// Get the current signet home directory.
pub fn signet_dir() -> &'static Path {
    SIGNET_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(".signet"))
}

fn default_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("signet"))
        .unwrap_or_else(|| PathBuf::from(".signet"))
}
