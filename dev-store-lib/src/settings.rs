//! Where the saved collection lives on disk.
//!
//! Every frontend resolves the data directory through these functions so the
//! same collection is found regardless of how the program was started.

use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const ENV_STORE_DIR: &str = "DEV_STORE_DIR";

/// Platform data directory for the collection: `<data_dir>/dev-store`.
pub fn default_store_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("dev-store")
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `DEV_STORE_DIR`
/// 3. `store.dir` in the config file
/// 4. [`default_store_dir`]
pub fn resolve_store_dir(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = std::env::var_os(ENV_STORE_DIR).filter(|v| !v.is_empty()) {
        return PathBuf::from(p);
    }
    if let Some(p) = load_store_dir() {
        return p;
    }
    default_store_dir()
}

/// Read `store.dir` from the config file, if set.
fn load_store_dir() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(dev_store_itunes::config_path()?).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let dir = doc.get("store")?.get("dir")?.as_str()?;
    if dir.is_empty() {
        None
    } else {
        Some(PathBuf::from(dir))
    }
}
