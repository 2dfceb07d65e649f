//! Raw named-slot backends underneath [`crate::JsonStore`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// A key/value slot store holding one string per key.
pub trait Storage {
    /// Read the value at `key`, or `None` if the slot has never been written.
    fn get_item(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the value at `key`.
    fn set_item(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Slots stored as `<dir>/<key>.json` files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(key);

        // Write atomically so a failed write leaves the previous value intact
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)
    }
}

/// In-memory slots. Reads or writes can be made to fail to simulate an
/// unavailable or full backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The stored value, bypassing failure simulation.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> io::Result<Option<String>> {
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "storage unavailable"));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "quota exceeded"));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
