use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::Storage;

/// JSON values in named slots, best effort.
///
/// Neither direction reports failure to the caller: a slot that can't be read
/// or decoded yields the supplied default, and a failed write keeps the prior
/// value. Both log a warning.
#[derive(Debug)]
pub struct JsonStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                log::warn!("Error reading storage key \u{201c}{}\u{201d}: {}", key, e);
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Discarding unreadable value for storage key \u{201c}{}\u{201d}: {}", key, e);
                default
            }
        }
    }

    pub fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Error encoding value for storage key \u{201c}{}\u{201d}: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(key, &json) {
            log::warn!("Error writing storage key \u{201c}{}\u{201d}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn missing_slot_yields_default() {
        let store = JsonStore::new(MemoryStorage::new());
        assert_eq!(store.read("nums", vec![7u32]), vec![7]);
    }

    #[test]
    fn corrupt_slot_yields_default() {
        let store = JsonStore::new(MemoryStorage::new().with_item("nums", "[1, 2,"));
        assert_eq!(store.read::<Vec<u32>>("nums", Vec::new()), Vec::<u32>::new());
    }

    #[test]
    fn wrong_shape_yields_default() {
        let store = JsonStore::new(MemoryStorage::new().with_item("nums", "{\"a\":1}"));
        assert_eq!(store.read::<Vec<u32>>("nums", vec![0]), vec![0]);
    }

    #[test]
    fn unreadable_storage_yields_default() {
        let mut storage = MemoryStorage::new().with_item("nums", "[1]");
        storage.set_fail_reads(true);
        let store = JsonStore::new(storage);
        assert_eq!(store.read::<Vec<u32>>("nums", Vec::new()), Vec::<u32>::new());
    }

    #[test]
    fn write_then_read() {
        let mut store = JsonStore::new(MemoryStorage::new());
        store.write("nums", &[3u32, 4]);
        assert_eq!(store.read::<Vec<u32>>("nums", Vec::new()), vec![3, 4]);
    }

    #[test]
    fn failed_write_keeps_previous_value() {
        let mut store = JsonStore::new(MemoryStorage::new());
        store.write("nums", &[1u32]);
        store.storage_mut().set_fail_writes(true);
        store.write("nums", &[2u32]);
        assert_eq!(store.storage().raw("nums"), Some("[1]"));
    }
}
