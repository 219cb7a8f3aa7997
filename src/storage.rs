//! Durable key-value storage backing the state store.
//!
//! String keys, string values, silent failure. The disk backend keeps one
//! file per key under the platform config directory.

use std::fs;
use std::path::PathBuf;

pub(crate) trait Storage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`. Failures are silently ignored.
    fn set(&mut self, key: &str, value: &str);
    /// Removes the entry for `key`, if present.
    fn remove(&mut self, key: &str);
}

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub(crate) fn storage_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// File-per-key storage rooted at a directory.
pub(crate) struct DiskStorage {
    dir: PathBuf,
}

impl DiskStorage {
    /// Opens storage under `~/.config/fontmix`.
    pub(crate) fn open_default() -> Option<Self> {
        storage_base_dir().map(|base| Self::at(base.join("fontmix")))
    }

    /// Opens storage rooted at an explicit directory.
    pub(crate) fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for DiskStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if fs::create_dir_all(&self.dir).is_err() {
            return;
        }
        let _ = fs::write(self.entry_path(key), value);
    }

    fn remove(&mut self, key: &str) {
        let _ = fs::remove_file(self.entry_path(key));
    }
}

/// In-memory storage used by the test suites.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
    /// Number of `set` calls observed.
    pub(crate) writes: usize,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
