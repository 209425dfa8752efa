//! File-backed cache of resolved verse text.
//!
//! Entries are never evicted. Each insertion rewrites the whole cache file.

use crate::persist;
use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the cache inside the data directory
pub const CACHE_FILE: &str = "verse_cache.json";

pub struct VerseCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl VerseCache {
    /// Load the cache from `path`
    ///
    /// A missing or corrupt file yields an empty cache.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = persist::read_json(&path, "verse cache").unwrap_or_default();
        Self { path, entries }
    }

    /// Cache that lives at `<data_dir>/verse_cache.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::load(data_dir.join(CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `text` under `key` and persist the whole cache
    ///
    /// The entry stays in memory even if writing the file fails.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Result<()> {
        self.entries.insert(key.into(), text.into());
        self.save()
    }

    pub fn save(&self) -> Result<()> {
        persist::write_json(&self.path, &self.entries)
    }
}
