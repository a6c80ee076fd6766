//! Parsed base cache
//!
//! Keeps the records parsed from a base file keyed by the SHA-256 of the
//! file contents, so an unchanged file is not parsed again.

use crate::error::Result;
use descritivo_common::Record;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::warn;

const CACHE_FILE_NAME: &str = "tables-cache.json";

/// Cache file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCache {
    /// Layout version; other versions are discarded on load
    version: u32,
    /// Content fingerprint -> parsed table
    entries: HashMap<String, CachedTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedTable {
    /// Canonical path of the source file
    pub source: String,
    pub file_name: String,
    pub file_size: u64,
    pub records: Vec<Record>,
}

impl TableCache {
    const CURRENT_VERSION: u32 = 2;

    /// Per-user cache directory
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("descritivo-funcao"))
    }

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CACHE_FILE_NAME)
    }

    /// Load the cache, falling back to an empty one when missing or unreadable
    pub fn load(dir: &Path) -> Self {
        let cache_path = Self::cache_path(dir);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %cache_path.display(), error = %e, "cache ilegível, ignorado");
                return Self::default();
            }
        };

        match serde_json::from_reader::<_, TableCache>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(cache) => {
                warn!(found = cache.version, "versão de cache diferente, recriando");
                Self::default()
            }
            Err(e) => {
                warn!(path = %cache_path.display(), error = %e, "cache corrompido, recriando");
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let file = File::create(Self::cache_path(dir))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn get(&self, fingerprint: &str) -> Option<&CachedTable> {
        self.entries.get(fingerprint)
    }

    /// Add a parsed table, replacing older entries for the same source file
    pub fn insert(&mut self, fingerprint: String, table: CachedTable) {
        self.entries.retain(|_, entry| entry.source != table.source);
        self.entries.insert(fingerprint, table);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached file names with their record counts, sorted by name
    pub fn summary(&self) -> Vec<(&str, usize)> {
        let mut items: Vec<(&str, usize)> = self
            .entries
            .values()
            .map(|e| (e.file_name.as_str(), e.records.len()))
            .collect();
        items.sort();
        items
    }

    /// Delete the cache file; `Ok(false)` when there was none
    pub fn clear(dir: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(dir);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// SHA-256 hex digest of the file contents
pub fn fingerprint(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn table(source: &str, names: &[&str]) -> CachedTable {
        CachedTable {
            source: source.to_string(),
            file_name: source.rsplit('/').next().unwrap_or_default().to_string(),
            file_size: 10,
            records: names
                .iter()
                .map(|n| Record::new(*n, "0000-00", vec![]).unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = fingerprint(b"Fun\xc3\xa7\xc3\xa3o,CBO,Atividades\n");
        let b = fingerprint(b"Fun\xc3\xa7\xc3\xa3o,CBO,Atividades\n");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, fingerprint(b"other"));
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempdir().unwrap();
        let cache = TableCache::load(dir.path());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut cache = TableCache::default();
        cache.insert("abc".into(), table("/dados/base.csv", &["Enfermeiro"]));
        cache.save(dir.path()).unwrap();

        let loaded = TableCache::load(dir.path());
        assert_eq!(loaded.len(), 1);
        let entry = loaded.get("abc").unwrap();
        assert_eq!(entry.source, "/dados/base.csv");
        assert_eq!(entry.file_name, "base.csv");
        assert_eq!(entry.records[0].name(), "Enfermeiro");
    }

    #[test]
    fn test_insert_replaces_same_file() {
        let mut cache = TableCache::default();
        cache.insert("v1".into(), table("/dados/base.csv", &["A"]));
        cache.insert("other".into(), table("/dados/outra.csv", &["B"]));
        cache.insert("v2".into(), table("/dados/base.csv", &["A", "C"]));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("v1").is_none());
        assert_eq!(cache.summary(), vec![("base.csv", 2), ("outra.csv", 1)]);
    }

    #[test]
    fn test_same_name_in_other_directory_is_kept() {
        let mut cache = TableCache::default();
        cache.insert("a".into(), table("/rh/base.csv", &["A"]));
        cache.insert("b".into(), table("/saude/base.csv", &["B"]));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_some());
        assert_eq!(cache.summary(), vec![("base.csv", 1), ("base.csv", 1)]);
    }

    #[test]
    fn test_corrupt_cache_is_discarded() {
        let dir = tempdir().unwrap();
        std::fs::write(TableCache::cache_path(dir.path()), "{ not json").unwrap();
        assert!(TableCache::load(dir.path()).is_empty());
    }

    #[test]
    fn test_version_mismatch_is_discarded() {
        let dir = tempdir().unwrap();
        std::fs::write(
            TableCache::cache_path(dir.path()),
            r#"{"version":99,"entries":{}}"#,
        )
        .unwrap();
        assert!(TableCache::load(dir.path()).is_empty());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        assert!(!TableCache::clear(dir.path()).unwrap());

        TableCache::default().save(dir.path()).unwrap();
        assert!(TableCache::clear(dir.path()).unwrap());
        assert!(!TableCache::cache_path(dir.path()).exists());
    }
}
