use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{AtlasError, STORAGE_KEY};
use crate::models::MapCategory;

/// Category → `data:` URL of the user-supplied map image.
pub type Mapping = BTreeMap<MapCategory, String>;

/// Key-value persistence for the custom map mapping.
///
/// Every save rewrites the whole mapping; there are no partial writes.
pub trait MapStore {
    /// Read the persisted mapping, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<Mapping>, AtlasError>;

    fn save(&mut self, mapping: &Mapping) -> Result<(), AtlasError>;
}

/// Serialize `mapping`, refusing payloads larger than `quota` bytes.
fn encode(mapping: &Mapping, quota: Option<usize>) -> Result<String, AtlasError> {
    let json = serde_json::to_string(mapping)?;
    if let Some(quota) = quota {
        if json.len() > quota {
            return Err(AtlasError::QuotaExceeded {
                needed: json.len(),
                quota,
            });
        }
    }
    Ok(json)
}

/// JSON file named after [`STORAGE_KEY`] inside a data directory.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    pub fn new(dir: &Path, quota: Option<usize>) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
            quota,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MapStore for FileStore {
    fn load(&self) -> Result<Option<Mapping>, AtlasError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, mapping: &Mapping) -> Result<(), AtlasError> {
        let json = encode(mapping, self.quota)?;
        write_atomically(&self.path, json.as_bytes())?;
        debug!(path = %self.path.display(), bytes = json.len(), "saved map store");
        Ok(())
    }
}

/// Write `bytes` to a temporary file beside `path`, then rename it into place.
///
/// Readers see either the old file or the new one, never a truncated mix.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), AtlasError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// In-process store holding the serialized mapping.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: Option<String>,
    quota: Option<usize>,
    saves: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Pre-seed the store with raw persisted content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

#[cfg(test)]
impl MapStore for MemoryStore {
    fn load(&self) -> Result<Option<Mapping>, AtlasError> {
        match &self.content {
            Some(content) => Ok(Some(serde_json::from_str(content)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, mapping: &Mapping) -> Result<(), AtlasError> {
        self.content = Some(encode(mapping, self.quota)?);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert(MapCategory::Fri, "data:image/png;base64,AAAA".to_string());
        mapping.insert(MapCategory::HardCm, "data:image/jpeg;base64,BBBB".to_string());
        mapping
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path(), None);
        assert!(store.load().unwrap().is_none());

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert!(store.path().ends_with("manabo_custom_maps.json"));
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::new(&nested, None);
        store.save(&sample()).unwrap();
        assert!(nested.join("manabo_custom_maps.json").exists());
    }

    #[test]
    fn test_persisted_layout_uses_category_keys() {
        let mut store = MemoryStore::new();
        store.save(&sample()).unwrap();
        let json: serde_json::Value = serde_json::from_str(store.content().unwrap()).unwrap();
        assert_eq!(json["FRI"], "data:image/png;base64,AAAA");
        assert_eq!(json["HARD_CM"], "data:image/jpeg;base64,BBBB");
    }

    #[test]
    fn test_quota_rejects_large_mapping() {
        let mut store = MemoryStore::with_quota(16);
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, AtlasError::QuotaExceeded { quota: 16, .. }));
        assert!(store.content().is_none());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_file_store_quota_leaves_previous_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path(), Some(50));
        let mut small = Mapping::new();
        small.insert(MapCategory::Hazard, "data:image/png;base64,AA".to_string());
        store.save(&small).unwrap();

        assert!(store.save(&sample()).is_err());
        assert_eq!(store.load().unwrap(), Some(small));
    }

    #[test]
    fn test_file_store_save_replaces_whole_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path(), None);
        store.save(&sample()).unwrap();

        let mut smaller = Mapping::new();
        smaller.insert(MapCategory::Exposure, "data:image/png;base64,CC".to_string());
        store.save(&smaller).unwrap();
        assert_eq!(store.load().unwrap(), Some(smaller));

        // No temporary siblings are left behind.
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("manabo_custom_maps.json")]);
    }

    #[test]
    fn test_failed_rename_leaves_store_intact() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path(), None);
        store.save(&sample()).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        // A directory in the way makes the final rename fail after the
        // temporary file was fully written.
        let blocked = dir.path().join("blocked");
        std::fs::create_dir_all(blocked.join("inner")).unwrap();
        let err = write_atomically(&blocked, b"{}").unwrap_err();
        assert!(matches!(err, AtlasError::Io(_)));

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_corrupt_content_is_an_error() {
        let store = MemoryStore::with_content("{not json");
        assert!(matches!(store.load(), Err(AtlasError::Serde(_))));
    }
}
