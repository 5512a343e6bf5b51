use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::store::{MapStore, Mapping};
use super::AtlasError;
use crate::models::MapCategory;

/// Where a category's map image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapImage {
    /// A `data:` URL for custom maps, otherwise the default asset path with
    /// a `?t=<n>` cache-busting suffix.
    pub source: String,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    /// A user-supplied image is in use.
    Custom,
    /// The default asset loaded.
    SystemLoaded,
    /// The default asset could not be found.
    Missing,
}

impl std::fmt::Display for MapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapStatus::Custom => write!(f, "Using Custom Map (local storage)"),
            MapStatus::SystemLoaded => write!(f, "System Map Loaded"),
            MapStatus::Missing => write!(f, "Map file missing"),
        }
    }
}

/// Result of persisting after an upload.
#[derive(Debug)]
pub enum Persistence {
    Saved,
    /// The image is usable for the rest of this session but could not be
    /// written to the store.
    SessionOnly(AtlasError),
}

impl Persistence {
    #[cfg(test)]
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }
}

/// Custom map images layered over the default static assets.
///
/// Load failures of default assets are tracked per category, separately from
/// the persisted mapping, and are never written to the store.
pub struct ImageCache<S: MapStore> {
    store: S,
    images: Mapping,
    load_errors: BTreeSet<MapCategory>,
    retry_token: u32,
}

impl<S: MapStore> ImageCache<S> {
    /// Load the persisted mapping. An unreadable store is logged and treated
    /// as empty.
    pub fn open(store: S) -> Self {
        let images = match store.load() {
            Ok(Some(images)) => images,
            Ok(None) => Mapping::new(),
            Err(e) => {
                warn!(error = %e, "failed to load custom maps, starting empty");
                Mapping::new()
            }
        };

        Self {
            store,
            images,
            load_errors: BTreeSet::new(),
            retry_token: 0,
        }
    }

    pub fn get(&self, category: MapCategory) -> MapImage {
        match self.images.get(&category) {
            Some(blob) => MapImage {
                source: blob.clone(),
                is_custom: true,
            },
            None => MapImage {
                source: format!("{}?t={}", category.image_path(), self.retry_token),
                is_custom: false,
            },
        }
    }

    /// Store `blob` for `category` and persist the whole mapping.
    ///
    /// The in-memory value is kept even when persisting fails.
    pub fn put(&mut self, category: MapCategory, blob: String) -> Persistence {
        self.images.insert(category, blob);
        self.load_errors.remove(&category);

        match self.store.save(&self.images) {
            Ok(()) => {
                debug!(category = category.key(), "stored custom map");
                Persistence::Saved
            }
            Err(e) => {
                warn!(category = category.key(), error = %e, "custom map kept for this session only");
                Persistence::SessionOnly(e)
            }
        }
    }

    /// Drop the custom image for `category` and retry its default asset.
    pub fn clear(&mut self, category: MapCategory) -> Result<(), AtlasError> {
        self.images.remove(&category);
        self.retry(category);
        self.store.save(&self.images)
    }

    /// Record that the default asset for `category` failed to load.
    ///
    /// Ignored while a custom image is in use.
    pub fn mark_failed(&mut self, category: MapCategory) {
        if self.images.contains_key(&category) {
            return;
        }
        warn!(path = category.image_path(), "failed to load map image");
        self.load_errors.insert(category);
    }

    pub fn mark_loaded(&mut self, category: MapCategory) {
        self.load_errors.remove(&category);
    }

    /// Forget a recorded failure and bump the cache-busting token.
    pub fn retry(&mut self, category: MapCategory) {
        self.load_errors.remove(&category);
        self.retry_token += 1;
    }

    pub fn is_failed(&self, category: MapCategory) -> bool {
        self.load_errors.contains(&category)
    }

    pub fn is_custom(&self, category: MapCategory) -> bool {
        self.images.contains_key(&category)
    }

    pub fn status(&self, category: MapCategory) -> MapStatus {
        if self.is_custom(category) {
            MapStatus::Custom
        } else if self.is_failed(category) {
            MapStatus::Missing
        } else {
            MapStatus::SystemLoaded
        }
    }

    /// Probe the default asset for `category` under `asset_dir` and record
    /// the outcome.
    pub fn resolve(&mut self, category: MapCategory, asset_dir: &Path) -> MapStatus {
        if self.is_custom(category) {
            return MapStatus::Custom;
        }
        if default_asset(category, asset_dir).is_file() {
            self.mark_loaded(category);
        } else {
            self.mark_failed(category);
        }
        self.status(category)
    }

    pub fn custom_categories(&self) -> impl Iterator<Item = MapCategory> + '_ {
        self.images.keys().copied()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// On-disk location of the default asset for `category`.
pub fn default_asset(category: MapCategory, asset_dir: &Path) -> PathBuf {
    asset_dir.join(category.image_path().trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::store::MemoryStore;
    use tempfile::TempDir;

    const BLOB: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_get_defaults_to_static_asset() {
        let cache = ImageCache::open(MemoryStore::new());
        let image = cache.get(MapCategory::Hazard);
        assert_eq!(image.source, "/hazard_map.png?t=0");
        assert!(!image.is_custom);
    }

    #[test]
    fn test_put_then_get_returns_custom_blob() {
        let mut cache = ImageCache::open(MemoryStore::new());
        assert!(cache.put(MapCategory::Fri, BLOB.to_string()).is_saved());

        let image = cache.get(MapCategory::Fri);
        assert_eq!(image.source, BLOB);
        assert!(image.is_custom);
        assert_eq!(cache.status(MapCategory::Fri), MapStatus::Custom);
    }

    #[test]
    fn test_clear_then_get_returns_default_path() {
        let mut cache = ImageCache::open(MemoryStore::new());
        cache.put(MapCategory::Exposure, BLOB.to_string());
        cache.clear(MapCategory::Exposure).unwrap();

        let image = cache.get(MapCategory::Exposure);
        assert!(!image.is_custom);
        assert!(image.source.starts_with("/exposure_map.png?t="));
        assert_eq!(cache.store().load().unwrap(), Some(Mapping::new()));
    }

    #[test]
    fn test_put_overwrites_previous_upload() {
        let mut cache = ImageCache::open(MemoryStore::new());
        cache.put(MapCategory::SoftCm, BLOB.to_string());
        cache.put(MapCategory::SoftCm, "data:image/gif;base64,R0lG".to_string());
        assert_eq!(cache.get(MapCategory::SoftCm).source, "data:image/gif;base64,R0lG");
        assert_eq!(cache.custom_categories().count(), 1);
    }

    #[test]
    fn test_every_mutation_rewrites_the_store() {
        let mut cache = ImageCache::open(MemoryStore::new());
        cache.put(MapCategory::Fri, BLOB.to_string());
        cache.put(MapCategory::Hazard, BLOB.to_string());
        cache.clear(MapCategory::Fri).unwrap();
        assert_eq!(cache.store().saves(), 3);

        let persisted = cache.store().load().unwrap().unwrap();
        assert_eq!(persisted.keys().copied().collect::<Vec<_>>(), vec![MapCategory::Hazard]);
    }

    #[test]
    fn test_reopen_restores_mapping() {
        let dir = TempDir::new().unwrap();
        {
            let mut cache = ImageCache::open(crate::atlas::FileStore::new(dir.path(), None));
            cache.put(MapCategory::Vulnerability, BLOB.to_string());
            cache.put(MapCategory::HardCm, BLOB.to_string());
        }
        let cache = ImageCache::open(crate::atlas::FileStore::new(dir.path(), None));
        assert!(cache.is_custom(MapCategory::Vulnerability));
        assert!(cache.is_custom(MapCategory::HardCm));
        assert!(!cache.is_custom(MapCategory::Fri));
    }

    #[test]
    fn test_quota_failure_keeps_session_value() {
        let mut cache = ImageCache::open(MemoryStore::with_quota(10));
        let outcome = cache.put(MapCategory::Fri, BLOB.to_string());

        assert!(matches!(
            outcome,
            Persistence::SessionOnly(AtlasError::QuotaExceeded { .. })
        ));
        assert_eq!(cache.get(MapCategory::Fri).source, BLOB);
        assert!(cache.store().content().is_none());
    }

    #[test]
    fn test_corrupt_store_opens_empty() {
        let cache = ImageCache::open(MemoryStore::with_content("[1, 2"));
        assert_eq!(cache.custom_categories().count(), 0);
    }

    #[test]
    fn test_load_failure_tracking() {
        let mut cache = ImageCache::open(MemoryStore::new());
        cache.mark_failed(MapCategory::Hazard);
        assert!(cache.is_failed(MapCategory::Hazard));
        assert_eq!(cache.status(MapCategory::Hazard), MapStatus::Missing);
        assert!(!cache.is_failed(MapCategory::Exposure));

        cache.retry(MapCategory::Hazard);
        assert!(!cache.is_failed(MapCategory::Hazard));
        assert_eq!(cache.get(MapCategory::Hazard).source, "/hazard_map.png?t=1");
    }

    #[test]
    fn test_failures_are_not_persisted() {
        let mut cache = ImageCache::open(MemoryStore::new());
        cache.mark_failed(MapCategory::Fri);
        assert_eq!(cache.store().saves(), 0);
    }

    #[test]
    fn test_put_and_clear_reset_failure() {
        let mut cache = ImageCache::open(MemoryStore::new());
        cache.mark_failed(MapCategory::Fri);
        cache.put(MapCategory::Fri, BLOB.to_string());
        assert!(!cache.is_failed(MapCategory::Fri));

        // Failures reported while a custom map is shown are ignored.
        cache.mark_failed(MapCategory::Fri);
        assert!(!cache.is_failed(MapCategory::Fri));

        cache.clear(MapCategory::Fri).unwrap();
        cache.mark_failed(MapCategory::Fri);
        cache.clear(MapCategory::Fri).unwrap();
        assert!(!cache.is_failed(MapCategory::Fri));
    }

    #[test]
    fn test_resolve_against_asset_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fri_map.png"), b"png").unwrap();

        let mut cache = ImageCache::open(MemoryStore::new());
        assert_eq!(cache.resolve(MapCategory::Fri, dir.path()), MapStatus::SystemLoaded);
        assert_eq!(cache.resolve(MapCategory::Hazard, dir.path()), MapStatus::Missing);
        assert!(cache.is_failed(MapCategory::Hazard));

        std::fs::write(dir.path().join("hazard_map.png"), b"png").unwrap();
        assert_eq!(cache.resolve(MapCategory::Hazard, dir.path()), MapStatus::SystemLoaded);
        assert!(!cache.is_failed(MapCategory::Hazard));
    }
}
