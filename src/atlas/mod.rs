//! The digital atlas: one map image per [`MapCategory`](crate::models::MapCategory).
//!
//! - [`store`] — the persistence port ([`MapStore`](store::MapStore)) with an
//!   atomically rewritten JSON file store.
//! - [`cache`] — [`ImageCache`], which layers custom uploads over the default
//!   static assets and tracks assets that failed to load.
//! - [`data_url`] — encoding uploaded image files as `data:` URLs and back.

pub mod cache;
pub mod data_url;
pub mod store;

use thiserror::Error;

pub use cache::{ImageCache, MapImage, MapStatus, Persistence};
pub use store::FileStore;

/// Well-known key under which the custom map mapping is persisted.
pub const STORAGE_KEY: &str = "manabo_custom_maps";

/// Typical per-origin browser storage allowance, used as the default quota.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("map store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("map store is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("map store quota exceeded ({needed} bytes needed, {quota} allowed)")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("file is not a recognised image")]
    NotAnImage,

    #[error("malformed data URL: {0}")]
    DataUrl(String),
}
