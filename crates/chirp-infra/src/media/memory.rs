//! In-memory media store - keeps uploaded bytes in process and hands out
//! `memory://` URLs. Stands in for object storage in development and tests.
//!
//! Files leave the store only through [`MediaStore::discard`]. The lifecycle
//! discards uploads orphaned by a failed create or update and thumbnails that
//! were replaced; media of deleted videos is kept until the process exits.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use chirp_core::ports::{MediaError, MediaStore, MediaUpload, StoredMedia};

/// Media store configuration.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Prefix of every URL handed out (e.g., memory://media)
    pub base_url: String,
    /// Largest accepted upload, in bytes
    pub max_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: "memory://media".to_string(),
            max_bytes: 100 * 1024 * 1024,
        }
    }
}

impl MediaConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("MEDIA_BASE_URL").unwrap_or(defaults.base_url),
            max_bytes: std::env::var("MEDIA_MAX_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_bytes),
        }
    }
}

/// In-memory media store.
pub struct InMemoryMediaStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    config: MediaConfig,
}

impl InMemoryMediaStore {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Bytes stored under `url`, if this store issued it.
    pub async fn get(&self, url: &str) -> Option<Vec<u8>> {
        let objects = self.objects.read().await;
        objects.get(url).cloned()
    }

    /// Number of files currently held.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn is_timed(content_type: &str) -> bool {
        content_type.starts_with("video/") || content_type.starts_with("audio/")
    }
}

impl Default for InMemoryMediaStore {
    fn default() -> Self {
        Self::new(MediaConfig::default())
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn store(&self, upload: &MediaUpload) -> Result<StoredMedia, MediaError> {
        if upload.data.is_empty() {
            return Err(MediaError::Rejected(format!(
                "{} is empty",
                upload.file_name
            )));
        }
        if upload.data.len() > self.config.max_bytes {
            return Err(MediaError::Rejected(format!(
                "{} exceeds {} bytes",
                upload.file_name, self.config.max_bytes
            )));
        }

        let key = match Path::new(&upload.file_name)
            .extension()
            .and_then(|e| e.to_str())
        {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_lowercase()),
            None => Uuid::new_v4().to_string(),
        };
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), key);

        let mut objects = self.objects.write().await;
        objects.insert(url.clone(), upload.data.clone());
        tracing::debug!(
            url = %url,
            bytes = upload.data.len(),
            content_type = %upload.content_type,
            "Media stored"
        );

        Ok(StoredMedia {
            url,
            duration_seconds: upload
                .duration_seconds
                .filter(|_| Self::is_timed(&upload.content_type)),
        })
    }

    async fn discard(&self, url: &str) -> Result<(), MediaError> {
        let mut objects = self.objects.write().await;
        if objects.remove(url).is_some() {
            tracing::debug!(url = %url, "Media discarded");
        }
        Ok(())
    }
}
