//! Media store port - opaque upload of binary media.

use async_trait::async_trait;

/// A file handed over by the upload layer.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    /// Duration probed by the upload layer, if it is a timed medium.
    pub duration_seconds: Option<f64>,
}

impl MediaUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
            duration_seconds: None,
        }
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }
}

/// Where the media store put the file.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub url: String,
    pub duration_seconds: Option<f64>,
}

impl StoredMedia {
    /// Duration rounded up to whole seconds; zero or unknown yields `None`.
    pub fn whole_seconds(&self) -> Option<u32> {
        self.duration_seconds
            .filter(|d| d.is_finite() && *d > 0.0)
            .map(|d| d.ceil().min(u32::MAX as f64) as u32)
    }
}

/// Media store trait - abstraction over object storage backends.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist the upload and return its durable URL.
    async fn store(&self, upload: &MediaUpload) -> Result<StoredMedia, MediaError>;

    /// Drop a previously stored file. URLs the store never issued are ignored.
    async fn discard(&self, url: &str) -> Result<(), MediaError>;
}

/// Media store errors.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
