//! Media store: opaque storage for receipt images and lesson videos.
//!
//! The backend only ever needs `upload(bytes) -> url`; the returned URL is
//! stored as an opaque reference (receipt_url, video_url). The default
//! implementation writes to a local directory, standing in for a hosted
//! media service.

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::config::MediaConfig;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to store media: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque upload capability.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores the bytes and returns a public URL for them.
    async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String, MediaError>;
}

/// Media store writing to a local directory.
pub struct LocalMediaStore {
    root_dir: String,
    public_base_url: String,
}

impl LocalMediaStore {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn extension_for(content_type: &str) -> &'static str {
        match content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/webp" => "webp",
            "video/mp4" => "mp4",
            _ => "bin",
        }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn upload(&self, bytes: &[u8], content_type: &str) -> Result<String, MediaError> {
        tokio::fs::create_dir_all(&self.root_dir).await?;

        let name = format!(
            "{}.{}",
            Uuid::new_v4(),
            Self::extension_for(content_type)
        );
        let path = std::path::Path::new(&self.root_dir).join(&name);

        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        Ok(format!("{}/{}", self.public_base_url, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(LocalMediaStore::extension_for("image/jpeg"), "jpg");
        assert_eq!(LocalMediaStore::extension_for("image/png"), "png");
        assert_eq!(LocalMediaStore::extension_for("application/pdf"), "bin");
    }

    #[tokio::test]
    async fn test_upload_returns_public_url() {
        let dir = std::env::temp_dir().join(format!("media-test-{}", Uuid::new_v4()));
        let store = LocalMediaStore::new(&MediaConfig {
            root_dir: dir.to_string_lossy().into_owned(),
            public_base_url: "/uploads/".to_string(),
        });

        let url = store.upload(b"fake-image", "image/png").await.unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
