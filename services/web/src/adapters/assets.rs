//! services/web/src/adapters/assets.rs
//!
//! Filesystem implementation of the `AssetStore` port. Cover photos are stored
//! as flat files at `{upload_dir}/{name}`.

use async_trait::async_trait;
use bytes::Bytes;
use invitation_core::ports::{AssetStore, PortError, PortResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Manages on-disk storage for uploaded cover photos.
#[derive(Clone, Debug)]
pub struct FsAssetStore {
    dir: PathBuf,
}

impl FsAssetStore {
    /// Creates the upload directory if needed.
    pub async fn new(dir: PathBuf) -> std::io::Result<Self> {
        fs::create_dir_all(&dir).await?;
        info!("Upload directory: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the file for a given asset name.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn save_asset(&self, name: &str, data: Bytes) -> PortResult<String> {
        // Names are flat; anything that could leave the upload directory is refused.
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(PortError::Unexpected(format!(
                "Refusing to store asset under '{}'",
                name
            )));
        }

        let path = self.file_path(name);
        fs::write(&path, &data)
            .await
            .map_err(|e| PortError::Unexpected(format!("Failed to write {}: {}", path.display(), e)))?;
        debug!("Stored {} bytes at {}", data.len(), path.display());
        Ok(name.to_string())
    }
}
