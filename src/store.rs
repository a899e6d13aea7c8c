//! Filesystem storage for rendered images
//!
//! Images live at `<root>/<template>/<text>[#<digest>].img`, named by their
//! [`VariantKey`]. Writes go through a temp file and a rename so readers
//! never observe a partially written image.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::caption::{RenderedImage, VariantKey};
use crate::error::RenderError;

/// Distinguishes temp files of concurrent saves within one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Sibling temp path unique to this process and save.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{}.{}.{}.tmp", file_name, std::process::id(), seq))
}

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &VariantKey) -> PathBuf {
        self.root.join(key.relative_path())
    }

    pub async fn exists(&self, key: &VariantKey) -> bool {
        tokio::fs::metadata(self.path_for(key)).await.is_ok()
    }

    /// Encode and persist `image`, returning the written path.
    pub async fn save(
        &self,
        key: &VariantKey,
        image: &RenderedImage,
    ) -> Result<PathBuf, RenderError> {
        let path = self.path_for(key);
        let data = image.encode()?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = temp_path_for(&path);
        if let Err(e) = tokio::fs::write(&temp_path, &data).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        tokio::fs::rename(&temp_path, &path).await?;

        tracing::info!(
            path = %path.display(),
            bytes = data.len(),
            format = %image.format(),
            "Saved image"
        );

        Ok(path)
    }

    pub async fn load(&self, key: &VariantKey) -> Result<Vec<u8>, RenderError> {
        Ok(tokio::fs::read(self.path_for(key)).await?)
    }
}
