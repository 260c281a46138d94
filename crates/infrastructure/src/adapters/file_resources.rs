//! Static resources read from the extension directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqpanel_application::{HostError, HostResult, ResourceLoader};
use tokio::fs;

/// Reads resources relative to a root directory.
#[derive(Debug, Clone)]
pub struct FileResourceLoader {
    root: PathBuf,
}

impl FileResourceLoader {
    /// Creates a loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the resource root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ResourceLoader for FileResourceLoader {
    async fn read_to_string(&self, relative: &Path) -> HostResult<String> {
        let path = self.root.join(relative);
        let bytes = fs::read(&path).await.map_err(|e| HostError::Resource {
            path: relative.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
