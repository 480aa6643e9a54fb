use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::directory::dtos::{DashboardDirectory, PublicDirectory};
use crate::shared::storage::write_json_atomically;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CacheContents {
    #[serde(default)]
    public: Option<PublicDirectory>,
    #[serde(default)]
    dashboard: Option<DashboardDirectory>,
    #[serde(default, rename = "websiteVisitors")]
    website_visitors: u64,
}

/// Last successfully loaded snapshots and the visitor counter, kept in a
/// JSON file so the next start has something to show when the API is down
pub struct SnapshotCache {
    path: PathBuf,
    // serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl SnapshotCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<CacheContents> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(CacheContents::default())
            }
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read cache file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Storage(format!(
                "Corrupt cache file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn update<F>(&self, apply: F) -> Result<CacheContents>
    where
        F: FnOnce(&mut CacheContents),
    {
        let _guard = self.lock.lock().await;
        let mut contents = self.read().await?;
        apply(&mut contents);
        write_json_atomically(&self.path, &contents).await?;
        Ok(contents)
    }

    pub async fn public(&self) -> Result<Option<PublicDirectory>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.public)
    }

    pub async fn store_public(&self, snapshot: &PublicDirectory) -> Result<()> {
        self.update(|c| c.public = Some(snapshot.clone())).await?;
        Ok(())
    }

    pub async fn dashboard(&self) -> Result<Option<DashboardDirectory>> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.dashboard)
    }

    pub async fn store_dashboard(&self, snapshot: &DashboardDirectory) -> Result<()> {
        self.update(|c| c.dashboard = Some(snapshot.clone())).await?;
        Ok(())
    }

    /// Count one visit to the public page and return the new total
    pub async fn record_visit(&self) -> Result<u64> {
        let contents = self
            .update(|c| c.website_visitors = c.website_visitors.saturating_add(1))
            .await?;
        Ok(contents.website_visitors)
    }

    pub async fn visitor_count(&self) -> Result<u64> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.website_visitors)
    }
}
