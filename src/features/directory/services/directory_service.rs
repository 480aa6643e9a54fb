use std::sync::Arc;

use crate::core::error::Result;
use crate::features::directory::cache::SnapshotCache;
use crate::features::directory::dtos::{DashboardDirectory, DataSource, Loaded, PublicDirectory};
use crate::features::directory::services::DirectoryLoader;

/// Decides, once per load, between the remote batch and the local cache
pub struct DirectoryService {
    loader: DirectoryLoader,
    cache: Arc<SnapshotCache>,
}

impl DirectoryService {
    pub fn new(loader: DirectoryLoader, cache: Arc<SnapshotCache>) -> Self {
        Self { loader, cache }
    }

    /// Remote public directory, or the last cached one when the API fails.
    ///
    /// Only remote failures fall back; a broken cache file is an error.
    pub async fn load_public_or_fallback(&self) -> Result<Loaded<PublicDirectory>> {
        match self.loader.load_public().await {
            Ok(directory) => {
                if let Err(e) = self.cache.store_public(&directory).await {
                    tracing::warn!("Failed to cache public directory: {}", e);
                }
                Ok(Loaded::remote(directory))
            }
            Err(e) if e.is_remote_failure() => {
                tracing::error!("Error loading public directory, using fallback: {}", e);
                Ok(from_cache(self.cache.public().await?))
            }
            Err(e) => Err(e),
        }
    }

    /// Remote dashboard data, or the last cached copy when the API fails
    pub async fn load_dashboard_or_fallback(&self) -> Result<Loaded<DashboardDirectory>> {
        match self.loader.load_dashboard().await {
            Ok(directory) => {
                if let Err(e) = self.cache.store_dashboard(&directory).await {
                    tracing::warn!("Failed to cache dashboard directory: {}", e);
                }
                Ok(Loaded::remote(directory))
            }
            Err(e) if e.is_remote_failure() => {
                tracing::error!("Error loading dashboard data, using fallback: {}", e);
                Ok(from_cache(self.cache.dashboard().await?))
            }
            Err(e) => Err(e),
        }
    }
}

fn from_cache<T: Default>(cached: Option<T>) -> Loaded<T> {
    match cached {
        Some(data) => Loaded {
            source: DataSource::Cache,
            data,
        },
        None => Loaded {
            source: DataSource::Empty,
            data: T::default(),
        },
    }
}
