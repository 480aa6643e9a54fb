use serde::{Deserialize, Serialize};

use super::{CategoryView, OfferView, ProviderView, ServiceView, WorkerView};

/// Everything the public browsing page shows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicDirectory {
    pub categories: Vec<CategoryView>,
    pub services: Vec<ServiceView>,
    pub providers: Vec<ProviderView>,
    pub offers: Vec<OfferView>,
}

/// Everything the dashboard tables and charts show
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardDirectory {
    pub workers: Vec<WorkerView>,
    pub services: Vec<ServiceView>,
    pub offers: Vec<OfferView>,
    pub categories: Vec<CategoryView>,
}

/// Where a loaded snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Remote,
    Cache,
    /// Remote failed and nothing was cached yet
    Empty,
}

/// A snapshot plus its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loaded<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Loaded<T> {
    pub fn remote(data: T) -> Self {
        Self {
            source: DataSource::Remote,
            data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source != DataSource::Remote
    }
}
