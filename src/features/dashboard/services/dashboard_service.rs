use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardStatistics;
use crate::features::directory::dtos::DashboardDirectory;
use crate::features::directory::{DirectoryGateway, SnapshotCache};

/// Service for dashboard overview data
pub struct DashboardService {
    gateway: Arc<DirectoryGateway>,
    cache: Arc<SnapshotCache>,
}

impl DashboardService {
    pub fn new(gateway: Arc<DirectoryGateway>, cache: Arc<SnapshotCache>) -> Self {
        Self { gateway, cache }
    }

    /// Server-side summary from `/dashboard`
    pub async fn summary(&self) -> Result<Map<String, Value>> {
        self.gateway.summary().await
    }

    /// Overview counters for already loaded dashboard data, as of today
    pub async fn statistics(&self, directory: &DashboardDirectory) -> Result<DashboardStatistics> {
        let visitors = self.cache.visitor_count().await?;
        let today = chrono::Local::now().date_naive();
        Ok(DashboardStatistics::compute(directory, visitors, today))
    }
}
