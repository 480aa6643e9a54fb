use std::sync::Arc;

use crate::core::error::Result;
use crate::features::directory::clients::DirectoryGateway;
use crate::features::directory::dtos::{
    extract_providers_from_categories, CategoryView, DashboardDirectory, OfferView,
    PublicDirectory, ServiceView, WorkerView,
};

/// Fixed fan-out/fan-in batch loads. The first failing request fails the
/// whole batch; no partial results are returned.
pub struct DirectoryLoader {
    gateway: Arc<DirectoryGateway>,
}

impl DirectoryLoader {
    pub fn new(gateway: Arc<DirectoryGateway>) -> Self {
        Self { gateway }
    }

    /// Categories, services and offers for the public page
    pub async fn load_public(&self) -> Result<PublicDirectory> {
        let (categories, services, offers) = tokio::try_join!(
            self.gateway.public_categories(),
            self.gateway.public_services(),
            self.gateway.public_offers(),
        )?;

        let directory = PublicDirectory {
            categories: categories.iter().map(CategoryView::from).collect(),
            services: services.iter().map(ServiceView::from).collect(),
            providers: extract_providers_from_categories(&categories),
            offers: offers.iter().map(OfferView::from).collect(),
        };

        tracing::info!(
            "Loaded public directory: categories={}, services={}, providers={}, offers={}",
            directory.categories.len(),
            directory.services.len(),
            directory.providers.len(),
            directory.offers.len()
        );
        Ok(directory)
    }

    /// Workers, services, offers and categories for the dashboard
    pub async fn load_dashboard(&self) -> Result<DashboardDirectory> {
        let (workers, services, offers, categories) = tokio::try_join!(
            self.gateway.workers(),
            self.gateway.services(),
            self.gateway.offers(),
            self.gateway.categories(),
        )?;

        let directory = DashboardDirectory {
            workers: workers.iter().map(WorkerView::from).collect(),
            services: services.iter().map(ServiceView::from).collect(),
            offers: offers.iter().map(OfferView::from).collect(),
            categories: categories.iter().map(CategoryView::from).collect(),
        };

        tracing::info!(
            "Loaded dashboard directory: workers={}, services={}, offers={}, categories={}",
            directory.workers.len(),
            directory.services.len(),
            directory.offers.len(),
            directory.categories.len()
        );
        Ok(directory)
    }
}
