use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::client::SessionClient;
use crate::core::error::{AppError, Result};
use crate::core::request::{RequestBody, RequestOptions};
use crate::features::directory::models::{
    CategoryRecord, EntityId, OfferRecord, ServiceRecord, UserRecord,
};
use crate::shared::constants::DASHBOARD_SUMMARY_PATH;
use crate::shared::types::{data_or_body, Envelope};

/// Entity collections managed from the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Categories,
    Services,
    Offers,
    Workers,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Categories,
        Resource::Services,
        Resource::Offers,
        Resource::Workers,
    ];

    /// Authenticated collection path
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Resource::Categories => "/dashboard/categories",
            Resource::Services => "/dashboard/services",
            Resource::Offers => "/dashboard/offers",
            Resource::Workers => "/dashboard/workers",
        }
    }

    /// Unauthenticated listing; workers have none
    pub fn public_path(self) -> Option<&'static str> {
        match self {
            Resource::Categories => Some("/categories"),
            Resource::Services => Some("/services"),
            Resource::Offers => Some("/offers"),
            Resource::Workers => None,
        }
    }

    pub fn item_path(self, id: &EntityId) -> String {
        format!(
            "{}/{}",
            self.dashboard_path(),
            urlencoding::encode(&id.to_string())
        )
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Categories => "categories",
            Resource::Services => "services",
            Resource::Offers => "offers",
            Resource::Workers => "workers",
        };
        write!(f, "{}", name)
    }
}

/// Typed read/write operations over the directory API.
///
/// Every call unwraps the `{ status, data, message }` envelope so callers
/// never branch on its shape.
pub struct DirectoryGateway {
    client: Arc<SessionClient>,
}

impl DirectoryGateway {
    pub fn new(client: Arc<SessionClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<SessionClient> {
        &self.client
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let body = self.client.request(path, RequestOptions::get()).await?;
        let items = Envelope::from_value(&body)?.into_list()?;
        tracing::debug!("Fetched {} items from {}", items.len(), path);
        Ok(items)
    }

    // ------------------------------------------------------------------
    // Public page
    // ------------------------------------------------------------------

    async fn fetch_public<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let path = resource.public_path().ok_or_else(|| {
            AppError::Config(format!("{} has no public listing", resource))
        })?;
        self.fetch_list(path).await
    }

    pub async fn public_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.fetch_public(Resource::Categories).await
    }

    pub async fn public_services(&self) -> Result<Vec<ServiceRecord>> {
        self.fetch_public(Resource::Services).await
    }

    pub async fn public_offers(&self) -> Result<Vec<OfferRecord>> {
        self.fetch_public(Resource::Offers).await
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    /// `/dashboard` summary; absent data is an empty mapping
    pub async fn summary(&self) -> Result<Map<String, Value>> {
        let body = self
            .client
            .request(DASHBOARD_SUMMARY_PATH, RequestOptions::get())
            .await?;
        Envelope::from_value(&body)?.into_map()
    }

    /// Raw listing of any dashboard collection
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        self.fetch_list(resource.dashboard_path()).await
    }

    pub async fn categories(&self) -> Result<Vec<CategoryRecord>> {
        self.list(Resource::Categories).await
    }

    pub async fn services(&self) -> Result<Vec<ServiceRecord>> {
        self.list(Resource::Services).await
    }

    pub async fn offers(&self) -> Result<Vec<OfferRecord>> {
        self.list(Resource::Offers).await
    }

    pub async fn workers(&self) -> Result<Vec<UserRecord>> {
        self.list(Resource::Workers).await
    }

    /// Create a record from a JSON or multipart payload, as built by the caller
    pub async fn create(&self, resource: Resource, payload: impl Into<RequestBody>) -> Result<Value> {
        let body = self
            .client
            .request(resource.dashboard_path(), RequestOptions::post(payload))
            .await?;
        tracing::info!("Created {} record", resource);
        Ok(data_or_body(body))
    }

    pub async fn update(
        &self,
        resource: Resource,
        id: &EntityId,
        payload: impl Into<RequestBody>,
    ) -> Result<Value> {
        let body = self
            .client
            .request(&resource.item_path(id), RequestOptions::put(payload))
            .await?;
        tracing::info!("Updated {} record {}", resource, id);
        Ok(data_or_body(body))
    }

    pub async fn delete(&self, resource: Resource, id: &EntityId) -> Result<Value> {
        let body = self
            .client
            .request(&resource.item_path(id), RequestOptions::delete())
            .await?;
        tracing::info!("Deleted {} record {}", resource, id);
        Ok(data_or_body(body))
    }
}
