use serde::{Deserialize, Serialize};

use crate::features::directory::models::{first_text, EntityId, ServiceRecord};
use crate::shared::constants::{
    DEFAULT_SERVICE_IMAGE, GENERAL_CATEGORY, SERVICE_DESCRIPTION_PREFIX, UNKNOWN_TEXT,
};

/// Display form of a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceView {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Category name, falling back to the category id, then to the general label
    pub category: String,
    pub category_id: Option<EntityId>,
    pub image: String,
    pub users_count: i64,
}

impl From<&ServiceRecord> for ServiceView {
    fn from(s: &ServiceRecord) -> Self {
        let name = first_text(&[&s.name]).unwrap_or(UNKNOWN_TEXT).to_string();
        let description = first_text(&[&s.description])
            .map(String::from)
            .unwrap_or_else(|| format!("{} {}", SERVICE_DESCRIPTION_PREFIX, name));

        let category_id = s
            .category_id
            .clone()
            .or_else(|| s.category.as_ref().and_then(|c| c.id().cloned()));
        let category = s
            .category
            .as_ref()
            .and_then(|c| c.name().map(String::from))
            .or_else(|| category_id.as_ref().map(EntityId::to_string))
            .unwrap_or_else(|| GENERAL_CATEGORY.to_string());

        Self {
            id: s.id.clone(),
            name,
            description,
            category,
            category_id,
            image: first_text(&[&s.image])
                .unwrap_or(DEFAULT_SERVICE_IMAGE)
                .to_string(),
            users_count: s.users_count.unwrap_or(0).max(0),
        }
    }
}
