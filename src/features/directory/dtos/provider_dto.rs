use serde::{Deserialize, Serialize};

use crate::features::directory::models::{
    first_text, CategoryRecord, EntityId, ServiceRecord, UserRecord,
};
use crate::shared::constants::{
    DEFAULT_PROVIDER_IMAGE, NOT_AVAILABLE_TEXT, NO_DESCRIPTION_TEXT, UNKNOWN_TEXT,
    UNSPECIFIED_TEXT,
};

/// Flattened provider: one record per (service, user) association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderView {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub image: String,
    pub service: String,
    pub category: String,
    pub description: String,
}

impl ProviderView {
    fn from_association(category: &CategoryRecord, service: &ServiceRecord, user: &UserRecord) -> Self {
        // Only the first detail entry is used, whichever service it belongs to.
        let description = user
            .services_details()
            .first()
            .and_then(|detail| detail.details())
            .unwrap_or(NO_DESCRIPTION_TEXT);

        Self {
            id: user.id.clone(),
            name: first_text(&[&user.name]).unwrap_or(UNKNOWN_TEXT).to_string(),
            phone: first_text(&[&user.phone, &user.mobile])
                .unwrap_or(NOT_AVAILABLE_TEXT)
                .to_string(),
            address: first_text(&[&user.address])
                .unwrap_or(UNSPECIFIED_TEXT)
                .to_string(),
            image: first_text(&[&user.image])
                .unwrap_or(DEFAULT_PROVIDER_IMAGE)
                .to_string(),
            service: first_text(&[&service.name]).unwrap_or(UNKNOWN_TEXT).to_string(),
            category: first_text(&[&category.name]).unwrap_or(UNKNOWN_TEXT).to_string(),
            description: description.to_string(),
        }
    }
}

/// Walk categories → services → users and emit one provider per
/// (service, user) pair, in input order. A user listed under N services
/// yields N records.
pub fn extract_providers_from_categories(categories: &[CategoryRecord]) -> Vec<ProviderView> {
    categories
        .iter()
        .flat_map(|category| {
            category.services().iter().flat_map(move |service| {
                service
                    .users()
                    .iter()
                    .map(move |user| ProviderView::from_association(category, service, user))
            })
        })
        .collect()
}
