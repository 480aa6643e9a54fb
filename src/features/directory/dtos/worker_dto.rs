use serde::{Deserialize, Serialize};

use crate::features::directory::models::{
    first_text, EntityId, ServiceDetail, ServiceLink, UserRecord,
};
use crate::shared::constants::{
    DEFAULT_PROVIDER_IMAGE, NOT_AVAILABLE_TEXT, UNKNOWN_TEXT, UNSPECIFIED_TEXT,
};

/// Display form of a worker from `/dashboard/workers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerView {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub image: String,
    pub services: Vec<ServiceLink>,
    pub services_details: Vec<ServiceDetail>,
}

impl From<&UserRecord> for WorkerView {
    fn from(w: &UserRecord) -> Self {
        Self {
            id: w.id.clone(),
            name: first_text(&[&w.name]).unwrap_or(UNKNOWN_TEXT).to_string(),
            phone: first_text(&[&w.phone, &w.mobile])
                .unwrap_or(NOT_AVAILABLE_TEXT)
                .to_string(),
            address: first_text(&[&w.address])
                .unwrap_or(UNSPECIFIED_TEXT)
                .to_string(),
            image: first_text(&[&w.image])
                .unwrap_or(DEFAULT_PROVIDER_IMAGE)
                .to_string(),
            services: w.services().to_vec(),
            services_details: w.services_details().to_vec(),
        }
    }
}
