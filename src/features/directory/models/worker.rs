use serde::{Deserialize, Serialize};

use super::common::{lenient_string, CategoryRef, EntityId};

/// Pivot row of the user ↔ service association
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    #[serde(default)]
    pub details: Option<String>,
}

/// One entry of a user's `services_details`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pivot: Option<Pivot>,
}

impl ServiceDetail {
    pub fn details(&self) -> Option<&str> {
        self.pivot
            .as_ref()
            .and_then(|p| p.details.as_deref())
            .filter(|d| !d.trim().is_empty())
    }
}

/// A worker's service association: the service object or its bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceLink {
    Full {
        #[serde(default)]
        id: Option<EntityId>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        category: Option<CategoryRef>,
        #[serde(default)]
        category_id: Option<EntityId>,
    },
    Id(EntityId),
}

impl ServiceLink {
    pub fn id(&self) -> Option<&EntityId> {
        match self {
            ServiceLink::Full { id, .. } => id.as_ref(),
            ServiceLink::Id(id) => Some(id),
        }
    }

    /// Category label of the linked service, when the backend included one
    pub fn category_label(&self) -> Option<String> {
        match self {
            ServiceLink::Full {
                category,
                category_id,
                ..
            } => category
                .as_ref()
                .and_then(|c| c.name().map(String::from))
                .or_else(|| category_id.as_ref().map(EntityId::to_string)),
            ServiceLink::Id(_) => None,
        }
    }
}

/// A provider as the backend sends it: nested under a service in category
/// listings, or top-level in `/dashboard/workers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<ServiceLink>>,
    #[serde(default)]
    pub services_details: Option<Vec<ServiceDetail>>,
}

impl UserRecord {
    pub fn services(&self) -> &[ServiceLink] {
        self.services.as_deref().unwrap_or_default()
    }

    pub fn services_details(&self) -> &[ServiceDetail] {
        self.services_details.as_deref().unwrap_or_default()
    }
}
