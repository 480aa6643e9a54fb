use serde::{Deserialize, Serialize};

use super::common::{lenient_i64, CategoryRef, EntityId};
use super::worker::UserRecord;

/// Category as returned by `/categories` and `/dashboard/categories`,
/// with its services (and their users) nested inside
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<ServiceRecord>>,
}

impl CategoryRecord {
    pub fn services(&self) -> &[ServiceRecord] {
        self.services.as_deref().unwrap_or_default()
    }
}

/// Service, nested under a category or listed on its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub users_count: Option<i64>,
    #[serde(default)]
    pub users: Option<Vec<UserRecord>>,
}

impl ServiceRecord {
    pub fn users(&self) -> &[UserRecord] {
        self.users.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_category_decodes() {
        let category: CategoryRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Home",
            "services": null
        }))
        .unwrap();
        assert!(category.services().is_empty());
        assert_eq!(category.description, None);
    }

    #[test]
    fn test_nested_services_and_users_decode() {
        let category: CategoryRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Home",
            "services": [{
                "id": 10,
                "name": "Electrical",
                "users_count": "2",
                "users": [{"id": 100, "name": "Ahmed"}]
            }]
        }))
        .unwrap();
        let service = &category.services()[0];
        assert_eq!(service.users_count, Some(2));
        assert_eq!(service.users().len(), 1);
    }

    #[test]
    fn test_missing_id_fails_closed() {
        let result = serde_json::from_value::<CategoryRecord>(json!({"name": "No id"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_services_of_wrong_type_fail_closed() {
        let result = serde_json::from_value::<CategoryRecord>(json!({"id": 1, "services": 3}));
        assert!(result.is_err());
    }
}
