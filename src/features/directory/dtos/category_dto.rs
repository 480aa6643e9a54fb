use serde::{Deserialize, Serialize};

use crate::features::directory::models::{first_text, CategoryRecord, EntityId};
use crate::shared::constants::{DEFAULT_CATEGORY_IMAGE, NO_DESCRIPTION_TEXT, UNKNOWN_TEXT};

/// Display form of a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub services_count: usize,
}

impl From<&CategoryRecord> for CategoryView {
    fn from(c: &CategoryRecord) -> Self {
        Self {
            id: c.id.clone(),
            name: first_text(&[&c.name]).unwrap_or(UNKNOWN_TEXT).to_string(),
            description: first_text(&[&c.description])
                .unwrap_or(NO_DESCRIPTION_TEXT)
                .to_string(),
            image: first_text(&[&c.image])
                .unwrap_or(DEFAULT_CATEGORY_IMAGE)
                .to_string(),
            services_count: c.services().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholders_for_missing_fields() {
        let record: CategoryRecord = serde_json::from_value(json!({"id": 1})).unwrap();
        let view = CategoryView::from(&record);
        assert_eq!(view.name, UNKNOWN_TEXT);
        assert_eq!(view.description, NO_DESCRIPTION_TEXT);
        assert_eq!(view.image, DEFAULT_CATEGORY_IMAGE);
        assert_eq!(view.services_count, 0);
    }

    #[test]
    fn test_counts_nested_services() {
        let record: CategoryRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Home",
            "image": "https://cdn.example.com/home.png",
            "services": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();
        let view = CategoryView::from(&record);
        assert_eq!(view.name, "Home");
        assert_eq!(view.image, "https://cdn.example.com/home.png");
        assert_eq!(view.services_count, 2);
    }
}
