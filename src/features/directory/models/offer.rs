use serde::{Deserialize, Serialize};

use super::common::{first_text, lenient_i64, CategoryRef, EntityId};

/// Offer (promotional ad) as returned by `/offers` and `/dashboard/offers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date_camel: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date_camel: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub duration: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub remaining_days: Option<i64>,
}

impl OfferRecord {
    /// `start_date`, falling back to the camel-case spelling
    pub fn start_date(&self) -> Option<&str> {
        first_text(&[&self.start_date, &self.start_date_camel])
    }

    pub fn end_date(&self) -> Option<&str> {
        first_text(&[&self.end_date, &self.end_date_camel])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_both_date_spellings() {
        let offer: OfferRecord = serde_json::from_value(json!({
            "id": 1,
            "start_date": "2024-01-01",
            "startDate": "2024-01-02",
            "endDate": "2024-01-31"
        }))
        .unwrap();

        assert_eq!(offer.start_date(), Some("2024-01-01"));
        assert_eq!(offer.end_date(), Some("2024-01-31"));
    }

    #[test]
    fn test_no_dates() {
        let offer: OfferRecord = serde_json::from_value(json!({"id": 2})).unwrap();
        assert_eq!(offer.start_date(), None);
        assert_eq!(offer.end_date(), None);
    }
}
