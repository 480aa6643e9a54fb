use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::features::directory::models::{first_text, EntityId, OfferRecord};
use crate::shared::constants::{
    DEFAULT_OFFER_IMAGE, GENERAL_CATEGORY, NO_DESCRIPTION_TEXT, UNKNOWN_TEXT,
};

/// Display form of an offer/ad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferView {
    pub id: EntityId,
    pub title: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub category_id: Option<EntityId>,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub duration: Option<i64>,
    #[serde(rename = "remainingDays")]
    pub remaining_days: Option<i64>,
}

impl OfferView {
    /// Calendar day the offer ends on, if the backend sent a usable date
    pub fn end_day(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_day)
    }

    /// Active through the whole of its end day
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.end_day().map(|end| end >= today).unwrap_or(false)
    }
}

impl From<&OfferRecord> for OfferView {
    fn from(o: &OfferRecord) -> Self {
        let category_id = o
            .category_id
            .clone()
            .or_else(|| o.category.as_ref().and_then(|c| c.id().cloned()));
        let category = o
            .category
            .as_ref()
            .and_then(|c| c.name().map(String::from))
            .or_else(|| category_id.as_ref().map(EntityId::to_string))
            .unwrap_or_else(|| GENERAL_CATEGORY.to_string());

        Self {
            id: o.id.clone(),
            title: first_text(&[&o.name, &o.title])
                .unwrap_or(UNKNOWN_TEXT)
                .to_string(),
            image: first_text(&[&o.image])
                .unwrap_or(DEFAULT_OFFER_IMAGE)
                .to_string(),
            description: first_text(&[&o.details, &o.description])
                .unwrap_or(NO_DESCRIPTION_TEXT)
                .to_string(),
            category,
            category_id,
            start_date: o.start_date().map(String::from),
            end_date: o.end_date().map(String::from),
            duration: o.duration,
            remaining_days: o.remaining_days,
        }
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` and RFC 3339 timestamps
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: serde_json::Value) -> OfferView {
        let record: OfferRecord = serde_json::from_value(value).unwrap();
        OfferView::from(&record)
    }

    #[test]
    fn test_title_and_description_fallbacks() {
        let v = view(json!({"id": 1, "title": "Sale", "description": "20% off"}));
        assert_eq!(v.title, "Sale");
        assert_eq!(v.description, "20% off");

        let v = view(json!({"id": 2, "name": "Named", "title": "Ignored", "details": "d"}));
        assert_eq!(v.title, "Named");
        assert_eq!(v.description, "d");

        let v = view(json!({"id": 3}));
        assert_eq!(v.title, UNKNOWN_TEXT);
        assert_eq!(v.description, NO_DESCRIPTION_TEXT);
        assert_eq!(v.image, DEFAULT_OFFER_IMAGE);
        assert_eq!(v.category, GENERAL_CATEGORY);
    }

    #[test]
    fn test_dates_accept_both_spellings() {
        let v = view(json!({
            "id": 1,
            "start_date": "2024-01-01",
            "endDate": "2024-01-31",
            "remaining_days": "5"
        }));
        assert_eq!(v.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(v.end_date.as_deref(), Some("2024-01-31"));
        assert_eq!(v.remaining_days, Some(5));
    }

    #[test]
    fn test_serialized_field_names() {
        let v = view(json!({"id": 1, "start_date": "2024-01-01", "end_date": "2024-01-31"}));
        let out = serde_json::to_value(&v).unwrap();
        assert_eq!(out["startDate"], "2024-01-01");
        assert_eq!(out["endDate"], "2024-01-31");
        assert!(out.get("remainingDays").is_some());
    }

    #[test]
    fn test_is_active_on() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert!(view(json!({"id": 1, "end_date": "2024-01-31"})).is_active_on(today));
        assert!(view(json!({"id": 1, "end_date": "2024-02-01 00:00:00"})).is_active_on(today));
        assert!(!view(json!({"id": 1, "end_date": "2024-01-30"})).is_active_on(today));
        assert!(!view(json!({"id": 1, "end_date": "soon"})).is_active_on(today));
        assert!(!view(json!({"id": 1})).is_active_on(today));
    }
}
