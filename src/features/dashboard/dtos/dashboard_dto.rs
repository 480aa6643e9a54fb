use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::features::directory::dtos::DashboardDirectory;
use crate::shared::constants::GENERAL_CATEGORY;

/// Providers counted under one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Active vs. expired offers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferActivity {
    pub active: u64,
    pub expired: u64,
}

/// Counters and chart series shown on the dashboard overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    pub categories: usize,
    pub providers: usize,
    pub services: usize,
    pub offers: usize,
    pub visitors: u64,
    pub providers_by_category: Vec<CategoryCount>,
    pub offer_activity: OfferActivity,
}

impl DashboardStatistics {
    pub fn compute(directory: &DashboardDirectory, visitors: u64, today: NaiveDate) -> Self {
        Self {
            categories: directory.categories.len(),
            providers: directory.workers.len(),
            services: directory.services.len(),
            offers: directory.offers.len(),
            visitors,
            providers_by_category: providers_by_category(directory),
            offer_activity: offer_activity(directory, today),
        }
    }
}

/// Each service link of a worker counts once under its category; workers
/// without services count under the general label. First-seen order.
fn providers_by_category(directory: &DashboardDirectory) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut bump = |label: String| match counts.iter_mut().find(|c| c.category == label) {
        Some(entry) => entry.count += 1,
        None => counts.push(CategoryCount {
            category: label,
            count: 1,
        }),
    };

    for worker in &directory.workers {
        if worker.services.is_empty() {
            bump(GENERAL_CATEGORY.to_string());
            continue;
        }
        for link in &worker.services {
            bump(
                link.category_label()
                    .unwrap_or_else(|| GENERAL_CATEGORY.to_string()),
            );
        }
    }

    counts
}

fn offer_activity(directory: &DashboardDirectory, today: NaiveDate) -> OfferActivity {
    let active = directory
        .offers
        .iter()
        .filter(|offer| offer.is_active_on(today))
        .count() as u64;

    OfferActivity {
        active,
        expired: directory.offers.len() as u64 - active,
    }
}
