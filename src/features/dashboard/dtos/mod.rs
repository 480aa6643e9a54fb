mod dashboard_dto;

pub use dashboard_dto::{CategoryCount, DashboardStatistics, OfferActivity};
