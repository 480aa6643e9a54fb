mod category_dto;
mod input_dto;
mod offer_dto;
mod provider_dto;
mod service_dto;
mod snapshot_dto;
mod worker_dto;

pub use category_dto::CategoryView;
pub use input_dto::{CategoryInput, OfferInput, ServiceInput, WorkerInput, WorkerServiceInput};
pub use offer_dto::OfferView;
pub use provider_dto::{extract_providers_from_categories, ProviderView};
pub use service_dto::ServiceView;
pub use snapshot_dto::{DashboardDirectory, DataSource, Loaded, PublicDirectory};
pub use worker_dto::WorkerView;
