mod category;
mod common;
mod offer;
mod worker;

pub use category::{CategoryRecord, ServiceRecord};
pub use common::{CategoryRef, EntityId};
pub(crate) use common::first_text;
pub use offer::OfferRecord;
pub use worker::{Pivot, ServiceDetail, ServiceLink, UserRecord};
