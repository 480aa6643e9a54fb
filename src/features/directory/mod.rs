//! Service directory: categories, services, workers (providers) and offers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | Categories with nested services and users |
//! | GET | `/services` | Services |
//! | GET | `/offers` | Offers/ads |
//! | GET/POST | `/dashboard/{categories,services,offers,workers}` | List / create |
//! | PUT/DELETE | `/dashboard/{resource}/{id}` | Update / delete |

pub mod cache;
pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use cache::SnapshotCache;
pub use clients::{DirectoryGateway, Resource};
pub use services::{DirectoryLoader, DirectoryService};
