//! API access layer for the service directory: session handling, typed
//! gateway operations, payload normalization and batch loading with a
//! local fallback.

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::client::SessionClient;
pub use crate::core::error::{AppError, Result};
pub use crate::features::directory::DirectoryGateway;
