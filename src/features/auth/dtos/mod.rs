mod auth_dto;

pub use auth_dto::{LoginField, LoginGrant, LoginRequest};
