mod directory_gateway;

pub use directory_gateway::{DirectoryGateway, Resource};
