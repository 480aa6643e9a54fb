mod directory_loader;
mod directory_service;

pub use directory_loader::DirectoryLoader;
pub use directory_service::DirectoryService;
