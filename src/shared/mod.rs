pub mod constants;
pub mod storage;
pub mod types;
