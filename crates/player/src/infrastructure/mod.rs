pub mod clock;
pub mod config;
pub mod content_api;
pub mod file_storage;
pub mod memory_store;
pub mod ports;
