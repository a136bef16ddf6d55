//! Mausritter sheet player crate.
//!
//! Use cases over the inventory engine in `mrsheet-domain`, plus the adapters
//! they run against: the in-memory sheet store, file-backed key/value
//! storage and the custom content HTTP client.

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
