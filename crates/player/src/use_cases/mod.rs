//! Use cases - user-story orchestration.
//!
//! Each use case coordinates domain logic with the infrastructure ports.

pub mod content;
pub mod inventory;
pub mod share;

pub use content::{ContentSync, ContentUseCases, CustomDataStore, SyncReport, SyncStatus};
pub use inventory::{ApplyIntent, IntentOutcome, InventoryError, InventoryUseCases};
pub use share::{ShareLinkError, ShareLinks};
