//! Custom content use cases: the persisted content store and the remote sync
//! routines that feed it.

use std::sync::Arc;

mod custom_data;
mod sync;

pub use custom_data::{CustomData, CustomDataStore, SyncStatus};
pub use sync::{ContentSync, SyncReport};

/// Container for content use cases.
pub struct ContentUseCases {
    pub sync: Arc<ContentSync>,
}

impl ContentUseCases {
    pub fn new(sync: Arc<ContentSync>) -> Self {
        Self { sync }
    }
}
