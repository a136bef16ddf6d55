//! Inventory use cases.
//!
//! The router applying drag-and-drop intents to the sheet, plus the store
//! dispatch it shares with the drop preview.

use std::sync::Arc;

use mrsheet_domain::{Inventory, InventoryRef};

use crate::infrastructure::ports::{RepoError, SheetStorePort};

mod apply_intent;
mod error;
mod types;

pub use apply_intent::ApplyIntent;
pub use error::InventoryError;
pub use types::IntentOutcome;

/// Container for inventory use cases.
pub struct InventoryUseCases {
    pub apply_intent: Arc<ApplyIntent>,
}

impl InventoryUseCases {
    pub fn new(apply_intent: Arc<ApplyIntent>) -> Self {
        Self { apply_intent }
    }
}

async fn load(store: &dyn SheetStorePort, at: InventoryRef) -> Result<Inventory, RepoError> {
    match at {
        InventoryRef::Bank => store.get_bank().await,
        InventoryRef::Grit => store.get_grit().await,
        InventoryRef::Body(owner) | InventoryRef::Pack(owner) => {
            store.get_inventory(owner, at.kind()).await
        }
    }
}

async fn commit(
    store: &dyn SheetStorePort,
    at: InventoryRef,
    snapshot: Inventory,
) -> Result<(), RepoError> {
    match at {
        InventoryRef::Bank => store.commit_bank(snapshot).await,
        InventoryRef::Grit => store.commit_grit(snapshot).await,
        InventoryRef::Body(owner) | InventoryRef::Pack(owner) => {
            store.commit_inventory(owner, at.kind(), snapshot).await
        }
    }
}
