//! Apply intent use case.
//!
//! Routes a decoded drag-and-drop to the right inventories and commits the
//! result. The destination is resolved before anything is committed, so a
//! refused move leaves every inventory exactly as it was.

use std::sync::Arc;

use mrsheet_domain::{
    place, remove, resolve_drop, Destination, Intent, Inventory, InventoryRef, ItemDescriptor,
    Placement, PlacementRejection, SlotRef,
};

use crate::infrastructure::ports::SheetStorePort;

use super::error::InventoryError;
use super::types::IntentOutcome;
use super::{commit, load};

/// Inventory router.
///
/// Orchestrates: category gating, origin removal, placement resolution,
/// destination placement, commit of both snapshots.
pub struct ApplyIntent {
    store: Arc<dyn SheetStorePort>,
}

impl ApplyIntent {
    pub fn new(store: Arc<dyn SheetStorePort>) -> Self {
        Self { store }
    }

    /// Apply one intent.
    ///
    /// # Returns
    /// * `Ok(IntentOutcome::Placed | Discarded)` - snapshots committed
    /// * `Ok(IntentOutcome::Rejected)` - nothing committed
    /// * `Err(InventoryError)` - the store failed
    pub async fn execute(&self, intent: Intent) -> Result<IntentOutcome, InventoryError> {
        let Intent {
            origin,
            destination,
            item,
        } = intent;

        if let Err(reason) = destination.kind().check(item.group) {
            return Ok(rejected(reason));
        }
        if let (Some(origin), Destination::Slot(target)) = (&origin, &destination) {
            if origin.inventory == InventoryRef::Bank && target.inventory == InventoryRef::Bank {
                return Ok(rejected(PlacementRejection::BankReorder));
            }
        }

        // Move-from phase, computed but not committed yet
        let vacated = match origin {
            Some(origin) => {
                let Some(before) = self.load_slot_inventory(&origin).await? else {
                    return Ok(rejected(PlacementRejection::InvalidTarget(origin.key)));
                };
                match remove(&before, &origin.key) {
                    Ok(removal) => Some((origin, removal)),
                    Err(reason) => return Ok(rejected(reason)),
                }
            }
            None => None,
        };

        let target = match destination {
            Destination::Slot(target) => target,
            Destination::Discard => {
                let Some((origin, removal)) = vacated else {
                    return Ok(rejected(PlacementRejection::NoOrigin));
                };
                commit(self.store.as_ref(), origin.inventory, removal.inventory).await?;
                tracing::info!(
                    origin = %origin,
                    item = removal.removed.as_ref().map(|i| i.title.as_str()),
                    "Item discarded"
                );
                return Ok(IntentOutcome::Discarded {
                    removed: removal.removed,
                });
            }
        };

        // Same-inventory moves resolve against the post-removal snapshot
        let same_inventory = vacated
            .as_ref()
            .is_some_and(|(origin, _)| origin.inventory == target.inventory);
        let base = match &vacated {
            Some((_, removal)) if same_inventory => removal.inventory.clone(),
            _ => match self.load_slot_inventory(&target).await? {
                Some(inventory) => inventory,
                None => return Ok(rejected(PlacementRejection::InvalidTarget(target.key))),
            },
        };

        let title = item.title.clone();
        let placed = match resolve_drop(&base, &target.key, &item)
            .and_then(|placement| Ok((place(&base, &target.key, item, placement)?, placement)))
        {
            Ok(placed) => placed,
            Err(reason) => return Ok(rejected(reason)),
        };
        let (snapshot, placement) = placed;

        commit(self.store.as_ref(), target.inventory, snapshot).await?;
        if let Some((origin, removal)) = vacated.filter(|_| !same_inventory) {
            commit(self.store.as_ref(), origin.inventory, removal.inventory).await?;
        }

        tracing::info!(
            item = %title,
            destination = %target,
            orientation = ?placement.orientation(),
            "Item placed"
        );
        Ok(IntentOutcome::Placed {
            at: target,
            placement,
        })
    }

    /// "Can drop here" check against the current store contents. Changes
    /// nothing.
    pub async fn preview(
        &self,
        target: &SlotRef,
        item: &ItemDescriptor,
    ) -> Result<Result<Placement, PlacementRejection>, InventoryError> {
        Ok(match self.load_slot_inventory(target).await? {
            Some(inventory) => resolve_drop(&inventory, &target.key, item),
            None => Err(PlacementRejection::InvalidTarget(target.key.clone())),
        })
    }

    /// The inventory `slot` lives in, or `None` if its owner is not on the
    /// sheet (e.g. a hireling index past the end).
    async fn load_slot_inventory(
        &self,
        slot: &SlotRef,
    ) -> Result<Option<Inventory>, InventoryError> {
        match load(self.store.as_ref(), slot.inventory).await {
            Ok(inventory) => Ok(Some(inventory)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn rejected(reason: PlacementRejection) -> IntentOutcome {
    tracing::debug!(reason = %reason, "Intent rejected");
    IntentOutcome::Rejected(reason)
}
