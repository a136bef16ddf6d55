//! Inventory operation result types.

use mrsheet_domain::{ItemDescriptor, Placement, PlacementRejection, SlotRef};

/// What applying an intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    /// The item now sits at `at`
    Placed { at: SlotRef, placement: Placement },
    /// The item was taken off the sheet
    Discarded { removed: Option<ItemDescriptor> },
    /// Nothing was changed
    Rejected(PlacementRejection),
}

impl IntentOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&PlacementRejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}
