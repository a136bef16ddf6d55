//! Category gating - which item groups each destination accepts

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::InventoryKind;
use crate::error::PlacementRejection;
use crate::value_objects::ItemGroup;

/// Where a drop can land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    Body,
    Pack,
    Bank,
    Grit,
    /// Drop zone that removes the item from the sheet
    Discard,
}

impl DestinationKind {
    /// | destination | items | conditions |
    /// |-------------|-------|------------|
    /// | body        | yes   | no         |
    /// | pack        | yes   | yes        |
    /// | bank        | yes   | no         |
    /// | grit        | no    | yes        |
    /// | discard     | yes   | yes        |
    pub fn accepts(self, group: ItemGroup) -> bool {
        match (self, group) {
            (Self::Pack | Self::Discard, _) => true,
            (Self::Body | Self::Bank, ItemGroup::Items) => true,
            (Self::Grit, ItemGroup::Conditions) => true,
            (Self::Body | Self::Bank, ItemGroup::Conditions) | (Self::Grit, ItemGroup::Items) => {
                false
            }
        }
    }

    pub fn check(self, group: ItemGroup) -> Result<(), PlacementRejection> {
        if self.accepts(group) {
            Ok(())
        } else {
            Err(PlacementRejection::CategoryMismatch {
                group,
                destination: self,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Pack => "pack",
            Self::Bank => "bank",
            Self::Grit => "grit",
            Self::Discard => "discard",
        }
    }
}

impl From<InventoryKind> for DestinationKind {
    fn from(kind: InventoryKind) -> Self {
        match kind {
            InventoryKind::Body => Self::Body,
            InventoryKind::Pack => Self::Pack,
            InventoryKind::Bank => Self::Bank,
            InventoryKind::Grit => Self::Grit,
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gating_table() {
        use DestinationKind::*;
        use ItemGroup::*;

        let expected = [
            (Body, true, false),
            (Pack, true, true),
            (Bank, true, false),
            (Grit, false, true),
            (Discard, true, true),
        ];
        for (destination, items, conditions) in expected {
            assert_eq!(destination.accepts(Items), items, "{destination} / items");
            assert_eq!(
                destination.accepts(Conditions),
                conditions,
                "{destination} / conditions"
            );
        }
    }

    #[test]
    fn check_reports_the_mismatch() {
        let err = DestinationKind::Grit.check(ItemGroup::Items).unwrap_err();
        assert_eq!(
            err,
            PlacementRejection::CategoryMismatch {
                group: ItemGroup::Items,
                destination: DestinationKind::Grit,
            }
        );
        assert!(DestinationKind::Pack.check(ItemGroup::Conditions).is_ok());
    }
}
