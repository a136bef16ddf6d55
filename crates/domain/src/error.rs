//! Error types for the domain layer
//!
//! Two families live here:
//! - [`DomainError`] for malformed values (unknown enum names, bad slot counts,
//!   missing hirelings) that callers are expected to propagate.
//! - [`PlacementRejection`] for placement attempts the rules refuse. These are
//!   ordinary outcomes of a drag-and-drop gesture, not failures, and callers
//!   treat them as "do nothing".

use thiserror::Error;

use crate::inventory::DestinationKind;
use crate::value_objects::{ItemGroup, SlotKey};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values outside the allowed domain.
    ///
    /// # Example
    /// ```ignore
    /// if count == 0 {
    ///     return Err(DomainError::validation("An item occupies at least one slot"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Why a placement was refused.
///
/// Returned by the placement resolver and the occupancy mutator. A rejection
/// never changes any inventory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementRejection {
    /// The slot key is not part of the inventory's topology
    #[error("Slot '{0}' does not exist in this inventory")]
    InvalidTarget(SlotKey),

    /// The slot already holds an item or is the secondary half of one
    #[error("Slot '{0}' is already occupied")]
    SlotOccupied(SlotKey),

    /// A two-slot item found no free neighbour in either orientation
    #[error("No free adjacent slot next to '{0}' for a two-slot item")]
    NoAdjacentSlot(SlotKey),

    /// The item's group is not accepted by the destination
    #[error("{group} cannot be placed in the {destination}")]
    CategoryMismatch {
        group: ItemGroup,
        destination: DestinationKind,
    },

    /// Dragging a bank entry onto another bank entry
    #[error("Bank entries cannot be rearranged within the bank")]
    BankReorder,

    /// Discarding an item that is not on the sheet
    #[error("Nothing to discard: the item has no origin slot")]
    NoOrigin,
}

impl PlacementRejection {
    /// The slot the rejection is about, if any.
    pub fn slot(&self) -> Option<&SlotKey> {
        match self {
            Self::InvalidTarget(key) | Self::SlotOccupied(key) | Self::NoAdjacentSlot(key) => {
                Some(key)
            }
            Self::CategoryMismatch { .. } | Self::BankReorder | Self::NoOrigin => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("slot count must be 1 or 2");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: slot count must be 1 or 2"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Hireling", "3");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Hireling"));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown orientation: diagonal");
        assert_eq!(err.to_string(), "Parse error: Unknown orientation: diagonal");
    }

    #[test]
    fn test_rejection_messages() {
        let err = PlacementRejection::SlotOccupied(SlotKey::new("4"));
        assert_eq!(err.to_string(), "Slot '4' is already occupied");
        assert_eq!(err.slot(), Some(&SlotKey::new("4")));

        let err = PlacementRejection::CategoryMismatch {
            group: ItemGroup::Conditions,
            destination: DestinationKind::Body,
        };
        assert_eq!(err.to_string(), "conditions cannot be placed in the body");
        assert_eq!(err.slot(), None);
    }
}
