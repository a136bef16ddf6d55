//! Item group (category) value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Category an item descriptor belongs to.
///
/// The group decides which inventories may hold the item (see
/// [`DestinationKind::accepts`](crate::inventory::DestinationKind::accepts)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemGroup {
    /// Gear: weapons, armor, utility items, spells
    Items,
    /// Conditions such as Exhausted or Frightened
    Conditions,
}

impl ItemGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Conditions => "conditions",
        }
    }
}

impl fmt::Display for ItemGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "items" => Ok(Self::Items),
            "conditions" => Ok(Self::Conditions),
            _ => Err(DomainError::parse(format!("Unknown item group: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        assert_eq!("items".parse::<ItemGroup>(), Ok(ItemGroup::Items));
        assert_eq!(ItemGroup::Conditions.to_string(), "conditions");
        assert!("spells".parse::<ItemGroup>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ItemGroup::Conditions).unwrap();
        assert_eq!(json, "\"conditions\"");
    }
}
