//! Number of slots an item occupies

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How many inventory slots an item takes up. Only one and two exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SlotCount {
    #[default]
    One,
    Two,
}

impl SlotCount {
    pub fn get(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for SlotCount {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(DomainError::validation(format!(
                "An item occupies 1 or 2 slots, got {}",
                value
            ))),
        }
    }
}

impl From<SlotCount> for u8 {
    fn from(value: SlotCount) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_and_two() {
        assert_eq!(SlotCount::try_from(1), Ok(SlotCount::One));
        assert_eq!(SlotCount::try_from(2), Ok(SlotCount::Two));
    }

    #[test]
    fn rejects_other_counts() {
        assert!(matches!(
            SlotCount::try_from(0),
            Err(DomainError::Validation(_))
        ));
        assert!(SlotCount::try_from(3).is_err());
    }

    #[test]
    fn deserializes_from_number() {
        let count: SlotCount = serde_json::from_str("2").unwrap();
        assert_eq!(count, SlotCount::Two);
        assert!(serde_json::from_str::<SlotCount>("5").is_err());
    }
}
