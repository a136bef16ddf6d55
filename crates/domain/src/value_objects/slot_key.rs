//! Slot key value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every bank slot key (`bnk__0`, `bnk__1`, ...)
pub const BANK_KEY_PREFIX: &str = "bnk__";

/// Identifies a slot within one inventory.
///
/// Keys are only unique inside their inventory: pack slot `"1"` of the player
/// and pack slot `"1"` of a hireling are different slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of the bank slot at `index`.
    pub fn bank(index: usize) -> Self {
        Self(format!("{BANK_KEY_PREFIX}{index}"))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Position encoded in a bank key, if this is one.
    pub fn bank_index(&self) -> Option<usize> {
        self.0.strip_prefix(BANK_KEY_PREFIX)?.parse().ok()
    }

    /// Numeric value of the key (pack slots are numbered).
    pub fn number(&self) -> Option<u8> {
        self.0.parse().ok()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SlotKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SlotKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u8> for SlotKey {
    fn from(value: u8) -> Self {
        Self(value.to_string())
    }
}
