//! Value objects - small immutable types with no identity of their own.

mod item_group;
mod orientation;
mod slot_count;
mod slot_key;

pub use item_group::ItemGroup;
pub use orientation::Orientation;
pub use slot_count::SlotCount;
pub use slot_key::{SlotKey, BANK_KEY_PREFIX};
