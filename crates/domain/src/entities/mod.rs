//! Entities carried by the inventories.

pub mod item;

pub use item::ItemDescriptor;
