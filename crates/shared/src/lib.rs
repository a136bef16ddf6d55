//! Mausritter Sheet Shared - wire types for the remote content API
//!
//! Pure data types and serialization. Field names follow the JSON the
//! content service sends and the web client stores (camelCase).

pub mod content;
pub mod responses;

pub use content::{ContentCategory, CustomItem, CUSTOM_ITEM_SOURCE};
pub use responses::{CategoryResponse, SubmitResponse, SyncData, SyncResponse};
