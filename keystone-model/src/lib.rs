//! Core data model definitions shared across Keystone crates.
#![allow(missing_docs)]

pub mod dates;
pub mod error;
pub mod ids;
pub mod item;
pub mod status;

pub use ::chrono;
pub use ::url;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use item::CarouselItem;
pub use status::ItemStatus;
