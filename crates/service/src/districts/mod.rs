//! District collection: store abstraction and identity generation.

pub mod identity;
pub mod store;
