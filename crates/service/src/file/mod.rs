//! File-backed store implementations.

pub mod district_store;
