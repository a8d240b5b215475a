//! Storage abstractions for the service layer
//!
//! Contains the reusable file-backed collection store so services that
//! persist small JSON documents do not duplicate file handling.

pub mod json_array_store;
