//! symwallet_core - pure domain logic for the symwallet back end.
//!
//! Nothing in this crate performs I/O. Storage backends, the read-through
//! fetcher and the node client live in `symwallet` and `symwallet_client`.

pub mod account;
pub mod cache;
pub mod metadata;
pub mod repository;
pub mod transaction;
pub mod validation;
