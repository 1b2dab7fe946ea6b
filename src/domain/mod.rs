//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain value types
//! - `wire.rs`: Raw serde structs matching provider responses
//! - `convert.rs`: Validated mapping from wire to domain types
//! - `gateway.rs`: The remote data gateway for that domain

pub mod coin;
pub mod news;
