//! `myduka-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage):
//! strongly-typed backend identifiers, the store-assignment sentinel
//! mapping, and the domain error model.

pub mod assignment;
pub mod error;
pub mod id;

pub use assignment::StoreAssignment;
pub use error::{DomainError, DomainResult};
pub use id::{
    AdminId, ClerkId, InventoryRecordId, ProductId, StoreId, SupplyRequestId, TransactionId,
};
