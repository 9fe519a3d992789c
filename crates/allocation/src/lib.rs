//! Order allocation domain module.
//!
//! This crate contains the greedy first-fit allocator that splits an order
//! across a priority-ordered list of warehouses, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod allocator;
pub mod order;
pub mod plan;
pub mod warehouse;

pub use allocator::{Allocation, Allocator, allocate};
pub use order::Order;
pub use plan::{ShipmentEntry, ShipmentPlan};
pub use warehouse::{Inventory, Warehouse};

pub use stockroute_core::ItemId;
