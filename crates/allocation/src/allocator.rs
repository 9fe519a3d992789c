//! Greedy first-fit allocation of an order across priority-ordered warehouses.
//!
//! Warehouses are visited in the order given (index 0 is the cheapest to ship
//! from). Each warehouse supplies as much of every outstanding item as it can
//! before the next one is considered. The result is all-or-nothing: if any
//! demand is left after the last warehouse, the plan is empty.

use std::collections::BTreeMap;

use tracing::debug;

use stockroute_core::ValueObject;

use crate::order::Order;
use crate::plan::{ShipmentEntry, ShipmentPlan};
use crate::warehouse::Warehouse;

/// Stateless allocator.
///
/// Calls are independent, so one allocator can be shared freely. A single
/// call is strictly sequential: later warehouses only see demand left over by
/// earlier ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Allocator;

impl Allocator {
    pub fn new() -> Self {
        Self
    }

    /// Allocate `order` against `warehouses`, drawing stock down in place.
    ///
    /// On return every warehouse inventory holds what is left after the draw.
    /// Stock is drawn even when the order turns out to be unfulfillable; use
    /// [`Allocator::preview`] to plan without touching inventories.
    pub fn allocate(&self, order: &Order, warehouses: &mut [Warehouse]) -> ShipmentPlan {
        self.draw(order, warehouses).into_plan()
    }

    /// Same plan as [`Allocator::allocate`], computed against a private copy
    /// of the warehouses.
    pub fn preview(&self, order: &Order, warehouses: &[Warehouse]) -> ShipmentPlan {
        let mut scratch = working_copy(warehouses);
        self.allocate(order, &mut scratch)
    }

    /// Run a single pass and keep the outcome, including any shortfall.
    ///
    /// The caller's `order` is never modified; the pass works on a copy of its
    /// positive-quantity lines.
    pub fn draw(&self, order: &Order, warehouses: &mut [Warehouse]) -> Allocation {
        let mut remaining = order.outstanding();
        let mut shipments = Vec::new();

        for (index, warehouse) in warehouses.iter_mut().enumerate() {
            if remaining.is_empty() {
                break;
            }

            let mut drawn = BTreeMap::new();
            for (item, wanted) in remaining.iter_mut() {
                let taken = warehouse.inventory_mut().take(item.as_str(), *wanted);
                if taken > 0 {
                    *wanted -= taken;
                    drawn.insert(item.clone(), taken);
                }
            }

            // Satisfied items are never revisited.
            remaining.retain(|_, wanted| *wanted > 0);

            if !drawn.is_empty() {
                debug!(
                    warehouse = warehouse.name(),
                    index,
                    items = drawn.len(),
                    outstanding = remaining.len(),
                    "drew stock"
                );
                shipments.push(ShipmentEntry::new(warehouse.name(), drawn));
            }
        }

        let allocation = Allocation {
            shipments,
            shortfall: Order::from(remaining),
        };

        if allocation.is_fulfilled() {
            debug!(
                shipments = allocation.shipments.len(),
                units = order.total_units(),
                "order fulfilled"
            );
        } else {
            debug!(
                short_items = allocation.shortfall.line_count(),
                short_units = allocation.shortfall.total_units(),
                "order cannot be fulfilled"
            );
        }

        allocation
    }
}

/// Private copy of caller-owned values for a pass that must not touch them.
fn working_copy<V: ValueObject>(values: &[V]) -> Vec<V> {
    values.to_vec()
}

/// Outcome of one allocation pass.
///
/// Shipments drawn during an unfulfilled pass are kept private: the only plan
/// an `Allocation` hands out is the all-or-nothing one from
/// [`Allocation::into_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    shipments: Vec<ShipmentEntry>,
    shortfall: Order,
}

impl Allocation {
    pub fn is_fulfilled(&self) -> bool {
        self.shortfall.is_empty()
    }

    /// Demand still unmet after the last warehouse (empty when fulfilled).
    pub fn shortfall(&self) -> &Order {
        &self.shortfall
    }

    pub fn into_plan(self) -> ShipmentPlan {
        if self.is_fulfilled() {
            ShipmentPlan::from(self.shipments)
        } else {
            ShipmentPlan::empty()
        }
    }
}

/// Allocate with the default [`Allocator`]. See [`Allocator::allocate`].
pub fn allocate(order: &Order, warehouses: &mut [Warehouse]) -> ShipmentPlan {
    Allocator::default().allocate(order, warehouses)
}
