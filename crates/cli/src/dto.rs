use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroute_allocation::{Inventory, Order, ShipmentPlan, Warehouse};
use stockroute_core::{DomainError, DomainResult, ItemId};

// -------------------------
// Request DTOs
// -------------------------

/// Allocation request as read from JSON.
///
/// Quantities are read wider than the domain's `u64` so that negative or
/// oversized values are reported as invalid input rather than as an opaque
/// parse failure.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationRequest {
    #[serde(default)]
    pub order: BTreeMap<String, i128>,
    #[serde(default)]
    pub warehouses: Vec<WarehouseRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarehouseRequest {
    pub name: String,
    #[serde(default)]
    pub inventory: BTreeMap<String, i128>,
}

impl AllocationRequest {
    /// Validate and convert into domain values.
    pub fn into_domain(self) -> DomainResult<(Order, Vec<Warehouse>)> {
        let order = self
            .order
            .into_iter()
            .map(|(item, quantity)| quantity_line("order", item, quantity))
            .collect::<DomainResult<Order>>()?;

        let warehouses = self
            .warehouses
            .into_iter()
            .enumerate()
            .map(|(index, warehouse)| warehouse.into_domain(index))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok((order, warehouses))
    }
}

impl WarehouseRequest {
    fn into_domain(self, index: usize) -> DomainResult<Warehouse> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input(format!(
                "warehouse #{index} has a blank name"
            )));
        }

        let context = format!("warehouse {}", self.name);
        let inventory = self
            .inventory
            .into_iter()
            .map(|(item, quantity)| quantity_line(&context, item, quantity))
            .collect::<DomainResult<Inventory>>()?;

        Ok(Warehouse::new(self.name, inventory))
    }
}

fn quantity_line(context: &str, item: String, quantity: i128) -> DomainResult<(ItemId, u64)> {
    let item = ItemId::parse(item)
        .map_err(|e| DomainError::invalid_input(format!("{context}: {e}")))?;
    let quantity = u64::try_from(quantity).map_err(|_| {
        DomainError::invalid_input(format!(
            "{context}: quantity for {item} must be between 0 and {} (got {quantity})",
            u64::MAX
        ))
    })?;
    Ok((item, quantity))
}

// -------------------------
// Response DTOs
// -------------------------

/// Plan together with the warehouses' stock after the draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationWithRemaining {
    pub plan: ShipmentPlan,
    pub warehouses: Vec<Warehouse>,
}
