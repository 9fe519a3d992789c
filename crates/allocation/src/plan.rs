use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroute_core::{ItemId, ValueObject};

/// Units drawn from a single warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentEntry {
    warehouse_name: String,
    items: BTreeMap<ItemId, u64>,
}

impl ShipmentEntry {
    pub fn new<I, T>(warehouse_name: impl Into<String>, items: T) -> Self
    where
        I: Into<ItemId>,
        T: IntoIterator<Item = (I, u64)>,
    {
        Self {
            warehouse_name: warehouse_name.into(),
            items: items
                .into_iter()
                .map(|(item, quantity)| (item.into(), quantity))
                .collect(),
        }
    }

    pub fn warehouse_name(&self) -> &str {
        &self.warehouse_name
    }

    pub fn items(&self) -> &BTreeMap<ItemId, u64> {
        &self.items
    }

    /// Units of `item` shipped from this warehouse.
    pub fn quantity(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }
}

impl ValueObject for ShipmentEntry {}

/// Ordered per-warehouse shipments that together fulfil an order.
///
/// Entries keep the relative order of the warehouses they were drawn from, so
/// a warehouse name may appear more than once. An empty plan means either
/// that there was nothing to ship or that the order could not be fulfilled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentPlan(Vec<ShipmentEntry>);

impl ShipmentPlan {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn entries(&self) -> &[ShipmentEntry] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ShipmentEntry> {
        self.0.iter()
    }

    /// Units of `item` across every entry.
    pub fn total_for(&self, item: &str) -> u64 {
        self.0.iter().map(|entry| entry.quantity(item)).sum()
    }

    /// Per-item totals across every entry.
    pub fn totals(&self) -> BTreeMap<ItemId, u64> {
        let mut totals = BTreeMap::new();
        for entry in &self.0 {
            for (item, &quantity) in &entry.items {
                *totals.entry(item.clone()).or_insert(0) += quantity;
            }
        }
        totals
    }

    pub fn warehouse_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(ShipmentEntry::warehouse_name)
    }

    pub fn into_entries(self) -> Vec<ShipmentEntry> {
        self.0
    }
}

impl ValueObject for ShipmentPlan {}

impl From<Vec<ShipmentEntry>> for ShipmentPlan {
    fn from(entries: Vec<ShipmentEntry>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for ShipmentPlan {
    type Item = ShipmentEntry;
    type IntoIter = std::vec::IntoIter<ShipmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShipmentPlan {
    type Item = &'a ShipmentEntry;
    type IntoIter = core::slice::Iter<'a, ShipmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
