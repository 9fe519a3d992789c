use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroute_core::{ItemId, ValueObject};

/// Requested quantity per item.
///
/// Serializes as a plain JSON object (`{"apple": 1}`). Items requested with a
/// quantity of zero are kept as lines but never count as demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(BTreeMap<ItemId, u64>);

impl Order {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    pub fn with_item(mut self, item: impl Into<ItemId>, quantity: u64) -> Self {
        self.insert(item, quantity);
        self
    }

    /// Set the requested quantity for an item, returning the previous request.
    pub fn insert(&mut self, item: impl Into<ItemId>, quantity: u64) -> Option<u64> {
        self.0.insert(item.into(), quantity)
    }

    /// Requested quantity for `item` (zero when the item is not on the order).
    pub fn quantity(&self, item: &str) -> u64 {
        self.0.get(item).copied().unwrap_or(0)
    }

    /// True when no item has a positive requested quantity.
    ///
    /// An order made only of zero-quantity lines is empty: there is nothing to
    /// ship, so it allocates to an empty plan.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&quantity| quantity == 0)
    }

    /// Number of lines, including zero-quantity ones.
    pub fn line_count(&self) -> usize {
        self.0.len()
    }

    /// Sum of all requested quantities.
    pub fn total_units(&self) -> u64 {
        self.0.values().fold(0u64, |acc, &q| acc.saturating_add(q))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u64)> {
        self.0.iter().map(|(item, &quantity)| (item, quantity))
    }

    /// Lines with positive demand only; the allocator's working copy.
    pub(crate) fn outstanding(&self) -> BTreeMap<ItemId, u64> {
        self.0
            .iter()
            .filter(|&(_, &quantity)| quantity > 0)
            .map(|(item, &quantity)| (item.clone(), quantity))
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<ItemId, u64> {
        self.0
    }
}

impl ValueObject for Order {}

impl From<BTreeMap<ItemId, u64>> for Order {
    fn from(lines: BTreeMap<ItemId, u64>) -> Self {
        Self(lines)
    }
}

impl<I: Into<ItemId>> FromIterator<(I, u64)> for Order {
    fn from_iter<T: IntoIterator<Item = (I, u64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(item, quantity)| (item.into(), quantity))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_lines_do_not_count_as_demand() {
        let order = Order::new().with_item("apple", 0).with_item("banana", 0);
        assert!(order.is_empty());
        assert_eq!(order.line_count(), 2);
        assert!(order.outstanding().is_empty());

        let order = order.with_item("cherry", 2);
        assert!(!order.is_empty());
        assert_eq!(order.outstanding().len(), 1);
        assert_eq!(order.total_units(), 2);
    }

    #[test]
    fn missing_items_have_zero_quantity() {
        let order: Order = [("apple", 3)].into_iter().collect();
        assert_eq!(order.quantity("apple"), 3);
        assert_eq!(order.quantity("pear"), 0);
    }

    #[test]
    fn deserializes_from_plain_object() {
        let order: Order = serde_json::from_str(r#"{"apple": 1, "banana": 0}"#).unwrap();
        assert_eq!(order, Order::new().with_item("apple", 1).with_item("banana", 0));

        assert!(serde_json::from_str::<Order>(r#"{"apple": -1}"#).is_err());
    }
}
