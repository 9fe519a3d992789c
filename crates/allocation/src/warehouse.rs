use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroute_core::{ItemId, ValueObject};

/// Available quantity per item in one warehouse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(BTreeMap<ItemId, u64>);

impl Inventory {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_item(mut self, item: impl Into<ItemId>, quantity: u64) -> Self {
        self.insert(item, quantity);
        self
    }

    pub fn insert(&mut self, item: impl Into<ItemId>, quantity: u64) -> Option<u64> {
        self.0.insert(item.into(), quantity)
    }

    /// Units of `item` on hand (zero when the item is not stocked here).
    pub fn available(&self, item: &str) -> u64 {
        self.0.get(item).copied().unwrap_or(0)
    }

    /// Whether the warehouse lists `item` at all, even at zero stock.
    pub fn stocks(&self, item: &str) -> bool {
        self.0.contains_key(item)
    }

    /// Draw up to `requested` units of `item` and return how many were taken.
    ///
    /// Items the warehouse does not list are left absent; a listed item drawn
    /// down to zero stays listed with quantity zero.
    pub fn take(&mut self, item: &str, requested: u64) -> u64 {
        match self.0.get_mut(item) {
            Some(on_hand) => {
                let drawn = requested.min(*on_hand);
                *on_hand -= drawn;
                drawn
            }
            None => 0,
        }
    }

    pub fn total_units(&self) -> u64 {
        self.0.values().fold(0u64, |acc, &q| acc.saturating_add(q))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u64)> {
        self.0.iter().map(|(item, &quantity)| (item, quantity))
    }
}

impl ValueObject for Inventory {}

impl From<BTreeMap<ItemId, u64>> for Inventory {
    fn from(stock: BTreeMap<ItemId, u64>) -> Self {
        Self(stock)
    }
}

impl<I: Into<ItemId>> FromIterator<(I, u64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (I, u64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(item, quantity)| (item.into(), quantity))
                .collect(),
        )
    }
}

/// A named stock location.
///
/// Names are labels, not identities: two warehouses may share a name and are
/// still allocated from independently. Priority comes from the warehouse's
/// position in the list handed to the allocator, never from the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    name: String,
    inventory: Inventory,
}

impl Warehouse {
    pub fn new(name: impl Into<String>, inventory: Inventory) -> Self {
        Self {
            name: name.into(),
            inventory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

impl ValueObject for Warehouse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_is_capped_by_stock() {
        let mut inventory = Inventory::new().with_item("apple", 5);

        assert_eq!(inventory.take("apple", 3), 3);
        assert_eq!(inventory.available("apple"), 2);

        assert_eq!(inventory.take("apple", 10), 2);
        assert_eq!(inventory.available("apple"), 0);
        assert!(inventory.stocks("apple"));
    }

    #[test]
    fn take_of_unlisted_item_draws_nothing() {
        let mut inventory = Inventory::new().with_item("apple", 5);

        assert_eq!(inventory.take("banana", 4), 0);
        assert!(!inventory.stocks("banana"));
        assert_eq!(inventory.total_units(), 5);
    }

    #[test]
    fn warehouse_wire_shape() {
        let warehouse: Warehouse =
            serde_json::from_str(r#"{"name": "owd", "inventory": {"apple": 1}}"#).unwrap();
        assert_eq!(warehouse.name(), "owd");
        assert_eq!(warehouse.inventory().available("apple"), 1);

        let json = serde_json::to_value(&warehouse).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "owd", "inventory": {"apple": 1}})
        );
    }
}
