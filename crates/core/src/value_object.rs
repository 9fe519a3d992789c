//! Value object trait: equality by value, not identity.
//!
//! Orders, inventories, and shipment entries carry no identity of their own:
//! two orders requesting the same quantities are the same order as far as the
//! allocator is concerned. Even warehouses compare by value, since names are
//! not required to be unique.

/// Marker trait for value objects.
///
/// Value objects are **compared by value** and cheap enough to clone when a
/// caller needs a private working copy (the allocator clones the order it is
/// given rather than consuming it).
///
/// The trait requires:
/// - **Clone**: working copies are taken freely
/// - **PartialEq**: comparison by attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Order(BTreeMap<ItemId, u64>);
///
/// impl ValueObject for Order {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
