//! # Inventory
//!
//! The in-memory inventory table: an ordered list of items, unique by
//! case-insensitive name.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::item::{names_equal, InventoryItem, ItemError};

/// Outcome of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new item was appended
    Inserted,
    /// An existing item with the same name was replaced
    Updated,
}

/// Ordered collection of inventory items
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Creates an empty inventory
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts `item`, or replaces category, value and year of the item
    /// with the same name. The stored name keeps its original spelling.
    pub fn upsert(&mut self, item: InventoryItem) -> Upsert {
        if let Some(existing) = self.get_mut(item.name()) {
            existing.merge_from(item);
            Upsert::Updated
        } else {
            self.items.push(item);
            Upsert::Inserted
        }
    }

    /// Removes the item named `name`. Missing names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<InventoryItem> {
        let index = self.position(name)?;
        Some(self.items.remove(index))
    }

    /// Sum of all item values
    pub fn total(&self) -> Decimal {
        self.items.iter().map(InventoryItem::value).sum()
    }

    /// Looks up an item by case-insensitive name
    pub fn get(&self, name: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.matches_name(name))
    }

    /// Looks up an item by case-insensitive name for editing
    pub fn get_mut(&mut self, name: &str) -> Option<&mut InventoryItem> {
        self.items.iter_mut().find(|item| item.matches_name(name))
    }

    /// Renames an item, keeping names unique.
    ///
    /// Changing only the capitalisation of a name is allowed.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), ItemError> {
        let index = self
            .position(old)
            .ok_or_else(|| ItemError::NotFound(old.to_string()))?;

        if !names_equal(old, new) && self.get(new).is_some() {
            return Err(ItemError::DuplicateName(new.trim().to_string()));
        }

        self.items[index].set_name(new)
    }

    /// Distinct non-empty categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(InventoryItem::category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Iterates items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, InventoryItem> {
        self.items.iter()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches_name(name))
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = std::slice::Iter<'a, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = InventoryItem>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for item in iter {
            inventory.upsert(item);
        }
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: Option<&str>, value: i64, year: Option<i32>) -> InventoryItem {
        InventoryItem::new(name, category, Decimal::new(value, 0), year).unwrap()
    }

    #[test]
    fn test_upsert_appends_new_items() {
        let mut inv = Inventory::new();
        assert_eq!(inv.upsert(item("Sofa", None, 500, None)), Upsert::Inserted);
        assert_eq!(inv.upsert(item("Lamp", None, 40, None)), Upsert::Inserted);
        assert_eq!(inv.len(), 2);
        let names: Vec<_> = inv.iter().map(InventoryItem::name).collect();
        assert_eq!(names, ["Sofa", "Lamp"]);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut inv = Inventory::new();
        inv.upsert(item("Sofa", Some("Furniture"), 500, Some(2015)));
        inv.upsert(item("Sofa", Some("Furniture"), 500, Some(2015)));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.total(), Decimal::new(500, 0));
    }

    #[test]
    fn test_upsert_matches_case_insensitively() {
        let mut inv = Inventory::new();
        inv.upsert(item("Sofa", Some("Furniture"), 500, Some(2015)));
        let outcome = inv.upsert(item("SOFA", None, 350, None));

        assert_eq!(outcome, Upsert::Updated);
        assert_eq!(inv.len(), 1);
        let sofa = inv.get("sofa").unwrap();
        assert_eq!(sofa.name(), "Sofa");
        assert_eq!(sofa.value(), Decimal::new(350, 0));
        assert!(sofa.category().is_none());
        assert!(sofa.year_purchased().is_none());
    }

    #[test]
    fn test_remove_existing_and_missing() {
        let mut inv = Inventory::new();
        inv.upsert(item("Sofa", None, 500, None));

        assert!(inv.remove("nothing").is_none());
        assert_eq!(inv.len(), 1);

        let removed = inv.remove("SOFA").unwrap();
        assert_eq!(removed.name(), "Sofa");
        assert!(inv.is_empty());
    }

    #[test]
    fn test_total_is_order_independent() {
        let values = [120, 35, 0, 999, 1];
        let forward: Inventory = values
            .iter()
            .enumerate()
            .map(|(i, v)| item(&format!("item-{i}"), None, *v, None))
            .collect();
        let backward: Inventory = values
            .iter()
            .enumerate()
            .rev()
            .map(|(i, v)| item(&format!("item-{i}"), None, *v, None))
            .collect();

        assert_eq!(forward.total(), Decimal::new(1155, 0));
        assert_eq!(forward.total(), backward.total());
    }

    #[test]
    fn test_total_of_empty_inventory_is_zero() {
        assert_eq!(Inventory::new().total(), Decimal::ZERO);
    }

    #[test]
    fn test_rename() {
        let mut inv = Inventory::new();
        inv.upsert(item("Sofa", None, 500, None));
        inv.upsert(item("Lamp", None, 40, None));

        inv.rename("sofa", "Couch").unwrap();
        assert!(inv.get("Couch").is_some());
        assert!(inv.get("Sofa").is_none());

        // Case-only rename of the same item is fine
        inv.rename("couch", "COUCH").unwrap();
        assert_eq!(inv.get("couch").unwrap().name(), "COUCH");

        let err = inv.rename("COUCH", "lamp").unwrap_err();
        assert_eq!(err, ItemError::DuplicateName("lamp".to_string()));

        let err = inv.rename("missing", "x").unwrap_err();
        assert_eq!(err, ItemError::NotFound("missing".to_string()));

        let err = inv.rename("lamp", "Total").unwrap_err();
        assert_eq!(err, ItemError::ReservedName("Total".to_string()));
        assert!(inv.get("Lamp").is_some());
    }

    #[test]
    fn test_categories_are_distinct_and_sorted() {
        let mut inv = Inventory::new();
        inv.upsert(item("Drill", Some("Tools"), 100, None));
        inv.upsert(item("Saw", Some("Tools"), 50, None));
        inv.upsert(item("TV", Some("Electronics"), 800, None));
        inv.upsert(item("Box", None, 5, None));

        assert_eq!(inv.categories(), ["Electronics", "Tools"]);
    }
}
