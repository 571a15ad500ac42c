//! The run's single inventory and its aggregate totals.

use crate::constants::{DEFAULT_MAX_WEIGHT, MAX_ITEM_SLOTS, PATH_CAPACITY};
use crate::state::{Coins, Item};

/// Everything the run accumulates: items, coins, and the encumbrance
/// threshold. Built once at startup, filled by the CLI driver, consumed by
/// the report printer.
#[derive(Clone, Debug)]
pub struct Inventory {
    items: Vec<Item>,
    /// Coin counters set by `-m`.
    pub coins: Coins,
    /// Carry weight above which the load counts as encumbered.
    pub max_weight: f64,
    camp_file: Option<String>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            coins: Coins::default(),
            max_weight: DEFAULT_MAX_WEIGHT,
            camp_file: None,
        }
    }
}

impl Inventory {
    /// Append an item, keeping file argument order.
    ///
    /// Returns `false` without storing when all item slots are taken.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.items.len() >= MAX_ITEM_SLOTS {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Loaded items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Store the camp-file path, truncated to its capacity. The path is a
    /// reserved reference for camp storage and is never opened.
    pub fn set_camp_file(&mut self, path: &str) {
        let mut end = path.len().min(PATH_CAPACITY);
        while !path.is_char_boundary(end) {
            end -= 1;
        }
        self.camp_file = Some(path[..end].to_string());
    }

    /// Stored camp-file path, if one was given.
    pub fn camp_file(&self) -> Option<&str> {
        self.camp_file.as_deref()
    }

    /// Sum of `weight x count` over all items.
    pub fn total_weight(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.weight * f64::from(item.count))
            .sum()
    }

    /// Sum of `cost x count` over all items plus the purse value, in gold
    /// pieces.
    pub fn total_cost(&self) -> f64 {
        let item_cost: f64 = self
            .items
            .iter()
            .map(|item| item.cost * f64::from(item.count))
            .sum();
        item_cost + self.coins.value_in_gold()
    }

    /// Strictly heavier than the threshold; carrying exactly `max_weight`
    /// is not encumbered.
    pub fn is_encumbered(&self) -> bool {
        self.total_weight() > self.max_weight
    }
}
