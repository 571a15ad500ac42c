//! Inventory state types.

pub mod coins;
pub mod inventory;
pub mod item;

pub use coins::{Coins, Denomination};
pub use inventory::Inventory;
pub use item::Item;
