//! Equipment item records.

/// One equipment entry, as loaded from a single file.
///
/// Immutable once loaded; owned by the inventory's item list in file
/// argument order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    /// Display name, truncated to the name capacity.
    pub name: String,
    /// Weight per copy.
    pub weight: f64,
    /// Cost per copy, in gold pieces.
    pub cost: f64,
    /// How many copies are carried.
    pub count: u32,
}
