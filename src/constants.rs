//! Application-wide constants and configuration values.

// === Loader Limits ===

/// Maximum number of bytes read from an equipment file; anything past this
/// prefix is never scanned.
pub const READ_LIMIT: usize = 4096;

// === Capacity Bounds ===

/// Maximum stored length of an item name, in bytes. Longer names are
/// truncated at a character boundary.
pub const NAME_CAPACITY: usize = 49;
/// Maximum stored length of the camp-file path, in bytes.
pub const PATH_CAPACITY: usize = 49;
/// Maximum number of item slots in an inventory. Items loaded past this
/// bound are dropped with a warning.
pub const MAX_ITEM_SLOTS: usize = 100;

// === Defaults ===

/// Default maximum carry weight: high enough to mean "effectively unlimited".
pub const DEFAULT_MAX_WEIGHT: f64 = 9999.9;
