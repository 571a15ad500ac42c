//! Parsing and loading internals.

pub mod loader;
pub mod money;
pub mod scan;
