//! Equipment file loading.
//!
//! An equipment file is nominally a JSON object, but the loader is a
//! deliberate non-parser: it reads at most the first 4 KiB and scans that
//! text for three literal markers, pulling one value out after each.
//! Surrounding syntax is never validated and the markers may appear in any
//! order; a missing marker leaves its field at zero. Existing item files
//! depend on this tolerance, including the `"quantity"` key feeding the
//! cost field.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::{NAME_CAPACITY, READ_LIMIT};
use crate::core::scan;
use crate::error::LoadError;
use crate::state::Item;

const NAME_MARKER: &str = "\"name\": \"";
const WEIGHT_MARKER: &str = "\"weight\": ";
// historical key: the value after "quantity" is the per-copy cost in gp
const COST_MARKER: &str = "\"quantity\": ";

/// Load one equipment file and tag it with a repeat count.
///
/// # Errors
///
/// Fails only when the file cannot be opened or read; malformed content
/// degrades to zero-value fields instead.
pub fn load_item(path: &Path, count: u32) -> Result<Item, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buffer = Vec::with_capacity(READ_LIMIT);
    file.take(READ_LIMIT as u64)
        .read_to_end(&mut buffer)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let text = String::from_utf8_lossy(&buffer);

    let mut item = Item {
        count,
        ..Item::default()
    };
    if let Some(name) = scan_quoted(&text, NAME_MARKER) {
        item.name = truncate_name(name);
    }
    if let Some(rest) = scan_after(&text, WEIGHT_MARKER) {
        item.weight = scan::leading_f64(rest);
    }
    if let Some(rest) = scan_after(&text, COST_MARKER) {
        item.cost = scan::leading_f64(rest);
    }

    log::debug!(
        "loaded {:?} (weight {}, cost {}) x{} from {}",
        item.name,
        item.weight,
        item.cost,
        item.count,
        path.display()
    );
    Ok(item)
}

/// Slice of `text` immediately after the first occurrence of `marker`.
fn scan_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.find(marker).map(|at| &text[at + marker.len()..])
}

/// Text between `marker` and the next double quote. `None` when either the
/// marker or the closing quote is missing.
fn scan_quoted<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let rest = scan_after(text, marker)?;
    rest.find('"').map(|end| &rest[..end])
}

/// Truncate to the name capacity without splitting a character.
fn truncate_name(name: &str) -> String {
    if name.len() <= NAME_CAPACITY {
        return name.to_string();
    }
    let mut end = NAME_CAPACITY;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_text(content: &str, count: u32) -> Item {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        load_item(file.path(), count).unwrap()
    }

    #[test]
    fn test_load_well_formed_item() {
        let item = load_text(
            "{\n  \"name\": \"Hempen Rope\",\n  \"weight\": 10.0,\n  \"quantity\": 1\n}\n",
            2,
        );
        assert_eq!(item.name, "Hempen Rope");
        assert_eq!(item.weight, 10.0);
        assert_eq!(item.cost, 1.0);
        assert_eq!(item.count, 2);
    }

    #[test]
    fn test_markers_in_any_order() {
        let item = load_text(
            "\"quantity\": 2.5 \"name\": \"Lantern\" \"weight\": 2",
            1,
        );
        assert_eq!(item.name, "Lantern");
        assert_eq!(item.weight, 2.0);
        assert_eq!(item.cost, 2.5);
    }

    #[test]
    fn test_missing_markers_default_to_zero() {
        let item = load_text("not json at all", 3);
        assert_eq!(item.name, "");
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.cost, 0.0);
        assert_eq!(item.count, 3);
    }

    #[test]
    fn test_unterminated_name_is_left_empty() {
        let item = load_text("\"name\": \"runs off the end", 1);
        assert_eq!(item.name, "");
    }

    #[test]
    fn test_unparsable_number_is_zero() {
        let item = load_text("\"weight\": heavy, \"quantity\": 3", 1);
        assert_eq!(item.weight, 0.0);
        assert_eq!(item.cost, 3.0);
    }

    #[test]
    fn test_long_name_truncates() {
        let long = "x".repeat(120);
        let item = load_text(&format!("\"name\": \"{long}\""), 1);
        assert_eq!(item.name.len(), NAME_CAPACITY);
    }

    #[test]
    fn test_only_first_4k_is_scanned() {
        let padding = " ".repeat(READ_LIMIT);
        let item = load_text(&format!("{padding}\"weight\": 9.0"), 1);
        assert_eq!(item.weight, 0.0);
    }

    #[test]
    fn test_marker_straddling_the_limit_is_ignored() {
        // marker begins inside the window but is cut off by it
        let padding = " ".repeat(READ_LIMIT - 5);
        let item = load_text(&format!("{padding}\"weight\": 9.0"), 1);
        assert_eq!(item.weight, 0.0);
    }

    #[test]
    fn test_missing_file_is_an_open_error() {
        let err = load_item(Path::new("/no/such/equipment.json"), 1).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("/no/such/equipment.json"));
    }

    #[test]
    fn test_first_marker_occurrence_wins() {
        let item = load_text("\"weight\": 4 \"weight\": 8", 1);
        assert_eq!(item.weight, 4.0);
    }
}
