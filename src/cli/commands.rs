//! CLI command handling: applies flags, loads equipment, prints the report.

use std::path::Path;

use color_eyre::Result;

use crate::cli::args::Args;
use crate::cli::report;
use crate::constants::MAX_ITEM_SLOTS;
use crate::core::{loader, money, scan};
use crate::state::Inventory;

/// Run one tally: fill the inventory from the parsed arguments, then print
/// the three-line report.
///
/// # Errors
///
/// Fails when an equipment file cannot be opened or read; no report is
/// produced in that case.
pub fn run(args: &Args) -> Result<()> {
    let mut inventory = Inventory::default();

    if let Some(raw) = &args.max_weight {
        inventory.max_weight = scan::leading_f64(raw);
    }
    for tokens in &args.money {
        money::apply(tokens, &mut inventory.coins);
    }
    if let Some(path) = &args.camp_file {
        inventory.set_camp_file(path);
        if let Some(stored) = inventory.camp_file() {
            log::debug!("camp file reference stored: {stored}");
        }
    }

    for (path, count) in pair_inputs(&args.inputs) {
        let item = loader::load_item(Path::new(path), count)?;
        if !inventory.add_item(item) {
            log::warn!("all {MAX_ITEM_SLOTS} item slots taken, dropping {path}");
        }
    }

    log::debug!("tallying {} item entries", inventory.items().len());
    report::print(&inventory);
    Ok(())
}

/// Pair each equipment file with its optional trailing copy count.
///
/// A positional token is a count when it directly follows a file and its
/// first character is an ASCII digit; it is then parsed permissively, so a
/// token like `0abc` really does yield a count of 0. Everything else is the
/// next file path. Files with no trailing count default to one copy.
fn pair_inputs(inputs: &[String]) -> Vec<(&str, u32)> {
    let mut pairs = Vec::new();
    let mut tokens = inputs.iter().peekable();
    while let Some(path) = tokens.next() {
        let mut count = 1;
        if let Some(next) = tokens.peek() {
            if next.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                count = u32::try_from(scan::leading_i64(next)).unwrap_or(u32::MAX);
                tokens.next();
            }
        }
        pairs.push((path.as_str(), count));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_file_followed_by_count() {
        let inputs = strings(&["rope.json", "3"]);
        assert_eq!(pair_inputs(&inputs), vec![("rope.json", 3)]);
    }

    #[test]
    fn test_file_without_count_defaults_to_one() {
        let inputs = strings(&["rope.json", "torch.json"]);
        assert_eq!(
            pair_inputs(&inputs),
            vec![("rope.json", 1), ("torch.json", 1)]
        );
    }

    #[test]
    fn test_non_digit_token_starts_a_new_file() {
        let inputs = strings(&["rope.json", "x3"]);
        assert_eq!(pair_inputs(&inputs), vec![("rope.json", 1), ("x3", 1)]);
    }

    #[test]
    fn test_mixed_files_and_counts() {
        let inputs = strings(&["a.json", "2", "b.json", "c.json", "10"]);
        assert_eq!(
            pair_inputs(&inputs),
            vec![("a.json", 2), ("b.json", 1), ("c.json", 10)]
        );
    }

    #[test]
    fn test_digit_led_garbage_yields_count_zero() {
        // documented footgun: "0abc" starts with a digit, parses to 0
        let inputs = strings(&["rope.json", "0abc"]);
        assert_eq!(pair_inputs(&inputs), vec![("rope.json", 0)]);
    }

    #[test]
    fn test_digit_prefix_parses_permissively() {
        let inputs = strings(&["rope.json", "3x"]);
        assert_eq!(pair_inputs(&inputs), vec![("rope.json", 3)]);
    }
}
