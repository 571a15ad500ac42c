//! Final inventory report.
//!
//! A fixed three-line format on stdout. Downstream tooling parses these
//! lines, so the shape is load-bearing; diagnostics stay on stderr and the
//! logger so this output is stable.

use crate::state::Inventory;

/// Print the report for a finished run.
pub fn print(inventory: &Inventory) {
    print!("{}", render(inventory));
}

/// Render the three report lines, each newline-terminated.
pub fn render(inventory: &Inventory) -> String {
    let flag = if inventory.is_encumbered() {
        " (encumbered)"
    } else {
        ""
    };
    let coins = inventory.coins;
    format!(
        "Total weight: {:.2}{}\nTotal cost: {:.2} gp\nCoins: {} cp, {} sp, {} ep, {} gp, {} pp\n",
        inventory.total_weight(),
        flag,
        inventory.total_cost(),
        coins.cp,
        coins.sp,
        coins.ep,
        coins.gp,
        coins.pp,
    )
}
