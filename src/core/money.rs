//! Money string parsing.
//!
//! A money argument is a whitespace-separated list of coin tokens, each a
//! count fused to a two-letter denomination code (`"15cp 3gp"`). The
//! space-separated shape (`"15 cp 3 gp"`) is accepted too: a bare
//! denomination token takes its count from the numeric token just before it.
//!
//! Assignments overwrite rather than accumulate; repeating a denomination
//! keeps only the last value. Malformed tokens degrade to zero or are
//! ignored, never rejected.

use crate::core::scan;
use crate::state::{Coins, Denomination};

/// Apply one money string to the purse.
pub fn apply(money: &str, coins: &mut Coins) {
    let mut pending: i64 = 0;
    for token in money.split_whitespace() {
        match denomination_of(token) {
            Some(denomination) => {
                let amount = if token.len() > 2 {
                    scan::leading_i64(token)
                } else {
                    pending
                };
                let count = clamp_count(amount);
                log::debug!("money: {} {}", count, denomination.code());
                coins.set(denomination, count);
                pending = 0;
            }
            None => pending = scan::leading_i64(token),
        }
    }
}

/// Match a token's trailing two characters against the known denominations.
fn denomination_of(token: &str) -> Option<Denomination> {
    Denomination::ALL
        .into_iter()
        .find(|d| token.ends_with(d.code()))
}

/// Coin counters are non-negative; clamp below zero and saturate above.
fn clamp_count(amount: i64) -> u32 {
    if amount < 0 {
        0
    } else {
        u32::try_from(amount).unwrap_or(u32::MAX)
    }
}
