//! Coin purse types.

/// Coin denominations, in increasing value order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Denomination {
    /// Copper piece, 1/100 gp.
    Copper,
    /// Silver piece, 1/10 gp.
    Silver,
    /// Electrum piece, 1/2 gp.
    Electrum,
    /// Gold piece, the reference currency.
    Gold,
    /// Platinum piece, 10 gp.
    Platinum,
}

impl Denomination {
    /// All denominations, in increasing value order.
    pub const ALL: [Denomination; 5] = [
        Denomination::Copper,
        Denomination::Silver,
        Denomination::Electrum,
        Denomination::Gold,
        Denomination::Platinum,
    ];

    /// Two-letter code used in money strings and the report.
    pub fn code(self) -> &'static str {
        match self {
            Denomination::Copper => "cp",
            Denomination::Silver => "sp",
            Denomination::Electrum => "ep",
            Denomination::Gold => "gp",
            Denomination::Platinum => "pp",
        }
    }

    /// Value of a single coin in gold pieces.
    pub fn gold_value(self) -> f64 {
        match self {
            Denomination::Copper => 0.01,
            Denomination::Silver => 0.1,
            Denomination::Electrum => 0.5,
            Denomination::Gold => 1.0,
            Denomination::Platinum => 10.0,
        }
    }
}

/// Coin counters, one per denomination, all defaulting to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coins {
    pub cp: u32,
    pub sp: u32,
    pub ep: u32,
    pub gp: u32,
    pub pp: u32,
}

impl Coins {
    /// Current count for one denomination.
    pub fn get(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Copper => self.cp,
            Denomination::Silver => self.sp,
            Denomination::Electrum => self.ep,
            Denomination::Gold => self.gp,
            Denomination::Platinum => self.pp,
        }
    }

    /// Overwrite the count for one denomination.
    pub fn set(&mut self, denomination: Denomination, count: u32) {
        match denomination {
            Denomination::Copper => self.cp = count,
            Denomination::Silver => self.sp = count,
            Denomination::Electrum => self.ep = count,
            Denomination::Gold => self.gp = count,
            Denomination::Platinum => self.pp = count,
        }
    }

    /// Total purse value converted to gold pieces.
    pub fn value_in_gold(&self) -> f64 {
        Denomination::ALL
            .iter()
            .map(|d| f64::from(self.get(*d)) * d.gold_value())
            .sum()
    }
}
