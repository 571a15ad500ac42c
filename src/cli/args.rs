//! Command-line argument definitions.

use clap::{ArgAction, Parser};

/// Packmule - equipment tally for tabletop inventories
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Maximum carry weight before the load counts as encumbered
    #[arg(short = 'w', long = "max-weight", value_name = "MAX-WEIGHT")]
    pub max_weight: Option<String>,

    /// Coin counts, e.g. "15cp 3gp" (cp, sp, ep, gp, pp); each use
    /// overwrites only the denominations it names
    #[arg(short = 'm', long = "money", value_name = "MONEY", action = ArgAction::Append)]
    pub money: Vec<String>,

    /// Camp file for discovered items that stay in camp (stored for
    /// later use, not read)
    #[arg(short = 'c', long = "camp-file", value_name = "CAMP-FILE")]
    pub camp_file: Option<String>,

    /// Equipment files, each optionally followed by a copy count
    #[arg(value_name = "EQUIPMENT-FILE [COUNT]")]
    pub inputs: Vec<String>,
}
