mod amount;

pub use amount::Amount;

use std::{fmt, str::FromStr};

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const WEI_PER_GWEI: i128 = 1_000_000_000;

pub const WEI_PER_ETH: i128 = 1_000_000_000_000_000_000;

pub const GWEI_PER_ETH: i128 = 1_000_000_000;

/// The unit an amount was entered or displayed in. Wei is the atomic unit,
/// amounts are stored as wei and only rendered in the other two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Eth,
    Gwei,
    Wei,
}

use Unit::*;

impl Unit {
    /// Wei per one of this unit.
    pub fn scale(&self) -> i128 {
        match self {
            Eth => WEI_PER_ETH,
            Gwei => WEI_PER_GWEI,
            Wei => 1,
        }
    }

    /// The fixed number of decimal places this unit is displayed with.
    pub fn decimals(&self) -> u32 {
        match self {
            Eth => 18,
            Gwei => 9,
            Wei => 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseUnitError {
    #[error("failed to parse unit {0}")]
    UnknownUnit(String),
}

impl FromStr for Unit {
    type Err = ParseUnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eth" => Ok(Eth),
            "gwei" => Ok(Gwei),
            "wei" => Ok(Wei),
            unknown_unit => Err(ParseUnitError::UnknownUnit(unknown_unit.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eth => write!(f, "eth"),
            Gwei => write!(f, "gwei"),
            Wei => write!(f, "wei"),
        }
    }
}
