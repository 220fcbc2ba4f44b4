use std::{
    fmt,
    num::ParseIntError,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::{WEI_PER_ETH, WEI_PER_GWEI};

// The canonical amount, an integer count of wei. An i128 holds ~1.7e38 wei,
// or ~1.7e20 ETH, far beyond the entire supply and well past the 2^53 range
// where f64 goes imprecise. Serializes as a string since JSON numbers can't
// carry these magnitudes losslessly.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Amount(pub i128);

impl Amount {
    pub fn from_eth(eth: i128) -> Self {
        Self(eth * WEI_PER_ETH)
    }

    pub fn from_gwei(gwei: i128) -> Self {
        Self(gwei * WEI_PER_GWEI)
    }
}

impl Add<Amount> for Amount {
    type Output = Self;

    fn add(self, Amount(rhs): Self) -> Self::Output {
        let Amount(lhs) = self;
        let result = lhs
            .checked_add(rhs)
            .expect("caused overflow in wei addition");
        Amount(result)
    }
}

impl Sub<Amount> for Amount {
    type Output = Self;

    fn sub(self, Amount(rhs): Amount) -> Self::Output {
        let Amount(lhs) = self;
        let result = lhs
            .checked_sub(rhs)
            .expect("caused underflow in wei subtraction");
        Amount(result)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Amount(amount) = self;
        write!(f, "{amount}")
    }
}

impl From<Amount> for String {
    fn from(Amount(amount): Amount) -> Self {
        amount.to_string()
    }
}

impl From<i128> for Amount {
    fn from(amount: i128) -> Self {
        Amount(amount)
    }
}

impl FromStr for Amount {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i128>().map(Amount)
    }
}

impl TryFrom<String> for Amount {
    type Error = ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<i128>().map(Amount)
    }
}
