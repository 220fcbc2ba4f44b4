//! Conversion engine between the three display units.
//!
//! Every edit re-derives all three display strings from one canonical wei
//! amount. The canonical value is integer-only; float intermediates lose
//! precision above 2^53 wei, which real balances exceed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{Amount, Unit};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid number {0}")]
    InvalidNumber(String),
}

/// The three display strings derived from one canonical amount. Each string
/// parses back, in its own unit, to the same amount. An all-empty triple
/// means no amount has been entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub eth: String,
    pub gwei: String,
    pub wei: String,
}

impl ConversionResult {
    pub fn empty() -> Self {
        Self {
            eth: String::new(),
            gwei: String::new(),
            wei: String::new(),
        }
    }

    fn from_amount(amount: Amount) -> Self {
        Self {
            eth: display_in_unit(amount, Unit::Eth),
            gwei: display_in_unit(amount, Unit::Gwei),
            wei: display_in_unit(amount, Unit::Wei),
        }
    }

    /// The canonical amount behind the triple, `None` for the empty triple.
    pub fn amount(&self) -> Option<Amount> {
        self.wei.parse().ok()
    }
}

/// Convert an amount entered in the given unit into display strings for all
/// three units. The empty string is not an error, it yields the empty triple.
pub fn convert(value: &str, source_unit: Unit) -> Result<ConversionResult, ConversionError> {
    if value.is_empty() {
        return Ok(ConversionResult::empty());
    }

    let amount = parse_in_unit(value, source_unit)?;
    Ok(ConversionResult::from_amount(amount))
}

/// Reinterpret an amount entered in one unit as its display string in
/// another, as when the user flips the unit selector under an entered value.
pub fn change_unit(value: &str, from: Unit, to: Unit) -> Result<String, ConversionError> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let amount = parse_in_unit(value, from)?;
    Ok(display_in_unit(amount, to))
}

/// Parse a decimal string entered in the given unit into canonical wei.
///
/// Eth and gwei accept an optional integer part and an optional fractional
/// part around a single dot, with at least one digit somewhere. Wei accepts
/// digits only. No sign, exponent, or separators. Fraction digits past wei
/// granularity are truncated, never rounded.
pub fn parse_in_unit(value: &str, unit: Unit) -> Result<Amount, ConversionError> {
    let invalid = || ConversionError::InvalidNumber(value.to_string());

    let (int_digits, frac_digits) = match value.split_once('.') {
        // fractional wei do not exist
        Some(_) if unit.decimals() == 0 => return Err(invalid()),
        Some((int, frac)) => (int, frac),
        None => (value, ""),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(invalid());
    }
    if !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let int_part: i128 = if int_digits.is_empty() {
        0
    } else {
        int_digits.parse().map_err(|_| invalid())?
    };

    let decimals = unit.decimals() as usize;
    let frac_wei: i128 = if frac_digits.is_empty() || decimals == 0 {
        0
    } else {
        let kept = &frac_digits[..frac_digits.len().min(decimals)];
        let parsed: i128 = kept.parse().map_err(|_| invalid())?;
        parsed * 10_i128.pow((decimals - kept.len()) as u32)
    };

    int_part
        .checked_mul(unit.scale())
        .and_then(|wei| wei.checked_add(frac_wei))
        .map(Amount)
        .ok_or_else(invalid)
}

/// Render a canonical wei amount in the given unit with that unit's fixed
/// number of decimals. Plain decimal notation, never scientific. The parser
/// never produces negative amounts, but amounts built directly can be
/// negative, so the sign is carried separately from the magnitude.
pub fn display_in_unit(amount: Amount, unit: Unit) -> String {
    let Amount(wei) = amount;
    let sign = if wei < 0 { "-" } else { "" };
    let magnitude = wei.unsigned_abs();
    let scale = unit.scale() as u128;
    let whole = magnitude / scale;
    let rest = magnitude % scale;
    match unit.decimals() as usize {
        0 => format!("{sign}{whole}"),
        decimals => format!("{sign}{whole}.{rest:0decimals$}"),
    }
}
