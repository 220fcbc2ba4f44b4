mod convert;
pub mod env;
pub mod log;
pub mod units;

pub use convert::{
    change_unit, convert, display_in_unit, parse_in_unit, ConversionError, ConversionResult,
};
