//! Unit conversion module
//!
//! Table-driven conversion between energy, length and mass units.

pub mod converter;
pub mod units;

pub use converter::{
    convert, convert_request, format_fixed, from_base, to_base, Conversion, ConversionRequest,
    DISPLAY_PRECISION,
};
pub use units::{UnitCategory, UnitDef, ENERGY_UNITS, LENGTH_UNITS, MASS_UNITS};
