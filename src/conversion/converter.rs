//! Unit conversion functions
//!
//! Converts a value between two units of the same category by way of the
//! category's base unit.

use serde::{Deserialize, Serialize};

use super::units::{UnitCategory, UnitDef};
use crate::error::{CalcError, CalcResult};

/// Decimal digits shown for converted values
pub const DISPLAY_PRECISION: usize = 4;

/// A conversion as requested by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    #[serde(default)]
    pub category: UnitCategory,
}

/// A completed conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub result: f64,
    /// `result` at fixed precision
    pub display: String,
}

/// Express a value in the category's base unit
pub fn to_base(value: f64, unit: &UnitDef) -> f64 {
    value * unit.to_base
}

/// Express a base-unit value in the given unit
pub fn from_base(base_value: f64, unit: &UnitDef) -> f64 {
    base_value / unit.to_base
}

/// Convert a value between two units of a category
pub fn convert(value: f64, from: &str, to: &str, category: UnitCategory) -> CalcResult<f64> {
    let from_def = category.lookup(from)?;
    let to_def = category.lookup(to)?;
    convert_between(value, from_def, to_def)
}

/// Convert and format a full request
pub fn convert_request(request: &ConversionRequest) -> CalcResult<Conversion> {
    let category = request.category;
    let from_def = category.lookup(&request.from_unit)?;
    let to_def = category.lookup(&request.to_unit)?;
    let result = convert_between(request.value, from_def, to_def)?;

    tracing::debug!(
        "{} {} = {} {} ({})",
        request.value,
        from_def.symbol,
        result,
        to_def.symbol,
        category
    );

    Ok(Conversion {
        category,
        value: request.value,
        from_unit: from_def.symbol,
        to_unit: to_def.symbol,
        result,
        display: format_fixed(result),
    })
}

/// Format a value with `DISPLAY_PRECISION` decimal digits
pub fn format_fixed(value: f64) -> String {
    let formatted = format!("{:.*}", DISPLAY_PRECISION, value);
    // "-0.0000" reads as a sign error in a form field
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        return formatted[1..].to_string();
    }
    formatted
}

fn convert_between(value: f64, from: &UnitDef, to: &UnitDef) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid("value", "must be a finite number"));
    }

    if from.symbol == to.symbol {
        return Ok(value);
    }

    Ok(from_base(to_base(value, from), to))
}
