//! Unit Converter MCP Tools
//!
//! Stateless conversion and unit table listing.

use serde::Serialize;

use crate::conversion::{convert_request, Conversion, ConversionRequest, UnitCategory, UnitDef};

/// One category in list_units
#[derive(Debug, Serialize)]
pub struct UnitTable {
    pub category: UnitCategory,
    pub base_unit: &'static str,
    pub default_from: &'static str,
    pub default_to: &'static str,
    pub units: &'static [UnitDef],
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub categories: Vec<UnitTable>,
}

fn parse_category(category: &str) -> Result<UnitCategory, String> {
    UnitCategory::from_str(category)
        .ok_or_else(|| format!("Invalid unit category: '{}'. Valid categories: energy, length, mass", category))
}

/// The first category whose table knows both units
fn infer_category(from_unit: &str, to_unit: &str) -> Result<UnitCategory, String> {
    UnitCategory::ALL
        .into_iter()
        .find(|c| c.lookup(from_unit).is_ok() && c.lookup(to_unit).is_ok())
        .ok_or_else(|| {
            format!(
                "No unit category contains both '{}' and '{}'. Use list_units to see valid units.",
                from_unit, to_unit
            )
        })
}

pub fn convert_units(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: Option<&str>,
) -> Result<Conversion, String> {
    let category = match category {
        Some(c) => parse_category(c)?,
        None => infer_category(from_unit, to_unit)?,
    };

    let request = ConversionRequest {
        value,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        category,
    };
    convert_request(&request).map_err(|e| e.to_string())
}

pub fn list_units(category: Option<&str>) -> Result<ListUnitsResponse, String> {
    let categories = match category {
        Some(c) => vec![parse_category(c)?],
        None => UnitCategory::ALL.to_vec(),
    };

    Ok(ListUnitsResponse {
        categories: categories
            .into_iter()
            .map(|c| {
                let (default_from, default_to) = c.default_units();
                UnitTable {
                    category: c,
                    base_unit: c.base_unit().symbol,
                    default_from,
                    default_to,
                    units: c.units(),
                }
            })
            .collect(),
    })
}
