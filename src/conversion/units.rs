//! Unit categories and conversion tables
//!
//! Every category owns a static table expressing each unit as a multiplier of
//! the category's base unit (kcal, meter, kilogram).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::models::KJ_PER_KCAL;

// ============================================================================
// Energy Conversion Constants (to kilocalories)
// ============================================================================

/// Kilocalories per kilojoule
pub const KCAL_PER_KJ: f64 = 1.0 / KJ_PER_KCAL;
/// Kilocalories per small calorie
pub const KCAL_PER_CAL: f64 = 0.001;
/// Kilocalories per joule
pub const KCAL_PER_J: f64 = 1.0 / 4184.0;
/// Kilocalories per kilowatt-hour
pub const KCAL_PER_KWH: f64 = 3_600_000.0 / 4184.0;
/// Kilocalories per British thermal unit (IT)
pub const KCAL_PER_BTU: f64 = 1055.05585262 / 4184.0;

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per inch
pub const M_PER_IN: f64 = 0.0254;
/// Meters per foot
pub const M_PER_FT: f64 = 0.3048;
/// Meters per yard
pub const M_PER_YD: f64 = 0.9144;
/// Meters per mile
pub const M_PER_MI: f64 = 1609.344;

// ============================================================================
// Mass Conversion Constants (to kilograms)
// ============================================================================

/// Kilograms per pound (international avoirdupois)
pub const KG_PER_LB_EXACT: f64 = 0.45359237;
/// Kilograms per ounce
pub const KG_PER_OZ: f64 = 0.028349523125;
/// Kilograms per stone
pub const KG_PER_ST: f64 = 6.35029318;

/// A unit in a category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    /// Canonical symbol (e.g., "kJ")
    pub symbol: &'static str,
    /// Display name (e.g., "Kilojoule")
    pub name: &'static str,
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    /// Base units per one of this unit
    pub to_base: f64,
}

impl UnitDef {
    fn matches_exact(&self, unit: &str) -> bool {
        self.symbol == unit || self.name == unit || self.aliases.contains(&unit)
    }

    fn matches_ignore_case(&self, unit: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(unit)
            || self.name.eq_ignore_ascii_case(unit)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(unit))
    }
}

pub const ENERGY_UNITS: &[UnitDef] = &[
    UnitDef {
        symbol: "kcal",
        name: "Calorie",
        aliases: &["Cal", "Calories", "kilocalorie", "kilocalories", "food calorie"],
        to_base: 1.0,
    },
    UnitDef {
        symbol: "kJ",
        name: "Kilojoule",
        aliases: &["kilojoules"],
        to_base: KCAL_PER_KJ,
    },
    UnitDef {
        symbol: "cal",
        name: "calorie",
        aliases: &["calories", "small calorie", "gram calorie"],
        to_base: KCAL_PER_CAL,
    },
    UnitDef {
        symbol: "J",
        name: "Joule",
        aliases: &["joules"],
        to_base: KCAL_PER_J,
    },
    UnitDef {
        symbol: "kWh",
        name: "Kilowatt-hour",
        aliases: &["kilowatt hour", "kilowatt-hours"],
        to_base: KCAL_PER_KWH,
    },
    UnitDef {
        symbol: "Btu",
        name: "British thermal unit",
        aliases: &["btus", "british thermal units"],
        to_base: KCAL_PER_BTU,
    },
];

pub const LENGTH_UNITS: &[UnitDef] = &[
    UnitDef { symbol: "m", name: "Meter", aliases: &["meters", "metre", "metres"], to_base: 1.0 },
    UnitDef { symbol: "cm", name: "Centimeter", aliases: &["centimeters", "centimetre"], to_base: 0.01 },
    UnitDef { symbol: "mm", name: "Millimeter", aliases: &["millimeters", "millimetre"], to_base: 0.001 },
    UnitDef { symbol: "km", name: "Kilometer", aliases: &["kilometers", "kilometre"], to_base: 1000.0 },
    UnitDef { symbol: "in", name: "Inch", aliases: &["inches", "\""], to_base: M_PER_IN },
    UnitDef { symbol: "ft", name: "Foot", aliases: &["feet", "'"], to_base: M_PER_FT },
    UnitDef { symbol: "yd", name: "Yard", aliases: &["yards"], to_base: M_PER_YD },
    UnitDef { symbol: "mi", name: "Mile", aliases: &["miles"], to_base: M_PER_MI },
];

pub const MASS_UNITS: &[UnitDef] = &[
    UnitDef { symbol: "kg", name: "Kilogram", aliases: &["kilograms", "kilo", "kilos"], to_base: 1.0 },
    UnitDef { symbol: "g", name: "Gram", aliases: &["grams"], to_base: 0.001 },
    UnitDef { symbol: "mg", name: "Milligram", aliases: &["milligrams"], to_base: 0.000001 },
    UnitDef { symbol: "lb", name: "Pound", aliases: &["lbs", "pounds"], to_base: KG_PER_LB_EXACT },
    UnitDef { symbol: "oz", name: "Ounce", aliases: &["ounces"], to_base: KG_PER_OZ },
    UnitDef { symbol: "st", name: "Stone", aliases: &["stones"], to_base: KG_PER_ST },
];

/// Category of a unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Food energy (kcal base)
    #[default]
    Energy,
    /// Length (meter base)
    Length,
    /// Mass (kilogram base)
    Mass,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 3] = [UnitCategory::Energy, UnitCategory::Length, UnitCategory::Mass];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Energy => "energy",
            UnitCategory::Length => "length",
            UnitCategory::Mass => "mass",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "energy" | "food energy" => Some(UnitCategory::Energy),
            "length" | "distance" | "height" => Some(UnitCategory::Length),
            "mass" | "weight" => Some(UnitCategory::Mass),
            _ => None,
        }
    }

    /// The unit table for this category
    pub fn units(&self) -> &'static [UnitDef] {
        match self {
            UnitCategory::Energy => ENERGY_UNITS,
            UnitCategory::Length => LENGTH_UNITS,
            UnitCategory::Mass => MASS_UNITS,
        }
    }

    /// The unit every other unit is expressed against
    pub fn base_unit(&self) -> &'static UnitDef {
        &self.units()[0]
    }

    /// Units selected when the category is first shown: (from, to)
    pub fn default_units(&self) -> (&'static str, &'static str) {
        match self {
            UnitCategory::Energy => ("kcal", "kJ"),
            UnitCategory::Length => ("m", "ft"),
            UnitCategory::Mass => ("kg", "lb"),
        }
    }

    /// Find a unit by symbol, name or alias
    ///
    /// Exact matches win over case-insensitive ones so that "Calorie" (kcal)
    /// and "calorie" (cal) stay distinct.
    pub fn lookup(&self, unit: &str) -> CalcResult<&'static UnitDef> {
        let trimmed = unit.trim();
        let table = self.units();

        table
            .iter()
            .find(|u| u.matches_exact(trimmed))
            .or_else(|| table.iter().find(|u| u.matches_ignore_case(trimmed)))
            .ok_or_else(|| CalcError::unknown_unit(trimmed, *self))
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_unit_has_unit_rate() {
        for category in UnitCategory::ALL {
            assert_eq!(category.base_unit().to_base, 1.0);
        }
    }

    #[test]
    fn test_default_units_exist() {
        for category in UnitCategory::ALL {
            let (from, to) = category.default_units();
            assert!(category.lookup(from).is_ok());
            assert!(category.lookup(to).is_ok());
        }
    }

    #[test]
    fn test_lookup_aliases_and_case() {
        assert_eq!(UnitCategory::Energy.lookup("kj").unwrap().symbol, "kJ");
        assert_eq!(UnitCategory::Energy.lookup("Calorie").unwrap().symbol, "kcal");
        assert_eq!(UnitCategory::Energy.lookup("calorie").unwrap().symbol, "cal");
        assert_eq!(UnitCategory::Length.lookup("feet").unwrap().symbol, "ft");
        assert_eq!(UnitCategory::Mass.lookup(" LBS ").unwrap().symbol, "lb");
    }

    #[test]
    fn test_lookup_unknown_unit() {
        let err = UnitCategory::Mass.lookup("ft").unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownUnit { unit: "ft".to_string(), category: UnitCategory::Mass }
        );
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(UnitCategory::from_str("Energy"), Some(UnitCategory::Energy));
        assert_eq!(UnitCategory::from_str("weight"), Some(UnitCategory::Mass));
        assert_eq!(UnitCategory::from_str("volume"), None);
    }

    #[test]
    fn test_symbols_unique_within_category() {
        for category in UnitCategory::ALL {
            let table = category.units();
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    assert_ne!(a.symbol, b.symbol);
                }
            }
        }
    }
}
