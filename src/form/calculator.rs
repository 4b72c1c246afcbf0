//! Calorie calculator form
//!
//! Holds the raw text of every typed-in value and the chosen options.
//! Nothing is computed until `calculate()` is called.

use serde::Serialize;

use crate::energy::{calculate_daily_energy, parse_age, parse_number, DailyEnergy};
use crate::error::{CalcError, CalcResult};
use crate::models::{
    ActivityLevel, BiometricInput, BmrFormula, Height, ResultUnit, Sex, UnitSystem, Weight,
    CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB,
};

pub const DEFAULT_AGE: &str = "25";
pub const DEFAULT_FEET: &str = "5";
pub const DEFAULT_INCHES: &str = "10";
pub const DEFAULT_POUNDS: &str = "165";

/// Editable text fields of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorField {
    Age,
    Sex,
    UnitSystem,
    Feet,
    Inches,
    Centimeters,
    Weight,
    Activity,
    Formula,
    ResultUnit,
    BodyFat,
}

impl CalculatorField {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "age" => Some(CalculatorField::Age),
            "sex" | "gender" => Some(CalculatorField::Sex),
            "unit_system" | "units" => Some(CalculatorField::UnitSystem),
            "feet" | "height_ft" => Some(CalculatorField::Feet),
            "inches" | "height_in" => Some(CalculatorField::Inches),
            "centimeters" | "height_cm" | "cm" => Some(CalculatorField::Centimeters),
            "weight" => Some(CalculatorField::Weight),
            "activity" => Some(CalculatorField::Activity),
            "formula" => Some(CalculatorField::Formula),
            "result_unit" => Some(CalculatorField::ResultUnit),
            "body_fat" | "body_fat_percent" => Some(CalculatorField::BodyFat),
            _ => None,
        }
    }
}

/// Options from the settings panel
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CalculatorSettings {
    pub formula: BmrFormula,
    pub result_unit: ResultUnit,
    /// Raw body fat text, only read by Katch-McArdle
    pub body_fat: String,
}

/// State of the calorie calculator tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorForm {
    pub age: String,
    pub sex: Sex,
    pub unit_system: UnitSystem,
    pub feet: String,
    pub inches: String,
    pub centimeters: String,
    /// Pounds or kilograms depending on `unit_system`
    pub weight: String,
    pub activity: ActivityLevel,
    /// None until the settings panel is opened
    pub settings: Option<CalculatorSettings>,
    pub result: Option<DailyEnergy>,
    #[serde(skip)]
    initial_settings: Option<CalculatorSettings>,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::with_settings(None)
    }
}

impl CalculatorForm {
    /// A fresh form whose settings start (and reset) to `settings`
    pub fn with_settings(settings: Option<CalculatorSettings>) -> Self {
        Self {
            age: DEFAULT_AGE.to_string(),
            sex: Sex::Male,
            unit_system: UnitSystem::Imperial,
            feet: DEFAULT_FEET.to_string(),
            inches: DEFAULT_INCHES.to_string(),
            centimeters: String::new(),
            weight: DEFAULT_POUNDS.to_string(),
            activity: ActivityLevel::Moderate,
            settings: settings.clone(),
            result: None,
            initial_settings: settings,
        }
    }

    /// Formula and unit in effect, falling back to Mifflin-St Jeor in Calories
    pub fn effective_settings(&self) -> CalculatorSettings {
        self.settings.clone().unwrap_or_default()
    }

    /// Set a field from text. Select-style fields must name a known option.
    pub fn set_field(&mut self, field: CalculatorField, value: &str) -> CalcResult<()> {
        match field {
            CalculatorField::Age => self.age = value.to_string(),
            CalculatorField::Sex => {
                let sex = Sex::from_str(value)
                    .ok_or_else(|| CalcError::invalid("sex", format!("'{}' is not male or female", value)))?;
                self.sex = sex;
            }
            CalculatorField::UnitSystem => {
                let system = UnitSystem::from_str(value).ok_or_else(|| {
                    CalcError::invalid("unit_system", format!("'{}' is not imperial or metric", value))
                })?;
                self.set_unit_system(system);
            }
            CalculatorField::Feet => self.feet = value.to_string(),
            CalculatorField::Inches => self.inches = value.to_string(),
            CalculatorField::Centimeters => self.centimeters = value.to_string(),
            CalculatorField::Weight => self.weight = value.to_string(),
            CalculatorField::Activity => {
                let level = ActivityLevel::from_str(value).ok_or_else(|| {
                    CalcError::invalid("activity", format!("'{}' is not an activity level", value))
                })?;
                self.activity = level;
            }
            CalculatorField::Formula => {
                let formula = BmrFormula::from_str(value)
                    .ok_or_else(|| CalcError::invalid("formula", format!("'{}' is not a BMR formula", value)))?;
                self.settings_mut().formula = formula;
            }
            CalculatorField::ResultUnit => {
                let unit = ResultUnit::from_str(value).ok_or_else(|| {
                    CalcError::invalid("result_unit", format!("'{}' is not calories or kilojoules", value))
                })?;
                self.settings_mut().result_unit = unit;
            }
            CalculatorField::BodyFat => self.settings_mut().body_fat = value.to_string(),
        }
        Ok(())
    }

    /// Open the settings panel, keeping any values already chosen
    pub fn settings_mut(&mut self) -> &mut CalculatorSettings {
        self.settings.get_or_insert_with(CalculatorSettings::default)
    }

    /// Switch between imperial and metric, carrying parseable height and weight across
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        if self.unit_system == system {
            return;
        }

        let height_cm = self.height().map(|h| h.to_cm()).ok();
        let weight_kg = self.weight().map(|w| w.to_kg()).ok();

        match system {
            UnitSystem::Metric => {
                if let Some(cm) = height_cm {
                    self.centimeters = format_one_decimal(cm);
                }
                if let Some(kg) = weight_kg {
                    self.weight = format_one_decimal(kg);
                }
            }
            UnitSystem::Imperial => {
                if let Some(cm) = height_cm {
                    let total_inches = (cm / CM_PER_INCH).round();
                    self.feet = format_one_decimal((total_inches / INCHES_PER_FOOT).floor());
                    self.inches = format_one_decimal(total_inches % INCHES_PER_FOOT);
                }
                if let Some(kg) = weight_kg {
                    self.weight = format_one_decimal(kg / KG_PER_LB);
                }
            }
        }
        self.unit_system = system;
    }

    /// Parse the text fields into engine input
    pub fn to_input(&self) -> CalcResult<BiometricInput> {
        let age = parse_age(&self.age)?;
        let height = self.height()?;
        let weight = self.weight()?;

        let body_fat_percent = match &self.settings {
            Some(s) if !s.body_fat.trim().is_empty() => Some(parse_number("body_fat_percent", &s.body_fat)?),
            _ => None,
        };

        Ok(BiometricInput {
            age,
            sex: self.sex,
            height,
            weight,
            body_fat_percent,
        })
    }

    /// Run the engine on the current inputs
    ///
    /// A failed calculation leaves the previous result in place.
    pub fn calculate(&mut self) -> CalcResult<&DailyEnergy> {
        let settings = self.effective_settings();
        let outcome = self
            .to_input()
            .and_then(|input| calculate_daily_energy(&input, self.activity, settings.formula, settings.result_unit));

        match outcome {
            Ok(energy) => Ok(&*self.result.insert(energy)),
            Err(e) => {
                tracing::warn!("Calculation rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Restore every field to its starting value and drop the result
    pub fn clear(&mut self) {
        *self = Self::with_settings(self.initial_settings.take());
    }

    fn height(&self) -> CalcResult<Height> {
        match self.unit_system {
            UnitSystem::Imperial => Ok(Height::Imperial {
                feet: parse_number("feet", &self.feet)?,
                inches: parse_number("inches", &self.inches)?,
            }),
            UnitSystem::Metric => Ok(Height::Metric {
                centimeters: parse_number("centimeters", &self.centimeters)?,
            }),
        }
    }

    fn weight(&self) -> CalcResult<Weight> {
        let value = parse_number("weight", &self.weight)?;
        Ok(match self.unit_system {
            UnitSystem::Imperial => Weight::Pounds(value),
            UnitSystem::Metric => Weight::Kilograms(value),
        })
    }
}

fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compute_2696() {
        let mut form = CalculatorForm::default();
        assert!(form.result.is_none());
        let energy = form.calculate().unwrap();
        assert_eq!(energy.result, 2696);
        assert_eq!(energy.formula, BmrFormula::MifflinStJeor);
    }

    #[test]
    fn test_edits_do_not_recompute() {
        let mut form = CalculatorForm::default();
        form.calculate().unwrap();
        form.set_field(CalculatorField::Weight, "200").unwrap();
        assert_eq!(form.result.as_ref().unwrap().result, 2696);
        form.calculate().unwrap();
        assert!(form.result.as_ref().unwrap().result > 2696);
    }

    #[test]
    fn test_failed_calculation_keeps_previous_result() {
        let mut form = CalculatorForm::default();
        form.calculate().unwrap();

        form.set_field(CalculatorField::Age, "abc").unwrap();
        let err = form.calculate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "age", .. }));
        assert_eq!(form.result.as_ref().unwrap().result, 2696);
    }

    #[test]
    fn test_katch_mcardle_requires_body_fat() {
        let mut form = CalculatorForm::default();
        form.set_field(CalculatorField::Formula, "katch-mcardle").unwrap();
        assert!(form.calculate().is_err());
        assert!(form.result.is_none());

        form.set_field(CalculatorField::BodyFat, "20").unwrap();
        let energy = form.calculate().unwrap();
        assert!(energy.lean_mass_kg.is_some());
    }

    #[test]
    fn test_kilojoule_setting() {
        let mut form = CalculatorForm::default();
        form.set_field(CalculatorField::ResultUnit, "kJ").unwrap();
        assert_eq!(form.calculate().unwrap().result, 11282);
    }

    #[test]
    fn test_select_fields_reject_unknown_options() {
        let mut form = CalculatorForm::default();
        assert!(form.set_field(CalculatorField::Sex, "other").is_err());
        assert!(form.set_field(CalculatorField::Activity, "extreme").is_err());
        assert!(form.set_field(CalculatorField::Formula, "cunningham").is_err());
        assert_eq!(form.sex, Sex::Male);
        assert!(form.settings.is_none());
    }

    #[test]
    fn test_metric_scenario() {
        let mut form = CalculatorForm::default();
        form.set_field(CalculatorField::UnitSystem, "metric").unwrap();
        form.set_field(CalculatorField::Age, "30").unwrap();
        form.set_field(CalculatorField::Sex, "f").unwrap();
        form.set_field(CalculatorField::Centimeters, "165").unwrap();
        form.set_field(CalculatorField::Weight, "60").unwrap();
        form.set_field(CalculatorField::Activity, "sedentary").unwrap();
        form.set_field(CalculatorField::Formula, "revised_harris_benedict").unwrap();
        assert_eq!(form.calculate().unwrap().result, 1660);
    }

    #[test]
    fn test_unit_system_switch_carries_values() {
        let mut form = CalculatorForm::default();
        form.set_unit_system(UnitSystem::Metric);
        assert_eq!(form.unit_system, UnitSystem::Metric);
        assert_eq!(form.centimeters, "177.8");
        assert_eq!(form.weight, "74.8");

        form.set_unit_system(UnitSystem::Imperial);
        assert_eq!(form.feet, "5");
        assert_eq!(form.inches, "10");
        assert_eq!(form.weight, "164.9");
    }

    #[test]
    fn test_clear_restores_defaults() {
        let settings = CalculatorSettings {
            result_unit: ResultUnit::Kilojoules,
            ..Default::default()
        };
        let mut form = CalculatorForm::with_settings(Some(settings.clone()));
        form.set_field(CalculatorField::Age, "60").unwrap();
        form.set_field(CalculatorField::Formula, "harris").unwrap();
        form.calculate().unwrap();

        form.clear();
        assert_eq!(form.age, "25");
        assert!(form.result.is_none());
        assert_eq!(form.settings, Some(settings));

        form.clear();
        assert_eq!(form.settings.as_ref().unwrap().result_unit, ResultUnit::Kilojoules);
    }

    #[test]
    fn test_blank_height_part_is_required() {
        let mut form = CalculatorForm::default();
        form.set_field(CalculatorField::Inches, "").unwrap();
        let err = form.calculate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "inches", .. }));

        form.set_field(CalculatorField::UnitSystem, "metric").unwrap();
        form.set_field(CalculatorField::Centimeters, " ").unwrap();
        let err = form.calculate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { field: "centimeters", .. }));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(CalculatorField::from_str("body-fat"), Some(CalculatorField::BodyFat));
        assert_eq!(CalculatorField::from_str("Result Unit"), Some(CalculatorField::ResultUnit));
        assert_eq!(CalculatorField::from_str("gender"), Some(CalculatorField::Sex));
        assert_eq!(CalculatorField::from_str("bmi"), None);
    }
}
