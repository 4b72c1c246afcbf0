//! Calorie Calculator MCP Tools
//!
//! Stateless daily energy, weight goal and zigzag tools.

use serde::Serialize;

use crate::energy::{self, DailyEnergy, GoalTarget, ZigzagSchedule};
use crate::form::CalculatorSettings;
use crate::models::{ActivityLevel, BiometricInput, BmrFormula, Height, ResultUnit, Sex, UnitSystem, Weight};

/// Body measurements and options for a one-off calculation
#[derive(Debug, Clone, Default)]
pub struct EnergyQuery {
    pub age: u32,
    pub sex: String,
    pub unit_system: Option<String>,
    pub feet: Option<f64>,
    pub inches: Option<f64>,
    pub centimeters: Option<f64>,
    /// Pounds (imperial) or kilograms (metric)
    pub weight: f64,
    pub activity: Option<String>,
    pub formula: Option<String>,
    pub result_unit: Option<String>,
    pub body_fat_percent: Option<f64>,
}

/// Parsed form of an `EnergyQuery`
#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    pub input: BiometricInput,
    pub activity: ActivityLevel,
    pub formula: BmrFormula,
    pub result_unit: ResultUnit,
}

impl EnergyQuery {
    /// Parse option names; formula and unit fall back to `defaults`
    pub fn resolve(&self, defaults: &CalculatorSettings) -> Result<ResolvedQuery, String> {
        let sex = Sex::from_str(&self.sex)
            .ok_or_else(|| format!("Invalid sex: '{}'. Valid values: male (m), female (f)", self.sex))?;

        let has_imperial_height = self.feet.is_some() || self.inches.is_some();
        let unit_system = match self.unit_system.as_deref() {
            Some(s) => UnitSystem::from_str(s)
                .ok_or_else(|| format!("Invalid unit system: '{}'. Valid values: imperial, metric", s))?,
            None if self.centimeters.is_some() => UnitSystem::Metric,
            None => UnitSystem::Imperial,
        };

        if self.centimeters.is_some() && has_imperial_height {
            return Err(
                "Conflicting height: give either feet and inches (imperial) or centimeters (metric), not both"
                    .to_string(),
            );
        }

        let (height, weight) = match unit_system {
            UnitSystem::Imperial => (
                Height::Imperial {
                    feet: required_height(self.feet, "feet", unit_system)?,
                    inches: required_height(self.inches, "inches", unit_system)?,
                },
                Weight::Pounds(self.weight),
            ),
            UnitSystem::Metric => {
                if has_imperial_height {
                    return Err("Conflicting height: feet and inches cannot be used with metric units".to_string());
                }
                (
                    Height::Metric {
                        centimeters: required_height(self.centimeters, "centimeters", unit_system)?,
                    },
                    Weight::Kilograms(self.weight),
                )
            }
        };

        let activity = match self.activity.as_deref() {
            Some(s) => ActivityLevel::from_str(s).ok_or_else(|| {
                format!(
                    "Invalid activity level: '{}'. Valid levels: sedentary, light, moderate, active, very_active",
                    s
                )
            })?,
            None => ActivityLevel::default(),
        };

        let formula = match self.formula.as_deref() {
            Some(s) => BmrFormula::from_str(s).ok_or_else(|| {
                format!(
                    "Invalid formula: '{}'. Valid formulas: mifflin_st_jeor, revised_harris_benedict, katch_mcardle",
                    s
                )
            })?,
            None => defaults.formula,
        };

        let result_unit = match self.result_unit.as_deref() {
            Some(s) => ResultUnit::from_str(s)
                .ok_or_else(|| format!("Invalid result unit: '{}'. Valid units: calories, kilojoules", s))?,
            None => defaults.result_unit,
        };

        Ok(ResolvedQuery {
            input: BiometricInput {
                age: self.age,
                sex,
                height,
                weight,
                body_fat_percent: self.body_fat_percent,
            },
            activity,
            formula,
            result_unit,
        })
    }
}

fn required_height(value: Option<f64>, field: &str, unit_system: UnitSystem) -> Result<f64, String> {
    value.ok_or_else(|| format!("Invalid input for {}: is required for {} units", field, unit_system.as_str()))
}

/// Response for calculate_daily_energy
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub summary: String,
    pub formula_name: &'static str,
    pub activity_description: &'static str,
    pub breakdown: DailyEnergy,
}

/// Response for weight_goals
#[derive(Debug, Serialize)]
pub struct WeightGoalsResponse {
    pub maintenance_kcal: i64,
    pub minimum_intake_kcal: f64,
    pub formula_name: &'static str,
    pub goals: Vec<GoalTarget>,
}

/// One-line description of a result
pub fn summarize(energy: &DailyEnergy) -> String {
    format!(
        "Estimated daily requirement: {} {} ({}, {})",
        energy.result,
        energy.unit.per_day_label(),
        energy.formula.display_name(),
        energy.activity.description()
    )
}

pub fn calculate_daily_energy(query: &EnergyQuery, defaults: &CalculatorSettings) -> Result<CalculateResponse, String> {
    let q = query.resolve(defaults)?;
    let breakdown = energy::calculate_daily_energy(&q.input, q.activity, q.formula, q.result_unit)
        .map_err(|e| e.to_string())?;

    Ok(CalculateResponse {
        summary: summarize(&breakdown),
        formula_name: q.formula.display_name(),
        activity_description: q.activity.description(),
        breakdown,
    })
}

pub fn weight_goals(query: &EnergyQuery, defaults: &CalculatorSettings) -> Result<WeightGoalsResponse, String> {
    let q = query.resolve(defaults)?;
    // goals are always expressed in kcal
    let breakdown = energy::calculate_daily_energy(&q.input, q.activity, q.formula, ResultUnit::Calories)
        .map_err(|e| e.to_string())?;
    let goals = energy::weight_goal_targets(breakdown.tdee_kcal, q.input.sex).map_err(|e| e.to_string())?;

    Ok(WeightGoalsResponse {
        maintenance_kcal: breakdown.result,
        minimum_intake_kcal: energy::minimum_intake_kcal(q.input.sex),
        formula_name: q.formula.display_name(),
        goals,
    })
}

pub fn zigzag_schedule(daily_target_kcal: f64) -> Result<ZigzagSchedule, String> {
    energy::zigzag_schedule(daily_target_kcal).map_err(|e| e.to_string())
}
