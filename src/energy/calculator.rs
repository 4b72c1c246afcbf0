//! Daily energy calculation
//!
//! Validates biometric input, normalizes it to metric, and applies the selected
//! BMR equation and activity multiplier.

use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::models::{ActivityLevel, BiometricInput, BmrFormula, Height, ResultUnit, Sex, Weight};

/// BMR floor of the Katch-McArdle formula (lean mass of zero)
pub const KATCH_MCARDLE_BASE: f64 = 370.0;
/// Katch-McArdle kcal per kg of lean body mass
pub const KATCH_MCARDLE_LEAN_COEF: f64 = 21.6;

/// Full breakdown of a daily energy calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEnergy {
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Only set for Katch-McArdle
    pub lean_mass_kg: Option<f64>,
    pub formula: BmrFormula,
    pub bmr: f64,
    pub activity: ActivityLevel,
    pub activity_multiplier: f64,
    /// TDEE in kcal/day before unit adjustment
    pub tdee_kcal: f64,
    pub unit: ResultUnit,
    /// Rounded daily requirement in `unit`
    pub result: i64,
}

/// Metric measurements after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBody {
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub body_fat_percent: Option<f64>,
}

/// Compute the estimated daily energy requirement, rounded to the nearest integer
pub fn compute_daily_energy(
    input: &BiometricInput,
    activity: ActivityLevel,
    formula: BmrFormula,
    result_unit: ResultUnit,
) -> CalcResult<i64> {
    calculate_daily_energy(input, activity, formula, result_unit).map(|e| e.result)
}

/// Compute the daily energy requirement with every intermediate value
pub fn calculate_daily_energy(
    input: &BiometricInput,
    activity: ActivityLevel,
    formula: BmrFormula,
    result_unit: ResultUnit,
) -> CalcResult<DailyEnergy> {
    let body = normalize(input)?;
    let bmr = calculate_bmr(&body, formula)?;

    // calculate_bmr has already required body fat for Katch-McArdle
    let lean_mass_kg = match formula {
        BmrFormula::KatchMcArdle => body
            .body_fat_percent
            .map(|body_fat| lean_body_mass(body.weight_kg, body_fat)),
        _ => None,
    };

    let activity_multiplier = activity.multiplier();
    let tdee_kcal = bmr * activity_multiplier;
    let scaled = (tdee_kcal * result_unit.factor()).round();
    if !scaled.is_finite() || scaled > i64::MAX as f64 {
        return Err(CalcError::invalid(
            "measurements",
            format!("daily requirement of {} is out of range", scaled),
        ));
    }
    let result = scaled as i64;

    tracing::debug!(
        "{} BMR {:.2} x {} = {:.2} kcal -> {} {}",
        formula.display_name(),
        bmr,
        activity_multiplier,
        tdee_kcal,
        result,
        result_unit.as_str()
    );

    Ok(DailyEnergy {
        height_cm: body.height_cm,
        weight_kg: body.weight_kg,
        lean_mass_kg,
        formula,
        bmr,
        activity,
        activity_multiplier,
        tdee_kcal,
        unit: result_unit,
        result,
    })
}

/// Validate the input and convert it to centimeters and kilograms
pub fn normalize(input: &BiometricInput) -> CalcResult<NormalizedBody> {
    if input.age == 0 {
        return Err(CalcError::invalid("age", "must be a positive number of years"));
    }

    match input.height {
        Height::Imperial { feet, inches } => {
            ensure_non_negative("height_ft", feet)?;
            ensure_non_negative("height_in", inches)?;
        }
        Height::Metric { centimeters } => ensure_non_negative("height_cm", centimeters)?,
    }
    let height_cm = input.height.to_cm();
    if height_cm <= 0.0 {
        return Err(CalcError::invalid("height", "must be greater than zero"));
    }

    let weight_field = match input.weight {
        Weight::Pounds(_) => "weight_lb",
        Weight::Kilograms(_) => "weight_kg",
    };
    ensure_non_negative(weight_field, input.weight.value())?;
    let weight_kg = input.weight.to_kg();
    if weight_kg <= 0.0 {
        return Err(CalcError::invalid(weight_field, "must be greater than zero"));
    }

    if let Some(body_fat) = input.body_fat_percent {
        if !body_fat.is_finite() || !(0.0..=100.0).contains(&body_fat) {
            return Err(CalcError::invalid(
                "body_fat_percent",
                format!("must be between 0 and 100, got {}", body_fat),
            ));
        }
    }

    Ok(NormalizedBody {
        age: input.age,
        sex: input.sex,
        height_cm,
        weight_kg,
        body_fat_percent: input.body_fat_percent,
    })
}

/// Basal metabolic rate in kcal/day for already-normalized measurements
pub fn calculate_bmr(body: &NormalizedBody, formula: BmrFormula) -> CalcResult<f64> {
    let w = body.weight_kg;
    let h = body.height_cm;
    let a = f64::from(body.age);

    let bmr = match (formula, body.sex) {
        (BmrFormula::MifflinStJeor, Sex::Male) => 10.0 * w + 6.25 * h - 5.0 * a + 5.0,
        (BmrFormula::MifflinStJeor, Sex::Female) => 10.0 * w + 6.25 * h - 5.0 * a - 161.0,
        (BmrFormula::RevisedHarrisBenedict, Sex::Male) => {
            13.397 * w + 4.799 * h - 5.677 * a + 88.362
        }
        (BmrFormula::RevisedHarrisBenedict, Sex::Female) => {
            9.247 * w + 3.098 * h - 4.330 * a + 447.593
        }
        (BmrFormula::KatchMcArdle, _) => {
            let body_fat = body.body_fat_percent.ok_or_else(|| {
                CalcError::invalid(
                    "body_fat_percent",
                    "required by the Katch-McArdle formula",
                )
            })?;
            KATCH_MCARDLE_BASE + KATCH_MCARDLE_LEAN_COEF * lean_body_mass(w, body_fat)
        }
    };

    // Extreme ages or tiny bodies drive the regression equations below zero
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(CalcError::invalid(
            "measurements",
            format!(
                "give a BMR of {:.1} kcal/day with {}; check age, height and weight",
                bmr,
                formula.display_name()
            ),
        ));
    }

    Ok(bmr)
}

/// Lean body mass: weight minus estimated fat mass
pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

/// Parse a numeric form field, rejecting empty or non-numeric text
pub fn parse_number(field: &'static str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::invalid(field, "is required"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid(field, format!("'{}' is not a number", trimmed)))?;

    if !value.is_finite() {
        return Err(CalcError::invalid(field, format!("'{}' is not a finite number", trimmed)));
    }

    Ok(value)
}

/// Parse an age field: a positive whole number of years
pub fn parse_age(raw: &str) -> CalcResult<u32> {
    let value = parse_number("age", raw)?;
    if value < 1.0 {
        return Err(CalcError::invalid("age", "must be a positive number of years"));
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(CalcError::invalid("age", format!("'{}' is not a whole number", raw.trim())));
    }
    Ok(value as u32)
}

fn ensure_non_negative(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("cannot be negative, got {}", value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_male() -> BiometricInput {
        BiometricInput::imperial(25, Sex::Male, 5.0, 10.0, 165.0)
    }

    #[test]
    fn test_mifflin_male_imperial_calories() {
        let energy = calculate_daily_energy(
            &default_male(),
            ActivityLevel::Moderate,
            BmrFormula::MifflinStJeor,
            ResultUnit::Calories,
        )
        .unwrap();

        assert!((energy.height_cm - 177.8).abs() < 1e-9);
        assert!((energy.weight_kg - 74.84268).abs() < 1e-9);
        assert!((energy.bmr - 1739.6768).abs() < 1e-6);
        assert!((energy.tdee_kcal - 2696.49904).abs() < 1e-6);
        assert_eq!(energy.result, 2696);
        assert_eq!(energy.lean_mass_kg, None);
    }

    #[test]
    fn test_mifflin_male_imperial_kilojoules() {
        let result = compute_daily_energy(
            &default_male(),
            ActivityLevel::Moderate,
            BmrFormula::MifflinStJeor,
            ResultUnit::Kilojoules,
        )
        .unwrap();
        assert_eq!(result, 11282);
    }

    #[test]
    fn test_mifflin_female_offset() {
        let male = default_male();
        let mut female = default_male();
        female.sex = Sex::Female;

        let body_m = normalize(&male).unwrap();
        let body_f = normalize(&female).unwrap();
        let diff = calculate_bmr(&body_m, BmrFormula::MifflinStJeor).unwrap()
            - calculate_bmr(&body_f, BmrFormula::MifflinStJeor).unwrap();
        assert!((diff - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_harris_benedict_female_metric() {
        let input = BiometricInput::metric(30, Sex::Female, 165.0, 60.0);
        let energy = calculate_daily_energy(
            &input,
            ActivityLevel::Sedentary,
            BmrFormula::RevisedHarrisBenedict,
            ResultUnit::Calories,
        )
        .unwrap();

        assert!((energy.bmr - 1383.683).abs() < 1e-6);
        assert!((energy.tdee_kcal - 1660.4196).abs() < 1e-6);
        assert_eq!(energy.result, 1660);
    }

    #[test]
    fn test_harris_benedict_male() {
        let body = normalize(&BiometricInput::metric(40, Sex::Male, 180.0, 80.0)).unwrap();
        let bmr = calculate_bmr(&body, BmrFormula::RevisedHarrisBenedict).unwrap();
        let expected = 13.397 * 80.0 + 4.799 * 180.0 - 5.677 * 40.0 + 88.362;
        assert!((bmr - expected).abs() < 1e-9);
    }

    #[test]
    fn test_katch_mcardle_requires_body_fat() {
        let err = compute_daily_energy(
            &default_male(),
            ActivityLevel::Moderate,
            BmrFormula::KatchMcArdle,
            ResultUnit::Calories,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CalcError::InvalidInput { field: "body_fat_percent", .. }
        ));
    }

    #[test]
    fn test_katch_mcardle_zero_body_fat_uses_full_weight() {
        let input = BiometricInput::metric(30, Sex::Male, 180.0, 80.0).with_body_fat(0.0);
        let energy = calculate_daily_energy(
            &input,
            ActivityLevel::Sedentary,
            BmrFormula::KatchMcArdle,
            ResultUnit::Calories,
        )
        .unwrap();

        assert_eq!(energy.lean_mass_kg, Some(80.0));
        assert!((energy.bmr - (370.0 + 21.6 * 80.0)).abs() < 1e-9);
    }

    #[test]
    fn test_katch_mcardle_full_body_fat_is_base() {
        let input = BiometricInput::metric(30, Sex::Female, 170.0, 70.0).with_body_fat(100.0);
        let energy = calculate_daily_energy(
            &input,
            ActivityLevel::Sedentary,
            BmrFormula::KatchMcArdle,
            ResultUnit::Calories,
        )
        .unwrap();

        assert_eq!(energy.lean_mass_kg, Some(0.0));
        assert_eq!(energy.bmr, 370.0);
        assert_eq!(energy.result, 444);
    }

    #[test]
    fn test_body_fat_out_of_range() {
        let input = default_male().with_body_fat(120.0);
        let err = compute_daily_energy(
            &input,
            ActivityLevel::Moderate,
            BmrFormula::KatchMcArdle,
            ResultUnit::Calories,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_body_fat_validated_for_every_formula() {
        for formula in [BmrFormula::MifflinStJeor, BmrFormula::RevisedHarrisBenedict] {
            for body_fat in [120.0, -1.0, f64::NAN] {
                let input = default_male().with_body_fat(body_fat);
                let err = compute_daily_energy(&input, ActivityLevel::Moderate, formula, ResultUnit::Calories)
                    .unwrap_err();
                assert!(
                    matches!(err, CalcError::InvalidInput { field: "body_fat_percent", .. }),
                    "{:?} with body fat {} gave {:?}",
                    formula,
                    body_fat,
                    err
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_bmr() {
        let cases = vec![
            BiometricInput::metric(1000, Sex::Male, 170.0, 70.0),
            BiometricInput::metric(90, Sex::Female, 50.0, 5.0),
        ];

        for input in cases {
            let err = compute_daily_energy(
                &input,
                ActivityLevel::Sedentary,
                BmrFormula::MifflinStJeor,
                ResultUnit::Calories,
            )
            .unwrap_err();
            assert!(matches!(err, CalcError::InvalidInput { field: "measurements", .. }));
        }
    }

    #[test]
    fn test_rejects_overflowing_result() {
        let input = BiometricInput::metric(30, Sex::Male, 170.0, 1e308);
        let result = compute_daily_energy(
            &input,
            ActivityLevel::Sedentary,
            BmrFormula::MifflinStJeor,
            ResultUnit::Calories,
        );
        assert!(matches!(result, Err(CalcError::InvalidInput { field: "measurements", .. })));

        // Finite BMR whose kJ result no longer fits in an integer
        let body = NormalizedBody {
            age: 30,
            sex: Sex::Male,
            height_cm: 170.0,
            weight_kg: 1e300,
            body_fat_percent: None,
        };
        assert!(calculate_bmr(&body, BmrFormula::MifflinStJeor).unwrap().is_finite());
        let input = BiometricInput::metric(30, Sex::Male, 170.0, 1e300);
        let result = compute_daily_energy(
            &input,
            ActivityLevel::VeryActive,
            BmrFormula::MifflinStJeor,
            ResultUnit::Kilojoules,
        );
        assert!(matches!(result, Err(CalcError::InvalidInput { field: "measurements", .. })));
    }

    #[test]
    fn test_rejects_negative_and_zero_inputs() {
        let cases = vec![
            BiometricInput::imperial(0, Sex::Male, 5.0, 10.0, 165.0),
            BiometricInput::imperial(25, Sex::Male, -5.0, 10.0, 165.0),
            BiometricInput::imperial(25, Sex::Male, 5.0, -1.0, 165.0),
            BiometricInput::imperial(25, Sex::Male, 0.0, 0.0, 165.0),
            BiometricInput::imperial(25, Sex::Male, 5.0, 10.0, -165.0),
            BiometricInput::metric(25, Sex::Male, 175.0, 0.0),
            BiometricInput::metric(25, Sex::Male, f64::NAN, 70.0),
        ];

        for input in cases {
            let result = compute_daily_energy(
                &input,
                ActivityLevel::Moderate,
                BmrFormula::MifflinStJeor,
                ResultUnit::Calories,
            );
            assert!(
                matches!(result, Err(CalcError::InvalidInput { .. })),
                "expected rejection for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let run = || {
            compute_daily_energy(
                &default_male(),
                ActivityLevel::VeryActive,
                BmrFormula::RevisedHarrisBenedict,
                ResultUnit::Kilojoules,
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("weight", " 165 "), Ok(165.0));
        assert!(parse_number("weight", "").is_err());
        assert!(parse_number("weight", "abc").is_err());
        assert!(parse_number("weight", "inf").is_err());
        assert!(parse_number("weight", "NaN").is_err());
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("25"), Ok(25));
        assert_eq!(parse_age("30.0"), Ok(30));
        assert!(parse_age("0").is_err());
        assert!(parse_age("-3").is_err());
        assert!(parse_age("25.5").is_err());
        assert!(parse_age("twenty").is_err());
    }
}
