//! Calories burned per hour of exercise
//!
//! Rates are tabulated for three body weights. Other weights are estimated
//! linearly between (or beyond) the nearest columns.

use serde::Serialize;

use crate::error::{CalcError, CalcResult};

/// Body weights (lb) the table columns were measured at
pub const REFERENCE_WEIGHTS_LB: [f64; 3] = [125.0, 155.0, 185.0];

/// Hourly burn for one activity at each reference weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExerciseBurn {
    pub activity: &'static str,
    pub kcal_per_hour: [u32; 3],
}

const fn burn(activity: &'static str, at_125: u32, at_155: u32, at_185: u32) -> ExerciseBurn {
    ExerciseBurn {
        activity,
        kcal_per_hour: [at_125, at_155, at_185],
    }
}

pub const EXERCISES: &[ExerciseBurn] = &[
    burn("Golf (using cart)", 198, 246, 294),
    burn("Walking (3.5 mph)", 215, 267, 319),
    burn("Kayaking", 283, 352, 420),
    burn("Softball/Baseball", 289, 359, 428),
    burn("Swimming (free-style, moderate)", 397, 492, 587),
    burn("Tennis (general)", 397, 492, 587),
    burn("Running (9 minute mile)", 624, 773, 923),
    burn("Bicycling (12-14 mph, moderate)", 454, 562, 671),
    burn("Football (general)", 399, 494, 588),
    burn("Basketball (general)", 340, 422, 503),
    burn("Soccer (general)", 397, 492, 587),
];

impl ExerciseBurn {
    /// Estimated kcal burned in one hour at the given body weight
    pub fn calories_per_hour(&self, weight_lb: f64) -> CalcResult<f64> {
        if !weight_lb.is_finite() || weight_lb <= 0.0 {
            return Err(CalcError::invalid("weight", "must be a positive number of pounds"));
        }

        let w = REFERENCE_WEIGHTS_LB;
        let k = self.kcal_per_hour.map(f64::from);

        // segment below 155 lb uses the first two columns, everything else the last two
        let (i, j) = if weight_lb < w[1] { (0, 1) } else { (1, 2) };
        let slope = (k[j] - k[i]) / (w[j] - w[i]);
        let estimate = k[i] + slope * (weight_lb - w[i]);

        Ok(estimate.max(0.0))
    }
}

/// Find activities whose name contains the query (case-insensitive)
pub fn search_exercises(query: &str) -> Vec<&'static ExerciseBurn> {
    let needle = query.trim().to_lowercase();
    EXERCISES
        .iter()
        .filter(|e| needle.is_empty() || e.activity.to_lowercase().contains(&needle))
        .collect()
}
