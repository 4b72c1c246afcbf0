//! Weight goal guidance
//!
//! Turns a maintenance TDEE into daily targets for losing or gaining weight,
//! and spreads a daily target across a zigzag (calorie cycling) week.

use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::models::Sex;

/// Approximate kcal stored in one pound of body weight
pub const KCAL_PER_LB: f64 = 3500.0;
/// Approximate kcal stored in one kilogram of body weight
pub const KCAL_PER_KG: f64 = 7700.0;
/// Largest daily deficit considered safe
pub const MAX_SAFE_DEFICIT_KCAL: f64 = 1000.0;
/// Recommended minimum daily intake for men
pub const MIN_INTAKE_MALE_KCAL: f64 = 1500.0;
/// Recommended minimum daily intake for women
pub const MIN_INTAKE_FEMALE_KCAL: f64 = 1200.0;
/// Multiplier applied to the daily target on high days
pub const ZIGZAG_HIGH_DAY_FACTOR: f64 = 1.2;

const DAYS_PER_WEEK: f64 = 7.0;

/// Weight change goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    Maintain,
    MildLoss,
    Loss,
    ExtremeLoss,
    MildGain,
    Gain,
    FastGain,
}

impl WeightGoal {
    pub const ALL: [WeightGoal; 7] = [
        WeightGoal::Maintain,
        WeightGoal::MildLoss,
        WeightGoal::Loss,
        WeightGoal::ExtremeLoss,
        WeightGoal::MildGain,
        WeightGoal::Gain,
        WeightGoal::FastGain,
    ];

    /// Signed weekly weight change in pounds
    pub fn lb_per_week(&self) -> f64 {
        match self {
            WeightGoal::Maintain => 0.0,
            WeightGoal::MildLoss => -0.5,
            WeightGoal::Loss => -1.0,
            WeightGoal::ExtremeLoss => -2.0,
            WeightGoal::MildGain => 0.5,
            WeightGoal::Gain => 1.0,
            WeightGoal::FastGain => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightGoal::Maintain => "maintain",
            WeightGoal::MildLoss => "mild_loss",
            WeightGoal::Loss => "loss",
            WeightGoal::ExtremeLoss => "extreme_loss",
            WeightGoal::MildGain => "mild_gain",
            WeightGoal::Gain => "gain",
            WeightGoal::FastGain => "fast_gain",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeightGoal::Maintain => "Maintain weight",
            WeightGoal::MildLoss => "Mild weight loss (0.5 lb/week)",
            WeightGoal::Loss => "Weight loss (1 lb/week)",
            WeightGoal::ExtremeLoss => "Extreme weight loss (2 lb/week)",
            WeightGoal::MildGain => "Mild weight gain (0.5 lb/week)",
            WeightGoal::Gain => "Weight gain (1 lb/week)",
            WeightGoal::FastGain => "Fast weight gain (2 lb/week)",
        }
    }

    /// Daily kcal adjustment relative to maintenance
    pub fn daily_adjustment_kcal(&self) -> f64 {
        self.lb_per_week() * KCAL_PER_LB / DAYS_PER_WEEK
    }
}

/// One row of the weight goal table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalTarget {
    pub goal: WeightGoal,
    pub label: &'static str,
    pub lb_per_week: f64,
    pub kg_per_week: f64,
    pub daily_kcal: i64,
    /// Target as a percentage of maintenance, rounded to a whole percent
    pub percent_of_tdee: i64,
    pub below_minimum: bool,
    pub exceeds_safe_deficit: bool,
}

/// Recommended minimum daily intake
pub fn minimum_intake_kcal(sex: Sex) -> f64 {
    match sex {
        Sex::Male => MIN_INTAKE_MALE_KCAL,
        Sex::Female => MIN_INTAKE_FEMALE_KCAL,
    }
}

/// Daily target for a single goal
pub fn goal_target(tdee_kcal: f64, sex: Sex, goal: WeightGoal) -> CalcResult<GoalTarget> {
    ensure_positive_kcal("tdee", tdee_kcal)?;

    let adjustment = goal.daily_adjustment_kcal();
    let target = tdee_kcal + adjustment;
    let lb_per_week = goal.lb_per_week();

    Ok(GoalTarget {
        goal,
        label: goal.display_name(),
        lb_per_week,
        kg_per_week: lb_per_week * KCAL_PER_LB / KCAL_PER_KG,
        daily_kcal: target.round() as i64,
        percent_of_tdee: (target / tdee_kcal * 100.0).round() as i64,
        below_minimum: target < minimum_intake_kcal(sex),
        exceeds_safe_deficit: -adjustment > MAX_SAFE_DEFICIT_KCAL,
    })
}

/// Targets for every goal, maintenance first
pub fn weight_goal_targets(tdee_kcal: f64, sex: Sex) -> CalcResult<Vec<GoalTarget>> {
    WeightGoal::ALL
        .iter()
        .map(|goal| goal_target(tdee_kcal, sex, *goal))
        .collect()
}

/// One day of a zigzag week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZigzagDay {
    pub day: &'static str,
    pub high: bool,
    pub kcal: i64,
}

/// A week of calorie cycling around a daily target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZigzagSchedule {
    pub daily_target_kcal: f64,
    pub weekly_target_kcal: i64,
    pub weekly_total_kcal: i64,
    pub days: Vec<ZigzagDay>,
}

const WEEK: [(&str, bool); 7] = [
    ("Monday", false),
    ("Tuesday", false),
    ("Wednesday", false),
    ("Thursday", false),
    ("Friday", false),
    ("Saturday", true),
    ("Sunday", true),
];

/// Spread a daily target over a week with two high days and five low days
pub fn zigzag_schedule(daily_target_kcal: f64) -> CalcResult<ZigzagSchedule> {
    ensure_positive_kcal("daily_target_kcal", daily_target_kcal)?;

    let weekly = daily_target_kcal * DAYS_PER_WEEK;
    let high_days = WEEK.iter().filter(|&&(_, high)| high).count() as f64;
    let low_days = DAYS_PER_WEEK - high_days;

    let high_kcal = (daily_target_kcal * ZIGZAG_HIGH_DAY_FACTOR).round();
    let low_kcal = ((weekly - high_kcal * high_days) / low_days).round();

    let days: Vec<ZigzagDay> = WEEK
        .iter()
        .map(|&(day, high)| ZigzagDay {
            day,
            high,
            kcal: if high { high_kcal as i64 } else { low_kcal as i64 },
        })
        .collect();

    let weekly_total_kcal = days.iter().map(|d| d.kcal).sum();

    Ok(ZigzagSchedule {
        daily_target_kcal,
        weekly_target_kcal: weekly.round() as i64,
        weekly_total_kcal,
        days,
    })
}

fn ensure_positive_kcal(field: &'static str, kcal: f64) -> CalcResult<()> {
    if !kcal.is_finite() || kcal <= 0.0 {
        return Err(CalcError::invalid(field, format!("must be a positive kcal value, got {}", kcal)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintain_equals_tdee() {
        let target = goal_target(2696.5, Sex::Male, WeightGoal::Maintain).unwrap();
        assert_eq!(target.daily_kcal, 2697);
        assert_eq!(target.percent_of_tdee, 100);
        assert!(!target.below_minimum);
    }

    #[test]
    fn test_one_pound_per_week_is_500_kcal() {
        let target = goal_target(2500.0, Sex::Male, WeightGoal::Loss).unwrap();
        assert_eq!(target.daily_kcal, 2000);
        assert_eq!(target.percent_of_tdee, 80);
        assert!(!target.exceeds_safe_deficit);
    }

    #[test]
    fn test_extreme_loss_flags() {
        let target = goal_target(1800.0, Sex::Female, WeightGoal::ExtremeLoss).unwrap();
        assert_eq!(target.daily_kcal, 800);
        assert!(target.below_minimum);
        assert!(!target.exceeds_safe_deficit);

        let male = goal_target(1800.0, Sex::Male, WeightGoal::Loss).unwrap();
        assert!(male.below_minimum);
    }

    #[test]
    fn test_goal_table_order_and_gain() {
        let table = weight_goal_targets(2000.0, Sex::Female).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(table[0].goal, WeightGoal::Maintain);
        let gain = table.iter().find(|t| t.goal == WeightGoal::Gain).unwrap();
        assert_eq!(gain.daily_kcal, 2500);
        assert!((gain.kg_per_week - 0.4545).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_tdee() {
        assert!(weight_goal_targets(0.0, Sex::Male).is_err());
        assert!(weight_goal_targets(f64::NAN, Sex::Male).is_err());
    }

    #[test]
    fn test_zigzag_preserves_weekly_total() {
        let schedule = zigzag_schedule(2000.0).unwrap();
        assert_eq!(schedule.days.len(), 7);
        assert_eq!(schedule.weekly_target_kcal, 14000);
        assert!((schedule.weekly_total_kcal - schedule.weekly_target_kcal).abs() <= 5);

        let saturday = &schedule.days[5];
        assert!(saturday.high);
        assert_eq!(saturday.kcal, 2400);
        assert_eq!(schedule.days[0].kcal, 1840);
    }

    #[test]
    fn test_zigzag_rejects_non_positive() {
        assert!(zigzag_schedule(-100.0).is_err());
        assert!(zigzag_schedule(0.0).is_err());
    }
}
