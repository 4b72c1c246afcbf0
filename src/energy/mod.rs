//! Energy calculation module
//!
//! BMR/TDEE estimation and weight goal guidance.

pub mod calculator;
pub mod goals;

pub use calculator::{
    calculate_bmr, calculate_daily_energy, compute_daily_energy, lean_body_mass, normalize,
    parse_age, parse_number, DailyEnergy, NormalizedBody,
};
pub use goals::{
    goal_target, minimum_intake_kcal, weight_goal_targets, zigzag_schedule, GoalTarget,
    WeightGoal, ZigzagDay, ZigzagSchedule,
};
