//! Reference tables
//!
//! Static guidance shown alongside the calculator: food energy values,
//! sample meal plans and exercise burn rates.

pub mod exercises;
pub mod foods;
pub mod meal_plans;

pub use exercises::{search_exercises, ExerciseBurn, EXERCISES, REFERENCE_WEIGHTS_LB};
pub use foods::{search_foods, FoodCalories, FoodGroup, FOODS};
pub use meal_plans::{closest_meal_plan, meal_plan, MealPlan, MealSlot, PlanItem, PlannedMeal, MEAL_PLANS};
