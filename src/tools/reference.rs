//! Reference Table MCP Tools
//!
//! Food calories, sample meal plans and exercise burn rates.

use serde::Serialize;

use crate::reference::{
    closest_meal_plan, meal_plan, search_exercises, search_foods, FoodCalories, FoodGroup, MealPlan,
    MealSlot, PlanItem, MEAL_PLANS, REFERENCE_WEIGHTS_LB,
};

/// Response for food_calories
#[derive(Debug, Serialize)]
pub struct FoodCaloriesResponse {
    pub foods: Vec<FoodRow>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct FoodRow {
    pub group_name: &'static str,
    #[serde(flatten)]
    pub food: &'static FoodCalories,
}

/// A meal with its computed total
#[derive(Debug, Serialize)]
pub struct MealView {
    pub meal: &'static str,
    pub slot: MealSlot,
    pub items: &'static [PlanItem],
    pub total_kcal: u32,
}

#[derive(Debug, Serialize)]
pub struct MealPlanView {
    pub nominal_kcal: u32,
    pub total_kcal: u32,
    pub meals: Vec<MealView>,
}

/// Response for meal_plans
#[derive(Debug, Serialize)]
pub struct MealPlansResponse {
    pub plans: Vec<MealPlanView>,
}

/// Hourly burn for one activity
#[derive(Debug, Serialize)]
pub struct ExerciseRow {
    pub activity: &'static str,
    /// kcal/hour at 125, 155 and 185 lb
    pub kcal_per_hour: [u32; 3],
    /// Only present when a body weight was given
    pub estimated_kcal_per_hour: Option<i64>,
    pub estimated_kcal: Option<i64>,
}

/// Response for exercise_calories
#[derive(Debug, Serialize)]
pub struct ExerciseCaloriesResponse {
    pub reference_weights_lb: [f64; 3],
    pub weight_lb: Option<f64>,
    pub hours: f64,
    pub exercises: Vec<ExerciseRow>,
}

pub fn food_calories(query: Option<&str>, group: Option<&str>) -> Result<FoodCaloriesResponse, String> {
    let group = match group {
        Some(g) => Some(FoodGroup::from_str(g).ok_or_else(|| {
            format!(
                "Invalid food group: '{}'. Valid groups: fruit, vegetables, proteins, common_meals_snacks, beverages_dairy",
                g
            )
        })?),
        None => None,
    };

    let foods: Vec<FoodRow> = search_foods(query.unwrap_or(""), group)
        .into_iter()
        .map(|food| FoodRow {
            group_name: food.group.display_name(),
            food,
        })
        .collect();

    Ok(FoodCaloriesResponse {
        total: foods.len(),
        foods,
    })
}

fn plan_view(plan: &MealPlan) -> MealPlanView {
    MealPlanView {
        nominal_kcal: plan.nominal_kcal,
        total_kcal: plan.total_kcal(),
        meals: plan
            .meals
            .iter()
            .map(|m| MealView {
                meal: m.slot.display_name(),
                slot: m.slot,
                items: m.items,
                total_kcal: m.total_kcal(),
            })
            .collect(),
    }
}

/// All plans, one plan by level, or the plan closest to a daily target
pub fn meal_plans(plan_kcal: Option<u32>, daily_target_kcal: Option<f64>) -> Result<MealPlansResponse, String> {
    let plans = match (plan_kcal, daily_target_kcal) {
        (Some(kcal), _) => {
            let plan = meal_plan(kcal)
                .ok_or_else(|| format!("No {} Calorie meal plan. Available plans: 1200, 1500, 2000", kcal))?;
            vec![plan_view(plan)]
        }
        (None, Some(target)) => {
            if !target.is_finite() || target <= 0.0 {
                return Err(format!("Invalid daily target: {}. Must be a positive kcal value", target));
            }
            vec![plan_view(closest_meal_plan(target))]
        }
        (None, None) => MEAL_PLANS.iter().map(plan_view).collect(),
    };

    Ok(MealPlansResponse { plans })
}

pub fn exercise_calories(
    query: Option<&str>,
    weight_lb: Option<f64>,
    hours: Option<f64>,
) -> Result<ExerciseCaloriesResponse, String> {
    let hours = hours.unwrap_or(1.0);
    if !hours.is_finite() || hours < 0.0 {
        return Err(format!("Invalid hours: {}. Must be zero or more", hours));
    }

    let exercises = search_exercises(query.unwrap_or(""))
        .into_iter()
        .map(|e| {
            let per_hour = match weight_lb {
                Some(w) => Some(e.calories_per_hour(w).map_err(|err| err.to_string())?),
                None => None,
            };
            Ok(ExerciseRow {
                activity: e.activity,
                kcal_per_hour: e.kcal_per_hour,
                estimated_kcal_per_hour: per_hour.map(|k| k.round() as i64),
                estimated_kcal: per_hour.map(|k| (k * hours).round() as i64),
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    Ok(ExerciseCaloriesResponse {
        reference_weights_lb: REFERENCE_WEIGHTS_LB,
        weight_lb,
        hours,
        exercises,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_calories_filters() {
        let all = food_calories(None, None).unwrap();
        assert_eq!(all.total, crate::reference::FOODS.len());

        let fruit = food_calories(None, Some("fruit")).unwrap();
        assert!(fruit.foods.iter().all(|f| f.group_name == "Fruit"));

        assert!(food_calories(None, Some("candy")).is_err());
    }

    #[test]
    fn test_meal_plans() {
        assert_eq!(meal_plans(None, None).unwrap().plans.len(), 3);

        let plan = meal_plans(Some(1200), None).unwrap();
        assert_eq!(plan.plans[0].total_kcal, 1200);
        assert_eq!(plan.plans[0].meals[1].meal, "Snack");

        let closest = meal_plans(None, Some(1550.0)).unwrap();
        assert_eq!(closest.plans[0].nominal_kcal, 1500);

        assert!(meal_plans(Some(1800), None).is_err());
        assert!(meal_plans(None, Some(0.0)).is_err());
    }

    #[test]
    fn test_exercise_estimates() {
        let response = exercise_calories(Some("walking"), Some(155.0), Some(0.5)).unwrap();
        assert_eq!(response.exercises.len(), 1);
        assert_eq!(response.exercises[0].estimated_kcal_per_hour, Some(267));
        assert_eq!(response.exercises[0].estimated_kcal, Some(134));

        let table = exercise_calories(None, None, None).unwrap();
        assert!(table.exercises.iter().all(|e| e.estimated_kcal.is_none()));

        assert!(exercise_calories(None, Some(-5.0), None).is_err());
        assert!(exercise_calories(None, None, Some(-1.0)).is_err());
    }
}
