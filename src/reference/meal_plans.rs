//! Sample meal plans
//!
//! 1200, 1500 and 2000 Calorie sample days. Section totals are computed from
//! the items rather than stored.

use serde::Serialize;

/// Position of a meal within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
}

impl MealSlot {
    pub fn display_name(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MorningSnack | MealSlot::AfternoonSnack => "Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// A single food in a planned meal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanItem {
    pub name: &'static str,
    pub kcal: u32,
}

/// One meal of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub items: &'static [PlanItem],
}

impl PlannedMeal {
    pub fn total_kcal(&self) -> u32 {
        self.items.iter().map(|i| i.kcal).sum()
    }
}

/// A sample day of eating
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealPlan {
    /// The Calorie level the plan is named after
    pub nominal_kcal: u32,
    pub meals: &'static [PlannedMeal],
}

impl MealPlan {
    pub fn total_kcal(&self) -> u32 {
        self.meals.iter().map(PlannedMeal::total_kcal).sum()
    }
}

const fn item(name: &'static str, kcal: u32) -> PlanItem {
    PlanItem { name, kcal }
}

pub const MEAL_PLANS: &[MealPlan] = &[
    MealPlan {
        nominal_kcal: 1200,
        meals: &[
            PlannedMeal {
                slot: MealSlot::Breakfast,
                items: &[item("All-bran cereal", 125), item("Milk", 50), item("Banana", 90)],
            },
            PlannedMeal {
                slot: MealSlot::MorningSnack,
                items: &[item("Cucumber", 30), item("Avocado dip", 50)],
            },
            PlannedMeal {
                slot: MealSlot::Lunch,
                items: &[item("Grilled cheese with tomato", 300), item("Salad", 50)],
            },
            PlannedMeal {
                slot: MealSlot::AfternoonSnack,
                items: &[item("Walnuts", 100)],
            },
            PlannedMeal {
                slot: MealSlot::Dinner,
                items: &[item("Grilled Chicken", 200), item("Brussel sprouts", 100), item("Quinoa", 105)],
            },
        ],
    },
    MealPlan {
        nominal_kcal: 1500,
        meals: &[
            PlannedMeal {
                slot: MealSlot::Breakfast,
                items: &[item("Granola", 120), item("Greek yogurt", 120), item("Blueberries", 40)],
            },
            PlannedMeal {
                slot: MealSlot::MorningSnack,
                items: &[item("Orange", 70), item("Greek yogurt", 120)],
            },
            PlannedMeal {
                slot: MealSlot::Lunch,
                items: &[item("Chicken and vegetable soup", 300), item("Bread", 100)],
            },
            PlannedMeal {
                slot: MealSlot::AfternoonSnack,
                items: &[item("Apple", 75), item("Peanut butter", 75)],
            },
            PlannedMeal {
                slot: MealSlot::Dinner,
                items: &[item("Steak", 375), item("Mashed potatoes", 150), item("Asparagus", 75)],
            },
        ],
    },
    MealPlan {
        nominal_kcal: 2000,
        meals: &[
            PlannedMeal {
                slot: MealSlot::Breakfast,
                items: &[
                    item("Buttered toast", 150),
                    item("Egg", 80),
                    item("Banana", 90),
                    item("Almonds", 170),
                ],
            },
            PlannedMeal {
                slot: MealSlot::MorningSnack,
                items: &[item("Blueberries", 40)],
            },
            PlannedMeal {
                slot: MealSlot::Lunch,
                items: &[item("Grilled chicken", 225), item("Grilled vegetables", 125), item("Pasta", 185)],
            },
            PlannedMeal {
                slot: MealSlot::AfternoonSnack,
                items: &[item("Hummus", 50), item("Baby carrots", 35), item("Crackers", 65)],
            },
            PlannedMeal {
                slot: MealSlot::Dinner,
                items: &[
                    item("Grilled salmon", 225),
                    item("Brown rice", 175),
                    item("Green beans", 100),
                    item("Walnuts", 165),
                ],
            },
        ],
    },
];

/// The plan named after the given Calorie level
pub fn meal_plan(nominal_kcal: u32) -> Option<&'static MealPlan> {
    MEAL_PLANS.iter().find(|p| p.nominal_kcal == nominal_kcal)
}

/// The plan whose nominal level is closest to a daily target
pub fn closest_meal_plan(daily_kcal: f64) -> &'static MealPlan {
    MEAL_PLANS
        .iter()
        .min_by(|a, b| {
            let da = (f64::from(a.nominal_kcal) - daily_kcal).abs();
            let db = (f64::from(b.nominal_kcal) - daily_kcal).abs();
            da.total_cmp(&db)
        })
        .unwrap_or(&MEAL_PLANS[0])
}
