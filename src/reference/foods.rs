//! Calories in common foods
//!
//! Static lookup table shown alongside the calculator.

use serde::Serialize;

/// Section of the food table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodGroup {
    Fruit,
    Vegetables,
    Proteins,
    CommonMealsSnacks,
    BeveragesDairy,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 5] = [
        FoodGroup::Fruit,
        FoodGroup::Vegetables,
        FoodGroup::Proteins,
        FoodGroup::CommonMealsSnacks,
        FoodGroup::BeveragesDairy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::Fruit => "fruit",
            FoodGroup::Vegetables => "vegetables",
            FoodGroup::Proteins => "proteins",
            FoodGroup::CommonMealsSnacks => "common_meals_snacks",
            FoodGroup::BeveragesDairy => "beverages_dairy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['/', '-', ' '], "_").as_str() {
            "fruit" | "fruits" => Some(FoodGroup::Fruit),
            "vegetables" | "vegetable" => Some(FoodGroup::Vegetables),
            "proteins" | "protein" => Some(FoodGroup::Proteins),
            "common_meals_snacks" | "meals" | "snacks" => Some(FoodGroup::CommonMealsSnacks),
            "beverages_dairy" | "beverages" | "dairy" => Some(FoodGroup::BeveragesDairy),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FoodGroup::Fruit => "Fruit",
            FoodGroup::Vegetables => "Vegetables",
            FoodGroup::Proteins => "Proteins",
            FoodGroup::CommonMealsSnacks => "Common Meals/Snacks",
            FoodGroup::BeveragesDairy => "Beverages/Dairy",
        }
    }
}

/// Energy content of one serving of a food
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodCalories {
    pub group: FoodGroup,
    pub food: &'static str,
    pub serving: &'static str,
    pub kcal: u32,
    pub kj: u32,
}

const fn food(
    group: FoodGroup,
    food: &'static str,
    serving: &'static str,
    kcal: u32,
    kj: u32,
) -> FoodCalories {
    FoodCalories { group, food, serving, kcal, kj }
}

pub const FOODS: &[FoodCalories] = &[
    food(FoodGroup::Fruit, "Apple", "1 (4 oz.)", 59, 247),
    food(FoodGroup::Fruit, "Banana", "1 (6 oz.)", 151, 632),
    food(FoodGroup::Fruit, "Grapes", "1 cup", 100, 419),
    food(FoodGroup::Fruit, "Orange", "1 (4 oz.)", 53, 222),
    food(FoodGroup::Fruit, "Pear", "1 (5 oz.)", 82, 343),
    food(FoodGroup::Fruit, "Peach", "1 (6 oz.)", 67, 281),
    food(FoodGroup::Fruit, "Pineapple", "1 cup", 82, 343),
    food(FoodGroup::Fruit, "Strawberry", "1 cup", 53, 222),
    food(FoodGroup::Fruit, "Watermelon", "1 cup", 50, 209),
    food(FoodGroup::Vegetables, "Asparagus", "1 cup", 27, 113),
    food(FoodGroup::Vegetables, "Broccoli", "1 cup", 45, 188),
    food(FoodGroup::Vegetables, "Carrots", "1 cup", 50, 209),
    food(FoodGroup::Vegetables, "Cucumber", "4 oz.", 17, 71),
    food(FoodGroup::Vegetables, "Eggplant", "1 cup", 35, 147),
    food(FoodGroup::Vegetables, "Lettuce", "1 cup", 5, 21),
    food(FoodGroup::Vegetables, "Tomato", "1 cup", 22, 92),
    food(FoodGroup::Proteins, "Beef, regular, cooked", "2 oz.", 142, 595),
    food(FoodGroup::Proteins, "Chicken, cooked", "2 oz.", 136, 569),
    food(FoodGroup::Proteins, "Tofu", "4 oz.", 86, 360),
    food(FoodGroup::Proteins, "Egg", "1 large", 78, 327),
    food(FoodGroup::Proteins, "Fish, Catfish, cooked", "2 oz.", 136, 569),
    food(FoodGroup::Proteins, "Pork, cooked", "2 oz.", 137, 574),
    food(FoodGroup::Proteins, "Shrimp, cooked", "2 oz.", 56, 234),
    food(FoodGroup::CommonMealsSnacks, "Bread, white", "1 slice (1 oz.)", 75, 314),
    food(FoodGroup::CommonMealsSnacks, "Butter", "1 tablespoon", 102, 427),
    food(FoodGroup::CommonMealsSnacks, "Caesar salad", "3 cups", 481, 2014),
    food(FoodGroup::CommonMealsSnacks, "Cheeseburger", "1 sandwich", 285, 1193),
    food(FoodGroup::CommonMealsSnacks, "Hamburger", "1 sandwich", 250, 1047),
    food(FoodGroup::CommonMealsSnacks, "Dark Chocolate", "1 oz.", 155, 649),
    food(FoodGroup::CommonMealsSnacks, "Corn", "1 cup", 132, 553),
    food(FoodGroup::CommonMealsSnacks, "Pizza", "1 slice (14\")", 285, 1193),
    food(FoodGroup::CommonMealsSnacks, "Potato", "6 oz.", 130, 544),
    food(FoodGroup::CommonMealsSnacks, "Rice", "1 cup cooked", 206, 862),
    food(FoodGroup::CommonMealsSnacks, "Sandwich", "1 (6\" Subway Turkey Sandwich)", 200, 837),
    food(FoodGroup::BeveragesDairy, "Beer", "1 can", 154, 645),
    food(FoodGroup::BeveragesDairy, "Coca-Cola Classic", "1 can", 150, 628),
    food(FoodGroup::BeveragesDairy, "Diet Coke", "1 can", 0, 0),
    food(FoodGroup::BeveragesDairy, "Milk (1%)", "1 cup", 102, 427),
    food(FoodGroup::BeveragesDairy, "Milk (2%)", "1 cup", 122, 511),
    food(FoodGroup::BeveragesDairy, "Milk (Whole)", "1 cup", 146, 611),
    food(FoodGroup::BeveragesDairy, "Orange Juice", "1 cup", 111, 465),
    food(FoodGroup::BeveragesDairy, "Apple cider", "1 cup", 117, 490),
    food(FoodGroup::BeveragesDairy, "Yogurt (low-fat)", "1 cup", 154, 645),
    food(FoodGroup::BeveragesDairy, "Yogurt (non-fat)", "1 cup", 110, 461),
];

/// Foods whose name contains `query` (case-insensitive), optionally within one group
pub fn search_foods(query: &str, group: Option<FoodGroup>) -> Vec<&'static FoodCalories> {
    let needle = query.trim().to_lowercase();
    FOODS
        .iter()
        .filter(|f| group.map_or(true, |g| f.group == g))
        .filter(|f| needle.is_empty() || f.food.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{convert, UnitCategory};

    #[test]
    fn test_every_group_has_rows() {
        for group in FoodGroup::ALL {
            assert!(FOODS.iter().any(|f| f.group == group), "{:?} is empty", group);
        }
    }

    #[test]
    fn test_kj_column_matches_kcal() {
        for f in FOODS {
            let kj = convert(f64::from(f.kcal), "kcal", "kJ", UnitCategory::Energy).unwrap();
            assert!((kj - f64::from(f.kj)).abs() <= 2.0, "{} {} kcal vs {} kJ", f.food, f.kcal, f.kj);
        }
    }

    #[test]
    fn test_search_foods() {
        let milk = search_foods("milk", None);
        assert_eq!(milk.len(), 3);

        let fruit = search_foods("", Some(FoodGroup::Fruit));
        assert_eq!(fruit.len(), 9);

        let apple = search_foods("APPLE", Some(FoodGroup::Fruit));
        let names: Vec<&str> = apple.iter().map(|f| f.food).collect();
        assert_eq!(names, vec!["Apple", "Pineapple"]);
        assert_eq!(apple[0].kcal, 59);
    }

    #[test]
    fn test_group_from_str() {
        assert_eq!(FoodGroup::from_str("Beverages/Dairy"), Some(FoodGroup::BeveragesDairy));
        assert_eq!(FoodGroup::from_str("common meals/snacks"), Some(FoodGroup::CommonMealsSnacks));
        assert_eq!(FoodGroup::from_str("candy"), None);
    }
}
