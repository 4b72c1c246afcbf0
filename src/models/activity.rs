//! Activity level model

use serde::{Deserialize, Serialize};

/// Activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier for this level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect();

        match normalized.as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" | "lightlyactive" => Some(ActivityLevel::Light),
            "moderate" | "moderatelyactive" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "veryactive" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary: little or no exercise",
            ActivityLevel::Light => "Light: exercise 1-3 times/week",
            ActivityLevel::Moderate => "Moderate: exercise 4-5 times/week",
            ActivityLevel::Active => "Active: daily exercise or intense exercise 3-4 times/week",
            ActivityLevel::VeryActive => "Very Active: intense exercise 6-7 times/week",
        }
    }
}
