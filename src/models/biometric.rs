//! Biometric input model
//!
//! Body measurements collected by the calculator form, in either unit system.

use serde::{Deserialize, Serialize};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Sex used to select the BMR equation variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Unit system the measurements were entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet/inches and pounds
    #[default]
    Imperial,
    /// Centimeters and kilograms
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "us" => Some(UnitSystem::Imperial),
            "metric" | "si" => Some(UnitSystem::Metric),
            _ => None,
        }
    }
}

/// Body height as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "lowercase")]
pub enum Height {
    Imperial { feet: f64, inches: f64 },
    Metric { centimeters: f64 },
}

impl Height {
    /// Height in centimeters (no validation)
    pub fn to_cm(&self) -> f64 {
        match *self {
            Height::Imperial { feet, inches } => (feet * INCHES_PER_FOOT + inches) * CM_PER_INCH,
            Height::Metric { centimeters } => centimeters,
        }
    }
}

/// Body weight as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "system", content = "value", rename_all = "lowercase")]
pub enum Weight {
    Pounds(f64),
    Kilograms(f64),
}

impl Weight {
    /// Weight in kilograms (no validation)
    pub fn to_kg(&self) -> f64 {
        match *self {
            Weight::Pounds(lb) => lb * KG_PER_LB,
            Weight::Kilograms(kg) => kg,
        }
    }

    /// The raw number as entered
    pub fn value(&self) -> f64 {
        match *self {
            Weight::Pounds(v) | Weight::Kilograms(v) => v,
        }
    }
}

/// Biometric input for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Age in whole years
    pub age: u32,
    pub sex: Sex,
    pub height: Height,
    pub weight: Weight,
    /// Body fat percentage (0-100), only required for Katch-McArdle
    pub body_fat_percent: Option<f64>,
}

impl BiometricInput {
    /// Build an input from imperial measurements
    pub fn imperial(age: u32, sex: Sex, feet: f64, inches: f64, pounds: f64) -> Self {
        Self {
            age,
            sex,
            height: Height::Imperial { feet, inches },
            weight: Weight::Pounds(pounds),
            body_fat_percent: None,
        }
    }

    /// Build an input from metric measurements
    pub fn metric(age: u32, sex: Sex, centimeters: f64, kilograms: f64) -> Self {
        Self {
            age,
            sex,
            height: Height::Metric { centimeters },
            weight: Weight::Kilograms(kilograms),
            body_fat_percent: None,
        }
    }

    pub fn with_body_fat(mut self, percent: f64) -> Self {
        self.body_fat_percent = Some(percent);
        self
    }
}
