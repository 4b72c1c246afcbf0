//! BMR formula and result unit selection

use serde::{Deserialize, Serialize};

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

/// Closed-form BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    RevisedHarrisBenedict,
    KatchMcArdle,
}

impl BmrFormula {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "mifflin_st_jeor",
            BmrFormula::RevisedHarrisBenedict => "revised_harris_benedict",
            BmrFormula::KatchMcArdle => "katch_mcardle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "mifflinstjeor" | "mifflin" | "msj" => Some(BmrFormula::MifflinStJeor),
            "revisedharrisbenedict" | "harrisbenedict" | "harris" | "rhb" => {
                Some(BmrFormula::RevisedHarrisBenedict)
            }
            "katchmcardle" | "katch" | "km" => Some(BmrFormula::KatchMcArdle),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "Mifflin-St Jeor",
            BmrFormula::RevisedHarrisBenedict => "Revised Harris-Benedict",
            BmrFormula::KatchMcArdle => "Katch-McArdle",
        }
    }

    /// Whether the formula needs a body fat percentage
    pub fn requires_body_fat(&self) -> bool {
        matches!(self, BmrFormula::KatchMcArdle)
    }
}

/// Unit the final daily energy figure is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultUnit {
    #[default]
    Calories,
    Kilojoules,
}

impl ResultUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultUnit::Calories => "calories",
            ResultUnit::Kilojoules => "kilojoules",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "calorie" | "kcal" | "cal" => Some(ResultUnit::Calories),
            "kilojoules" | "kilojoule" | "kj" => Some(ResultUnit::Kilojoules),
            _ => None,
        }
    }

    /// Multiplier applied to a kcal figure
    pub fn factor(&self) -> f64 {
        match self {
            ResultUnit::Calories => 1.0,
            ResultUnit::Kilojoules => KJ_PER_KCAL,
        }
    }

    /// Label used when printing a daily figure
    pub fn per_day_label(&self) -> &'static str {
        match self {
            ResultUnit::Calories => "calories/day",
            ResultUnit::Kilojoules => "kJ/day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_from_str() {
        assert_eq!(BmrFormula::from_str("Mifflin-St Jeor"), Some(BmrFormula::MifflinStJeor));
        assert_eq!(
            BmrFormula::from_str("revised_harris_benedict"),
            Some(BmrFormula::RevisedHarrisBenedict)
        );
        assert_eq!(BmrFormula::from_str("Katch-McArdle"), Some(BmrFormula::KatchMcArdle));
        assert_eq!(BmrFormula::from_str("cunningham"), None);
    }

    #[test]
    fn test_result_unit_factor() {
        assert_eq!(ResultUnit::Calories.factor(), 1.0);
        assert_eq!(ResultUnit::Kilojoules.factor(), 4.184);
        assert_eq!(ResultUnit::from_str("kJ"), Some(ResultUnit::Kilojoules));
    }

    #[test]
    fn test_only_katch_requires_body_fat() {
        assert!(BmrFormula::KatchMcArdle.requires_body_fat());
        assert!(!BmrFormula::MifflinStJeor.requires_body_fat());
        assert!(!BmrFormula::RevisedHarrisBenedict.requires_body_fat());
    }
}
