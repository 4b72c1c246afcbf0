//! Form state
//!
//! The page holds the calorie calculator or the other-units converter in its
//! main tab, and the food energy converter beside it at all times.

pub mod calculator;
pub mod converter;

use serde::Serialize;

use crate::conversion::UnitCategory;

pub use calculator::{CalculatorField, CalculatorForm, CalculatorSettings};
pub use converter::{ConverterForm, ConverterOutput};

/// Main tab selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Calculator,
    OtherUnits,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Calculator => "calculator",
            Tab::OtherUnits => "other_units",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "calculator" | "calorie_calculator" => Some(Tab::Calculator),
            "other_units" | "units" | "converter" => Some(Tab::OtherUnits),
            _ => None,
        }
    }
}

/// Content of the main tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum PageMode {
    Calculator(CalculatorForm),
    OtherUnits(ConverterForm),
}

/// Which form a clear applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// Whatever the main tab shows
    Main,
    FoodEnergy,
}

/// Everything one visitor can see and edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    pub mode: PageMode,
    pub food_energy: ConverterForm,
    #[serde(skip)]
    default_settings: Option<CalculatorSettings>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PageState {
    /// A fresh page; `default_settings` seeds every new calculator form
    pub fn new(default_settings: Option<CalculatorSettings>) -> Self {
        Self {
            mode: PageMode::Calculator(CalculatorForm::with_settings(default_settings.clone())),
            food_energy: ConverterForm::new(UnitCategory::Energy),
            default_settings,
        }
    }

    pub fn tab(&self) -> Tab {
        match self.mode {
            PageMode::Calculator(_) => Tab::Calculator,
            PageMode::OtherUnits(_) => Tab::OtherUnits,
        }
    }

    /// Show a tab. Selecting the active tab keeps its state; the other
    /// tab starts from its defaults.
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab() == tab {
            return;
        }

        tracing::debug!("Switching to {} tab", tab.as_str());
        self.mode = match tab {
            Tab::Calculator => PageMode::Calculator(CalculatorForm::with_settings(self.default_settings.clone())),
            Tab::OtherUnits => PageMode::OtherUnits(ConverterForm::new(UnitCategory::Length)),
        };
    }

    /// The calculator form, if its tab is showing
    pub fn calculator_mut(&mut self) -> Option<&mut CalculatorForm> {
        match &mut self.mode {
            PageMode::Calculator(form) => Some(form),
            PageMode::OtherUnits(_) => None,
        }
    }

    /// The other-units converter, if its tab is showing
    pub fn other_units_mut(&mut self) -> Option<&mut ConverterForm> {
        match &mut self.mode {
            PageMode::OtherUnits(form) => Some(form),
            PageMode::Calculator(_) => None,
        }
    }

    pub fn clear(&mut self, target: FormTarget) {
        match target {
            FormTarget::Main => match &mut self.mode {
                PageMode::Calculator(form) => form.clear(),
                PageMode::OtherUnits(form) => form.clear(),
            },
            FormTarget::FoodEnergy => self.food_energy.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_calculator() {
        let page = PageState::default();
        assert_eq!(page.tab(), Tab::Calculator);
        assert_eq!(page.food_energy.category, UnitCategory::Energy);
    }

    #[test]
    fn test_same_tab_is_noop() {
        let mut page = PageState::default();
        page.calculator_mut().unwrap().calculate().unwrap();
        page.switch_tab(Tab::Calculator);
        assert!(page.calculator_mut().unwrap().result.is_some());
    }

    #[test]
    fn test_other_tab_starts_fresh() {
        let mut page = PageState::default();
        page.calculator_mut().unwrap().set_field(CalculatorField::Age, "40").unwrap();

        page.switch_tab(Tab::OtherUnits);
        assert!(page.calculator_mut().is_none());
        let converter = page.other_units_mut().unwrap();
        assert_eq!(converter.category, UnitCategory::Length);
        converter.set_value("5");

        page.switch_tab(Tab::Calculator);
        assert_eq!(page.calculator_mut().unwrap().age, "25");
        assert!(page.other_units_mut().is_none());
    }

    #[test]
    fn test_food_energy_survives_tab_switches() {
        let mut page = PageState::default();
        page.food_energy.set_value("250");
        page.switch_tab(Tab::OtherUnits);
        page.switch_tab(Tab::Calculator);
        assert_eq!(page.food_energy.value, "250");
    }

    #[test]
    fn test_clear_targets() {
        let mut page = PageState::default();
        page.food_energy.set_value("9");
        page.calculator_mut().unwrap().set_field(CalculatorField::Weight, "180").unwrap();

        page.clear(FormTarget::Main);
        assert_eq!(page.calculator_mut().unwrap().weight, "165");
        assert_eq!(page.food_energy.value, "9");

        page.clear(FormTarget::FoodEnergy);
        assert_eq!(page.food_energy.value, "1");
    }

    #[test]
    fn test_configured_settings_seed_new_forms() {
        let settings = CalculatorSettings {
            result_unit: crate::models::ResultUnit::Kilojoules,
            ..Default::default()
        };
        let mut page = PageState::new(Some(settings));
        page.switch_tab(Tab::OtherUnits);
        page.switch_tab(Tab::Calculator);
        assert_eq!(page.calculator_mut().unwrap().calculate().unwrap().result, 11282);
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(Tab::from_str("other-units"), Some(Tab::OtherUnits));
        assert_eq!(Tab::from_str("Calculator"), Some(Tab::Calculator));
        assert_eq!(Tab::from_str("settings"), None);
    }
}
