//! Page State MCP Tools
//!
//! Edits the session's calculator and converter forms the way a visitor
//! would: field edits, an explicit calculate, tab switches and clears.

use serde::Serialize;

use crate::conversion::UnitCategory;
use crate::energy::DailyEnergy;
use crate::form::{CalculatorField, ConverterForm, FormTarget, PageState, Tab};
use crate::tools::calculator::summarize;

/// Which converter an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterTarget {
    /// The always-visible food energy converter
    FoodEnergy,
    /// The converter on the Other Units tab
    OtherUnits,
}

impl ConverterTarget {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "food_energy" | "energy" | "food" => Some(ConverterTarget::FoodEnergy),
            "other_units" | "units" | "other" => Some(ConverterTarget::OtherUnits),
            _ => None,
        }
    }
}

/// Requested converter changes, applied category first then value, units, swap
#[derive(Debug, Clone, Default)]
pub struct ConverterEdit {
    pub category: Option<String>,
    pub value: Option<String>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
    pub swap: bool,
}

/// Response for calculate_form
#[derive(Debug, Serialize)]
pub struct CalculateFormResponse {
    pub summary: String,
    pub result: DailyEnergy,
}

/// Response for switch_tab and clear_form
#[derive(Debug, Serialize)]
pub struct PageActionResponse {
    pub success: bool,
    pub message: String,
    pub tab: Tab,
}

pub fn get_page_state(page: &PageState) -> PageState {
    page.clone()
}

/// Apply field edits to the calculator. Either every edit applies or none do.
pub fn edit_calculator_form(page: &mut PageState, edits: &[(&str, String)]) -> Result<PageState, String> {
    let form = page
        .calculator_mut()
        .ok_or_else(|| "The calculator tab is not active. Call switch_tab with tab 'calculator' first".to_string())?;

    let mut draft = form.clone();
    for (name, value) in edits {
        let field = CalculatorField::from_str(name).ok_or_else(|| format!("Unknown calculator field: '{}'", name))?;
        draft.set_field(field, value).map_err(|e| e.to_string())?;
    }
    *form = draft;

    Ok(page.clone())
}

pub fn calculate_form(page: &mut PageState) -> Result<CalculateFormResponse, String> {
    let form = page
        .calculator_mut()
        .ok_or_else(|| "The calculator tab is not active. Call switch_tab with tab 'calculator' first".to_string())?;

    let result = form
        .calculate()
        .map_err(|e| format!("{}. The previous result was kept", e))?
        .clone();

    Ok(CalculateFormResponse {
        summary: summarize(&result),
        result,
    })
}

pub fn edit_converter_form(
    page: &mut PageState,
    target: &str,
    edit: &ConverterEdit,
) -> Result<ConverterForm, String> {
    let target = ConverterTarget::from_str(target)
        .ok_or_else(|| format!("Invalid converter: '{}'. Valid converters: food_energy, other_units", target))?;

    let category = match edit.category.as_deref() {
        Some(c) => Some(UnitCategory::from_str(c).ok_or_else(|| {
            format!("Invalid unit category: '{}'. Valid categories: energy, length, mass", c)
        })?),
        None => None,
    };

    let form = match target {
        ConverterTarget::FoodEnergy => {
            if category.is_some_and(|c| c != UnitCategory::Energy) {
                return Err("The food energy converter only converts energy units".to_string());
            }
            &mut page.food_energy
        }
        ConverterTarget::OtherUnits => page
            .other_units_mut()
            .ok_or_else(|| "The other units tab is not active. Call switch_tab with tab 'other_units' first".to_string())?,
    };

    if let Some(c) = category {
        if c != form.category {
            form.set_category(c);
        }
    }
    if let Some(value) = &edit.value {
        form.set_value(value);
    }
    if let Some(unit) = &edit.from_unit {
        form.set_from_unit(unit);
    }
    if let Some(unit) = &edit.to_unit {
        form.set_to_unit(unit);
    }
    if edit.swap {
        form.swap_units();
    }

    Ok(form.clone())
}

pub fn switch_tab(page: &mut PageState, tab: &str) -> Result<PageActionResponse, String> {
    let tab = Tab::from_str(tab).ok_or_else(|| format!("Invalid tab: '{}'. Valid tabs: calculator, other_units", tab))?;

    let message = if page.tab() == tab {
        format!("The {} tab is already active", tab.as_str())
    } else {
        page.switch_tab(tab);
        format!("Switched to the {} tab", tab.as_str())
    };

    Ok(PageActionResponse {
        success: true,
        message,
        tab: page.tab(),
    })
}

/// Clear one form: "calculator", "other_units" or "food_energy"
pub fn clear_form(page: &mut PageState, form: &str) -> Result<PageActionResponse, String> {
    let normalized = form.trim().to_lowercase().replace(['-', ' '], "_");
    let target = if ConverterTarget::from_str(&normalized) == Some(ConverterTarget::FoodEnergy) {
        FormTarget::FoodEnergy
    } else {
        let tab = Tab::from_str(&normalized).ok_or_else(|| {
            format!("Invalid form: '{}'. Valid forms: calculator, other_units, food_energy", form)
        })?;
        if tab != page.tab() {
            return Err(format!("The {} tab is not active", tab.as_str()));
        }
        FormTarget::Main
    };

    page.clear(target);

    Ok(PageActionResponse {
        success: true,
        message: format!("Cleared the {} form", normalized),
        tab: page.tab(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ConverterOutput;

    #[test]
    fn test_edits_are_all_or_nothing() {
        let mut page = PageState::default();
        let edits = [("age", "40".to_string()), ("activity", "couch".to_string())];
        assert!(edit_calculator_form(&mut page, &edits).is_err());
        assert_eq!(page.calculator_mut().unwrap().age, "25");

        let edits = [("age", "40".to_string()), ("weight", "180".to_string())];
        edit_calculator_form(&mut page, &edits).unwrap();
        assert_eq!(page.calculator_mut().unwrap().age, "40");
    }

    #[test]
    fn test_calculate_form_keeps_previous_result() {
        let mut page = PageState::default();
        assert_eq!(calculate_form(&mut page).unwrap().result.result, 2696);

        edit_calculator_form(&mut page, &[("weight", "".to_string())]).unwrap();
        let err = calculate_form(&mut page).unwrap_err();
        assert!(err.contains("previous result was kept"));

        let state = get_page_state(&page);
        match state.mode {
            crate::form::PageMode::Calculator(form) => assert_eq!(form.result.unwrap().result, 2696),
            _ => panic!("calculator tab expected"),
        }
    }

    #[test]
    fn test_tab_guards() {
        let mut page = PageState::default();
        switch_tab(&mut page, "other_units").unwrap();
        assert!(calculate_form(&mut page).is_err());
        assert!(edit_calculator_form(&mut page, &[]).is_err());
        assert!(clear_form(&mut page, "calculator").is_err());

        let edit = ConverterEdit {
            value: Some("2".to_string()),
            ..Default::default()
        };
        let form = edit_converter_form(&mut page, "other_units", &edit).unwrap();
        assert_eq!(form.category, UnitCategory::Length);

        let response = switch_tab(&mut page, "other_units").unwrap();
        assert!(response.message.contains("already active"));
    }

    #[test]
    fn test_food_energy_converter() {
        let mut page = PageState::default();
        let edit = ConverterEdit {
            value: Some("500".to_string()),
            swap: true,
            ..Default::default()
        };
        let form = edit_converter_form(&mut page, "food_energy", &edit).unwrap();
        assert_eq!(form.from_unit, "kJ");
        match &form.output {
            ConverterOutput::Value { result, display } => {
                assert!((result - 119.5029).abs() < 1e-4);
                assert_eq!(display, "119.5029");
            }
            ConverterOutput::Error { message } => panic!("unexpected error: {}", message),
        }

        let edit = ConverterEdit {
            category: Some("mass".to_string()),
            ..Default::default()
        };
        assert!(edit_converter_form(&mut page, "food_energy", &edit).is_err());

        clear_form(&mut page, "food-energy").unwrap();
        assert_eq!(page.food_energy.value, "1");
        assert_eq!(page.food_energy.from_unit, "kcal");
    }

    #[test]
    fn test_other_units_category_change() {
        let mut page = PageState::default();
        switch_tab(&mut page, "other_units").unwrap();
        let edit = ConverterEdit {
            category: Some("mass".to_string()),
            to_unit: Some("oz".to_string()),
            ..Default::default()
        };
        let form = edit_converter_form(&mut page, "other", &edit).unwrap();
        assert_eq!(form.from_unit, "kg");
        assert_eq!(form.to_unit, "oz");
    }
}
