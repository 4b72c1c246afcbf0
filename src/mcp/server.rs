//! WellnessZ MCP Server Implementation
//!
//! Implements the MCP server with all WellnessZ tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::form::{CalculatorSettings, PageState};
use crate::tools::calculator::{self, EnergyQuery};
use crate::tools::converter;
use crate::tools::page::{self, ConverterEdit};
use crate::tools::reference;
use crate::tools::status::StatusTracker;

/// WellnessZ MCP Service
#[derive(Clone)]
pub struct WellnessService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    defaults: CalculatorSettings,
    tool_router: ToolRouter<WellnessService>,
    /// Calculator page as seen by this session
    page: Arc<std::sync::Mutex<PageState>>,
}

impl WellnessService {
    /// `defaults` seeds the calculator settings of stateless calls and new forms
    pub fn new(defaults: CalculatorSettings) -> Self {
        let page = PageState::new(Some(defaults.clone()).filter(|d| *d != CalculatorSettings::default()));
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(defaults.clone()))),
            defaults,
            tool_router: Self::tool_router(),
            page: Arc::new(std::sync::Mutex::new(page)),
        }
    }

    fn with_page<T>(&self, f: impl FnOnce(&mut PageState) -> Result<T, String>) -> Result<T, McpError> {
        let mut page = self
            .page
            .lock()
            .map_err(|e| McpError::internal_error(format!("Page state lock poisoned: {}", e), None))?;
        f(&mut *page).map_err(|e| McpError::invalid_params(e, None))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EnergyParams {
    /// Age in whole years
    pub age: u32,
    /// male or female
    pub sex: String,
    /// imperial (feet/inches, pounds) or metric (centimeters, kilograms)
    pub unit_system: Option<String>,
    /// Imperial height needs both feet and inches
    pub feet: Option<f64>,
    pub inches: Option<f64>,
    /// Metric height; not combined with feet/inches
    pub centimeters: Option<f64>,
    /// Pounds for imperial, kilograms for metric
    pub weight: f64,
    /// sedentary, light, moderate, active, very_active
    pub activity: Option<String>,
    /// mifflin_st_jeor, revised_harris_benedict, katch_mcardle
    pub formula: Option<String>,
    /// calories or kilojoules
    pub result_unit: Option<String>,
    /// Required for katch_mcardle
    pub body_fat_percent: Option<f64>,
}

impl From<EnergyParams> for EnergyQuery {
    fn from(p: EnergyParams) -> Self {
        EnergyQuery {
            age: p.age,
            sex: p.sex,
            unit_system: p.unit_system,
            feet: p.feet,
            inches: p.inches,
            centimeters: p.centimeters,
            weight: p.weight,
            activity: p.activity,
            formula: p.formula,
            result_unit: p.result_unit,
            body_fat_percent: p.body_fat_percent,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ZigzagParams {
    pub daily_target_kcal: f64,
}

// ============================================================================
// Converter Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// energy, length or mass. Inferred from the units when omitted.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    pub category: Option<String>,
}

// ============================================================================
// Reference Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodCaloriesParams {
    /// Substring of the food name
    pub query: Option<String>,
    /// fruit, vegetables, proteins, common_meals_snacks, beverages_dairy
    pub group: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealPlansParams {
    /// 1200, 1500 or 2000
    pub plan_kcal: Option<u32>,
    /// Pick the plan closest to this daily target
    pub daily_target_kcal: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExerciseCaloriesParams {
    /// Substring of the activity name
    pub query: Option<String>,
    /// Body weight in pounds for a personal estimate
    pub weight_lb: Option<f64>,
    /// Duration in hours (default 1)
    pub hours: Option<f64>,
}

// ============================================================================
// Page Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EditCalculatorFormParams {
    pub age: Option<String>,
    pub sex: Option<String>,
    pub unit_system: Option<String>,
    pub feet: Option<String>,
    pub inches: Option<String>,
    pub centimeters: Option<String>,
    pub weight: Option<String>,
    pub activity: Option<String>,
    pub formula: Option<String>,
    pub result_unit: Option<String>,
    pub body_fat: Option<String>,
}

impl EditCalculatorFormParams {
    /// Edits in form order; the unit system goes first so that later
    /// height and weight edits are not converted
    fn into_edits(self) -> Vec<(&'static str, String)> {
        [
            ("unit_system", self.unit_system),
            ("age", self.age),
            ("sex", self.sex),
            ("feet", self.feet),
            ("inches", self.inches),
            ("centimeters", self.centimeters),
            ("weight", self.weight),
            ("activity", self.activity),
            ("formula", self.formula),
            ("result_unit", self.result_unit),
            ("body_fat", self.body_fat),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EditConverterFormParams {
    /// food_energy (default) or other_units
    #[serde(default = "default_converter")]
    pub converter: String,
    pub category: Option<String>,
    pub value: Option<String>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
    #[serde(default)]
    pub swap: bool,
}

fn default_converter() -> String { "food_energy".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SwitchTabParams {
    /// calculator or other_units
    pub tab: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClearFormParams {
    /// calculator, other_units or food_energy
    pub form: String,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl WellnessService {
    // --- Status ---

    #[tool(description = "Get the current status of the WellnessZ service including build info, calculator defaults, and process information")]
    async fn wellnessz_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        to_json(&status)
    }

    #[tool(description = "Get instructions for the calorie calculator, weight goals, unit converter and page tools. Call this when unsure how to use the WellnessZ tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Estimate daily calorie needs (TDEE) from age, sex, height, weight and activity level. Returns the rounded result with a BMR/TDEE breakdown.")]
    fn calculate_daily_energy(&self, Parameters(p): Parameters<EnergyParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_daily_energy(&p.into(), &self.defaults)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Daily calorie targets for maintaining, losing (0.5/1/2 lb per week) or gaining weight, from the same inputs as calculate_daily_energy")]
    fn weight_goals(&self, Parameters(p): Parameters<EnergyParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::weight_goals(&p.into(), &self.defaults)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Weekly zigzag (calorie cycling) schedule for a daily target: higher intake on Saturday and Sunday, same weekly total")]
    fn zigzag_schedule(&self, Parameters(p): Parameters<ZigzagParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::zigzag_schedule(p.daily_target_kcal)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Converter ---

    #[tool(description = "Convert a value between energy (kcal, kJ, cal, J, kWh, Btu), length or mass units")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = converter::convert_units(p.value, &p.from_unit, &p.to_unit, p.category.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List the units of one category (energy, length, mass) or all categories")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = converter::list_units(p.category.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Reference ---

    #[tool(description = "Calories (kcal and kJ) per serving of common foods, searchable by name and food group")]
    fn food_calories(&self, Parameters(p): Parameters<FoodCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = reference::food_calories(p.query.as_deref(), p.group.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Sample 1200, 1500 and 2000 Calorie meal plans with per-meal totals")]
    fn meal_plans(&self, Parameters(p): Parameters<MealPlansParams>) -> Result<CallToolResult, McpError> {
        let result = reference::meal_plans(p.plan_kcal, p.daily_target_kcal)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Calories burned per hour for common activities at 125/155/185 lb, with an optional estimate for a given body weight and duration")]
    fn exercise_calories(&self, Parameters(p): Parameters<ExerciseCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = reference::exercise_calories(p.query.as_deref(), p.weight_lb, p.hours)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Page ---

    #[tool(description = "Get the session's page state: active tab, calculator or other-units form, and the food energy converter")]
    fn get_page_state(&self) -> Result<CallToolResult, McpError> {
        let state = self.with_page(|state| Ok(page::get_page_state(state)))?;
        to_json(&state)
    }

    #[tool(description = "Edit calculator form fields as text. Does not recalculate; call calculate_form afterwards. All edits apply or none do.")]
    fn edit_calculator_form(&self, Parameters(p): Parameters<EditCalculatorFormParams>) -> Result<CallToolResult, McpError> {
        let edits = p.into_edits();
        let state = self.with_page(|state| page::edit_calculator_form(state, &edits))?;
        to_json(&state)
    }

    #[tool(description = "Calculate daily calorie needs from the calculator form. On invalid input the previous result is kept.")]
    fn calculate_form(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_page(page::calculate_form)?;
        to_json(&result)
    }

    #[tool(description = "Edit a converter (food_energy or other_units). The output is recalculated on every edit.")]
    fn edit_converter_form(&self, Parameters(p): Parameters<EditConverterFormParams>) -> Result<CallToolResult, McpError> {
        let edit = ConverterEdit {
            category: p.category,
            value: p.value,
            from_unit: p.from_unit,
            to_unit: p.to_unit,
            swap: p.swap,
        };
        let form = self.with_page(|state| page::edit_converter_form(state, &p.converter, &edit))?;
        to_json(&form)
    }

    #[tool(description = "Switch the main tab to calculator or other_units. The newly shown tab starts from its defaults.")]
    fn switch_tab(&self, Parameters(p): Parameters<SwitchTabParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_page(|state| page::switch_tab(state, &p.tab))?;
        to_json(&result)
    }

    #[tool(description = "Reset a form (calculator, other_units or food_energy) to its default values")]
    fn clear_form(&self, Parameters(p): Parameters<ClearFormParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_page(|state| page::clear_form(state, &p.form))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for WellnessService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wellnessz".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("WellnessZ Calorie Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "WellnessZ - Calorie calculator and food energy converter. \
                 Call calculator_instructions for a usage guide. \
                 Calculator: calculate_daily_energy, weight_goals, zigzag_schedule. \
                 Converter: convert_units, list_units. \
                 Reference: food_calories, meal_plans, exercise_calories. \
                 Page session: get_page_state, edit_calculator_form, calculate_form, edit_converter_form, \
                 switch_tab, clear_form. \
                 Status: wellnessz_status."
                    .into(),
            ),
        }
    }
}
