//! WellnessZ Status Tool
//!
//! Provides runtime status information about the WellnessZ service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::form::CalculatorSettings;

/// Calculator usage guide for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# WellnessZ Calorie Calculator Instructions

This guide explains how to estimate daily calorie needs and convert food energy units
with the WellnessZ tools.

## Overview

The calculator estimates **Total Daily Energy Expenditure (TDEE)**:

1. **BMR** - Basal Metabolic Rate, the energy used at complete rest
2. **Activity multiplier** - scales BMR to your typical week
3. **Result unit** - Calories (kcal) or kilojoules (kJ, 1 kcal = 4.184 kJ)

The result is rounded to the nearest whole number.

---

## Quick Calculation (stateless)

```
calculate_daily_energy(
  age: 25,
  sex: "male",
  feet: 5,
  inches: 10,
  weight: 165,
  activity: "moderate"
)
```
Returns 2696 calories/day with the full breakdown (height_cm, weight_kg, bmr, tdee_kcal).

### Metric Input

```
calculate_daily_energy(
  age: 30,
  sex: "female",
  unit_system: "metric",
  centimeters: 165,
  weight: 60,
  activity: "sedentary",
  formula: "revised_harris_benedict"
)
```

## BMR Formulas

| Formula | Value | Notes |
|---------|-------|-------|
| Mifflin-St Jeor | `mifflin_st_jeor` | Default. Most accurate for most people |
| Revised Harris-Benedict | `revised_harris_benedict` | Classic equation, 1984 revision |
| Katch-McArdle | `katch_mcardle` | Uses lean body mass. **Requires body_fat_percent** |

## Activity Levels

| Level | Multiplier | Description |
|-------|------------|-------------|
| `sedentary` | 1.2 | Little or no exercise |
| `light` | 1.375 | Exercise 1-3 times/week |
| `moderate` | 1.55 | Exercise 4-5 times/week |
| `active` | 1.725 | Daily exercise or intense exercise 3-4 times/week |
| `very_active` | 1.9 | Intense exercise 6-7 times/week |

## Validation Rules

- Age must be a whole number of at least 1
- Height must be greater than zero; feet, inches and centimeters cannot be negative
- Weight must be greater than zero
- Body fat must be between 0 and 100
- Invalid input returns an error and **no** result

## Weight Goals

`weight_goals` takes the same inputs and returns daily targets for maintaining, losing
(0.5, 1, 2 lb/week) and gaining weight. 1 lb of body weight is about 3500 kcal, so 1 lb/week
is a 500 kcal/day change. Targets below 1500 kcal (men) or 1200 kcal (women) are flagged.

`zigzag_schedule(daily_target_kcal: 2000)` spreads a target over a week with higher
Saturday/Sunday intake.

## Unit Conversion

```
convert_units(value: 1, from_unit: "kcal", to_unit: "kJ")
```
Returns 4.1840. The category (energy, length, mass) is inferred when omitted.
Call `list_units` for the unit tables.

## Page Session Tools

The session mirrors the calculator page:

1. `get_page_state` - see the current forms
2. `edit_calculator_form` - change fields (nothing is recalculated)
3. `calculate_form` - run the calculation; on error the previous result is kept
4. `edit_converter_form` - food energy or other-units converter; recalculates on every edit
5. `switch_tab` - `calculator` or `other_units` (the other tab starts from defaults)
6. `clear_form` - `calculator`, `other_units` or `food_energy`

## Reference Tables

| Task | Tool |
|------|------|
| Calories in common foods | `food_calories` |
| Sample 1200/1500/2000 Calorie days | `meal_plans` |
| Calories burned per hour | `exercise_calories` |

## Notes

- Estimates are for healthy adults and are not medical advice
- Pregnant or breastfeeding users, athletes and children need different guidance
"#;

/// Runtime status of the WellnessZ service
#[derive(Debug, Clone, Serialize)]
pub struct WellnessStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Calculator defaults for new sessions
    pub default_formula: &'static str,
    pub default_result_unit: &'static str,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    defaults: CalculatorSettings,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(defaults: CalculatorSettings) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            defaults,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> WellnessStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        WellnessStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_formula: self.defaults.formula.as_str(),
            default_result_unit: self.defaults.result_unit.as_str(),
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
