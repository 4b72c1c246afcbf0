//! Unit converter form
//!
//! Recomputes its output on every edit.

use serde::Serialize;

use crate::conversion::{convert_request, ConversionRequest, UnitCategory};
use crate::energy::parse_number;

pub const DEFAULT_VALUE: &str = "1";

/// What the output box shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConverterOutput {
    Value { result: f64, display: String },
    Error { message: String },
}

/// State of a converter panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterForm {
    pub category: UnitCategory,
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
    pub output: ConverterOutput,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new(UnitCategory::Energy)
    }
}

impl ConverterForm {
    pub fn new(category: UnitCategory) -> Self {
        let (from, to) = category.default_units();
        let mut form = Self {
            category,
            value: DEFAULT_VALUE.to_string(),
            from_unit: from.to_string(),
            to_unit: to.to_string(),
            output: ConverterOutput::Error { message: String::new() },
        };
        form.recompute();
        form
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.recompute();
    }

    pub fn set_from_unit(&mut self, unit: &str) {
        self.from_unit = unit.to_string();
        self.recompute();
    }

    pub fn set_to_unit(&mut self, unit: &str) {
        self.to_unit = unit.to_string();
        self.recompute();
    }

    /// Swap the from and to units
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        self.recompute();
    }

    /// Change category; both units reset to the category defaults
    pub fn set_category(&mut self, category: UnitCategory) {
        let (from, to) = category.default_units();
        self.category = category;
        self.from_unit = from.to_string();
        self.to_unit = to.to_string();
        self.recompute();
    }

    /// Value back to 1 with the category's default units
    pub fn clear(&mut self) {
        *self = Self::new(self.category);
    }

    /// The converted value, if the current inputs are valid
    pub fn result(&self) -> Option<f64> {
        match &self.output {
            ConverterOutput::Value { result, .. } => Some(*result),
            ConverterOutput::Error { .. } => None,
        }
    }

    fn recompute(&mut self) {
        let outcome = parse_number("value", &self.value).and_then(|value| {
            convert_request(&ConversionRequest {
                value,
                from_unit: self.from_unit.clone(),
                to_unit: self.to_unit.clone(),
                category: self.category,
            })
        });

        self.output = match outcome {
            Ok(conversion) => {
                // canonicalize what was typed ("kilojoules" -> "kJ")
                self.from_unit = conversion.from_unit.to_string();
                self.to_unit = conversion.to_unit.to_string();
                ConverterOutput::Value {
                    result: conversion.result,
                    display: conversion.display,
                }
            }
            Err(e) => {
                tracing::debug!("Converter input rejected: {}", e);
                ConverterOutput::Error { message: e.to_string() }
            }
        };
    }
}
