//! WellnessZ Calorie Calculator Library
//!
//! Daily energy estimation, weight goal guidance and food energy unit conversion.

pub mod build_info;
pub mod conversion;
pub mod energy;
pub mod error;
pub mod form;
pub mod mcp;
pub mod models;
pub mod reference;
pub mod tools;
