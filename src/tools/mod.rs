//! WellnessZ Tools module
//!
//! MCP tool implementations for the WellnessZ calculator.

pub mod calculator;
pub mod converter;
pub mod page;
pub mod reference;
pub mod status;
