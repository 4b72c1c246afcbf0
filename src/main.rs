//! WellnessZ Calorie Calculator
//!
//! An MCP server for daily calorie estimation and food energy conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use wellnessz::build_info;
use wellnessz::form::CalculatorSettings;
use wellnessz::mcp::WellnessService;
use wellnessz::models::{BmrFormula, ResultUnit};

/// Read an option from the environment, falling back to the default on absence or a bad value
fn env_option<T: Default>(name: &str, parse: impl Fn(&str) -> Option<T>) -> T {
    match std::env::var(name) {
        Ok(raw) => parse(&raw).unwrap_or_else(|| {
            tracing::warn!("Ignoring {}='{}': not a recognised value", name, raw);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Calculator defaults from WELLNESSZ_FORMULA and WELLNESSZ_RESULT_UNIT
fn get_default_settings() -> CalculatorSettings {
    CalculatorSettings {
        formula: env_option("WELLNESSZ_FORMULA", BmrFormula::from_str),
        result_unit: env_option("WELLNESSZ_RESULT_UNIT", ResultUnit::from_str),
        body_fat: String::new(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wellnessz=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let defaults = get_default_settings();

    build_info::print_startup_banner(&defaults);
    eprintln!("Starting MCP server on stdio...");

    let service = WellnessService::new(defaults);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
