//! Utility to print a daily energy breakdown from metric measurements
//!
//! Usage: daily_energy <age> <sex> <height_cm> <weight_kg> <activity> [formula] [unit] [body_fat]

use wellnessz::energy::{calculate_daily_energy, parse_age, parse_number, weight_goal_targets};
use wellnessz::models::{ActivityLevel, BiometricInput, BmrFormula, ResultUnit, Sex};

const USAGE: &str =
    "Usage: daily_energy <age> <sex> <height_cm> <weight_kg> <activity> [formula] [unit] [body_fat]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 6 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }

    let age = parse_age(&args[1])?;
    let sex = Sex::from_str(&args[2]).ok_or_else(|| format!("Invalid sex: '{}'", args[2]))?;
    let height_cm = parse_number("height_cm", &args[3])?;
    let weight_kg = parse_number("weight_kg", &args[4])?;
    let activity =
        ActivityLevel::from_str(&args[5]).ok_or_else(|| format!("Invalid activity level: '{}'", args[5]))?;
    let formula = match args.get(6) {
        Some(s) => BmrFormula::from_str(s).ok_or_else(|| format!("Invalid formula: '{}'", s))?,
        None => BmrFormula::default(),
    };
    let unit = match args.get(7) {
        Some(s) => ResultUnit::from_str(s).ok_or_else(|| format!("Invalid result unit: '{}'", s))?,
        None => ResultUnit::default(),
    };

    let mut input = BiometricInput::metric(age, sex, height_cm, weight_kg);
    if let Some(raw) = args.get(8) {
        input = input.with_body_fat(parse_number("body_fat_percent", raw)?);
    }

    let energy = calculate_daily_energy(&input, activity, formula, unit)?;

    println!("Formula:   {}", formula.display_name());
    println!("Height:    {:.1} cm", energy.height_cm);
    println!("Weight:    {:.2} kg", energy.weight_kg);
    if let Some(lean) = energy.lean_mass_kg {
        println!("Lean mass: {:.2} kg", lean);
    }
    println!("BMR:       {:.1} kcal/day", energy.bmr);
    println!("Activity:  {} (x{})", activity.description(), energy.activity_multiplier);
    println!("TDEE:      {:.1} kcal/day", energy.tdee_kcal);
    println!("\nResult: {} {}", energy.result, unit.per_day_label());

    println!("\nWeight goals:");
    for goal in weight_goal_targets(energy.tdee_kcal, sex)? {
        let flag = if goal.below_minimum { "  (below recommended minimum)" } else { "" };
        println!("  {:<34} {:>5} kcal/day {:>4}%{}", goal.label, goal.daily_kcal, goal.percent_of_tdee, flag);
    }

    Ok(())
}
