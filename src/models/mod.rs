//! Data models
//!
//! Biometric inputs and the selectable options of the calculator.

mod activity;
mod biometric;
mod formula;

pub use activity::ActivityLevel;
pub use biometric::{
    BiometricInput, Height, Sex, UnitSystem, Weight, CM_PER_INCH, INCHES_PER_FOOT, KG_PER_LB,
};
pub use formula::{BmrFormula, ResultUnit, KJ_PER_KCAL};
