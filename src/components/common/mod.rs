//! Small reusable controls.
mod fields;

pub use fields::RateField;
