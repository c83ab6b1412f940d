//! Module for additional computational capabilities
pub mod math_utils;
pub mod test_helper;
pub mod unit_format;
pub mod uom_macros;
pub use math_utils::f64_to_i32;
