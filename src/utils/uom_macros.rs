#![warn(missing_docs)]
//! Shorthand macros for creating `uom` quantities in the units used by the beam calculation.
//!
//! ```
//! use gausslens::{millimeter, nanometer};
//! use uom::si::length::meter;
//!
//! assert!((millimeter!(150.0).get::<meter>() - 0.15).abs() < 1e-12);
//! assert!(nanometer!(632.8) < millimeter!(0.001));
//! ```
/// helper macro to create a quantity of the given type and unit
#[macro_export]
macro_rules! uom_unit_creator {
    ($quantity:ident, $kind:ident :: $unit:ident, $val:expr) => {{
        use uom::si::{$kind::$unit, f64::$quantity};
        $quantity::new::<$unit>($val)
    }};
}

///macro to create a Length in meter
#[macro_export]
macro_rules! meter {
    ($x:expr) => {
        $crate::uom_unit_creator!(Length, length::meter, $x)
    };
}
///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($x:expr) => {
        $crate::uom_unit_creator!(Length, length::millimeter, $x)
    };
}
///macro to create a Length in nanometer (wavelengths)
#[macro_export]
macro_rules! nanometer {
    ($x:expr) => {
        $crate::uom_unit_creator!(Length, length::nanometer, $x)
    };
}
///macro to create an Angle in radian
#[macro_export]
macro_rules! radian {
    ($x:expr) => {
        $crate::uom_unit_creator!(Angle, angle::radian, $x)
    };
}
///macro to create an Angle in milliradian (divergences). Built from radian, since `uom` has no
///milliradian unit.
#[macro_export]
macro_rules! milliradian {
    ($x:expr) => {
        $crate::radian!($x / 1e3)
    };
}
