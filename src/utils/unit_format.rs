//! Fixed-precision formatting of lengths and angles in display units.
//!
//! Positions and Rayleigh ranges are shown in millimeters with two decimals, waist radii in
//! millimeters with three decimals and divergence angles in milliradians with three decimals.
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::millimeter,
};

/// Number of decimals used for axial positions and Rayleigh ranges.
pub const POSITION_DECIMALS: usize = 2;
/// Number of decimals used for waist radii and divergence angles.
pub const RADIUS_DECIMALS: usize = 3;

/// Format a [`Length`] as a millimeter value with the given number of decimals (without unit).
///
/// # Example
/// ```
/// use gausslens::{millimeter, utils::unit_format::format_millimeter};
///
/// assert_eq!(format_millimeter(millimeter!(100.324), 2), "100.32");
/// assert_eq!(format_millimeter(millimeter!(0.040_25), 3), "0.040");
/// ```
#[must_use]
pub fn format_millimeter(length: Length, decimals: usize) -> String {
    format!("{:.*}", decimals, length.get::<millimeter>())
}
/// Format an [`Angle`] as a milliradian value with the given number of decimals (without unit).
///
/// `uom` has no milliradian unit, so the value is scaled from radian.
#[must_use]
pub fn format_milliradian(angle: Angle, decimals: usize) -> String {
    format!("{:.*}", decimals, angle.get::<radian>() * 1e3)
}
/// Format an axial position or Rayleigh range including the unit, e.g. `100.32 mm`.
#[must_use]
pub fn position_with_unit(length: Length) -> String {
    format!("{} mm", format_millimeter(length, POSITION_DECIMALS))
}
/// Format a waist radius including the unit, e.g. `0.500 mm`.
#[must_use]
pub fn radius_with_unit(length: Length) -> String {
    format!("{} mm", format_millimeter(length, RADIUS_DECIMALS))
}
/// Format a divergence angle including the unit, e.g. `0.403 mrad`.
#[must_use]
pub fn angle_with_unit(angle: Angle) -> String {
    format!("{} mrad", format_milliradian(angle, RADIUS_DECIMALS))
}
