#![warn(missing_docs)]
//! The formatted numeric output of an update cycle.
use crate::{
    calculator::BeamResult,
    utils::unit_format::{angle_with_unit, position_with_unit, radius_with_unit},
};
use std::fmt::Display;

/// The six numeric display fields, already formatted in display units.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayFields {
    /// position of the output waist behind the lens (mm, 2 decimals)
    pub output_waist_position: String,
    /// output waist radius (mm, 3 decimals)
    pub output_waist_radius: String,
    /// Rayleigh range of the input beam (mm, 2 decimals)
    pub input_rayleigh_range: String,
    /// Rayleigh range of the output beam (mm, 2 decimals)
    pub output_rayleigh_range: String,
    /// divergence half-angle of the input beam (mrad, 3 decimals)
    pub input_divergence: String,
    /// divergence half-angle of the output beam (mrad, 3 decimals)
    pub output_divergence: String,
}
impl From<&BeamResult> for DisplayFields {
    fn from(result: &BeamResult) -> Self {
        Self {
            output_waist_position: position_with_unit(result.output_waist_position()),
            output_waist_radius: radius_with_unit(result.output_waist_radius()),
            input_rayleigh_range: position_with_unit(result.input_rayleigh_range()),
            output_rayleigh_range: position_with_unit(result.output_rayleigh_range()),
            input_divergence: angle_with_unit(result.input_divergence()),
            output_divergence: angle_with_unit(result.output_divergence()),
        }
    }
}
impl Display for DisplayFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "output waist position:  {}", self.output_waist_position)?;
        writeln!(f, "output waist radius:    {}", self.output_waist_radius)?;
        writeln!(f, "input Rayleigh range:   {}", self.input_rayleigh_range)?;
        writeln!(f, "output Rayleigh range:  {}", self.output_rayleigh_range)?;
        writeln!(f, "input divergence:       {}", self.input_divergence)?;
        write!(f, "output divergence:      {}", self.output_divergence)
    }
}
