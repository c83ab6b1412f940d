#![warn(missing_docs)]
//! Beam setups stored as YAML files.
//!
//! A setup file holds the input parameters in display units (nm / mm) and an optional canvas
//! size, e.g.
//! ```yaml
//! wavelength: 632.8
//! focal_length: 100.0
//! object_distance: 150.0
//! waist: 0.5
//! canvas:
//!   width: 1024
//!   height: 512
//! ```
//! All entries are optional. Missing parameters are filled from the command line or prompted.
//! Setup files are only read, never written.
use crate::{
    error::{GaussLensError, GlResult},
    session::InputField,
};
use serde::Deserialize;
use std::{fs, path::Path};

/// Size of the drawing canvas in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Canvas {
    /// width in pixels
    pub width: u32,
    /// height in pixels
    pub height: u32,
}

/// Input parameters of a beam transformation in display units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BeamSetup {
    /// wavelength in nm
    #[serde(default)]
    pub wavelength: Option<f64>,
    /// focal length in mm
    #[serde(default)]
    pub focal_length: Option<f64>,
    /// distance of the input waist in front of the lens in mm
    #[serde(default)]
    pub object_distance: Option<f64>,
    /// input waist radius in mm
    #[serde(default)]
    pub waist: Option<f64>,
    /// canvas size of the diagram
    #[serde(default)]
    pub canvas: Option<Canvas>,
}
impl BeamSetup {
    /// Read a [`BeamSetup`] from a YAML file.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing of the file failed.
    pub fn from_file(path: &Path) -> GlResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GaussLensError::Setup(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Parse a [`BeamSetup`] from a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the string is not a valid setup.
    pub fn from_string(yaml: &str) -> GlResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| GaussLensError::Setup(format!("parsing of setup failed: {e}")))
    }
    /// Returns the value of the given parameter.
    #[must_use]
    pub const fn value(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::Wavelength => self.wavelength,
            InputField::FocalLength => self.focal_length,
            InputField::ObjectDistance => self.object_distance,
            InputField::WaistRadius => self.waist,
        }
    }
    /// Sets the value of the given parameter.
    pub fn set_value(&mut self, field: InputField, value: f64) {
        let entry = match field {
            InputField::Wavelength => &mut self.wavelength,
            InputField::FocalLength => &mut self.focal_length,
            InputField::ObjectDistance => &mut self.object_distance,
            InputField::WaistRadius => &mut self.waist,
        };
        *entry = Some(value);
    }
    /// Combine two setups. Every entry set in `other` replaces the entry of `self`.
    #[must_use]
    pub fn overridden_by(self, other: Self) -> Self {
        Self {
            wavelength: other.wavelength.or(self.wavelength),
            focal_length: other.focal_length.or(self.focal_length),
            object_distance: other.object_distance.or(self.object_distance),
            waist: other.waist.or(self.waist),
            canvas: other.canvas.or(self.canvas),
        }
    }
}
