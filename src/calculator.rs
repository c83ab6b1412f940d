#![warn(missing_docs)]
//! Transformation of a Gaussian beam by a thin lens.
//!
//! The object distance `s` carries its sign: it is negative if the input waist is located
//! in front of the lens. All calculations are done in SI base units (meter, radian).
use crate::{
    error::{GaussLensError, GlResult},
    gaussian_beam::GaussianBeam,
    meter, millimeter, nanometer, radian,
};
use log::debug;
use std::f64::consts::PI;
use uom::si::{
    f64::{Angle, Length},
    length::meter,
};

/// The parameters of a Gaussian beam in front of a thin lens.
///
/// A [`BeamInput`] can only be created with finite values and a strictly positive
/// wavelength, focal length and waist radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamInput {
    wavelength: Length,
    focal_length: Length,
    object_distance: Length,
    waist_radius: Length,
}
impl BeamInput {
    /// Creates a new [`BeamInput`].
    ///
    /// `object_distance` is the signed distance of the input waist from the lens (negative if
    /// the waist is located in front of the lens).
    ///
    /// # Errors
    ///
    /// This function returns [`GaussLensError::InvalidInput`] if
    ///   - any of the values is NaN or not finite
    ///   - the wavelength, the focal length or the waist radius is not strictly positive
    pub fn new(
        wavelength: Length,
        focal_length: Length,
        object_distance: Length,
        waist_radius: Length,
    ) -> GlResult<Self> {
        check_positive("wavelength", wavelength)?;
        check_positive("focal length", focal_length)?;
        check_positive("waist radius", waist_radius)?;
        if !object_distance.is_finite() {
            return Err(GaussLensError::InvalidInput(
                "object distance must be finite".into(),
            ));
        }
        Ok(Self {
            wavelength,
            focal_length,
            object_distance,
            waist_radius,
        })
    }
    /// Creates a new [`BeamInput`] from values given in display units.
    ///
    /// The wavelength is given in nanometers, all other values in millimeters. The object
    /// distance is entered as a positive magnitude (waist in front of the lens) and is
    /// negated internally.
    ///
    /// # Errors
    ///
    /// This function returns an error under the same conditions as [`BeamInput::new`].
    pub fn from_display_units(
        wavelength_nm: f64,
        focal_length_mm: f64,
        object_distance_mm: f64,
        waist_radius_mm: f64,
    ) -> GlResult<Self> {
        Self::new(
            nanometer!(wavelength_nm),
            millimeter!(focal_length_mm),
            millimeter!(-object_distance_mm),
            millimeter!(waist_radius_mm),
        )
    }
    /// Returns the wavelength of this [`BeamInput`].
    #[must_use]
    pub const fn wavelength(&self) -> Length {
        self.wavelength
    }
    /// Returns the focal length of the lens.
    #[must_use]
    pub const fn focal_length(&self) -> Length {
        self.focal_length
    }
    /// Returns the signed object distance.
    #[must_use]
    pub const fn object_distance(&self) -> Length {
        self.object_distance
    }
    /// Returns the input waist radius.
    #[must_use]
    pub const fn waist_radius(&self) -> Length {
        self.waist_radius
    }
}

fn check_positive(name: &str, value: Length) -> GlResult<()> {
    if value.is_finite() && value.value > 0.0 {
        Ok(())
    } else {
        Err(GaussLensError::InvalidInput(format!(
            "{name} must be > 0.0 and finite"
        )))
    }
}

/// The derived parameters of the beam behind the lens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamResult {
    input_rayleigh_range: Length,
    output_waist_radius: Length,
    magnification: f64,
    output_waist_position: Length,
    input_divergence: Angle,
    output_divergence: Angle,
    output_rayleigh_range: Length,
}
impl BeamResult {
    /// Returns the Rayleigh range of the input beam.
    #[must_use]
    pub const fn input_rayleigh_range(&self) -> Length {
        self.input_rayleigh_range
    }
    /// Returns the waist radius of the output beam.
    #[must_use]
    pub const fn output_waist_radius(&self) -> Length {
        self.output_waist_radius
    }
    /// Returns the waist magnification `w0'/w0`.
    #[must_use]
    pub const fn magnification(&self) -> f64 {
        self.magnification
    }
    /// Returns the position of the output waist measured from the lens.
    #[must_use]
    pub const fn output_waist_position(&self) -> Length {
        self.output_waist_position
    }
    /// Returns the far-field divergence half-angle of the input beam.
    #[must_use]
    pub const fn input_divergence(&self) -> Angle {
        self.input_divergence
    }
    /// Returns the far-field divergence half-angle of the output beam.
    #[must_use]
    pub const fn output_divergence(&self) -> Angle {
        self.output_divergence
    }
    /// Returns the Rayleigh range of the output beam.
    #[must_use]
    pub const fn output_rayleigh_range(&self) -> Length {
        self.output_rayleigh_range
    }
    /// Returns the input beam in front of the lens.
    #[must_use]
    pub const fn input_beam(&self, input: &BeamInput) -> GaussianBeam {
        GaussianBeam::new(
            input.object_distance,
            input.waist_radius,
            self.input_rayleigh_range,
        )
    }
    /// Returns the output beam behind the lens.
    #[must_use]
    pub const fn output_beam(&self) -> GaussianBeam {
        GaussianBeam::new(
            self.output_waist_position,
            self.output_waist_radius,
            self.output_rayleigh_range,
        )
    }
    fn is_finite(&self) -> bool {
        self.input_rayleigh_range.is_finite()
            && self.output_waist_radius.is_finite()
            && self.magnification.is_finite()
            && self.output_waist_position.is_finite()
            && self.input_divergence.is_finite()
            && self.output_divergence.is_finite()
            && self.output_rayleigh_range.is_finite()
    }
}

/// Calculate the beam behind a thin lens.
///
/// The formulas are evaluated in this order since the magnification and the input Rayleigh
/// range are reused:
///   - `zR  = π·w0²/λ`
///   - `w0' = w0·f/sqrt((s+f)² + zR²)`
///   - `α   = w0'/w0`
///   - `s'  = f + α²·(−s − f)`
///   - `θ   = λ/(π·w0)`
///   - `θ'  = θ/α`
///   - `zR' = α²·zR`
#[must_use]
pub fn calculate(input: &BeamInput) -> BeamResult {
    let lambda = input.wavelength.get::<meter>();
    let f = input.focal_length.get::<meter>();
    let s = input.object_distance.get::<meter>();
    let w0 = input.waist_radius.get::<meter>();

    let z_r = PI * w0 * w0 / lambda;
    let w0_out = w0 * f / (s + f).mul_add(s + f, z_r * z_r).sqrt();
    let alpha = w0_out / w0;
    let s_out = f + alpha * alpha * (-s - f);
    let theta = lambda / (PI * w0);
    let theta_out = theta / alpha;
    let z_r_out = alpha * alpha * z_r;

    BeamResult {
        input_rayleigh_range: meter!(z_r),
        output_waist_radius: meter!(w0_out),
        magnification: alpha,
        output_waist_position: meter!(s_out),
        input_divergence: radian!(theta),
        output_divergence: radian!(theta_out),
        output_rayleigh_range: meter!(z_r_out),
    }
}

/// Validate display-unit values and calculate the output beam.
///
/// This is the entry point of an update cycle. It returns `None` if the values do not form a
/// valid [`BeamInput`] (see [`BeamInput::from_display_units`]) or if the result is not finite
/// (e.g. due to numerical under- or overflow). In this case nothing should be updated.
#[must_use]
pub fn try_calculate(
    wavelength_nm: f64,
    focal_length_mm: f64,
    object_distance_mm: f64,
    waist_radius_mm: f64,
) -> Option<(BeamInput, BeamResult)> {
    let input = match BeamInput::from_display_units(
        wavelength_nm,
        focal_length_mm,
        object_distance_mm,
        waist_radius_mm,
    ) {
        Ok(input) => input,
        Err(e) => {
            debug!("skipping update: {e}");
            return None;
        }
    };
    let result = calculate(&input);
    if result.is_finite() {
        Some((input, result))
    } else {
        debug!("skipping update: calculation result is not finite");
        None
    }
}
