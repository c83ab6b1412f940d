#![warn(missing_docs)]
//! A Gaussian beam described by its waist.
//!
//! Axial positions are measured along the optical axis with the lens located at `z = 0`.
use num::Zero;
use uom::si::f64::Length;

/// The waist parameters of a (TEM₀₀) Gaussian beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBeam {
    waist_position: Length,
    waist_radius: Length,
    rayleigh_range: Length,
}
impl GaussianBeam {
    /// Creates a new [`GaussianBeam`] from its waist position, waist radius and Rayleigh range.
    #[must_use]
    pub const fn new(waist_position: Length, waist_radius: Length, rayleigh_range: Length) -> Self {
        Self {
            waist_position,
            waist_radius,
            rayleigh_range,
        }
    }
    /// Returns the axial position of the beam waist.
    #[must_use]
    pub const fn waist_position(&self) -> Length {
        self.waist_position
    }
    /// Returns the waist (1/e² intensity) radius.
    #[must_use]
    pub const fn waist_radius(&self) -> Length {
        self.waist_radius
    }
    /// Returns the Rayleigh range.
    #[must_use]
    pub const fn rayleigh_range(&self) -> Length {
        self.rayleigh_range
    }
    /// Returns the beam radius at the axial position `z`.
    ///
    /// `w(z) = w0·sqrt(1+((z−z0)/zR)²)`. A vanishing Rayleigh range yields the waist radius at
    /// the waist itself and an infinite radius elsewhere.
    #[must_use]
    pub fn radius_at(&self, z: Length) -> Length {
        let distance = z - self.waist_position;
        if self.rayleigh_range.is_zero() {
            return if distance.is_zero() {
                self.waist_radius
            } else {
                self.waist_radius * f64::INFINITY
            };
        }
        let ratio: f64 = (distance / self.rayleigh_range).value;
        self.waist_radius * (1.0 + ratio * ratio).sqrt()
    }
}
