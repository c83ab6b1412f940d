#![warn(missing_docs)]
//! Mapping of axial positions and beam radii onto the drawing surface.
use super::scene::PixelPoint;
use crate::{
    calculator::{BeamInput, BeamResult},
    meter,
};
use nalgebra::Point2;
use uom::si::{f64::Length, length::meter};

/// Ratio between the displayed span and the largest characteristic distance of the setup.
pub const SPAN_FACTOR: f64 = 2.2;
/// The largest beam radius times this factor fills the surface height.
pub const HEIGHT_FACTOR: f64 = 2.5;

/// Scales and offsets of a scene.
///
/// The lens is located at `z = 0` in the horizontal center of the surface, the optical axis
/// runs through its vertical center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    width: f64,
    height: f64,
    span: Length,
    x_scale: f64,
    y_scale: f64,
}
impl SceneLayout {
    /// Creates the [`SceneLayout`] for the given beam on a surface of `width` x `height` pixels.
    ///
    /// The span is [`SPAN_FACTOR`] times the maximum of |s|, |s'|, f, |s+f| and |s'-f|. The
    /// vertical scale is chosen such that the largest radius of the input beam (left edge to
    /// lens) and the output beam (lens to right edge) times [`HEIGHT_FACTOR`] fills the height.
    #[must_use]
    pub fn new(input: &BeamInput, result: &BeamResult, width: f64, height: f64) -> Self {
        let s = input.object_distance().get::<meter>();
        let f = input.focal_length().get::<meter>();
        let s_out = result.output_waist_position().get::<meter>();
        let max_distance = [s.abs(), s_out.abs(), f, (s + f).abs(), (s_out - f).abs()]
            .into_iter()
            .fold(0.0, f64::max);
        let span = SPAN_FACTOR * max_distance;

        let input_beam = result.input_beam(input);
        let output_beam = result.output_beam();
        let half_span = meter!(span / 2.0);
        let max_radius = [
            input_beam.radius_at(-half_span),
            input_beam.radius_at(meter!(0.0)),
            output_beam.radius_at(meter!(0.0)),
            output_beam.radius_at(half_span),
        ]
        .into_iter()
        .map(|r| r.get::<meter>())
        .fold(0.0, f64::max);

        Self {
            width,
            height,
            span: meter!(span),
            x_scale: width / span,
            y_scale: height / (HEIGHT_FACTOR * max_radius),
        }
    }
    /// Returns the surface width in pixels.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }
    /// Returns the surface height in pixels.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
    /// Returns the displayed length of the optical axis.
    #[must_use]
    pub const fn span(&self) -> Length {
        self.span
    }
    /// Returns the horizontal scale in pixels per meter.
    #[must_use]
    pub const fn x_scale(&self) -> f64 {
        self.x_scale
    }
    /// Returns the vertical scale in pixels per meter.
    #[must_use]
    pub const fn y_scale(&self) -> f64 {
        self.y_scale
    }
    /// Returns the horizontal pixel position of the lens.
    #[must_use]
    pub fn lens_x(&self) -> f64 {
        self.width / 2.0
    }
    /// Returns the vertical pixel position of the optical axis.
    #[must_use]
    pub fn axis_y(&self) -> f64 {
        self.height / 2.0
    }
    /// Returns the horizontal pixel position of the axial position `z`.
    #[must_use]
    pub fn x_of(&self, z: Length) -> f64 {
        self.lens_x() + z.get::<meter>() * self.x_scale
    }
    /// Returns the axial position at the horizontal pixel position `x`.
    #[must_use]
    pub fn z_of(&self, x: f64) -> Length {
        meter!((x - self.lens_x()) / self.x_scale)
    }
    /// Returns the beam radius in pixels.
    #[must_use]
    pub fn radius_px(&self, radius: Length) -> f64 {
        radius.get::<meter>() * self.y_scale
    }
    /// Returns the point on the optical axis at the horizontal pixel position `x`.
    #[must_use]
    pub fn on_axis(&self, x: f64) -> PixelPoint {
        Point2::new(x, self.axis_y())
    }
}
