#![warn(missing_docs)]
//! Outline of a Gaussian beam as a closed polygon.
use super::{layout::SceneLayout, scene::PixelPoint};
use crate::gaussian_beam::GaussianBeam;
use nalgebra::Point2;

/// Smallest sampling step in pixels.
const MIN_STEP: f64 = 0.1;

/// Sample the horizontal pixel positions from `x_start` to `x_end` (both included) in steps of
/// `step` pixels. The last step may be shorter. Steps below [`MIN_STEP`] are raised to it, invalid
/// steps fall back to one pixel.
fn sample_positions(x_start: f64, x_end: f64, step: f64) -> Vec<f64> {
    let (left, right) = if x_start <= x_end {
        (x_start, x_end)
    } else {
        (x_end, x_start)
    };
    let step = if step.is_finite() && step > 0.0 {
        step.max(MIN_STEP)
    } else {
        1.0
    };
    let mut positions: Vec<f64> = (0_u32..)
        .map(|i| f64::from(i).mul_add(step, left))
        .take_while(|x| *x < right)
        .collect();
    positions.push(right);
    positions
}

/// Returns the envelope of `beam` between the pixel positions `x_start` and `x_end`.
///
/// The beam radius `w(z)` is sampled every `step` pixels. The polygon consists of the upper
/// boundary traced from left to right followed by the lower boundary traced from right to left,
/// so that upper and lower point `i` and `len-1-i` share the same x position and are mirrored
/// at the optical axis.
#[must_use]
pub fn beam_envelope(
    beam: &GaussianBeam,
    x_start: f64,
    x_end: f64,
    step: f64,
    layout: &SceneLayout,
) -> Vec<PixelPoint> {
    let axis_y = layout.axis_y();
    let upper: Vec<PixelPoint> = sample_positions(x_start, x_end, step)
        .into_iter()
        .map(|x| {
            let half_height = layout.radius_px(beam.radius_at(layout.z_of(x)));
            Point2::new(x, axis_y - half_height)
        })
        .collect();
    let lower = upper
        .iter()
        .rev()
        .map(|p| Point2::new(p.x, 2.0f64.mul_add(axis_y, -p.y)));
    let mut polygon = upper.clone();
    polygon.extend(lower);
    polygon
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::calculator::try_calculate;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn scenario() -> (GaussianBeam, GaussianBeam, SceneLayout) {
        let (input, result) = try_calculate(632.8, 100.0, 150.0, 0.5).unwrap();
        let layout = SceneLayout::new(&input, &result, 800.0, 400.0);
        (result.input_beam(&input), result.output_beam(), layout)
    }
    #[test]
    fn sample_positions_inclusive() {
        assert_eq!(sample_positions(0.0, 4.0, 1.0), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sample_positions(0.0, 4.5, 2.0), vec![0.0, 2.0, 4.0, 4.5]);
        assert_eq!(sample_positions(4.0, 0.0, 2.0), vec![0.0, 2.0, 4.0]);
        assert_eq!(sample_positions(1.0, 1.0, 2.0), vec![1.0]);
    }
    #[test]
    fn sample_positions_invalid_step() {
        assert_eq!(sample_positions(0.0, 2.0, 0.0), vec![0.0, 1.0, 2.0]);
        assert_eq!(sample_positions(0.0, 2.0, -3.0), vec![0.0, 1.0, 2.0]);
        assert_eq!(sample_positions(0.0, 2.0, f64::NAN), vec![0.0, 1.0, 2.0]);
        assert_eq!(sample_positions(0.0, 100.0, 1e-12).len(), 1001);
    }
    #[test]
    fn polygon_closed_shape() {
        let (input_beam, _, layout) = scenario();
        let polygon = beam_envelope(&input_beam, 0.0, 400.0, 1.0, &layout);
        assert_eq!(polygon.len(), 2 * 401);
        assert_eq!(polygon.first().unwrap().x, 0.0);
        assert_eq!(polygon.last().unwrap().x, 0.0);
        assert_eq!(polygon[400].x, 400.0);
        assert_eq!(polygon[401].x, 400.0);
        // upper boundary above the axis, traced left to right
        for pair in polygon[..401].windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert!(pair[0].y <= layout.axis_y());
        }
    }
    fn assert_symmetric(polygon: &[PixelPoint], layout: &SceneLayout) {
        let n = polygon.len();
        assert!(n >= 4);
        for i in 0..n / 2 {
            let upper = polygon[i];
            let lower = polygon[n - 1 - i];
            assert!(upper.x.is_finite() && upper.y.is_finite());
            assert_eq!(upper.x, lower.x);
            assert_relative_eq!(
                layout.axis_y() - upper.y,
                lower.y - layout.axis_y(),
                epsilon = 1e-9
            );
        }
    }
    #[test]
    fn symmetric_about_axis() {
        // (wavelength, focal length, object distance, waist)
        for (lambda, f, s, w0) in [
            (632.8, 100.0, 150.0, 0.5),
            // waist at the lens
            (632.8, 100.0, 0.0, 0.5),
            // waist inside the focal length with a short Rayleigh range: virtual output waist
            (10_600.0, 100.0, 50.0, 0.05),
            // very distant waist
            (632.8, 100.0, 1.0e7, 0.5),
            // waist behind the lens
            (1064.0, 50.0, -80.0, 0.2),
        ] {
            let (input, result) = try_calculate(lambda, f, s, w0).unwrap();
            let layout = SceneLayout::new(&input, &result, 800.0, 400.0);
            let lens_x = layout.lens_x();
            for (beam, start, end) in [
                (result.input_beam(&input), 0.0, lens_x),
                (result.output_beam(), lens_x, 800.0),
            ] {
                assert_symmetric(&beam_envelope(&beam, start, end, 1.0, &layout), &layout);
            }
        }
    }
    #[test]
    fn virtual_output_waist() {
        let (_, result) = try_calculate(10_600.0, 100.0, 50.0, 0.05).unwrap();
        assert!(result.output_waist_position().value < 0.0);
    }
    #[test]
    fn waist_is_narrowest() {
        let (_, output_beam, layout) = scenario();
        let polygon = beam_envelope(&output_beam, 400.0, 800.0, 1.0, &layout);
        let upper = &polygon[..polygon.len() / 2];
        let narrowest = upper
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        let waist_x = layout.x_of(output_beam.waist_position());
        assert_abs_diff_eq!(narrowest.x, waist_x, epsilon = 1.0);
        assert_relative_eq!(
            layout.axis_y() - narrowest.y,
            layout.radius_px(output_beam.radius_at(layout.z_of(narrowest.x))),
            max_relative = 1e-9
        );
    }
    #[test]
    fn continuous_at_lens() {
        let (input_beam, output_beam, layout) = scenario();
        let input = beam_envelope(&input_beam, 0.0, 400.0, 1.0, &layout);
        let output = beam_envelope(&output_beam, 400.0, 800.0, 1.0, &layout);
        assert_relative_eq!(input[400].y, output[0].y, max_relative = 1e-9);
    }
}
