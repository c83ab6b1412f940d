#![warn(missing_docs)]
//! Schematic drawing of the beam in front of and behind the lens.
//!
//! [`render`] turns a [`BeamInput`] and its [`BeamResult`] into a [`Scene`], an ordered list of
//! drawing commands in pixel coordinates. The scene is drawn onto a real surface (SVG file,
//! bitmap file or image buffer) by [`surface::paint`].
pub mod dimension;
pub mod envelope;
pub mod layout;
pub mod scene;
pub mod surface;

pub use dimension::DimensionLine;
pub use envelope::beam_envelope;
pub use layout::SceneLayout;
pub use scene::{DrawCommand, PixelPoint, Scene, TextAnchor};
pub use surface::{paint, SurfaceBackEnd};

use crate::{
    calculator::{BeamInput, BeamResult},
    error::{GaussLensError, GlResult},
    meter,
    utils::unit_format::{angle_with_unit, position_with_unit, radius_with_unit},
};
use nalgebra::Point2;
use plotters::style::{Color, RGBAColor, BLACK, WHITE};
use uom::si::f64::Length;

/// The lens is drawn this many times larger than the beam radius at the lens.
const LENS_BEAM_FACTOR: f64 = 1.5;
/// Maximum half height of the lens as fraction of the surface height.
const LENS_MAX_FRACTION: f64 = 0.45;
/// Minimum half height of the lens in pixels.
const LENS_MIN_HALF_HEIGHT: f64 = 10.0;
/// Size of the arrow heads at the lens ends in pixels.
const ARROW_SIZE: f64 = 8.0;
/// Vertical position of the object / image distance lines below the axis (fraction of height).
const DISTANCE_ROW: f64 = 0.44;
/// Vertical position of the focal length lines below the axis (fraction of height).
const FOCAL_ROW: f64 = 0.34;
/// Line height of the labels in the upper margin in pixels.
const MARGIN_LINE_HEIGHT: f64 = 16.0;
/// Horizontal distance of margin labels from the surface border in pixels.
const MARGIN_INDENT: f64 = 10.0;
/// Largest accepted canvas width or height in pixels.
pub const MAX_SURFACE_SIZE: u32 = 16_384;

/// Size, sampling and colors of a rendered scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    width: u32,
    height: u32,
    /// horizontal sampling step of the beam envelopes in pixels
    pub envelope_step: f64,
    /// background color
    pub background: RGBAColor,
    /// color of the optical axis
    pub axis_color: RGBAColor,
    /// color of the lens symbol
    pub lens_color: RGBAColor,
    /// fill color of the input beam
    pub input_tint: RGBAColor,
    /// fill color of the output beam
    pub output_tint: RGBAColor,
    /// color of dimension lines and labels
    pub annotation_color: RGBAColor,
}
impl Default for RenderConfig {
    /// An 800 x 400 pixel white surface sampling the beam envelopes every pixel.
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            envelope_step: 1.0,
            background: WHITE.to_rgba(),
            axis_color: BLACK.to_rgba(),
            lens_color: RGBAColor(30, 30, 140, 1.0),
            input_tint: RGBAColor(220, 40, 40, 0.35),
            output_tint: RGBAColor(40, 90, 220, 0.35),
            annotation_color: RGBAColor(60, 60, 60, 1.0),
        }
    }
}
impl RenderConfig {
    /// Creates a new [`RenderConfig`] for a surface of the given size with default colors.
    ///
    /// # Errors
    ///
    /// This function returns an error if `width` or `height` is zero or larger than
    /// [`MAX_SURFACE_SIZE`].
    pub fn new(width: u32, height: u32) -> GlResult<Self> {
        if width == 0 || height == 0 {
            return Err(GaussLensError::Render(format!(
                "surface size must not be zero (got {width} x {height})"
            )));
        }
        if width > MAX_SURFACE_SIZE || height > MAX_SURFACE_SIZE {
            return Err(GaussLensError::Render(format!(
                "surface size must not exceed {MAX_SURFACE_SIZE} x {MAX_SURFACE_SIZE} (got {width} x {height})"
            )));
        }
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }
    /// Returns the surface size (width, height) in pixels.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Draw the complete schematic of the beam transformation.
///
/// Draw order: background, optical axis, lens, input beam, output beam, annotations.
#[must_use]
pub fn render(input: &BeamInput, result: &BeamResult, config: &RenderConfig) -> Scene {
    let layout = SceneLayout::new(
        input,
        result,
        f64::from(config.width),
        f64::from(config.height),
    );
    let mut scene = Scene::new(config.width, config.height);
    scene.push(DrawCommand::Clear(config.background));
    scene.line(
        layout.on_axis(0.0),
        layout.on_axis(layout.width()),
        config.axis_color,
    );
    draw_lens(&mut scene, input, result, &layout, config);

    let lens_x = layout.lens_x();
    scene.push(DrawCommand::Polygon {
        points: beam_envelope(
            &result.input_beam(input),
            0.0,
            lens_x,
            config.envelope_step,
            &layout,
        ),
        fill: config.input_tint,
    });
    scene.push(DrawCommand::Polygon {
        points: beam_envelope(
            &result.output_beam(),
            lens_x,
            layout.width(),
            config.envelope_step,
            &layout,
        ),
        fill: config.output_tint,
    });
    draw_annotations(&mut scene, input, result, &layout, config);
    scene
}

/// Returns the half height of the lens symbol in pixels.
fn lens_half_height(input: &BeamInput, result: &BeamResult, layout: &SceneLayout) -> f64 {
    let radius_at_lens = layout
        .radius_px(result.input_beam(input).radius_at(meter!(0.0)))
        .max(layout.radius_px(result.output_beam().radius_at(meter!(0.0))));
    (LENS_BEAM_FACTOR * radius_at_lens)
        .min(LENS_MAX_FRACTION * layout.height())
        .max(LENS_MIN_HALF_HEIGHT)
}

fn draw_lens(
    scene: &mut Scene,
    input: &BeamInput,
    result: &BeamResult,
    layout: &SceneLayout,
    config: &RenderConfig,
) {
    let x = layout.lens_x();
    let half_height = lens_half_height(input, result, layout);
    let top = Point2::new(x, layout.axis_y() - half_height);
    let bottom = Point2::new(x, layout.axis_y() + half_height);
    scene.line(top, bottom, config.lens_color);
    // converging lens: arrow heads pointing outwards
    for (tip, direction) in [(top, 1.0), (bottom, -1.0)] {
        for side in [-1.0, 1.0] {
            scene.line(
                tip,
                Point2::new(tip.x + side * ARROW_SIZE, tip.y + direction * ARROW_SIZE),
                config.lens_color,
            );
        }
    }
}

/// Vertical tick from the optical axis up to the waist radius with a label at its top.
fn draw_waist(
    scene: &mut Scene,
    x: f64,
    radius: Length,
    label: &str,
    layout: &SceneLayout,
    color: RGBAColor,
) {
    let axis = layout.on_axis(x);
    let top = Point2::new(x, layout.axis_y() - layout.radius_px(radius));
    scene.line(axis, top, color);
    for (from, to) in dimension::end_ticks(axis, top) {
        scene.line(from, to, color);
    }
    scene.text(
        Point2::new(x + dimension::LABEL_OFFSET, top.y - dimension::LABEL_OFFSET),
        label,
        TextAnchor::Left,
        color,
    );
}

fn draw_annotations(
    scene: &mut Scene,
    input: &BeamInput,
    result: &BeamResult,
    layout: &SceneLayout,
    config: &RenderConfig,
) {
    let color = config.annotation_color;
    let lens_x = layout.lens_x();
    let input_waist_x = layout.x_of(input.object_distance());
    let output_waist_x = layout.x_of(result.output_waist_position());
    let focal_length = input.focal_length();

    let distance_y = layout.axis_y() + DISTANCE_ROW * layout.height();
    let object_distance = DimensionLine::new(
        Point2::new(input_waist_x, distance_y),
        Point2::new(lens_x, distance_y),
        &format!("s = {}", position_with_unit(input.object_distance().abs())),
    );
    let image_distance = DimensionLine::new(
        Point2::new(lens_x, distance_y),
        Point2::new(output_waist_x, distance_y),
        &format!("s' = {}", position_with_unit(result.output_waist_position())),
    );
    let focal_y = layout.axis_y() + FOCAL_ROW * layout.height();
    let focal_label = format!("f = {}", position_with_unit(focal_length));
    let front_focal = DimensionLine::new(
        Point2::new(layout.x_of(-focal_length), focal_y),
        Point2::new(lens_x, focal_y),
        &focal_label,
    );
    let rear_focal = DimensionLine::new(
        Point2::new(lens_x, focal_y),
        Point2::new(layout.x_of(focal_length), focal_y),
        &focal_label,
    );
    for dim in [object_distance, image_distance, front_focal, rear_focal] {
        scene.extend(dim.commands(color));
    }

    draw_waist(
        scene,
        input_waist_x,
        input.waist_radius(),
        &format!("w0 = {}", radius_with_unit(input.waist_radius())),
        layout,
        color,
    );
    draw_waist(
        scene,
        output_waist_x,
        result.output_waist_radius(),
        &format!("w0' = {}", radius_with_unit(result.output_waist_radius())),
        layout,
        color,
    );

    let left = MARGIN_INDENT;
    let right = layout.width() - MARGIN_INDENT;
    scene.text(
        Point2::new(left, MARGIN_LINE_HEIGHT),
        &format!("zR = {}", position_with_unit(result.input_rayleigh_range())),
        TextAnchor::Left,
        color,
    );
    scene.text(
        Point2::new(left, 2.0 * MARGIN_LINE_HEIGHT),
        &format!("\u{03B8} = {}", angle_with_unit(result.input_divergence())),
        TextAnchor::Left,
        color,
    );
    scene.text(
        Point2::new(right, MARGIN_LINE_HEIGHT),
        &format!("zR' = {}", position_with_unit(result.output_rayleigh_range())),
        TextAnchor::Right,
        color,
    );
    scene.text(
        Point2::new(right, 2.0 * MARGIN_LINE_HEIGHT),
        &format!("\u{03B8}' = {}", angle_with_unit(result.output_divergence())),
        TextAnchor::Right,
        color,
    );
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::calculator::try_calculate;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;

    fn scenario_scene() -> Scene {
        let (input, result) = try_calculate(632.8, 100.0, 150.0, 0.5).unwrap();
        render(&input, &result, &RenderConfig::default())
    }
    #[test]
    fn config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.size(), (800, 400));
        assert_eq!(config.envelope_step, 1.0);
        assert_ne!(config.input_tint, config.output_tint);
        assert!(config.input_tint.3 < 1.0);
        assert!(config.output_tint.3 < 1.0);
    }
    #[test]
    fn config_new() {
        assert_eq!(RenderConfig::new(640, 480).unwrap().size(), (640, 480));
        assert_matches!(RenderConfig::new(0, 480), Err(GaussLensError::Render(_)));
        assert!(RenderConfig::new(640, 0).is_err());
        assert_eq!(
            RenderConfig::new(MAX_SURFACE_SIZE, MAX_SURFACE_SIZE)
                .unwrap()
                .size(),
            (MAX_SURFACE_SIZE, MAX_SURFACE_SIZE)
        );
        assert_matches!(
            RenderConfig::new(4_000_000_000, 400),
            Err(GaussLensError::Render(_))
        );
        assert!(RenderConfig::new(800, MAX_SURFACE_SIZE + 1).is_err());
    }
    #[test]
    fn starts_with_clear() {
        let scene = scenario_scene();
        assert_eq!(scene.size(), (800, 400));
        assert_eq!(
            scene.commands()[0],
            DrawCommand::Clear(RenderConfig::default().background)
        );
        assert_eq!(
            scene.commands()[1],
            DrawCommand::Line {
                from: Point2::new(0.0, 200.0),
                to: Point2::new(800.0, 200.0),
                color: BLACK.to_rgba()
            }
        );
    }
    #[test]
    fn draw_order() {
        let scene = scenario_scene();
        let config = RenderConfig::default();
        let polygons: Vec<(usize, RGBAColor)> = scene
            .commands()
            .iter()
            .enumerate()
            .filter_map(|(i, c)| match c {
                DrawCommand::Polygon { fill, .. } => Some((i, *fill)),
                _ => None,
            })
            .collect();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].1, config.input_tint);
        assert_eq!(polygons[1].1, config.output_tint);
        // axis + lens (line + 4 arrow strokes) come before the envelopes
        assert_eq!(polygons[0].0, 7);
        assert_eq!(polygons[1].0, 8);
        let first_text = scene
            .commands()
            .iter()
            .position(|c| matches!(c, DrawCommand::Text { .. }))
            .unwrap();
        assert!(first_text > polygons[1].0);
    }
    #[test]
    fn envelopes_span_canvas() {
        let scene = scenario_scene();
        let polygons: Vec<&Vec<PixelPoint>> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points),
                _ => None,
            })
            .collect();
        assert_eq!(polygons[0].first().unwrap().x, 0.0);
        assert_eq!(polygons[0][polygons[0].len() / 2 - 1].x, 400.0);
        assert_eq!(polygons[1].first().unwrap().x, 400.0);
        assert_eq!(polygons[1][polygons[1].len() / 2 - 1].x, 800.0);
        for polygon in polygons {
            assert!(polygon.iter().all(|p| p.y >= 0.0 && p.y <= 400.0));
        }
    }
    #[test]
    fn labels() {
        let scene = scenario_scene();
        let labels: Vec<&str> = scene.labels().collect();
        assert_eq!(
            labels,
            vec![
                "s = 150.00 mm",
                "s' = 100.32 mm",
                "f = 100.00 mm",
                "f = 100.00 mm",
                "w0 = 0.500 mm",
                "w0' = 0.040 mm",
                "zR = 1241.15 mm",
                "\u{03B8} = 0.403 mrad",
                "zR' = 8.04 mm",
                "\u{03B8}' = 5.004 mrad",
            ]
        );
    }
    #[test]
    fn lens_height_capped() {
        let (input, result) = try_calculate(632.8, 100.0, 150.0, 0.5).unwrap();
        let layout = SceneLayout::new(&input, &result, 800.0, 400.0);
        let half_height = lens_half_height(&input, &result, &layout);
        assert!(half_height <= LENS_MAX_FRACTION * 400.0);
        assert!(half_height >= LENS_MIN_HALF_HEIGHT);
        // the beam at the lens fills 80 % of the height, so the cap applies
        assert_relative_eq!(half_height, LENS_MAX_FRACTION * 400.0);
    }
    #[test]
    fn lens_height_proportional() {
        // input waist located at the lens: the beam at the lens is small compared to the extremes
        let (input, result) = try_calculate(1064.0, 100.0, 0.0, 0.05).unwrap();
        let layout = SceneLayout::new(&input, &result, 800.0, 400.0);
        let radius_at_lens = layout.radius_px(result.input_beam(&input).radius_at(meter!(0.0)));
        let half_height = lens_half_height(&input, &result, &layout);
        assert!(half_height < LENS_MAX_FRACTION * 400.0);
        assert!(half_height > LENS_MIN_HALF_HEIGHT);
        assert_relative_eq!(
            half_height,
            LENS_BEAM_FACTOR * radius_at_lens,
            max_relative = 1e-6
        );
    }
    #[test]
    fn waist_marker_ticks() {
        let (input, result) = try_calculate(632.8, 100.0, 150.0, 0.5).unwrap();
        let layout = SceneLayout::new(&input, &result, 800.0, 400.0);
        let scene = render(&input, &result, &RenderConfig::default());
        let x = layout.x_of(input.object_distance());
        let top_y = layout.axis_y() - layout.radius_px(input.waist_radius());
        let color = RenderConfig::default().annotation_color;
        let expected = [
            DrawCommand::Line {
                from: layout.on_axis(x),
                to: Point2::new(x, top_y),
                color,
            },
            DrawCommand::Line {
                from: Point2::new(x + dimension::TICK_HALF_LENGTH, layout.axis_y()),
                to: Point2::new(x - dimension::TICK_HALF_LENGTH, layout.axis_y()),
                color,
            },
            DrawCommand::Line {
                from: Point2::new(x + dimension::TICK_HALF_LENGTH, top_y),
                to: Point2::new(x - dimension::TICK_HALF_LENGTH, top_y),
                color,
            },
        ];
        let start = scene
            .commands()
            .windows(3)
            .position(|w| w == expected)
            .unwrap();
        assert_eq!(
            scene.commands()[start + 3],
            DrawCommand::Text {
                position: Point2::new(
                    x + dimension::LABEL_OFFSET,
                    top_y - dimension::LABEL_OFFSET
                ),
                text: "w0 = 0.500 mm".into(),
                anchor: TextAnchor::Left,
                color,
            }
        );
    }
    #[test]
    fn idempotent() {
        assert_eq!(scenario_scene(), scenario_scene());
    }
    #[test]
    fn configured_size() {
        let (input, result) = try_calculate(632.8, 100.0, 150.0, 0.5).unwrap();
        let config = RenderConfig::new(1000, 300).unwrap();
        let scene = render(&input, &result, &config);
        assert_eq!(scene.size(), (1000, 300));
        assert_eq!(
            scene.commands()[1],
            DrawCommand::Line {
                from: Point2::new(0.0, 150.0),
                to: Point2::new(1000.0, 150.0),
                color: BLACK.to_rgba()
            }
        );
    }
}
