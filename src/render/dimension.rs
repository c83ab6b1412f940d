#![warn(missing_docs)]
//! Labeled dimension lines.
use super::scene::{DrawCommand, PixelPoint, TextAnchor};
use nalgebra::Vector2;
use plotters::style::RGBAColor;

/// Half length of the end ticks in pixels.
pub const TICK_HALF_LENGTH: f64 = 5.0;
/// Distance of the label from the dimension line in pixels.
pub const LABEL_OFFSET: f64 = 4.0;

/// Unit vector perpendicular to the segment `from`-`to`, pointing upwards (towards smaller y)
/// for non-vertical segments. A degenerated segment uses the upward direction.
#[must_use]
pub fn normal_between(from: PixelPoint, to: PixelPoint) -> Vector2<f64> {
    let direction = to - from;
    let length = direction.norm();
    if length == 0.0 || !length.is_finite() {
        return Vector2::new(0.0, -1.0);
    }
    let normal = Vector2::new(direction.y, -direction.x) / length;
    if normal.y > 0.0 {
        -normal
    } else {
        normal
    }
}

/// Perpendicular ticks of [`TICK_HALF_LENGTH`] at both ends of the segment `from`-`to`.
#[must_use]
pub fn end_ticks(from: PixelPoint, to: PixelPoint) -> [(PixelPoint, PixelPoint); 2] {
    let offset = normal_between(from, to) * TICK_HALF_LENGTH;
    [(from - offset, from + offset), (to - offset, to + offset)]
}

/// A measurement between two points: the line itself, perpendicular ticks at both ends and
/// a label centered above the line.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    from: PixelPoint,
    to: PixelPoint,
    label: String,
}
impl DimensionLine {
    /// Creates a new [`DimensionLine`].
    #[must_use]
    pub fn new(from: PixelPoint, to: PixelPoint, label: &str) -> Self {
        Self {
            from,
            to,
            label: label.to_owned(),
        }
    }
    /// Returns the label of this [`DimensionLine`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Unit vector perpendicular to the line, pointing upwards (see [`normal_between`]).
    #[must_use]
    pub fn normal(&self) -> Vector2<f64> {
        normal_between(self.from, self.to)
    }
    /// Returns the two end ticks as (start, end) point pairs.
    #[must_use]
    pub fn ticks(&self) -> [(PixelPoint, PixelPoint); 2] {
        end_ticks(self.from, self.to)
    }
    /// Returns the anchor point of the label (center of the line shifted by [`LABEL_OFFSET`]).
    #[must_use]
    pub fn label_position(&self) -> PixelPoint {
        nalgebra::center(&self.from, &self.to) + self.normal() * LABEL_OFFSET
    }
    /// Returns the drawing commands: line, both ticks and the label.
    #[must_use]
    pub fn commands(&self, color: RGBAColor) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Line {
            from: self.from,
            to: self.to,
            color,
        }];
        commands.extend(
            self.ticks()
                .into_iter()
                .map(|(from, to)| DrawCommand::Line { from, to, color }),
        );
        commands.push(DrawCommand::Text {
            position: self.label_position(),
            text: self.label.clone(),
            anchor: TextAnchor::Center,
            color,
        });
        commands
    }
}
