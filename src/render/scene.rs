#![warn(missing_docs)]
//! Drawing commands and the [`Scene`] collecting them.
use nalgebra::Point2;
use plotters::style::RGBAColor;

/// A position on the drawing surface in pixels (origin top left, y pointing downwards).
pub type PixelPoint = Point2<f64>;

/// Horizontal alignment of a text label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// the label starts at the anchor point
    Left,
    /// the label is centered at the anchor point
    Center,
    /// the label ends at the anchor point
    Right,
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// fill the whole surface with the given color
    Clear(RGBAColor),
    /// straight line segment
    Line {
        /// start point
        from: PixelPoint,
        /// end point
        to: PixelPoint,
        /// stroke color
        color: RGBAColor,
    },
    /// filled (implicitly closed) polygon
    Polygon {
        /// polygon vertices
        points: Vec<PixelPoint>,
        /// fill color
        fill: RGBAColor,
    },
    /// text label whose baseline sits at `position`
    Text {
        /// anchor point
        position: PixelPoint,
        /// label text
        text: String,
        /// horizontal alignment
        anchor: TextAnchor,
        /// text color
        color: RGBAColor,
    },
}

/// An ordered list of [`DrawCommand`]s for a surface of fixed pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}
impl Scene {
    /// Creates a new, empty [`Scene`] for a surface of the given size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }
    /// Returns the surface size (width, height) in pixels.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    /// Returns the drawing commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
    /// Append a single command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
    /// Append a line segment.
    pub fn line(&mut self, from: PixelPoint, to: PixelPoint, color: RGBAColor) {
        self.push(DrawCommand::Line { from, to, color });
    }
    /// Append a text label.
    pub fn text(&mut self, position: PixelPoint, text: &str, anchor: TextAnchor, color: RGBAColor) {
        self.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            anchor,
            color,
        });
    }
    /// Returns all labels of this scene.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
impl Extend<DrawCommand> for Scene {
    fn extend<T: IntoIterator<Item = DrawCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}
