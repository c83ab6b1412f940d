//! Drawing a [`Scene`] onto a `plotters` drawing surface.
use super::scene::{DrawCommand, PixelPoint, Scene, TextAnchor};
use crate::{
    error::{GaussLensError, GlResult},
    utils::f64_to_i32,
};
use image::RgbImage;
use log::{info, warn};
use plotters::{
    backend::{DrawingBackend, PixelFormat, RGBPixel},
    coord::Shift,
    element::{PathElement, Polygon, Text},
    prelude::{BitMapBackend, DrawingArea, IntoDrawingArea, SVGBackend},
    style::{
        text_anchor::{HPos, Pos, VPos},
        Color, IntoFont,
    },
};
use std::path::{Path, PathBuf};

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: u32 = 14;
const LINE_WIDTH: u32 = 1;

///Enum to describe which drawing surface should be used
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceBackEnd {
    /// `BitmapBackend` writing to the given file. Used to create .png, .bmp, .jpg
    Bitmap(PathBuf),
    /// `SVGBackend` writing to the given file. Used to create .svg
    SVG(PathBuf),
    /// Buffered Backend. Used to draw into an image buffer.
    Buf,
}
impl SurfaceBackEnd {
    /// Select the backend from the file extension of `path`.
    ///
    /// # Errors
    ///
    /// This function returns an error if the extension is not one of `svg`, `png`, `bmp`,
    /// `jpg` or `jpeg`.
    pub fn from_path(path: &Path) -> GlResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("svg") => Ok(Self::SVG(path.to_path_buf())),
            Some("png" | "bmp" | "jpg" | "jpeg") => Ok(Self::Bitmap(path.to_path_buf())),
            _ => Err(GaussLensError::Render(format!(
                "unsupported diagram file type: {}",
                path.display()
            ))),
        }
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> GaussLensError {
    GaussLensError::Render(format!("drawing failed: {e}"))
}

fn to_pixel(point: &PixelPoint) -> (i32, i32) {
    (f64_to_i32(point.x), f64_to_i32(point.y))
}

const fn h_pos(anchor: TextAnchor) -> HPos {
    match anchor {
        TextAnchor::Left => HPos::Left,
        TextAnchor::Center => HPos::Center,
        TextAnchor::Right => HPos::Right,
    }
}

/// Execute all commands of `scene` on the given drawing area.
///
/// Labels that cannot be drawn (e.g. due to a missing font on a bitmap backend) are skipped
/// with a warning.
///
/// # Errors
///
/// This function returns an error if a line or polygon cannot be drawn or the drawing area
/// cannot be presented.
pub fn draw_on<DB: DrawingBackend>(scene: &Scene, area: &DrawingArea<DB, Shift>) -> GlResult<()> {
    for command in scene.commands() {
        match command {
            DrawCommand::Clear(color) => area.fill(color).map_err(render_error)?,
            DrawCommand::Line { from, to, color } => area
                .draw(&PathElement::new(
                    vec![to_pixel(from), to_pixel(to)],
                    color.stroke_width(LINE_WIDTH),
                ))
                .map_err(render_error)?,
            DrawCommand::Polygon { points, fill } => area
                .draw(&Polygon::new(
                    points.iter().map(to_pixel).collect::<Vec<_>>(),
                    fill.filled(),
                ))
                .map_err(render_error)?,
            DrawCommand::Text {
                position,
                text,
                anchor,
                color,
            } => {
                let style = (FONT_FAMILY, FONT_SIZE)
                    .into_font()
                    .color(color)
                    .pos(Pos::new(h_pos(*anchor), VPos::Bottom));
                if let Err(e) = area.draw(&Text::new(text.as_str(), to_pixel(position), style)) {
                    warn!("label \"{text}\" could not be drawn: {e}");
                }
            }
        }
    }
    area.present().map_err(render_error)
}

/// Draw `scene` onto the given surface.
///
/// # Returns
/// This function returns `None` if a file (svg, png, bmp or jpg) is written. It returns
/// `Some(RgbImage)` if the scene is drawn into a buffer.
///
/// # Errors
/// This function returns an error if
///   - the scene has a width or height of zero
///   - the scene cannot be drawn (see [`draw_on`])
///   - the file cannot be written
pub fn paint(scene: &Scene, backend: &SurfaceBackEnd) -> GlResult<Option<RgbImage>> {
    let size = scene.size();
    if size.0 == 0 || size.1 == 0 {
        return Err(GaussLensError::Render(
            "cannot draw a scene with zero width or height".into(),
        ));
    }
    match backend {
        SurfaceBackEnd::Bitmap(path) => {
            let area = BitMapBackend::new(path, size).into_drawing_area();
            draw_on(scene, &area)?;
            info!("Write diagram to {}", path.display());
            Ok(None)
        }
        SurfaceBackEnd::SVG(path) => {
            let area = SVGBackend::new(path, size).into_drawing_area();
            draw_on(scene, &area)?;
            info!("Write diagram to {}", path.display());
            Ok(None)
        }
        SurfaceBackEnd::Buf => {
            let mut image_buffer =
                vec![0; size.0 as usize * size.1 as usize * RGBPixel::PIXEL_SIZE];
            {
                let area = BitMapBackend::with_buffer(&mut image_buffer, size).into_drawing_area();
                draw_on(scene, &area)?;
            }
            let img = RgbImage::from_raw(size.0, size.1, image_buffer)
                .ok_or_else(|| GaussLensError::Render("image buffer size too small".into()))?;
            Ok(Some(img))
        }
    }
}
