//! Image compositor.
//!
//! Turns one (text, typeface) pair into a fixed-size canvas:
//!
//! ```text
//! measure(text)  →  center(width)  →  fill background  →  fill glyph paths
//!   (layout)          (layout)           (Canvas)            (tiny-skia)
//! ```
//!
//! Every canvas of a run has the same dimensions, so images are directly
//! comparable across characters and fonts.

pub mod outline;

use crate::color::Color;
use crate::config::Config;
use crate::error::RenderError;
use crate::fonts::Typeface;
use crate::layout::{self, DrawOrigin, GlyphRun, GlyphSource};
use image::RgbImage;
use log::trace;
use outline::{glyph_outline, glyph_transform, Outline};
use tiny_skia::{FillRule, Paint, Pixmap};

/// Points per inch; font sizes are given in points.
const POINTS_PER_INCH: f32 = 72.0;

/// Everything the compositor needs besides the text and the font.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Font size in points.
    pub font_size: f32,
    pub dpi: f32,
    /// Baseline distance from the top edge, in pixels.
    pub baseline_y: f32,
    pub foreground: Color,
    pub background: Color,
    pub antialias: bool,
}

impl RenderSettings {
    /// Font size converted to pixels at the configured resolution.
    pub fn pixel_size(&self) -> f32 {
        self.font_size * self.dpi / POINTS_PER_INCH
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings::from(&Config::default())
    }
}

impl From<&Config> for RenderSettings {
    fn from(config: &Config) -> Self {
        RenderSettings {
            canvas_width: config.canvas.width,
            canvas_height: config.canvas.height,
            font_size: config.text.font_size,
            dpi: config.text.dpi,
            baseline_y: config.canvas.baseline_y,
            foreground: config.colors.foreground,
            background: config.colors.background,
            antialias: config.text.antialias,
        }
    }
}

/// A fixed-size, opaque pixel buffer.
#[derive(Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Canvas {
    /// Allocates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, RenderError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
        pixmap.fill(background.into());
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// RGB value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some((color.red(), color.green(), color.blue()))
    }

    /// Copies the canvas into an RGB image, dropping the (always opaque) alpha.
    pub fn to_rgb_image(&self) -> RgbImage {
        let (width, height) = (self.width(), self.height());
        RgbImage::from_fn(width, height, |x, y| {
            let (r, g, b) = self.pixel(x, y).unwrap_or((0, 0, 0));
            image::Rgb([r, g, b])
        })
    }

    fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}

/// Renders `text` centered on a fresh canvas.
///
/// Glyphs without contours draw nothing. A glyph whose outline fails to decode
/// part way through fails the whole render rather than leaving a partial
/// drawing on the canvas.
pub fn render(
    typeface: &Typeface<'_>,
    text: &str,
    settings: &RenderSettings,
) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(
        settings.canvas_width,
        settings.canvas_height,
        settings.background,
    )?;

    let size_px = settings.pixel_size();
    let width = layout::measure(typeface, size_px, text);
    let origin = layout::center(width, settings.canvas_width, settings.baseline_y);
    draw_text(&mut canvas, typeface, text, size_px, origin, settings)?;
    Ok(canvas)
}

fn draw_text(
    canvas: &mut Canvas,
    typeface: &Typeface<'_>,
    text: &str,
    size_px: f32,
    origin: DrawOrigin,
    settings: &RenderSettings,
) -> Result<(), RenderError> {
    let scale = typeface.scale(size_px);
    let mut paint = Paint::default();
    paint.set_color(settings.foreground.into());
    paint.anti_alias = settings.antialias;

    // Decode every outline before touching the canvas.
    let mut paths = Vec::new();
    for placed in GlyphRun::new(typeface, text) {
        match glyph_outline(typeface.face(), placed.glyph) {
            Outline::Path(path) => {
                let pen_x = origin.x + placed.pen_x as f32 * scale;
                trace!(
                    "glyph {:?} (id {}) at x={} baseline={}",
                    placed.ch,
                    placed.glyph.0,
                    pen_x,
                    origin.y
                );
                paths.push((path, glyph_transform(scale, pen_x, origin.y)));
            }
            Outline::Empty => {
                trace!("glyph {:?} (id {}) has no outline", placed.ch, placed.glyph.0);
            }
            Outline::Corrupt => {
                return Err(RenderError::CorruptOutline {
                    font: typeface.name().to_string(),
                    ch: placed.ch,
                    glyph: placed.glyph.0,
                });
            }
        }
    }

    let pixmap = canvas.pixmap_mut();
    for (path, transform) in &paths {
        pixmap.fill_path(path, &paint, FillRule::Winding, *transform, None);
    }
    Ok(())
}
