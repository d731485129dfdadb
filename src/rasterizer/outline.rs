//! Glyph outline extraction.
//!
//! Converts ttf-parser outline callbacks into tiny-skia paths. Paths are in
//! font design units with the Y axis pointing up; [`glyph_transform`] maps
//! them onto the canvas.

use crate::layout::GlyphId;
use std::num::NonZeroU16;
use tiny_skia::{Path, PathBuilder, Transform};
use ttf_parser::{loca, Face, Tag};

/// Result of decoding one glyph outline.
#[derive(Debug)]
pub enum Outline {
    /// The glyph has a drawable path.
    Path(Path),
    /// The glyph has no contours (e.g. a space).
    Empty,
    /// The glyph has outline data that could not be decoded.
    Corrupt,
}

/// Records ttf-parser outline commands into a tiny-skia `PathBuilder`.
pub struct GlyphOutlineBuilder {
    builder: PathBuilder,
    commands: usize,
}

impl GlyphOutlineBuilder {
    pub fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
            commands: 0,
        }
    }

    /// Number of outline commands received so far.
    pub fn commands(&self) -> usize {
        self.commands
    }

    pub fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl Default for GlyphOutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ttf_parser::OutlineBuilder for GlyphOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands += 1;
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands += 1;
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands += 1;
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands += 1;
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.commands += 1;
        self.builder.close();
    }
}

/// Decodes the outline of `glyph`.
///
/// ttf-parser reports both "no contours" and "bad data" as `None`. A failed
/// decode counts as corrupt when the builder already received commands, or
/// when `loca` gives the glyph a non-empty record in `glyf`.
pub fn glyph_outline(face: &Face<'_>, glyph: GlyphId) -> Outline {
    let mut builder = GlyphOutlineBuilder::new();
    let decoded = face.outline_glyph(glyph, &mut builder).is_some();
    let has_data = !decoded && has_glyf_record(face, glyph);
    classify(decoded, has_data, builder)
}

/// Whether `loca` points `glyph` at a non-empty byte range of `glyf`.
/// Always false for fonts without TrueType outlines.
pub fn has_glyf_record(face: &Face<'_>, glyph: GlyphId) -> bool {
    let Some(data) = face.raw_face().table(Tag::from_bytes(b"loca")) else {
        return false;
    };
    let Some(count) = NonZeroU16::new(face.number_of_glyphs()) else {
        return false;
    };
    let format = face.tables().head.index_to_location_format;
    loca::Table::parse(count, format, data)
        .and_then(|table| table.glyph_range(glyph))
        .is_some()
}

fn classify(decoded: bool, has_data: bool, builder: GlyphOutlineBuilder) -> Outline {
    let commands = builder.commands();
    match (decoded, builder.finish()) {
        (true, Some(path)) => Outline::Path(path),
        (false, _) if commands > 0 || has_data => Outline::Corrupt,
        _ => Outline::Empty,
    }
}

/// Maps design units at `scale` onto the canvas with the pen at `(x, y)`,
/// flipping Y to match tiny-skia's Y-down coordinates.
#[inline]
pub fn glyph_transform(scale: f32, x: f32, y: f32) -> Transform {
    Transform::from_row(scale, 0.0, 0.0, -scale, x, y)
}
