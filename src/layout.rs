// src/layout.rs

//! Text measurement and glyph placement.
//!
//! Widths are accumulated in integer font design units and scaled to pixels
//! once at the end, so the result is exact for the font's own metrics. The
//! rasterizer walks the same [`GlyphRun`] to place outlines, which keeps the
//! measured width and the drawn glyphs in agreement.

use log::trace;
pub use ttf_parser::GlyphId;

/// Glyph index every font reserves for unmapped characters (`.notdef`).
pub const MISSING_GLYPH: GlyphId = GlyphId(0);

/// Horizontal metrics needed to lay out a line of text.
pub trait GlyphSource {
    /// Design units per em square.
    fn units_per_em(&self) -> u16;

    /// Glyph index for `ch`, or [`MISSING_GLYPH`] when the font has no mapping.
    fn glyph_index(&self, ch: char) -> GlyphId;

    /// Advance width of `glyph` in design units.
    fn advance_width(&self, glyph: GlyphId) -> u16;

    /// Kerning adjustment between a glyph pair in design units.
    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16;

    /// Design-unit to pixel scale factor at `size_px`.
    fn scale(&self, size_px: f32) -> f32 {
        size_px / f32::from(self.units_per_em().max(1))
    }
}

/// A glyph together with where the pen sits when it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub glyph: GlyphId,
    /// Pen position in design units, relative to the start of the run.
    pub pen_x: i32,
}

/// Iterator over the glyphs of a string, by Unicode code point.
///
/// The pen starts at zero. Before each glyph after the first, the kerning
/// between the previous glyph and the current one is added; after each glyph
/// its advance width is added.
pub struct GlyphRun<'s, 't, S: GlyphSource + ?Sized> {
    source: &'s S,
    chars: std::str::Chars<'t>,
    prev: Option<GlyphId>,
    pen_x: i32,
}

impl<'s, 't, S: GlyphSource + ?Sized> GlyphRun<'s, 't, S> {
    pub fn new(source: &'s S, text: &'t str) -> Self {
        Self {
            source,
            chars: text.chars(),
            prev: None,
            pen_x: 0,
        }
    }

    /// Pen position after every glyph yielded so far.
    pub fn advance(&self) -> i32 {
        self.pen_x
    }
}

impl<S: GlyphSource + ?Sized> Iterator for GlyphRun<'_, '_, S> {
    type Item = PlacedGlyph;

    fn next(&mut self) -> Option<PlacedGlyph> {
        let ch = self.chars.next()?;
        let glyph = self.source.glyph_index(ch);
        if let Some(prev) = self.prev {
            self.pen_x += i32::from(self.source.kerning(prev, glyph));
        }
        let placed = PlacedGlyph {
            ch,
            glyph,
            pen_x: self.pen_x,
        };
        self.pen_x += i32::from(self.source.advance_width(glyph));
        self.prev = Some(glyph);
        Some(placed)
    }
}

/// Total advance of `text` in design units, kerning included.
pub fn measure_units<S: GlyphSource + ?Sized>(source: &S, text: &str) -> i32 {
    let mut run = GlyphRun::new(source, text);
    for _ in run.by_ref() {}
    run.advance()
}

/// Width in pixels that `text` occupies when set at `size_px`.
pub fn measure<S: GlyphSource + ?Sized>(source: &S, size_px: f32, text: &str) -> f32 {
    let units = measure_units(source, text);
    let width = units as f32 * source.scale(size_px);
    trace!("measure {:?} at {}px: {} units, {}px", text, size_px, units, width);
    width
}

/// Point where drawing starts: x on the left edge of the text, y on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOrigin {
    pub x: f32,
    pub y: f32,
}

/// Centers text of `width_px` horizontally on the canvas.
///
/// The result is not clamped; text wider than the canvas gets a negative x.
pub fn center(width_px: f32, canvas_width: u32, baseline_y: f32) -> DrawOrigin {
    DrawOrigin {
        x: canvas_width as f32 / 2.0 - width_px / 2.0,
        y: baseline_y,
    }
}
