//! A single font: its raw bytes and the parsed face over them.

use crate::error::FontLoadError;
use crate::layout::{GlyphId, GlyphSource, MISSING_GLYPH};
use log::debug;
use std::path::Path;
use ttf_parser::Face;

/// Raw bytes of one font file, tagged with the identifier it was loaded under.
#[derive(Clone)]
pub struct FontData {
    name: String,
    bytes: Vec<u8>,
}

impl FontData {
    /// Reads the font file at `path`.
    pub fn read(name: &str, path: &Path) -> Result<Self, FontLoadError> {
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Unreadable {
            name: name.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes for font '{}' from {}", bytes.len(), name, path.display());
        Ok(Self::from_bytes(name, bytes))
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A parsed, read-only font face.
#[derive(Clone)]
pub struct Typeface<'a> {
    name: &'a str,
    face: Face<'a>,
}

impl<'a> Typeface<'a> {
    /// Parses the first face in `data`.
    pub fn parse(data: &'a FontData) -> Result<Self, FontLoadError> {
        let face = Face::parse(data.as_bytes(), 0).map_err(|source| FontLoadError::Malformed {
            name: data.name().to_string(),
            source,
        })?;
        Ok(Self {
            name: data.name(),
            face,
        })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn face(&self) -> &Face<'a> {
        &self.face
    }
}

impl std::fmt::Debug for Typeface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("name", &self.name)
            .field("units_per_em", &self.face.units_per_em())
            .field("glyphs", &self.face.number_of_glyphs())
            .finish()
    }
}

impl GlyphSource for Typeface<'_> {
    fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    fn glyph_index(&self, ch: char) -> GlyphId {
        self.face.glyph_index(ch).unwrap_or(MISSING_GLYPH)
    }

    fn advance_width(&self, glyph: GlyphId) -> u16 {
        self.face.glyph_hor_advance(glyph).unwrap_or(0)
    }

    /// Looks the pair up in the horizontal subtables of the `kern` table.
    /// The first subtable with an entry wins.
    fn kerning(&self, left: GlyphId, right: GlyphId) -> i16 {
        let Some(kern) = self.face.tables().kern else {
            return 0;
        };
        kern.subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal)
            .find_map(|subtable| subtable.glyphs_kerning(left, right))
            .unwrap_or(0)
    }
}
