// src/color.rs

//! Defines the color types (`NamedColor`, `Color`) used for canvas
//! background and glyph foreground, and their conversion to concrete RGB.

use serde::{Deserialize, Serialize};

/// A small palette of named colors accepted in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Black,
    White,
    Gray,
    Red,
    Green,
    Blue,
}

impl NamedColor {
    /// Returns the sRGB triple for this named color.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::White => (255, 255, 255),
            NamedColor::Gray => (128, 128, 128),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 255, 0),
            NamedColor::Blue => (0, 0, 255),
        }
    }
}

/// An opaque color: either a named palette entry or an explicit RGB triple.
///
/// In JSON a named color is a bare string (`"black"`) and an RGB color is a
/// three-element array (`[32, 32, 32]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const WHITE: Color = Color::Named(NamedColor::White);

    /// Resolves the color to its `(r, g, b)` components.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.to_rgb();
        tiny_skia::Color::from_rgba8(r, g, b, 255)
    }
}
