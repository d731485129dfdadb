//! glyphset library crate.
//!
//! Generates a labeled dataset of single-glyph images: every character of an
//! alphabet rendered in every configured font, centered on a fixed-size canvas
//! and stored as `<out>/<codepoint>/<font-index>.bmp`.

pub mod alphabet;
pub mod batch;
pub mod color;
pub mod config;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod output;
pub mod rasterizer;
