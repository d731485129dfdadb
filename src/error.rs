// src/error.rs

//! Error types for each stage of the generation pipeline.
//!
//! Font loading errors are fatal at startup. Render and output errors are
//! scoped to a single (character, font) pair so the batch driver can decide
//! whether to skip the pair or abort the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A font could not be turned into a usable typeface.
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read font '{name}' from {}: {source}", .path.display())]
    Unreadable {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse font '{name}': {source}")]
    Malformed {
        name: String,
        #[source]
        source: ttf_parser::FaceParsingError,
    },
}

/// The rasterizer rejected a text/font/canvas combination.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("corrupt outline for glyph {glyph} ({ch:?}) in font '{font}'")]
    CorruptOutline { font: String, ch: char, glyph: u16 },
}

/// Writing a finished canvas to disk failed.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Any failure while producing one image of the dataset.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Output(#[from] OutputError),
}
