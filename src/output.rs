// src/output.rs

//! Dataset layout on disk and the BMP sink.
//!
//! Images land in `<root>/<codepoint>/<font>.bmp`. Directories are named by
//! the character's numeric code point so every character is filesystem-safe,
//! and all fonts for one character share a directory.

use crate::config::{OutputConfig, OutputNaming};
use crate::error::OutputError;
use crate::rasterizer::Canvas;
use image::ImageFormat;
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extension of every generated image.
pub const IMAGE_EXTENSION: &str = "bmp";

/// Maps (character, font) pairs to output paths.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    naming: OutputNaming,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, naming: OutputNaming) -> Self {
        Self {
            root: root.into(),
            naming,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every image of `ch`.
    pub fn char_dir(&self, ch: char) -> PathBuf {
        self.root.join(u32::from(ch).to_string())
    }

    /// File stem of the images of the font at `font_index` named `font_name`.
    pub fn file_stem(&self, font_index: usize, font_name: &str) -> String {
        match self.naming {
            OutputNaming::Index => font_index.to_string(),
            OutputNaming::Name => sanitize_file_stem(font_name),
        }
    }

    /// Path of the image of `ch` in the font at `font_index` named `font_name`.
    pub fn image_path(&self, ch: char, font_index: usize, font_name: &str) -> PathBuf {
        let stem = self.file_stem(font_index, font_name);
        self.char_dir(ch)
            .join(format!("{}.{}", stem, IMAGE_EXTENSION))
    }

    /// First pair of fonts, in list order, that would write to the same file.
    pub fn find_collision<'n>(
        &self,
        font_names: impl IntoIterator<Item = &'n str>,
    ) -> Option<(&'n str, &'n str)> {
        let mut seen: HashMap<String, &'n str> = HashMap::new();
        for (index, name) in font_names.into_iter().enumerate() {
            if let Some(first) = seen.insert(self.file_stem(index, name), name) {
                return Some((first, name));
            }
        }
        None
    }

    /// Creates the directory for `ch`. An existing directory is fine.
    pub fn ensure_char_dir(&self, ch: char) -> Result<PathBuf, OutputError> {
        let dir = self.char_dir(ch);
        create_dir(&dir)?;
        Ok(dir)
    }
}

impl From<&OutputConfig> for OutputLayout {
    fn from(config: &OutputConfig) -> Self {
        OutputLayout::new(config.directory.clone(), config.naming)
    }
}

/// Replaces anything but ASCII alphanumerics, `-` and `_` with `_`.
fn sanitize_file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "_".to_string()
    } else {
        stem
    }
}

fn create_dir(dir: &Path) -> Result<(), OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Encodes `canvas` as a 24-bit BMP at `path`, creating parent directories.
pub fn write(canvas: &Canvas, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    canvas
        .to_rgb_image()
        .save_with_format(path, ImageFormat::Bmp)
        .map_err(|source| OutputError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        "Wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
