// src/config.rs

//! Defines the configuration structures for a `glyphset` run.
//!
//! The configuration is deserialized from an optional JSON file. Every section
//! carries `#[serde(default)]`, so a file only needs to mention the settings it
//! changes. The defaults reproduce the tuned 35x35 dataset: 30 pt glyphs at
//! 72 dpi on a baseline 26 pixels from the top.

use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::alphabet::Alphabet;
use crate::color::Color;
use crate::output::OutputLayout;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "GLYPHSET_CONFIG";
/// Configuration file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "glyphset.json";

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for one dataset run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Characters to generate images for.
    pub alphabet: Alphabet,
    /// Which fonts to load and where to find them.
    pub fonts: FontConfig,
    /// Canvas geometry.
    pub canvas: CanvasConfig,
    /// Glyph size and rasterization settings.
    pub text: TextConfig,
    /// Foreground and background colors.
    pub colors: ColorScheme,
    /// Output directory layout.
    pub output: OutputConfig,
    /// What to do when a single image fails to render or write.
    pub on_error: FailurePolicy,
}

// --- Font Configuration ---

/// Font list configuration.
///
/// The order of `names` is significant: a font's position in this list is the
/// file name of its images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directory font files are resolved against.
    pub directory: PathBuf,
    /// Font identifiers, without extension.
    pub names: Vec<String>,
    /// File extension appended to each identifier.
    pub extension: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            directory: PathBuf::from("."),
            names: [
                // Sans-serif
                "arial",
                "verdana",
                "trebuchet",
                "microsoft-sans",
                "merriweather-sans",
                // Serif
                "times-new-roman",
                "georgia",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            extension: "ttf".to_string(),
        }
    }
}

impl FontConfig {
    /// Path of the font file for `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.{}", name, self.extension))
    }
}

// --- Canvas Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Distance in pixels from the top edge to the text baseline.
    /// Tuned so that typical glyphs sit visually centered.
    pub baseline_y: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 35,
            height: 35,
            baseline_y: 26.0,
        }
    }
}

// --- Text Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Font size in points.
    pub font_size: f32,
    /// Resolution used to convert points to pixels.
    pub dpi: f32,
    /// Anti-aliased edges. When false every pixel is either foreground or
    /// background.
    pub antialias: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            font_size: 30.0,
            dpi: 72.0,
            antialias: true,
        }
    }
}

// --- Color Scheme Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub foreground: Color,
    pub background: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

// --- Output Configuration ---

/// How image files inside a character directory are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputNaming {
    /// Zero-based position of the font in the configured list.
    #[default]
    Index,
    /// The font identifier, made filesystem-safe.
    Name,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory; one subdirectory per character code point.
    pub directory: PathBuf,
    pub naming: OutputNaming,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: PathBuf::from("out"),
            naming: OutputNaming::Index,
        }
    }
}

// --- Failure Policy ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failing pair, keep going, and report failures at the end.
    #[default]
    Continue,
    /// Stop the run at the first failing pair.
    Abort,
}

impl Config {
    /// Loads the configuration from the file named by `$GLYPHSET_CONFIG`, or
    /// from `glyphset.json` in the working directory.
    pub fn load_from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load(&path)
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: Config = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            info!("Configuration loaded from {}", path.display());
            config
        } else {
            warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot produce a dataset.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            bail!("alphabet must contain at least one character");
        }
        if self.fonts.names.is_empty() {
            bail!("font list must contain at least one font");
        }
        let mut seen = HashSet::new();
        if let Some(name) = self.fonts.names.iter().find(|name| !seen.insert(name.as_str())) {
            bail!("font '{}' is listed more than once", name);
        }
        let layout = OutputLayout::from(&self.output);
        if let Some((first, second)) =
            layout.find_collision(self.fonts.names.iter().map(String::as_str))
        {
            bail!(
                "fonts '{}' and '{}' would write to the same output file",
                first,
                second
            );
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            bail!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width,
                self.canvas.height
            );
        }
        if !(self.text.font_size > 0.0) {
            bail!("font size must be positive, got {}", self.text.font_size);
        }
        if !(self.text.dpi > 0.0) {
            bail!("dpi must be positive, got {}", self.text.dpi);
        }
        Ok(())
    }
}
