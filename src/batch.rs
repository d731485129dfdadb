// src/batch.rs

//! The batch driver: one image per (character, font) pair.
//!
//! Characters are the outer loop and fonts the inner loop, both in a stable
//! order, so the same configuration always produces the same files. Each pair
//! is independent; re-running overwrites the previous output byte-for-byte.

use crate::alphabet::Alphabet;
use crate::config::{Config, FailurePolicy};
use crate::error::GenerateError;
use crate::fonts::{FontRegistry, Typeface};
use crate::output::{self, OutputLayout};
use crate::rasterizer::{self, RenderSettings};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::path::PathBuf;

/// One (character, font) pair that could not be produced.
#[derive(Debug)]
pub struct BatchFailure {
    pub ch: char,
    pub font_index: usize,
    pub font: String,
    pub error: GenerateError,
}

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Paths of every image written, in generation order.
    pub written: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives generation over `alphabet × registry`.
pub struct BatchDriver<'r, 'a> {
    registry: &'r FontRegistry<'a>,
    alphabet: Alphabet,
    settings: RenderSettings,
    layout: OutputLayout,
    policy: FailurePolicy,
}

impl<'r, 'a> BatchDriver<'r, 'a> {
    pub fn new(
        registry: &'r FontRegistry<'a>,
        alphabet: Alphabet,
        settings: RenderSettings,
        layout: OutputLayout,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            registry,
            alphabet,
            settings,
            layout,
            policy,
        }
    }

    pub fn from_config(registry: &'r FontRegistry<'a>, config: &Config) -> Self {
        Self::new(
            registry,
            config.alphabet.clone(),
            RenderSettings::from(config),
            OutputLayout::from(&config.output),
            config.on_error,
        )
    }

    /// Generates every image.
    ///
    /// With [`FailurePolicy::Continue`] failing pairs are logged and collected
    /// in the report. With [`FailurePolicy::Abort`] the first failure ends the
    /// run with an error.
    ///
    /// Fails before writing anything if two fonts would share an output file.
    pub fn run(&self) -> Result<BatchReport> {
        let names = self.registry.iter().map(|(_, typeface)| typeface.name());
        if let Some((first, second)) = self.layout.find_collision(names) {
            bail!(
                "Fonts '{}' and '{}' would write to the same output file",
                first,
                second
            );
        }

        info!(
            "Generating {} characters x {} fonts into {}",
            self.alphabet.len(),
            self.registry.len(),
            self.layout.root().display()
        );

        let mut report = BatchReport::default();
        for ch in self.alphabet.iter() {
            if let Err(error) = self.layout.ensure_char_dir(ch) {
                // Each write below retries the directory and reports its own failure.
                warn!("{}", error);
            }

            for (font_index, typeface) in self.registry.iter() {
                match self.generate(ch, font_index, typeface) {
                    Ok(path) => report.written.push(path),
                    Err(error) => {
                        self.record_failure(&mut report, ch, font_index, typeface, error)?
                    }
                }
            }
        }

        info!(
            "Run finished: {} images written, {} failed",
            report.written.len(),
            report.failures.len()
        );
        Ok(report)
    }

    /// Renders and writes a single pair.
    pub fn generate(
        &self,
        ch: char,
        font_index: usize,
        typeface: &Typeface<'_>,
    ) -> Result<PathBuf, GenerateError> {
        let mut buf = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut buf);
        let canvas = rasterizer::render(typeface, text, &self.settings)?;
        let path = self.layout.image_path(ch, font_index, typeface.name());
        output::write(&canvas, &path)?;
        debug!("{:?} in '{}' -> {}", ch, typeface.name(), path.display());
        Ok(path)
    }

    fn record_failure(
        &self,
        report: &mut BatchReport,
        ch: char,
        font_index: usize,
        typeface: &Typeface<'_>,
        error: GenerateError,
    ) -> Result<()> {
        if self.policy == FailurePolicy::Abort {
            return Err(error).with_context(|| {
                format!(
                    "Failed to generate {:?} (U+{:04X}) in font '{}'",
                    ch,
                    u32::from(ch),
                    typeface.name()
                )
            });
        }
        warn!(
            "Skipping {:?} (U+{:04X}) in font {} '{}': {}",
            ch,
            u32::from(ch),
            font_index,
            typeface.name(),
            error
        );
        report.failures.push(BatchFailure {
            ch,
            font_index,
            font: typeface.name().to_string(),
            error,
        });
        Ok(())
    }
}
