//! Ordered font collection.
//!
//! Fonts keep the order they were configured in; a font's position is its
//! stable identifier in the output layout.

use super::typeface::{FontData, Typeface};
use crate::config::FontConfig;
use crate::error::FontLoadError;
use log::info;

/// Raw bytes of every configured font, in configured order.
#[derive(Debug, Clone, Default)]
pub struct FontSources {
    fonts: Vec<FontData>,
}

impl FontSources {
    pub fn new(fonts: Vec<FontData>) -> Self {
        Self { fonts }
    }

    /// Reads every font named in `config`. The first unreadable file aborts.
    pub fn read_all(config: &FontConfig) -> Result<Self, FontLoadError> {
        let fonts = config
            .names
            .iter()
            .map(|name| FontData::read(name, &config.path_for(name)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fonts })
    }
}

/// Parsed typefaces, addressable by index or by name.
#[derive(Debug, Clone)]
pub struct FontRegistry<'a> {
    typefaces: Vec<Typeface<'a>>,
}

impl<'a> FontRegistry<'a> {
    /// Parses every source. The first malformed font aborts.
    pub fn load(sources: &'a FontSources) -> Result<Self, FontLoadError> {
        let typefaces = sources
            .fonts
            .iter()
            .map(Typeface::parse)
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "FontRegistry: loaded {} fonts: [{}]",
            typefaces.len(),
            typefaces
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self { typefaces })
    }

    pub fn get(&self, index: usize) -> Option<&Typeface<'a>> {
        self.typefaces.get(index)
    }

    /// Finds a font by identifier, returning its index as well.
    pub fn find(&self, name: &str) -> Option<(usize, &Typeface<'a>)> {
        self.iter().find(|(_, typeface)| typeface.name() == name)
    }

    /// Typefaces with their indices, in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Typeface<'a>)> {
        self.typefaces.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.typefaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.typefaces.is_empty()
    }
}
