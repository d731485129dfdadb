//! Font loading and the ordered registry of typefaces used during a run.
//!
//! Font bytes are read once into [`FontSources`]; [`FontRegistry`] holds the
//! parsed [`Typeface`]s borrowing from those bytes for the rest of the process.

pub mod registry;
pub mod typeface;

pub use registry::{FontRegistry, FontSources};
pub use typeface::{FontData, Typeface};
