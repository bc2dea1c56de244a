// Contrast engine - pure color math for accessibility auditing
//
// Everything in this module is a stateless function of its inputs: no I/O,
// no shared state, no caching. The audit layer owns batching and error
// collection; the engine only knows how to parse a color, compute WCAG
// luminance/contrast, classify a ratio against a threshold table, and
// estimate color-blindness separation.

pub mod color;
pub mod colorblind;
pub mod wcag;

pub use color::{Color, ParseError};
pub use colorblind::{separation_ratio, Deficiency};
pub use wcag::{
    contrast_ratio, relative_luminance, Category, ConfigurationError, ContrastResult,
    RequirementTable, Thresholds,
};
