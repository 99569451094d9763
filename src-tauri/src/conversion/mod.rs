//! Conversion requests delegated to a hosted text-generation model.

pub mod prompt;
pub mod provider;
pub mod request;

pub use prompt::build_conversion_prompt;
pub use provider::{HttpGenerator, Provider, TextGenerator};
pub use request::{ConversionOutcome, ConversionRequest, ValidatedRequest, SAME_UNITS_WARNING};
