//! Session-scoped conversion history.

pub mod store;
pub mod types;

pub use store::{ConversionHistory, DISPLAY_LIMIT};
pub use types::{HistoryEntry, HistoryView};
