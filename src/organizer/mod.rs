//! Family classification and weight selection

pub mod classify;
pub mod select;

pub use classify::{classify_files, classify_fonts};
pub use select::{select_weights, SelectionMode, UNKNOWN_VERSION};
