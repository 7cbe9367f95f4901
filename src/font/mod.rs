//! Font metadata extraction and weight slot mapping

pub mod metadata;
pub mod names;
pub mod weight;

pub use metadata::{is_font_file, parse_font_data, read_font_file};
pub use names::{family_display_names, first_ascii, resolve_names, ResolvedNames};
pub use weight::{weight_name, WeightSlot};
