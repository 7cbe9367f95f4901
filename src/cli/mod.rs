//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::Args;
pub use interaction::{print_families, prompt_family};
