//! Classify font files by family and weight and package one family's
//! non-italic standard weights into a Magisk font module.
//!
//! The pipeline runs in order: [`organizer::classify_fonts`] groups a
//! directory into families, [`organizer::select_weights`] picks the weights
//! to ship, and [`module::package`] stages and publishes the module.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod module;
pub mod organizer;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};
