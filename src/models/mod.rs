//! Data types passed between the pipeline stages

pub mod config;
pub mod family;
pub mod font;
pub mod module;
pub mod selection;

pub use config::{Config, FamilyChoice};
pub use family::{Family, FamilySet};
pub use font::{FontFile, NameEntry};
pub use module::{ModuleDescriptor, UpdateDescriptor};
pub use selection::{Selection, SelectionOutcome};
