//! Module packaging: metadata, staging and publication

pub mod archive;
pub mod descriptor;
pub mod packager;
pub mod workspace;

pub use archive::{Archiver, DirectoryArchiver};
pub use descriptor::{build_descriptor, describe, render_prop, update_descriptor, write_prop};
pub use packager::{package, stage_module, PackageReport};
pub use workspace::Workspace;
