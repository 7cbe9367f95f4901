use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use crate::error::{Error, Result};
use crate::font::WeightSlot;
use crate::models::{Config, ModuleDescriptor, SelectionOutcome};
use crate::utils::{clean_name, copy_directory, ensure_directory_exists};
use super::archive::Archiver;
use super::descriptor::{build_descriptor, update_descriptor, write_prop, UPDATE_JSON};
use super::workspace::Workspace;

/// Directory inside the module tree that receives the font files
pub const FONTS_DIR: &str = "system/fonts";

/// What a packaging run produced
#[derive(Debug, Clone)]
pub struct PackageReport {
    /// Where the archiver put the module
    pub location: PathBuf,
    pub descriptor: ModuleDescriptor,
    /// Source file installed in each slot
    pub fonts: Vec<(WeightSlot, PathBuf)>,
    /// Update descriptor written next to the module, if requested
    pub update_json: Option<PathBuf>,
}

/// Assemble a module tree in `staging_dir`.
///
/// The template is copied verbatim, its `module.prop` rewritten, and each
/// selected font copied to `system/fonts/fontw<slot>.ttf`. Returns the
/// source file installed in each slot.
pub fn stage_module(
    staging_dir: &Path,
    template_dir: &Path,
    outcome: &SelectionOutcome,
    descriptor: &ModuleDescriptor,
) -> Result<Vec<(WeightSlot, PathBuf)>> {
    if !template_dir.is_dir() {
        return Err(Error::CorruptTemplate(template_dir.to_path_buf()));
    }
    if staging_dir.exists() {
        fs::remove_dir_all(staging_dir)?;
    }

    debug!(
        "Copying template {} to {}",
        template_dir.display(),
        staging_dir.display()
    );
    copy_directory(template_dir, staging_dir)?;
    write_prop(descriptor, staging_dir)?;

    let fonts_dir = staging_dir.join(FONTS_DIR);
    if !fonts_dir.is_dir() {
        return Err(Error::CorruptTemplate(fonts_dir));
    }

    let mut installed = Vec::new();
    for (slot, source) in outcome.selection.slot_assignments() {
        let dest = fonts_dir.join(slot.file_name());
        debug!("Copying {} to {}", source.display(), dest.display());
        fs::copy(source, &dest)?;
        installed.push((slot, source.to_path_buf()));
    }

    Ok(installed)
}

/// Build the module for a successful selection and hand it to `archiver`
pub fn package(
    config: &Config,
    outcome: &SelectionOutcome,
    workspace: &Workspace,
    archiver: &dyn Archiver,
) -> Result<PackageReport> {
    info!("Packing font module ...");
    let descriptor = build_descriptor(outcome, config);
    let fonts = stage_module(workspace.staging_dir(), &config.template_dir, outcome, &descriptor)?;

    // Shared by the archive and the update descriptor's zipUrl
    let archive_name = clean_name(&outcome.archive_name());
    let location = archiver.archive(workspace.staging_dir(), &archive_name)?;

    let update_json = match config.update_url.as_deref() {
        Some(base_url) => {
            let update = update_descriptor(&descriptor, &archive_name, base_url);
            ensure_directory_exists(&config.output_dir)?;
            let path = config.output_dir.join(UPDATE_JSON);
            fs::write(&path, serde_json::to_string_pretty(&update)?)?;
            info!("Update descriptor written to {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(PackageReport {
        location,
        descriptor,
        fonts,
        update_json,
    })
}
