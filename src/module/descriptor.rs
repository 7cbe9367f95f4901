use std::fs;
use std::path::Path;
use tracing::debug;
use crate::error::{Error, Result};
use crate::models::{Config, ModuleDescriptor, SelectionOutcome, UpdateDescriptor};
use crate::utils::module_id;

/// Metadata file every module template carries
pub const MODULE_PROP: &str = "module.prop";

/// File name of the optional update descriptor
pub const UPDATE_JSON: &str = "update.json";

/// Derive the module metadata for a successful selection
pub fn build_descriptor(outcome: &SelectionOutcome, config: &Config) -> ModuleDescriptor {
    ModuleDescriptor {
        id: module_id(&outcome.font_name),
        name: outcome.font_name.clone(),
        version: outcome.version.clone(),
        version_code: config.version_code,
        author: config.author.clone(),
        description: describe(&outcome.font_name, outcome.selection.len()),
        min_magisk: config.min_magisk,
        update_json: config
            .update_url
            .as_deref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), UPDATE_JSON)),
    }
}

/// Human readable summary, e.g. "Example Sans with 2 Weight(s)"
pub fn describe(font_name: &str, weights: usize) -> String {
    format!("{} with {} Weight(s)", font_name, weights)
}

/// `module.prop` contents: one `key=value` line per field, no trailing newline
pub fn render_prop(descriptor: &ModuleDescriptor) -> String {
    let mut lines = vec![
        format!("id={}", descriptor.id),
        format!("name={}", descriptor.name),
        format!("version={}", descriptor.version),
        format!("versionCode={}", descriptor.version_code),
        format!("minMagisk={}", descriptor.min_magisk),
        format!("author={}", descriptor.author),
        format!("description={}", descriptor.description),
    ];
    if let Some(url) = &descriptor.update_json {
        lines.push(format!("updateJson={}", url));
    }
    lines.join("\n")
}

/// Overwrite the template's `module.prop` in `module_dir`.
///
/// The file must already exist; a template without it is corrupt.
pub fn write_prop(descriptor: &ModuleDescriptor, module_dir: &Path) -> Result<()> {
    let prop_path = module_dir.join(MODULE_PROP);
    if !prop_path.is_file() {
        return Err(Error::CorruptTemplate(prop_path));
    }

    debug!("Writing {}", prop_path.display());
    fs::write(&prop_path, render_prop(descriptor))?;
    Ok(())
}

/// Update-check document pointing at the published archive
pub fn update_descriptor(
    descriptor: &ModuleDescriptor,
    archive_name: &str,
    base_url: &str,
) -> UpdateDescriptor {
    let base = base_url.trim_end_matches('/');
    UpdateDescriptor {
        version: descriptor.version.clone(),
        version_code: descriptor.version_code,
        zip_url: format!("{}/{}.zip", base, archive_name),
        changelog: format!("{}/changelog.md", base),
    }
}
