use std::path::Path;
use tracing::{debug, info, warn};
use crate::error::{Error, Result};
use crate::font::{family_display_names, read_font_file, resolve_names};
use crate::models::{FamilySet, FontFile};
use crate::utils::list_font_files;

/// Group the font files of a directory into families.
///
/// Fails with [`Error::EmptySourceSet`] when the directory holds no font
/// files, and with [`Error::UnreadableFont`] as soon as one file cannot be
/// read; no partial result is produced in either case.
pub fn classify_fonts(dir: &Path) -> Result<FamilySet> {
    let paths = list_font_files(dir)?;
    if paths.is_empty() {
        return Err(Error::EmptySourceSet(dir.to_path_buf()));
    }

    let fonts = paths
        .iter()
        .map(|path| read_font_file(path))
        .collect::<Result<Vec<_>>>()?;

    let families = classify_files(&fonts);
    info!(
        "Grouped {} font files into {} families",
        fonts.len(),
        families.len()
    );
    Ok(families)
}

/// Group already-read font files, in the given order
pub fn classify_files(fonts: &[FontFile]) -> FamilySet {
    let mut families = FamilySet::new();

    for font in fonts {
        let resolved = resolve_names(&font.names);
        let Some(family) = resolved.family.as_deref() else {
            warn!("No usable family name, skipping: {}", font.path.display());
            continue;
        };

        debug!("{} -> family \"{}\"", font.path.display(), family);
        families.add_member(
            family,
            &font.path,
            family_display_names(&font.names),
            resolved.version.as_deref(),
        );
    }

    families
}
