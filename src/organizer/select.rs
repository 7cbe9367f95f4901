use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use ttf_parser::name_id;
use crate::error::{Error, Result};
use crate::font::{first_ascii, read_font_file, resolve_names, weight_name, WeightSlot};
use crate::models::{FamilySet, FontFile, Selection, SelectionOutcome};

/// Version used when no member file carries an ASCII version string
pub const UNKNOWN_VERSION: &str = "unknown";

/// Which fonts a module is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Members of one family
    SingleFamily(String),
    /// Members of every family, in discovery order
    AllFamilies,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::SingleFamily(name) => write!(f, "{}", name),
            SelectionMode::AllFamilies => write!(f, "all families"),
        }
    }
}

/// Pick the non-italic standard weights to package.
///
/// Every candidate is re-read from disk. Italic files and weight classes
/// outside 100..=900 (step 100) are skipped. The result must include a
/// regular (400) file, otherwise [`Error::MissingBaselineWeight`] is returned.
pub fn select_weights(families: &FamilySet, mode: &SelectionMode) -> Result<SelectionOutcome> {
    let candidates: Vec<PathBuf> = match mode {
        SelectionMode::SingleFamily(name) => families
            .get(name)
            .ok_or_else(|| Error::UnknownFamily(name.clone()))?
            .members
            .iter()
            .cloned()
            .collect(),
        SelectionMode::AllFamilies => families
            .iter()
            .flat_map(|family| family.members.iter().cloned())
            .collect(),
    };

    let mut selection = Selection::new();
    let mut first_regular: Option<FontFile> = None;

    for path in &candidates {
        let font = read_font_file(path)?;

        if font.is_italic {
            debug!("Skipping italic: {}", path.display());
            continue;
        }

        let Some(slot) = font.weight_class.and_then(WeightSlot::from_weight_class) else {
            debug!(
                "Skipping non-standard weight {:?}: {}",
                font.weight_class,
                path.display()
            );
            continue;
        };

        debug!(
            "Selected {} ({}) for slot {}",
            path.display(),
            weight_name(slot.weight_class()),
            slot
        );
        selection.insert(path.clone(), slot);

        if slot.is_baseline() && first_regular.is_none() {
            first_regular = Some(font);
        }
    }

    let Some(regular) = first_regular else {
        for (path, slot) in selection.iter() {
            warn!("Selected without regular weight: {} (slot {})", path.display(), slot);
        }
        return Err(Error::MissingBaselineWeight {
            family: mode.to_string(),
            candidates: selection.len(),
        });
    };

    let (font_name, version) = match mode {
        SelectionMode::SingleFamily(name) => {
            let version = families.get(name).and_then(|family| family.version.clone());
            (name.clone(), version)
        }
        SelectionMode::AllFamilies => composite_names(&regular),
    };

    let outcome = SelectionOutcome {
        selection,
        font_name,
        version: version.unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
    };
    info!(
        "Selected {} weight(s) for {} {}",
        outcome.selection.len(),
        outcome.font_name,
        outcome.version
    );
    Ok(outcome)
}

/// Name and version of a merged module, taken from its first regular file
fn composite_names(regular: &FontFile) -> (String, Option<String>) {
    let resolved = resolve_names(&regular.names);
    let name = first_ascii(&regular.names, name_id::FAMILY)
        .map(str::to_string)
        .or(resolved.family)
        .unwrap_or_else(|| {
            regular
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
    (name, resolved.version)
}
