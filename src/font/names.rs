//! Family and version resolution from `name` table entries.
//!
//! The policy is a pure function over the entries in table order:
//! the first ASCII typographic family (ID 16) names the family; the first
//! ASCII legacy family (ID 1) is used only when the font has no typographic
//! family entry at all; the first ASCII version string (ID 5) is recorded
//! without affecting grouping. Only printable ASCII entries are candidates.
//! Display names are not filtered that way, so localized names still show up
//! when families are listed.

use ttf_parser::name_id;
use crate::models::NameEntry;

/// Names resolved for a single font file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedNames {
    /// Grouping key of the file's family
    pub family: Option<String>,
    /// Version string of the file
    pub version: Option<String>,
}

/// Apply the family/version naming policy to a file's entries
pub fn resolve_names(entries: &[NameEntry]) -> ResolvedNames {
    ResolvedNames {
        family: resolve_family(entries).map(str::to_string),
        version: first_ascii(entries, name_id::VERSION).map(str::to_string),
    }
}

fn resolve_family(entries: &[NameEntry]) -> Option<&str> {
    if has_role(entries, name_id::TYPOGRAPHIC_FAMILY) {
        first_ascii(entries, name_id::TYPOGRAPHIC_FAMILY)
    } else {
        first_ascii(entries, name_id::FAMILY)
    }
}

/// First ASCII entry with the given name ID
pub fn first_ascii(entries: &[NameEntry], id: u16) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.name_id == id && entry.is_ascii)
        .map(|entry| entry.text.as_str())
}

fn has_role(entries: &[NameEntry], id: u16) -> bool {
    entries.iter().any(|entry| entry.name_id == id)
}

/// Every distinct decoded text of the role that names the family, in table order.
///
/// Localized names are kept. Undecodable entries and text with control
/// characters are left out.
pub fn family_display_names(entries: &[NameEntry]) -> Vec<String> {
    let role = if has_role(entries, name_id::TYPOGRAPHIC_FAMILY) {
        name_id::TYPOGRAPHIC_FAMILY
    } else {
        name_id::FAMILY
    };

    let mut names: Vec<String> = Vec::new();
    for entry in entries.iter().filter(|e| e.name_id == role && is_displayable(&e.text)) {
        if !names.contains(&entry.text) {
            names.push(entry.text.clone());
        }
    }
    names
}

fn is_displayable(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(char::is_control)
}
