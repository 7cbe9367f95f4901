use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use ttf_parser::name::Name;
use ttf_parser::{Face, PlatformId, Style};
use crate::error::{Error, Result};
use crate::models::{FontFile, NameEntry};

lazy_static! {
    static ref FONT_EXTENSION: Regex = Regex::new(r"(?i)\.(ttf|otf|ttc)$").unwrap();
}

/// Check if a path names a font file by its extension
pub fn is_font_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| FONT_EXTENSION.is_match(name))
}

/// Read the name table and style attributes of a font file.
///
/// Any I/O or parse failure is reported as [`Error::UnreadableFont`].
pub fn read_font_file(path: &Path) -> Result<FontFile> {
    debug!("Reading font metadata from: {}", path.display());
    let data = fs::read(path).map_err(|e| Error::unreadable(path, e))?;
    parse_font_data(path, &data)
}

/// Parse font metadata from bytes already in memory
pub fn parse_font_data(path: &Path, data: &[u8]) -> Result<FontFile> {
    let face = Face::parse(data, 0).map_err(|e| Error::unreadable(path, e))?;

    let names = face
        .names()
        .into_iter()
        .map(|name| match decode_name(&name) {
            Some(text) => NameEntry::new(name.name_id, text),
            None => NameEntry::undecodable(name.name_id),
        })
        .collect();

    let os2 = face.tables().os2.as_ref();
    let weight_class = os2.map(|table| table.weight().to_number());
    let is_italic = os2.map_or(false, |table| table.style() == Style::Italic);

    debug!(
        "Metadata read - Weight class: {:?}, Italic: {}, File: {}",
        weight_class,
        is_italic,
        path.display()
    );

    Ok(FontFile {
        path: path.to_path_buf(),
        names,
        weight_class,
        is_italic,
    })
}

/// Decode a name record. Macintosh Roman text is only accepted when it is
/// plain ASCII, which is all the naming policy can use anyway.
fn decode_name(name: &Name<'_>) -> Option<String> {
    if let Some(text) = name.to_string() {
        return Some(text);
    }

    match name.platform_id {
        PlatformId::Macintosh if name.encoding_id == 0 && name.name.is_ascii() => {
            std::str::from_utf8(name.name).ok().map(str::to_string)
        }
        _ => None,
    }
}
