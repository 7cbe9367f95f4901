use std::path::PathBuf;

/// One decoded entry of a font's `name` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    /// Name ID (the entry's role)
    pub name_id: u16,
    /// Decoded text, empty when the entry could not be decoded
    pub text: String,
    /// Whether the text is printable ASCII (0x20..=0x7e)
    pub is_ascii: bool,
}

impl NameEntry {
    pub fn new(name_id: u16, text: impl Into<String>) -> Self {
        let text = text.into();
        let is_ascii = is_printable_ascii(&text);
        Self {
            name_id,
            text,
            is_ascii,
        }
    }

    /// An entry whose bytes could not be decoded; never a naming candidate
    pub fn undecodable(name_id: u16) -> Self {
        Self {
            name_id,
            text: String::new(),
            is_ascii: false,
        }
    }
}

/// Printable ASCII only; control characters disqualify a name
fn is_printable_ascii(text: &str) -> bool {
    text.bytes().all(|b| (0x20..=0x7e).contains(&b))
}

/// Metadata read from a font file
#[derive(Debug, Clone)]
pub struct FontFile {
    /// Path of the font file, its identity
    pub path: PathBuf,
    /// Name table entries in table order
    pub names: Vec<NameEntry>,
    /// OS/2 usWeightClass, if the font has an OS/2 table
    pub weight_class: Option<u16>,
    /// OS/2 fsSelection italic bit
    pub is_italic: bool,
}
