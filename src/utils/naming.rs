use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INVALID_FILENAME_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).unwrap();
}

/// Clean a name for use as a file or directory name
pub fn clean_name(name: &str) -> String {
    let cleaned = INVALID_FILENAME_CHARS.replace_all(name, "_");

    // Remove leading/trailing spaces and dots
    let cleaned = cleaned.trim().trim_matches('.').trim();

    if cleaned.is_empty() {
        "Unknown".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Module identifier for a family name: lower-cased, spaces become hyphens
pub fn module_id(font_name: &str) -> String {
    font_name.replace(' ', "-").to_lowercase()
}
