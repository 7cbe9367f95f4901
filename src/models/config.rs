use std::fmt;
use std::path::PathBuf;
use chrono::{Datelike, Local};

/// Lowest Magisk version able to install the generated module
pub const DEFAULT_MIN_MAGISK: u32 = 19000;

/// Author written into `module.prop` when none is given
pub const DEFAULT_AUTHOR: &str = "FontMod";

/// Configuration for a packaging run
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the source font files
    pub source: PathBuf,
    /// Module template copied into the staging area
    pub template_dir: PathBuf,
    /// Where the finished module is placed
    pub output_dir: PathBuf,
    /// How the family to package is chosen
    pub family_choice: FamilyChoice,
    /// Only list the discovered families
    pub list_only: bool,
    /// Author line of `module.prop`
    pub author: String,
    /// Numeric module version (`versionCode`)
    pub version_code: u32,
    /// Minimum Magisk version (`minMagisk`)
    pub min_magisk: u32,
    /// Base URL for the optional update descriptor
    pub update_url: Option<String>,
}

/// How the family to package is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyChoice {
    /// Ask on the terminal
    Prompt,
    /// Use the family with this name
    Named(String),
    /// Merge every discovered family
    All,
}

impl fmt::Display for FamilyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyChoice::Prompt => write!(f, "interactive"),
            FamilyChoice::Named(name) => write!(f, "family \"{}\"", name),
            FamilyChoice::All => write!(f, "all families"),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            template_dir: PathBuf::from("template"),
            output_dir: PathBuf::from("."),
            family_choice: FamilyChoice::Prompt,
            list_only: false,
            author: DEFAULT_AUTHOR.to_string(),
            version_code: default_version_code(),
            min_magisk: DEFAULT_MIN_MAGISK,
            update_url: None,
        }
    }
}

/// Today's date as `yymmdd`, e.g. 261016
pub fn default_version_code() -> u32 {
    let today = Local::now().date_naive();
    let year = today.year().rem_euclid(100) as u32;
    year * 10_000 + today.month() * 100 + today.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_code_is_six_digit_date() {
        let code = default_version_code();
        let month = code / 100 % 100;
        let day = code % 100;
        assert!(code < 1_000_000);
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
    }

    #[test]
    fn defaults_prompt_for_family() {
        let config = Config::new("fonts");
        assert_eq!(config.family_choice, FamilyChoice::Prompt);
        assert_eq!(config.min_magisk, DEFAULT_MIN_MAGISK);
        assert_eq!(config.author, DEFAULT_AUTHOR);
    }
}
