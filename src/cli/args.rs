use std::path::PathBuf;
use clap::Parser;
use crate::error::{Error, Result};
use crate::models::config::{default_version_code, DEFAULT_AUTHOR, DEFAULT_MIN_MAGISK};
use crate::models::{Config, FamilyChoice};

/// FontMod CLI arguments
///
/// Examples:
///   fontmod ./fonts                         # Choose a family interactively
///   fontmod ./fonts --family "Example Sans" # Package one family
///   fontmod ./fonts --full                  # Merge every family into one module
///   fontmod ./fonts --list                  # Only show the discovered families
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "fontmod",
    version,
    about = "Package a font family into a Magisk font module",
    long_about = "Classifies the fonts of a directory by family and weight, keeps the non-italic standard weights of the chosen family, and stages them into a Magisk module template as system/fonts/fontw<1-9>.ttf."
)]
pub struct Args {
    /// Directory containing the font files
    #[clap(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Merge every discovered family into one module
    #[clap(long = "full", conflicts_with = "family")]
    pub full: bool,

    /// Package this family without prompting
    #[clap(long = "family", short = 'f', value_name = "NAME")]
    pub family: Option<String>,

    /// Print the discovered families and exit
    #[clap(long = "list", short = 'l')]
    pub list: bool,

    /// Module template directory
    #[clap(long = "template", short = 't', default_value = "template")]
    pub template: PathBuf,

    /// Directory the finished module is written to
    #[clap(long = "output", short = 'o', default_value = ".")]
    pub output: PathBuf,

    /// Author written into module.prop
    #[clap(long = "author", default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Numeric module version, defaults to today's date as yymmdd
    #[clap(long = "version-code", value_name = "N")]
    pub version_code: Option<u32>,

    /// Minimum Magisk version able to install the module
    #[clap(long = "min-magisk", value_name = "N", default_value_t = DEFAULT_MIN_MAGISK)]
    pub min_magisk: u32,

    /// Base URL the module is published under; also writes update.json
    #[clap(long = "update-url", value_name = "URL")]
    pub update_url: Option<String>,

    /// Enable debug output. Applied before the arguments are validated.
    #[clap(long = "debug")]
    pub debug: bool,
}

impl Args {
    /// Validate the arguments and turn them into a run configuration.
    ///
    /// Archives are not unpacked here; the source must already be a
    /// directory.
    pub fn into_config(self) -> Result<Config> {
        if !self.source.is_dir() {
            return Err(Error::InvalidPath(self.source));
        }

        let family_choice = match (self.full, self.family) {
            (true, _) => FamilyChoice::All,
            (false, Some(name)) => FamilyChoice::Named(name),
            (false, None) => FamilyChoice::Prompt,
        };

        Ok(Config {
            source: self.source,
            template_dir: self.template,
            output_dir: self.output,
            family_choice,
            list_only: self.list,
            author: self.author,
            version_code: self.version_code.unwrap_or_else(default_version_code),
            min_magisk: self.min_magisk,
            update_url: self.update_url,
        })
    }
}
