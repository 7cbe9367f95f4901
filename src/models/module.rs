use serde::Serialize;

/// Metadata written to a module's `module.prop`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Module identifier, the lower-cased family name with hyphens for spaces
    pub id: String,
    /// Display name
    pub name: String,
    pub version: String,
    /// Numeric version, usually the build date as `yymmdd`
    pub version_code: u32,
    pub author: String,
    pub description: String,
    /// Lowest Magisk version that can install the module
    pub min_magisk: u32,
    /// URL of the update descriptor, when one is published
    pub update_json: Option<String>,
}

/// Update-check document served next to the module archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDescriptor {
    pub version: String,
    pub version_code: u32,
    pub zip_url: String,
    pub changelog: String,
}
