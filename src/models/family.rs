use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// A group of font files sharing one resolved family name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Canonical family name, the grouping key
    pub name: String,
    /// Names shown when listing families, taken from the first member seen
    pub display_names: Vec<String>,
    /// First ASCII version string seen among the members
    pub version: Option<String>,
    /// Member font files
    pub members: BTreeSet<PathBuf>,
}

impl Family {
    pub fn new(name: impl Into<String>, display_names: Vec<String>) -> Self {
        Self {
            name: name.into(),
            display_names,
            version: None,
            members: BTreeSet::new(),
        }
    }

    /// Text used when listing this family
    pub fn display(&self) -> String {
        if self.display_names.is_empty() {
            self.name.clone()
        } else {
            self.display_names.join(", ")
        }
    }
}

/// Families in the order they were first discovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilySet {
    families: Vec<Family>,
    index: HashMap<String, usize>,
}

impl FamilySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Family> {
        self.index.get(name).map(|&i| &self.families[i])
    }

    /// Family at a listing position
    pub fn get_index(&self, index: usize) -> Option<&Family> {
        self.families.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Family> {
        self.families.iter()
    }

    /// Family names in discovery order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|family| family.name.as_str())
    }

    /// Record a member file, creating the family on first sight.
    ///
    /// Display names and version are only taken when the family does not
    /// have them yet, so the first file seen wins.
    pub fn add_member(
        &mut self,
        name: &str,
        path: &Path,
        display_names: Vec<String>,
        version: Option<&str>,
    ) {
        let index = match self.index.get(name) {
            Some(&index) => index,
            None => {
                self.families.push(Family::new(name, display_names));
                self.index.insert(name.to_string(), self.families.len() - 1);
                self.families.len() - 1
            }
        };

        let family = &mut self.families[index];
        family.members.insert(path.to_path_buf());
        if family.version.is_none() {
            family.version = version.map(str::to_string);
        }
    }
}

impl<'a> IntoIterator for &'a FamilySet {
    type Item = &'a Family;
    type IntoIter = std::slice::Iter<'a, Family>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}
