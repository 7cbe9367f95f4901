use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;
use crate::font::WeightSlot;

/// Selected font files and the slot each one fills
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(PathBuf, WeightSlot)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a file to a slot. Re-inserting a file updates its slot in place.
    pub fn insert(&mut self, path: impl Into<PathBuf>, slot: WeightSlot) {
        let path = path.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == path) {
            Some(entry) => entry.1 = slot,
            None => self.entries.push((path, slot)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &Path) -> Option<WeightSlot> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == path)
            .map(|&(_, slot)| slot)
    }

    /// Entries in the order they were selected
    pub fn iter(&self) -> impl Iterator<Item = (&Path, WeightSlot)> {
        self.entries.iter().map(|(path, slot)| (path.as_path(), *slot))
    }

    pub fn has_baseline(&self) -> bool {
        self.entries.iter().any(|(_, slot)| slot.is_baseline())
    }

    /// The file that ends up in each slot.
    ///
    /// When several files share a slot the last one selected wins, matching
    /// a sequential copy into the slot's file name. Every dropped file is
    /// reported.
    pub fn slot_assignments(&self) -> BTreeMap<WeightSlot, &Path> {
        let mut slots = BTreeMap::new();
        for (path, slot) in &self.entries {
            if let Some(previous) = slots.insert(*slot, path.as_path()) {
                warn!(
                    "Slot {} collision: {} replaces {}",
                    slot,
                    path.display(),
                    previous.display()
                );
            }
        }
        slots
    }
}

/// Result of weight selection for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub selection: Selection,
    /// Effective family name of the module
    pub font_name: String,
    /// Effective version string of the module
    pub version: String,
}

impl SelectionOutcome {
    /// Name of the packaged module archive, without extension
    pub fn archive_name(&self) -> String {
        format!("{} {}", self.font_name, self.version)
    }
}
