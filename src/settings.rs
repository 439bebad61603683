//! Caller-owned configuration: the tariff list, normalization options and
//! the space-counting flag.
//!
//! The core functions take these values by reference on every call; nothing
//! in this crate persists them. Reading and writing the serialized blob is
//! the application's job, which is why deserialization tolerates missing
//! fields (an older stored blob merges over the defaults).

use serde::{Deserialize, Serialize};

use crate::options::NormalizationOptions;
use crate::tariff::Tariff;

/// The full configuration an application holds across calculations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Tariffs the user has defined, selectable by id.
    pub tariffs: Vec<Tariff>,
    /// Normalization rules applied to every text block.
    pub normalization: NormalizationOptions,
    /// When false, whitespace is stripped before counting.
    pub count_spaces: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tariffs: Vec::new(),
            normalization: NormalizationOptions::default(),
            count_spaces: true,
        }
    }
}

impl Settings {
    /// Look up a tariff by id.
    pub fn tariff(&self, id: &str) -> Option<&Tariff> {
        self.tariffs.iter().find(|tariff| tariff.id == id)
    }

    /// Add a tariff, returning a reference to the stored entry.
    pub fn add_tariff(&mut self, tariff: Tariff) -> &Tariff {
        let idx = self.tariffs.len();
        self.tariffs.push(tariff);
        &self.tariffs[idx]
    }

    /// Apply `update` to the tariff with the given id. Returns false when no
    /// tariff has that id.
    pub fn update_tariff(&mut self, id: &str, update: impl FnOnce(&mut Tariff)) -> bool {
        match self.tariffs.iter_mut().find(|tariff| tariff.id == id) {
            Some(tariff) => {
                update(tariff);
                true
            }
            None => false,
        }
    }

    /// Remove the tariff with the given id. Returns false when no tariff has
    /// that id.
    pub fn remove_tariff(&mut self, id: &str) -> bool {
        let before = self.tariffs.len();
        self.tariffs.retain(|tariff| tariff.id != id);
        self.tariffs.len() != before
    }

    /// Apply `update` to the normalization options, e.g. toggling a single
    /// rule while the rest stay as they are.
    pub fn update_normalization(&mut self, update: impl FnOnce(&mut NormalizationOptions)) {
        update(&mut self.normalization);
    }
}
