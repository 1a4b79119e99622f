//! Per-key press counters.
//!
//! `KeyStats` is the aggregate state of one analysis run: a map from key
//! identifier to a `KeyRecord`. Records are created on first press and never
//! removed.

use crate::parser::Modifier;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How often each modifier was held while a key was pressed
///
/// Serialized with one field per modifier token (`"<lshft>"`, ...), which is
/// flattened into the owning `KeyRecord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierCounts {
    #[serde(rename = "<lshft>")]
    pub left_shift: u64,
    #[serde(rename = "<rshft>")]
    pub right_shift: u64,
    #[serde(rename = "<lctrl>")]
    pub left_ctrl: u64,
    #[serde(rename = "<rctrl>")]
    pub right_ctrl: u64,
    #[serde(rename = "<lmeta>")]
    pub left_meta: u64,
    #[serde(rename = "<rmeta>")]
    pub right_meta: u64,
    #[serde(rename = "<lalt>")]
    pub left_alt: u64,
    #[serde(rename = "<ralt>")]
    pub right_alt: u64,
    #[serde(rename = "<altgr>")]
    pub alt_gr: u64,
}

impl ModifierCounts {
    /// Count for one modifier
    pub fn get(&self, modifier: Modifier) -> u64 {
        match modifier {
            Modifier::LeftShift => self.left_shift,
            Modifier::RightShift => self.right_shift,
            Modifier::LeftCtrl => self.left_ctrl,
            Modifier::RightCtrl => self.right_ctrl,
            Modifier::LeftMeta => self.left_meta,
            Modifier::RightMeta => self.right_meta,
            Modifier::LeftAlt => self.left_alt,
            Modifier::RightAlt => self.right_alt,
            Modifier::AltGr => self.alt_gr,
        }
    }

    fn slot_mut(&mut self, modifier: Modifier) -> &mut u64 {
        match modifier {
            Modifier::LeftShift => &mut self.left_shift,
            Modifier::RightShift => &mut self.right_shift,
            Modifier::LeftCtrl => &mut self.left_ctrl,
            Modifier::RightCtrl => &mut self.right_ctrl,
            Modifier::LeftMeta => &mut self.left_meta,
            Modifier::RightMeta => &mut self.right_meta,
            Modifier::LeftAlt => &mut self.left_alt,
            Modifier::RightAlt => &mut self.right_alt,
            Modifier::AltGr => &mut self.alt_gr,
        }
    }

    /// Add one to the counter for `modifier`
    pub fn increment(&mut self, modifier: Modifier) {
        *self.slot_mut(modifier) += 1;
    }

    /// Sum over all modifiers
    pub fn total(&self) -> u64 {
        Modifier::ALL.iter().map(|m| self.get(*m)).sum()
    }
}

/// Statistics for a single key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Key identifier, e.g. `"a"` or `"<enter>"`
    pub key: String,

    /// Total number of presses
    pub count: u64,

    /// Presses broken down by held modifier
    #[serde(flatten)]
    pub modifiers: ModifierCounts,
}

impl KeyRecord {
    /// Create an empty record for `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            count: 0,
            modifiers: ModifierCounts::default(),
        }
    }
}

/// Aggregate key statistics for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyStats {
    keys: HashMap<String, KeyRecord>,
}

impl KeyStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one press of `key` with `modifiers` held
    ///
    /// **Public** - main entry point for counting
    ///
    /// A modifier listed twice is counted twice.
    pub fn record_keypress(&mut self, key: &str, modifiers: &[Modifier]) {
        // Avoid allocating the key for the common already-seen case
        if !self.keys.contains_key(key) {
            trace!("First press of key {:?}", key);
            self.keys.insert(key.to_string(), KeyRecord::new(key));
        }

        if let Some(record) = self.keys.get_mut(key) {
            record.count += 1;
            for modifier in modifiers {
                record.modifiers.increment(*modifier);
            }
        }
    }

    /// Key identifiers by descending press count
    ///
    /// Order among keys with equal counts is unspecified.
    pub fn ranked_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&KeyRecord> = self.keys.values().collect();
        keys.sort_by(|a, b| b.count.cmp(&a.count));
        keys.into_iter().map(|r| r.key.as_str()).collect()
    }

    /// Look up the record for one key
    pub fn get(&self, key: &str) -> Option<&KeyRecord> {
        self.keys.get(key)
    }

    /// Iterate over all records in arbitrary order
    pub fn records(&self) -> impl Iterator<Item = &KeyRecord> {
        self.keys.values()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total presses across all keys
    pub fn total_presses(&self) -> u64 {
        self.records().map(|r| r.count).sum()
    }
}
