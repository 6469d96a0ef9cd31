//! Lifetime id sequences kept by the save-game.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::CATALOG_BASELINE;

/// Named 1-based counters, one per entity type ever instantiated.
///
/// Reads never touch the map: an absent key reads as the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CatalogCounters {
    counters: BTreeMap<String, i32>,
}

impl CatalogCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id the sequence would hand out.
    #[must_use]
    pub fn peek(&self, key: &str) -> i32 {
        self.counters.get(key).copied().unwrap_or(CATALOG_BASELINE)
    }

    /// Number of entities created so far for `key`.
    #[must_use]
    pub fn created(&self, key: &str) -> u32 {
        let issued = i64::from(self.peek(key)) - i64::from(CATALOG_BASELINE);
        u32::try_from(issued.max(0)).unwrap_or(u32::MAX)
    }

    /// Hand out the next id for `key`, advancing the sequence.
    pub fn next_id(&mut self, key: &str) -> i32 {
        let counter = self
            .counters
            .entry(key.to_string())
            .or_insert(CATALOG_BASELINE);
        let id = *counter;
        *counter = counter.saturating_add(1);
        id
    }

    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        self.counters.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.counters.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for CatalogCounters {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self {
            counters: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
