//! Child Progress Snapshot
//!
//! The learner's per-unit activity as loaded by the host's progress store.
//! The engine only ever borrows it.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::sanitize::sanitize_quiz_score;

/// Stores write `null` for fields they never set; read it as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitProgress {
    #[serde(deserialize_with = "null_as_default")]
    pub seen_item_ids: HashSet<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub mastered_item_ids: HashSet<String>,
    /// 0-100, stored as recorded
    #[serde(deserialize_with = "null_as_default")]
    pub best_quiz_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub quiz_attempts_today: u32,
    pub quiz_locked_until_date: Option<NaiveDate>,
}

impl UnitProgress {
    pub fn seen_count(&self) -> usize {
        self.seen_item_ids.len()
    }

    /// Mastered count, using the seen count as a proxy while nothing has
    /// been explicitly marked mastered yet.
    pub fn effective_mastered_count(&self) -> usize {
        if self.mastered_item_ids.is_empty() {
            self.seen_item_ids.len()
        } else {
            self.mastered_item_ids.len()
        }
    }

    pub fn quiz_score(&self) -> f64 {
        sanitize_quiz_score(self.best_quiz_score)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildProgress {
    #[serde(deserialize_with = "null_as_default")]
    pub units: HashMap<String, UnitProgress>,
}

impl ChildProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(&self, unit_id: &str) -> Option<&UnitProgress> {
        self.units.get(unit_id)
    }

    pub fn with_unit(mut self, unit_id: impl Into<String>, progress: UnitProgress) -> Self {
        self.units.insert(unit_id.into(), progress);
        self
    }
}
