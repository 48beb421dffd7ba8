//! Layer Thresholds
//!
//! Mastery thresholds per layer, lenient at layer 0 and strict at layer 4.
//! A pack may carry its own table; otherwise the default table applies.

use serde::{Deserialize, Serialize};

use crate::catalog::ContentPack;
use crate::types::Layer;

/// Minimums a pack must reach to count as mastered at a given layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub min_seen_ratio: f64,
    pub min_mastered_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_best_quiz_score: Option<f64>,
}

impl Thresholds {
    pub const fn new(min_seen_ratio: f64, min_mastered_ratio: f64, min_best_quiz_score: Option<f64>) -> Self {
        Self {
            min_seen_ratio,
            min_mastered_ratio,
            min_best_quiz_score,
        }
    }
}

const DEFAULT_THRESHOLDS: [Thresholds; 5] = [
    Thresholds::new(0.25, 0.15, None),
    Thresholds::new(0.40, 0.30, None),
    Thresholds::new(0.55, 0.45, Some(50.0)),
    Thresholds::new(0.70, 0.60, Some(60.0)),
    Thresholds::new(0.85, 0.75, Some(70.0)),
];

/// Default thresholds for a layer
pub fn thresholds_for_layer(layer: Layer) -> Thresholds {
    DEFAULT_THRESHOLDS[layer.index()]
}

/// One row of thresholds per layer, indexed by layer value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable([Thresholds; 5]);

impl ThresholdTable {
    pub fn new(rows: [Thresholds; 5]) -> Self {
        Self(rows)
    }

    pub fn get(&self, layer: Layer) -> Thresholds {
        self.0[layer.index()]
    }

    /// True when no threshold loosens as the layer increases
    pub fn is_monotonic(&self) -> bool {
        self.0.windows(2).all(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            let quiz_ok = match (lower.min_best_quiz_score, upper.min_best_quiz_score) {
                (Some(a), Some(b)) => b >= a,
                (Some(_), None) => false,
                _ => true,
            };
            upper.min_seen_ratio >= lower.min_seen_ratio
                && upper.min_mastered_ratio >= lower.min_mastered_ratio
                && quiz_ok
        })
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLDS)
    }
}

/// Pack override, falling back to the default table
pub fn thresholds_for_pack(pack: &ContentPack, layer: Layer) -> Thresholds {
    pack.policy
        .thresholds
        .as_ref()
        .map(|table| table.get(layer))
        .unwrap_or_else(|| thresholds_for_layer(layer))
}
