//! Common Types and Constants
//!
//! Shared data structures used across all progression modules.

use std::fmt;

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Highest progression layer
pub const MAX_LAYER: u8 = 4;

/// Weight of the mastered ratio in the focus ranking score
pub const FOCUS_MASTERED_WEIGHT: f64 = 0.7;

/// Weight of the seen ratio in the focus ranking score
pub const FOCUS_SEEN_WEIGHT: f64 = 0.3;

/// Maximum number of packs suggested as focus
pub const FOCUS_PACK_LIMIT: usize = 2;

/// Upper bound of a recorded quiz score
pub const MAX_QUIZ_SCORE: f64 = 100.0;

/// The only level that currently ships content
pub const DEFAULT_LEVEL: &str = "starter";

// ==================== Layer ====================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayerError {
    #[error("layer {0} is outside 0..=4")]
    OutOfRange(i64),
}

/// Progression stage, always derived and never stored on the learner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Layer(u8);

impl Layer {
    pub const ZERO: Layer = Layer(0);
    pub const MAX: Layer = Layer(MAX_LAYER);
    /// Every layer in ascending order
    pub const ALL: [Layer; 5] = [Layer(0), Layer(1), Layer(2), Layer(3), Layer(4)];

    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_LAYER).then_some(Layer(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_top(self) -> bool {
        self.0 == MAX_LAYER
    }

    pub fn next(self) -> Option<Layer> {
        Layer::new(self.0 + 1)
    }
}

impl TryFrom<i64> for Layer {
    type Error = LayerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Layer::new)
            .ok_or(LayerError::OutOfRange(value))
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.0
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==================== Level ====================

/// Level tag grouping packs and game allow-lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelTag(String);

impl LevelTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn default_level() -> Self {
        Self::new(DEFAULT_LEVEL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LevelTag {
    fn default() -> Self {
        Self::default_level()
    }
}

impl fmt::Display for LevelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LevelTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}
