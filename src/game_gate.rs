//! Game-Type Gate
//!
//! Static per-layer allow-list of minigame families. Each layer widens the
//! previous one; unknown levels get nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Layer, LevelTag, DEFAULT_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    TapMatch,
    ListenPick,
    MemoryFlip,
    SortBuckets,
    SpellBuilder,
    QuizRace,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TapMatch => "tap_match",
            Self::ListenPick => "listen_pick",
            Self::MemoryFlip => "memory_flip",
            Self::SortBuckets => "sort_buckets",
            Self::SpellBuilder => "spell_builder",
            Self::QuizRace => "quiz_race",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unlock order; layer N allows the first `ALLOWED_COUNT[N]` entries
const STARTER_ORDER: [GameType; 6] = [
    GameType::TapMatch,
    GameType::ListenPick,
    GameType::MemoryFlip,
    GameType::SortBuckets,
    GameType::SpellBuilder,
    GameType::QuizRace,
];

const ALLOWED_COUNT: [usize; 5] = [2, 3, 4, 5, 6];

pub fn allowed_game_types_for_level_layer(level: &LevelTag, layer: Layer) -> &'static [GameType] {
    match level.as_str() {
        DEFAULT_LEVEL => &STARTER_ORDER[..ALLOWED_COUNT[layer.index()]],
        _ => &[],
    }
}

pub fn is_game_type_allowed(level: &LevelTag, layer: Layer, game: GameType) -> bool {
    allowed_game_types_for_level_layer(level, layer).contains(&game)
}
