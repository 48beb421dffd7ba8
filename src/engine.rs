//! Progression Engine
//!
//! Facade over the policy modules for UI callers. It borrows a catalog,
//! owns its configuration and keeps no per-child state: every query
//! recomputes from the progress snapshot passed in.
//!
//! Unlock checks, the game gate and the game pool all resolve the layer
//! through [`unlocked_layer_snapshot`], so they agree for the same snapshot.

use chrono::NaiveDate;

use crate::catalog::{ContentCatalog, ContentGroup, ContentItem, ContentPack};
use crate::config::EngineConfig;
use crate::game_gate::{allowed_game_types_for_level_layer, GameType};
use crate::game_pool::game_pool_items;
use crate::layer::infer_current_layer;
use crate::progress::ChildProgress;
use crate::quiz::{quiz_availability, QuizAvailability};
use crate::recommendation::{level_recommendation, LevelRecommendation};
use crate::types::{Layer, LevelTag};
use crate::unlock::{
    is_group_unlocked_for_child, is_pack_unlocked_for_child, unlocked_layer_snapshot, UnlockCheck,
    UnlockedLayerSnapshot,
};

pub struct ProgressionEngine<'c, C: ContentCatalog + ?Sized> {
    catalog: &'c C,
    config: EngineConfig,
}

impl<'c, C: ContentCatalog + ?Sized> ProgressionEngine<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: &'c C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'c C {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn infer_current_layer(&self, progress: &ChildProgress, level: &LevelTag) -> Layer {
        infer_current_layer(progress, level, self.catalog)
    }

    pub fn level_recommendation(&self, progress: &ChildProgress, level: &LevelTag) -> LevelRecommendation {
        level_recommendation(progress, level, self.catalog)
    }

    pub fn unlocked_layer_snapshot(&self, progress: &ChildProgress, level: &LevelTag) -> UnlockedLayerSnapshot {
        unlocked_layer_snapshot(progress, level, self.catalog, self.config.dev_override)
    }

    pub fn unlocked_layer(&self, progress: &ChildProgress, level: &LevelTag) -> Layer {
        self.unlocked_layer_snapshot(progress, level).unlocked_layer
    }

    pub fn is_pack_unlocked_for_child(&self, progress: &ChildProgress, pack: &ContentPack) -> UnlockCheck {
        is_pack_unlocked_for_child(progress, pack, self.catalog, self.config.dev_override)
    }

    /// Unknown pack ids are reported locked at the top layer
    pub fn is_pack_id_unlocked_for_child(&self, progress: &ChildProgress, pack_id: &str) -> UnlockCheck {
        match self.catalog.get_pack_by_id(pack_id) {
            Some(pack) => self.is_pack_unlocked_for_child(progress, pack),
            None => UnlockCheck {
                unlocked: false,
                required_layer: Layer::MAX,
            },
        }
    }

    pub fn is_group_unlocked_for_child(
        &self,
        progress: &ChildProgress,
        pack: &ContentPack,
        group: &ContentGroup,
    ) -> UnlockCheck {
        is_group_unlocked_for_child(progress, pack, group, self.catalog, self.config.dev_override)
    }

    pub fn allowed_game_types_for_child(&self, progress: &ChildProgress, level: &LevelTag) -> &'static [GameType] {
        allowed_game_types_for_level_layer(level, self.unlocked_layer(progress, level))
    }

    pub fn game_pool_for_child(&self, progress: &ChildProgress, level: &LevelTag) -> Vec<&'c ContentItem> {
        game_pool_items(self.catalog, level, self.unlocked_layer(progress, level))
    }

    pub fn quiz_availability(&self, progress: &ChildProgress, unit_id: &str, today: NaiveDate) -> QuizAvailability {
        quiz_availability(progress.unit(unit_id), today, &self.config.quiz)
    }
}
