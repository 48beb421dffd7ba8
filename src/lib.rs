//! # lingo-progression - 进度与掌握度引擎
//!
//! Pure policy layer of a children's language-learning app:
//!
//! - **Mastery** - per-pack seen/mastered/quiz ratios against layer thresholds
//! - **Layer Inference** - highest completed layer (0-4), never stored
//! - **Unlock Resolver** - pack/group/layer unlock checks with a debug override
//! - **Recommendation** - advance, or focus on the two weakest packs
//! - **Game Gate** - per-layer allow-list of minigame families
//!
//! ## 设计理念
//!
//! - **无状态** - every query recomputes from the caller's progress snapshot
//! - **只读** - progress and catalog are borrowed, never written
//! - **保守降级** - bad input yields the least-unlocked answer, never a panic
//!
//! ## 模块结构
//!
//! - [`catalog`] - 内容目录 (packs, groups, items)
//! - [`progress`] - 学习进度快照
//! - [`thresholds`] - 各层阈值
//! - [`mastery`] - 掌握度计算
//! - [`layer`] - 当前层推断
//! - [`unlock`] - 解锁判断
//! - [`recommendation`] - 学习建议
//! - [`game_gate`] - 游戏类型开放表
//! - [`game_pool`] - 共享游戏题池
//! - [`quiz`] - 测验次数与锁定
//! - [`config`] - 引擎配置
//! - [`sanitize`] - 数据清洗
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use lingo_progression::{ChildProgress, LevelTag, ProgressionEngine, StaticCatalog};
//!
//! let catalog = StaticCatalog::from_json(r#"[{ "id": "numbers", "title": "Numbers" }]"#).unwrap();
//! let engine = ProgressionEngine::new(&catalog);
//! let level = LevelTag::default_level();
//! let layer = engine.infer_current_layer(&ChildProgress::new(), &level);
//! assert_eq!(layer.value(), 0);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod catalog;
pub mod config;
pub mod engine;
pub mod game_gate;
pub mod game_pool;
pub mod layer;
pub mod mastery;
pub mod progress;
pub mod quiz;
pub mod recommendation;
pub mod sanitize;
pub mod thresholds;
pub mod types;
pub mod unlock;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

pub use catalog::{
    CatalogError, ContentCatalog, ContentGroup, ContentItem, ContentPack, PackType, StaticCatalog,
};
pub use config::{DeveloperOverride, EngineConfig};
pub use engine::ProgressionEngine;
pub use game_gate::{allowed_game_types_for_level_layer, GameType};
pub use layer::infer_current_layer;
pub use mastery::{compute_pack_mastery, LayerMasterySnapshot, PackMasterySnapshot};
pub use progress::{ChildProgress, UnitProgress};
pub use recommendation::{level_recommendation, LevelRecommendation, RecommendationKind};
pub use thresholds::{thresholds_for_layer, Thresholds};
pub use unlock::{
    is_pack_unlocked_for_child, unlocked_layer_snapshot, UnlockCheck, UnlockedLayerSnapshot,
};
