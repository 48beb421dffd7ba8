//! Unlock Resolver
//!
//! Answers "is this layer/pack/group open for the child". The unlocked
//! layer is the inferred layer unless a developer override is active.

use serde::{Deserialize, Serialize};

use crate::catalog::{ContentCatalog, ContentGroup, ContentPack};
use crate::config::DeveloperOverride;
use crate::layer::infer_current_layer;
use crate::progress::ChildProgress;
use crate::types::{Layer, LevelTag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedLayerSnapshot {
    pub level: LevelTag,
    pub unlocked_layer: Layer,
    pub is_overridden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockCheck {
    pub unlocked: bool,
    pub required_layer: Layer,
}

impl UnlockCheck {
    pub fn against(unlocked_layer: Layer, required_layer: Layer) -> Self {
        Self {
            unlocked: unlocked_layer >= required_layer,
            required_layer,
        }
    }
}

pub fn unlocked_layer_snapshot<C: ContentCatalog + ?Sized>(
    progress: &ChildProgress,
    level: &LevelTag,
    catalog: &C,
    dev_override: DeveloperOverride,
) -> UnlockedLayerSnapshot {
    let (unlocked_layer, is_overridden) = match dev_override.get() {
        Some(layer) => {
            tracing::debug!(%level, %layer, "developer override active");
            (layer, true)
        }
        None => (infer_current_layer(progress, level, catalog), false),
    };

    UnlockedLayerSnapshot {
        level: level.clone(),
        unlocked_layer,
        is_overridden,
    }
}

pub fn is_pack_unlocked_for_child<C: ContentCatalog + ?Sized>(
    progress: &ChildProgress,
    pack: &ContentPack,
    catalog: &C,
    dev_override: DeveloperOverride,
) -> UnlockCheck {
    let snapshot = unlocked_layer_snapshot(progress, &pack.level, catalog, dev_override);
    UnlockCheck::against(snapshot.unlocked_layer, pack.required_layer())
}

/// A group needs the stricter of its own and its pack's layer
pub fn is_group_unlocked_for_child<C: ContentCatalog + ?Sized>(
    progress: &ChildProgress,
    pack: &ContentPack,
    group: &ContentGroup,
    catalog: &C,
    dev_override: DeveloperOverride,
) -> UnlockCheck {
    let snapshot = unlocked_layer_snapshot(progress, &pack.level, catalog, dev_override);
    UnlockCheck::against(snapshot.unlocked_layer, pack.group_required_layer(group))
}
