//! Recommendation Generator
//!
//! Suggests the next step for a child: move up a layer, or practise the
//! weakest packs of the current one.

use serde::{Deserialize, Serialize};

use crate::catalog::ContentCatalog;
use crate::layer::{infer_current_layer, layer_mastery};
use crate::mastery::PackMasterySnapshot;
use crate::progress::ChildProgress;
use crate::types::{Layer, LevelTag, FOCUS_PACK_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationKind {
    /// The level has no packs to learn from
    NoContent,
    Completed,
    Advance,
    Focus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecommendation {
    pub level: LevelTag,
    pub current_layer: Layer,
    pub suggested_next_layer: Option<Layer>,
    pub kind: RecommendationKind,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_pack_ids: Option<Vec<String>>,
}

/// Weakest unmastered packs first; ties keep catalog order
pub fn weakest_packs<'a>(
    packs: impl IntoIterator<Item = &'a PackMasterySnapshot>,
    limit: usize,
) -> Vec<String> {
    let mut candidates: Vec<&PackMasterySnapshot> =
        packs.into_iter().filter(|p| !p.is_mastered).collect();
    // sort_by is stable
    candidates.sort_by(|a, b| a.focus_score().total_cmp(&b.focus_score()));
    candidates
        .into_iter()
        .take(limit)
        .map(|p| p.pack_id.clone())
        .collect()
}

pub fn level_recommendation<C: ContentCatalog + ?Sized>(
    progress: &ChildProgress,
    level: &LevelTag,
    catalog: &C,
) -> LevelRecommendation {
    if catalog.list_packs_for_level(level).is_empty() {
        tracing::debug!(%level, "no packs for level, nothing to recommend");
        return LevelRecommendation {
            level: level.clone(),
            current_layer: Layer::ZERO,
            suggested_next_layer: None,
            kind: RecommendationKind::NoContent,
            reason: format!("No content packs for level {level}"),
            focus_pack_ids: None,
        };
    }

    let current_layer = infer_current_layer(progress, level, catalog);

    let Some(next_layer) = current_layer.next() else {
        return LevelRecommendation {
            level: level.clone(),
            current_layer,
            suggested_next_layer: None,
            kind: RecommendationKind::Completed,
            reason: format!("Every layer of level {level} is complete"),
            focus_pack_ids: None,
        };
    };

    let snapshot = layer_mastery(progress, level, catalog, current_layer);
    if snapshot.is_completed {
        let entry_packs: Vec<&str> = catalog
            .list_packs_for_level(level)
            .into_iter()
            .filter(|p| p.is_core() && p.required_layer() == next_layer)
            .map(|p| p.id.as_str())
            .collect();
        let reason = if entry_packs.is_empty() {
            format!("Layer {current_layer} mastered, ready for layer {next_layer}")
        } else {
            format!(
                "Layer {current_layer} mastered, layer {next_layer} starts with: {}",
                entry_packs.join(", ")
            )
        };
        return LevelRecommendation {
            level: level.clone(),
            current_layer,
            suggested_next_layer: Some(next_layer),
            kind: RecommendationKind::Advance,
            reason,
            focus_pack_ids: None,
        };
    }

    let focus = weakest_packs(&snapshot.packs, FOCUS_PACK_LIMIT);
    LevelRecommendation {
        level: level.clone(),
        current_layer,
        suggested_next_layer: None,
        kind: RecommendationKind::Focus,
        reason: format!(
            "Keep practising layer {current_layer}: {}",
            focus.join(", ")
        ),
        focus_pack_ids: Some(focus),
    }
}
