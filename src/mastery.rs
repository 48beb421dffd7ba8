//! Mastery Calculator
//!
//! Aggregates a child's per-unit progress into per-pack ratios and checks
//! them against layer thresholds.
//!
//! Core rules:
//! - A groupless pack is measured as one implicit unit keyed by the pack id
//! - Missing unit progress counts as zero activity
//! - Seen and mastered counts are clamped to the unit size
//! - While no item is explicitly mastered, seen items stand in for mastery
//! - Ratios are always finite and inside `[0, 1]`

use serde::{Deserialize, Serialize};

use crate::catalog::ContentPack;
use crate::progress::ChildProgress;
use crate::sanitize::safe_ratio;
use crate::thresholds::{thresholds_for_pack, Thresholds};
use crate::types::{Layer, FOCUS_MASTERED_WEIGHT, FOCUS_SEEN_WEIGHT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackMasterySnapshot {
    pub pack_id: String,
    pub seen_ratio: f64,
    pub mastered_ratio: f64,
    pub best_quiz_score: f64,
    pub is_mastered: bool,
}

impl PackMasterySnapshot {
    /// Ranking score for focus suggestions; lower is weaker
    pub fn focus_score(&self) -> f64 {
        FOCUS_MASTERED_WEIGHT * self.mastered_ratio + FOCUS_SEEN_WEIGHT * self.seen_ratio
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerMasterySnapshot {
    pub layer: Layer,
    pub packs: Vec<PackMasterySnapshot>,
    pub is_completed: bool,
}

impl LayerMasterySnapshot {
    pub fn unmastered(&self) -> impl Iterator<Item = &PackMasterySnapshot> {
        self.packs.iter().filter(|p| !p.is_mastered)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    items: usize,
    seen: usize,
    mastered: usize,
    best_quiz: f64,
}

/// Compute a pack's mastery against the given thresholds
pub fn compute_pack_mastery(
    progress: &ChildProgress,
    pack: &ContentPack,
    thresholds: &Thresholds,
) -> PackMasterySnapshot {
    let totals = pack.units().iter().fold(Totals::default(), |mut acc, unit| {
        acc.items += unit.item_count;
        if let Some(record) = progress.unit(unit.id) {
            acc.seen += record.seen_count().min(unit.item_count);
            acc.mastered += record.effective_mastered_count().min(unit.item_count);
            acc.best_quiz = acc.best_quiz.max(record.quiz_score());
        }
        acc
    });

    let seen_ratio = safe_ratio(totals.seen, totals.items);
    let mastered_ratio = safe_ratio(totals.mastered, totals.items);
    let quiz_ok = thresholds
        .min_best_quiz_score
        .map_or(true, |min| totals.best_quiz >= min);

    PackMasterySnapshot {
        pack_id: pack.id.clone(),
        seen_ratio,
        mastered_ratio,
        best_quiz_score: totals.best_quiz,
        is_mastered: seen_ratio >= thresholds.min_seen_ratio
            && mastered_ratio >= thresholds.min_mastered_ratio
            && quiz_ok,
    }
}

/// Compute mastery of every required pack at `layer`, each against its own
/// thresholds. Completed only when every pack is mastered.
pub fn compute_layer_mastery(
    progress: &ChildProgress,
    required: &[&ContentPack],
    layer: Layer,
) -> LayerMasterySnapshot {
    let packs: Vec<PackMasterySnapshot> = required
        .iter()
        .map(|pack| compute_pack_mastery(progress, pack, &thresholds_for_pack(pack, layer)))
        .collect();
    let is_completed = packs.iter().all(|p| p.is_mastered);

    LayerMasterySnapshot {
        layer,
        packs,
        is_completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ContentGroup, ContentItem, LocalizedText, PackPolicy, VisualAnswer};
    use crate::progress::UnitProgress;
    use crate::thresholds::{thresholds_for_layer, ThresholdTable};
    use crate::types::LevelTag;

    fn items(prefix: &str, n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| ContentItem {
                id: format!("{prefix}-{i}"),
                text: LocalizedText {
                    primary: i.to_string(),
                    secondary: i.to_string(),
                },
                answer: VisualAnswer::Text {
                    value: i.to_string(),
                },
            })
            .collect()
    }

    fn grouped_pack(id: &str, groups: &[(&str, usize)]) -> ContentPack {
        let mut all_items = Vec::new();
        let mut content_groups = Vec::new();
        for (group_id, n) in groups {
            let group_items = items(group_id, *n);
            content_groups.push(ContentGroup {
                id: group_id.to_string(),
                title: group_id.to_string(),
                item_ids: group_items.iter().map(|i| i.id.clone()).collect(),
                policy: None,
            });
            all_items.extend(group_items);
        }
        ContentPack {
            id: id.to_string(),
            level: LevelTag::default_level(),
            title: id.to_string(),
            policy: PackPolicy::default(),
            groups: content_groups,
            items: all_items,
        }
    }

    fn seen(prefix: &str, n: usize) -> UnitProgress {
        UnitProgress {
            seen_item_ids: (0..n).map(|i| format!("{prefix}-{i}")).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seen_proxy_masters_layer_zero() {
        let pack = grouped_pack("numbers", &[("digits", 10)]);
        let progress = ChildProgress::new().with_unit("digits", seen("digits", 3));
        let snap = compute_pack_mastery(&progress, &pack, &thresholds_for_layer(Layer::ZERO));

        assert!((snap.seen_ratio - 0.3).abs() < 1e-12);
        assert!((snap.mastered_ratio - 0.3).abs() < 1e-12);
        assert_eq!(snap.best_quiz_score, 0.0);
        assert!(snap.is_mastered);
    }

    #[test]
    fn test_no_activity_is_not_mastered() {
        let pack = grouped_pack("numbers", &[("digits", 10)]);
        let snap = compute_pack_mastery(&ChildProgress::new(), &pack, &thresholds_for_layer(Layer::ZERO));
        assert_eq!(snap.seen_ratio, 0.0);
        assert_eq!(snap.mastered_ratio, 0.0);
        assert!(!snap.is_mastered);
    }

    #[test]
    fn test_groupless_pack_uses_pack_id_as_unit() {
        let mut pack = grouped_pack("colors", &[]);
        pack.items = items("c", 4);
        let progress = ChildProgress::new().with_unit("colors", seen("c", 2));
        let snap = compute_pack_mastery(&progress, &pack, &thresholds_for_layer(Layer::ZERO));
        assert!((snap.seen_ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_pack_has_zero_ratios() {
        let pack = grouped_pack("empty", &[]);
        let progress = ChildProgress::new().with_unit("empty", seen("x", 5));
        let snap = compute_pack_mastery(&progress, &pack, &thresholds_for_layer(Layer::ZERO));
        assert_eq!(snap.seen_ratio, 0.0);
        assert_eq!(snap.mastered_ratio, 0.0);
        assert!(!snap.is_mastered);
    }

    #[test]
    fn test_counts_clamped_to_unit_size() {
        let pack = grouped_pack("letters", &[("a-f", 2), ("g-l", 2)]);
        let progress = ChildProgress::new().with_unit("a-f", seen("a-f", 9));
        let snap = compute_pack_mastery(&progress, &pack, &thresholds_for_layer(Layer::ZERO));
        assert!((snap.seen_ratio - 0.5).abs() < 1e-12);
        assert!(snap.seen_ratio <= 1.0 && snap.mastered_ratio <= 1.0);
    }

    #[test]
    fn test_explicit_mastery_replaces_proxy() {
        let pack = grouped_pack("numbers", &[("digits", 10)]);
        let mut unit = seen("digits", 8);
        unit.mastered_item_ids.insert("digits-0".to_string());
        let progress = ChildProgress::new().with_unit("digits", unit);
        let snap = compute_pack_mastery(&progress, &pack, &thresholds_for_layer(Layer::ZERO));
        assert!((snap.mastered_ratio - 0.1).abs() < 1e-12);
        assert!(!snap.is_mastered);
    }

    #[test]
    fn test_quiz_threshold_uses_best_unit_score() {
        let pack = grouped_pack("letters", &[("a-f", 2), ("g-l", 2)]);
        let mut first = seen("a-f", 2);
        first.best_quiz_score = 40.0;
        let mut second = seen("g-l", 2);
        second.best_quiz_score = 65.0;
        let progress = ChildProgress::new()
            .with_unit("a-f", first)
            .with_unit("g-l", second);

        let layer3 = thresholds_for_layer(Layer::new(3).unwrap());
        let snap = compute_pack_mastery(&progress, &pack, &layer3);
        assert_eq!(snap.best_quiz_score, 65.0);
        assert!(snap.is_mastered);

        let layer4 = thresholds_for_layer(Layer::MAX);
        assert!(!compute_pack_mastery(&progress, &pack, &layer4).is_mastered);
    }

    #[test]
    fn test_layer_snapshot_uses_pack_threshold_override() {
        let lenient = Thresholds::new(0.1, 0.1, None);
        let mut easy = grouped_pack("easy", &[("e", 10)]);
        easy.policy.thresholds = Some(ThresholdTable::new([lenient; 5]));
        let strict = grouped_pack("strict", &[("s", 10)]);
        let progress = ChildProgress::new()
            .with_unit("e", seen("e", 2))
            .with_unit("s", seen("s", 2));

        let snap = compute_layer_mastery(&progress, &[&easy, &strict], Layer::MAX);
        assert!(snap.packs[0].is_mastered);
        assert!(!snap.packs[1].is_mastered);
        assert!(!snap.is_completed);
        assert_eq!(snap.unmastered().count(), 1);
    }
}
