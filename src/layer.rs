//! Layer Inference
//!
//! Derives the learner's current layer by walking layers upward and
//! stopping at the first one whose required core packs are not all
//! mastered. Nothing is cached; every call recomputes from the snapshot.

use crate::catalog::{ContentCatalog, ContentPack};
use crate::mastery::{compute_layer_mastery, LayerMasterySnapshot};
use crate::progress::ChildProgress;
use crate::types::{Layer, LevelTag};

/// Core packs that must be mastered to complete `layer`
pub fn required_core_packs<'c, C: ContentCatalog + ?Sized>(
    catalog: &'c C,
    level: &LevelTag,
    layer: Layer,
) -> Vec<&'c ContentPack> {
    catalog
        .list_packs_up_to_layer(level, layer)
        .into_iter()
        .filter(|p| p.is_core())
        .collect()
}

/// Mastery of every core pack required up to `layer`
pub fn layer_mastery<C: ContentCatalog + ?Sized>(
    progress: &ChildProgress,
    level: &LevelTag,
    catalog: &C,
    layer: Layer,
) -> LayerMasterySnapshot {
    let required = required_core_packs(catalog, level, layer);
    compute_layer_mastery(progress, &required, layer)
}

/// Highest completed layer. A level with no packs at all stays at layer 0.
pub fn infer_current_layer<C: ContentCatalog + ?Sized>(
    progress: &ChildProgress,
    level: &LevelTag,
    catalog: &C,
) -> Layer {
    let mut current = Layer::ZERO;
    if catalog.list_packs_for_level(level).is_empty() {
        tracing::debug!(%level, "no packs for level");
        return current;
    }
    for layer in Layer::ALL {
        let required = required_core_packs(catalog, level, layer);
        if required.is_empty() {
            tracing::debug!(%level, %layer, "no gating packs, layer passes");
            current = layer;
            continue;
        }

        let snapshot = compute_layer_mastery(progress, &required, layer);
        if !snapshot.is_completed {
            tracing::debug!(
                %level,
                %layer,
                unmastered = snapshot.unmastered().count(),
                "layer incomplete"
            );
            break;
        }
        current = layer;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ContentItem, LocalizedText, PackPolicy, PackType, StaticCatalog, VisualAnswer};
    use crate::progress::UnitProgress;

    fn pack(id: &str, min_layer: u8, pack_type: PackType) -> ContentPack {
        ContentPack {
            id: id.to_string(),
            level: LevelTag::default_level(),
            title: id.to_string(),
            policy: PackPolicy {
                pack_type,
                min_layer: Layer::new(min_layer),
                ..Default::default()
            },
            groups: vec![],
            items: (0..10)
                .map(|i| ContentItem {
                    id: format!("{id}-{i}"),
                    text: LocalizedText {
                        primary: i.to_string(),
                        secondary: i.to_string(),
                    },
                    answer: VisualAnswer::Text {
                        value: i.to_string(),
                    },
                })
                .collect(),
        }
    }

    fn seen(id: &str, n: usize, quiz: f64) -> UnitProgress {
        UnitProgress {
            seen_item_ids: (0..n).map(|i| format!("{id}-{i}")).collect(),
            best_quiz_score: quiz,
            ..Default::default()
        }
    }

    #[test]
    fn test_level_without_packs_stays_at_zero() {
        let catalog = StaticCatalog::default();
        let layer = infer_current_layer(&ChildProgress::new(), &LevelTag::default_level(), &catalog);
        assert_eq!(layer, Layer::ZERO);

        let catalog = StaticCatalog::new(vec![pack("numbers", 0, PackType::Core)]).unwrap();
        let progress = ChildProgress::new().with_unit("numbers", seen("numbers", 10, 100.0));
        assert_eq!(infer_current_layer(&progress, &LevelTag::new("startr"), &catalog), Layer::ZERO);
        assert_eq!(infer_current_layer(&progress, &LevelTag::default_level(), &catalog), Layer::MAX);
    }

    #[test]
    fn test_layers_without_gating_packs_pass() {
        let catalog = StaticCatalog::new(vec![pack("colors", 2, PackType::Core)]).unwrap();
        let layer = infer_current_layer(&ChildProgress::new(), &LevelTag::default_level(), &catalog);
        assert_eq!(layer, Layer::new(1).unwrap());
    }

    #[test]
    fn test_unmastered_layer_zero_pack_blocks() {
        let catalog = StaticCatalog::new(vec![pack("numbers", 0, PackType::Core)]).unwrap();
        let layer = infer_current_layer(&ChildProgress::new(), &LevelTag::default_level(), &catalog);
        assert_eq!(layer, Layer::ZERO);
    }

    #[test]
    fn test_interest_packs_do_not_gate() {
        let catalog = StaticCatalog::new(vec![
            pack("numbers", 0, PackType::Core),
            pack("dinosaurs", 0, PackType::Interest),
        ])
        .unwrap();
        let progress = ChildProgress::new().with_unit("numbers", seen("numbers", 10, 100.0));
        let layer = infer_current_layer(&progress, &LevelTag::default_level(), &catalog);
        assert_eq!(layer, Layer::MAX);
    }

    #[test]
    fn test_stricter_layer_stops_walk() {
        let catalog = StaticCatalog::new(vec![
            pack("numbers", 0, PackType::Core),
            pack("colors", 2, PackType::Core),
        ])
        .unwrap();
        // 5/10 seen passes layers 0 and 1 but not layer 2's 0.55 seen ratio.
        let progress = ChildProgress::new()
            .with_unit("numbers", seen("numbers", 5, 0.0))
            .with_unit("colors", seen("colors", 10, 100.0));
        let layer = infer_current_layer(&progress, &LevelTag::default_level(), &catalog);
        assert_eq!(layer, Layer::new(1).unwrap());
    }

    #[test]
    fn test_layer_mastery_lists_required_packs() {
        let catalog = StaticCatalog::new(vec![
            pack("numbers", 0, PackType::Core),
            pack("colors", 2, PackType::Core),
        ])
        .unwrap();
        let level = LevelTag::default_level();
        let snap = layer_mastery(&ChildProgress::new(), &level, &catalog, Layer::new(1).unwrap());
        assert_eq!(snap.packs.len(), 1);
        assert_eq!(snap.packs[0].pack_id, "numbers");
    }
}
