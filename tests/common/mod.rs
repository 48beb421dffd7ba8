#![allow(dead_code)]

use lingo_progression::catalog::{ContentGroup, ContentItem, LocalizedText, PackPolicy, VisualAnswer};
use lingo_progression::{ChildProgress, ContentPack, Layer, LevelTag, PackType, StaticCatalog, UnitProgress};
use tracing_subscriber::EnvFilter;

pub const ITEMS_PER_GROUP: usize = 10;

/// Core packs gating layers 0 through 4, in catalog order
pub const CORE_PACKS: [(&str, u8); 5] = [
    ("numbers", 0),
    ("colors", 1),
    ("shapes", 2),
    ("animals", 3),
    ("stories", 4),
];

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn group_id(pack_id: &str) -> String {
    format!("{pack_id}-main")
}

pub fn pack(id: &str, min_layer: u8, pack_type: PackType) -> ContentPack {
    let group = group_id(id);
    let items: Vec<ContentItem> = (0..ITEMS_PER_GROUP)
        .map(|i| ContentItem {
            id: format!("{group}-{i}"),
            text: LocalizedText {
                primary: format!("{id} {i}"),
                secondary: format!("{id} {i}"),
            },
            answer: VisualAnswer::Text {
                value: i.to_string(),
            },
        })
        .collect();
    ContentPack {
        id: id.to_string(),
        level: LevelTag::default_level(),
        title: id.to_string(),
        policy: PackPolicy {
            pack_type,
            min_layer: Layer::new(min_layer),
            max_layer: Some(Layer::MAX),
            ..Default::default()
        },
        groups: vec![ContentGroup {
            id: group.clone(),
            title: group,
            item_ids: items.iter().map(|i| i.id.clone()).collect(),
            policy: None,
        }],
        items,
    }
}

/// Five layered core packs plus one interest pack
pub fn layered_catalog() -> StaticCatalog {
    let mut packs: Vec<ContentPack> = CORE_PACKS
        .iter()
        .map(|(id, layer)| pack(id, *layer, PackType::Core))
        .collect();
    packs.push(pack("dinosaurs", 0, PackType::Interest));
    StaticCatalog::new(packs).expect("fixture catalog is valid")
}

pub fn unit_seen(pack_id: &str, seen: usize, quiz: f64) -> UnitProgress {
    let group = group_id(pack_id);
    UnitProgress {
        seen_item_ids: (0..seen).map(|i| format!("{group}-{i}")).collect(),
        best_quiz_score: quiz,
        ..Default::default()
    }
}

/// Progress with the given packs fully seen and aced
pub fn mastering(pack_ids: &[&str]) -> ChildProgress {
    pack_ids.iter().fold(ChildProgress::new(), |progress, id| {
        progress.with_unit(group_id(id), unit_seen(id, ITEMS_PER_GROUP, 100.0))
    })
}
