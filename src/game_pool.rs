//! Shared minigame pool built from groups flagged `feedsGamePool`.

use std::collections::HashSet;

use crate::catalog::{ContentCatalog, ContentGroup, ContentItem, ContentPack};
use crate::types::{Layer, LevelTag};

fn collect<'c>(
    packs: Vec<&'c ContentPack>,
    unlocked_layer: Layer,
    accept: impl Fn(&ContentGroup) -> bool,
) -> Vec<&'c ContentItem> {
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for pack in packs {
        for group in &pack.groups {
            if !group.feeds_game_pool()
                || pack.group_required_layer(group) > unlocked_layer
                || !accept(group)
            {
                continue;
            }
            for item_id in &group.item_ids {
                if let Some(item) = pack.item(item_id) {
                    if seen.insert(item.id.as_str()) {
                        pool.push(item);
                    }
                }
            }
        }
    }
    pool
}

/// Items of every unlocked pool group, deduplicated, in catalog order
pub fn game_pool_items<'c, C: ContentCatalog + ?Sized>(
    catalog: &'c C,
    level: &LevelTag,
    unlocked_layer: Layer,
) -> Vec<&'c ContentItem> {
    collect(catalog.list_packs_for_level(level), unlocked_layer, |_| true)
}

pub fn game_pool_items_for_skill<'c, C: ContentCatalog + ?Sized>(
    catalog: &'c C,
    level: &LevelTag,
    unlocked_layer: Layer,
    skill_tag: &str,
) -> Vec<&'c ContentItem> {
    collect(catalog.list_packs_for_level(level), unlocked_layer, |g| {
        g.has_skill_tag(skill_tag)
    })
}
