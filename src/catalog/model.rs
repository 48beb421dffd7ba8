//! Catalog records: packs, groups and items with their policy metadata.

use serde::{Deserialize, Serialize};

use crate::types::{Layer, LevelTag};

/// Tag marking a pack that is kept out of browsing lists
pub const TAG_HIDDEN: &str = "hidden";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    /// Text in the language being learned
    pub primary: String,
    /// Text in the learner's home language
    pub secondary: String,
}

/// What the child picks as the answer for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VisualAnswer {
    ColorSwatch { hex: String },
    Image { asset: String },
    Text { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub text: LocalizedText,
    pub answer: VisualAnswer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupPolicy {
    pub min_layer: Option<Layer>,
    pub max_layer: Option<Layer>,
    pub skill_tags: Vec<String>,
    pub feeds_game_pool: bool,
}

/// Named subset of a pack's items; references items by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentGroup {
    pub id: String,
    pub title: String,
    pub item_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<GroupPolicy>,
}

impl ContentGroup {
    pub fn min_layer(&self) -> Option<Layer> {
        self.policy.as_ref().and_then(|p| p.min_layer)
    }

    pub fn feeds_game_pool(&self) -> bool {
        self.policy.as_ref().is_some_and(|p| p.feeds_game_pool)
    }

    pub fn has_skill_tag(&self, tag: &str) -> bool {
        self.policy
            .as_ref()
            .is_some_and(|p| p.skill_tags.iter().any(|t| t == tag))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PackType {
    /// Required for progression
    #[default]
    Core,
    /// Optional, motivational
    Interest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackPolicy {
    pub pack_type: PackType,
    pub min_layer: Option<Layer>,
    pub max_layer: Option<Layer>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<crate::thresholds::ThresholdTable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPack {
    pub id: String,
    #[serde(default)]
    pub level: LevelTag,
    pub title: String,
    #[serde(default)]
    pub policy: PackPolicy,
    #[serde(default)]
    pub groups: Vec<ContentGroup>,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// Smallest progress bucket: a group, or the whole pack when it has none
#[derive(Debug, Clone, Copy)]
pub struct Unit<'a> {
    pub id: &'a str,
    pub item_count: usize,
    pub group: Option<&'a ContentGroup>,
}

impl ContentPack {
    /// Layer a child must have unlocked to open this pack
    pub fn required_layer(&self) -> Layer {
        self.policy.min_layer.unwrap_or(Layer::ZERO)
    }

    pub fn is_core(&self) -> bool {
        self.policy.pack_type == PackType::Core
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.policy.tags.iter().any(|t| t == tag)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_tag(TAG_HIDDEN)
    }

    pub fn group(&self, group_id: &str) -> Option<&ContentGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Required layer of a group: the stricter of pack and group
    pub fn group_required_layer(&self, group: &ContentGroup) -> Layer {
        self.required_layer().max(group.min_layer().unwrap_or(Layer::ZERO))
    }

    /// Measurable units; a groupless pack is a single implicit unit
    pub fn units(&self) -> Vec<Unit<'_>> {
        if self.groups.is_empty() {
            return vec![Unit {
                id: &self.id,
                item_count: self.items.len(),
                group: None,
            }];
        }
        self.groups
            .iter()
            .map(|g| Unit {
                id: &g.id,
                item_count: g.item_ids.len(),
                group: Some(g),
            })
            .collect()
    }
}
