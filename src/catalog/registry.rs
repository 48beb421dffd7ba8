use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::model::ContentPack;
use super::ContentCatalog;
use crate::types::{Layer, LevelTag};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate pack id: {0}")]
    DuplicatePack(String),
    #[error("duplicate group id {group} in pack {pack}")]
    DuplicateGroup { pack: String, group: String },
    #[error("{owner} has minLayer {min} above maxLayer {max}")]
    InvalidLayerRange { owner: String, min: Layer, max: Layer },
    #[error("group {group} in pack {pack} references unknown item {item}")]
    UnknownGroupItem {
        pack: String,
        group: String,
        item: String,
    },
    #[error("duplicate item id {item} in pack {pack}")]
    DuplicateItem { pack: String, item: String },
    #[error("group {group} in pack {pack} lists item {item} twice")]
    DuplicateGroupItem {
        pack: String,
        group: String,
        item: String,
    },
    #[error("thresholds of pack {pack} loosen at a higher layer")]
    NonMonotonicThresholds { pack: String },
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory catalog built at startup from bundled content
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    packs: Vec<ContentPack>,
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    pub fn new(packs: Vec<ContentPack>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(packs.len());
        for (position, pack) in packs.iter().enumerate() {
            validate_pack(pack)?;
            if index.insert(pack.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicatePack(pack.id.clone()));
            }
        }
        tracing::debug!(packs = packs.len(), "content catalog loaded");
        Ok(Self { packs, index })
    }

    /// Load from a JSON array of packs
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let packs: Vec<ContentPack> = serde_json::from_str(json)?;
        Self::new(packs)
    }

    pub fn packs(&self) -> &[ContentPack] {
        &self.packs
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl ContentCatalog for StaticCatalog {
    fn list_packs_for_level(&self, level: &LevelTag) -> Vec<&ContentPack> {
        self.packs.iter().filter(|p| &p.level == level).collect()
    }

    fn get_pack_by_id(&self, id: &str) -> Option<&ContentPack> {
        self.index.get(id).map(|&i| &self.packs[i])
    }
}

fn check_range(owner: String, min: Option<Layer>, max: Option<Layer>) -> Result<(), CatalogError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => {
            Err(CatalogError::InvalidLayerRange { owner, min, max })
        }
        _ => Ok(()),
    }
}

fn validate_pack(pack: &ContentPack) -> Result<(), CatalogError> {
    check_range(
        format!("pack {}", pack.id),
        pack.policy.min_layer,
        pack.policy.max_layer,
    )?;

    if let Some(table) = &pack.policy.thresholds {
        if !table.is_monotonic() {
            return Err(CatalogError::NonMonotonicThresholds {
                pack: pack.id.clone(),
            });
        }
    }

    let mut item_ids = HashSet::with_capacity(pack.items.len());
    for item in &pack.items {
        if !item_ids.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateItem {
                pack: pack.id.clone(),
                item: item.id.clone(),
            });
        }
    }
    let mut group_ids = HashSet::new();
    for group in &pack.groups {
        if !group_ids.insert(group.id.as_str()) {
            return Err(CatalogError::DuplicateGroup {
                pack: pack.id.clone(),
                group: group.id.clone(),
            });
        }
        if let Some(policy) = &group.policy {
            check_range(
                format!("group {}/{}", pack.id, group.id),
                policy.min_layer,
                policy.max_layer,
            )?;
        }
        if let Some(missing) = group
            .item_ids
            .iter()
            .find(|id| !item_ids.contains(id.as_str()))
        {
            return Err(CatalogError::UnknownGroupItem {
                pack: pack.id.clone(),
                group: group.id.clone(),
                item: missing.clone(),
            });
        }
        let mut listed = HashSet::with_capacity(group.item_ids.len());
        if let Some(repeated) = group.item_ids.iter().find(|id| !listed.insert(id.as_str())) {
            return Err(CatalogError::DuplicateGroupItem {
                pack: pack.id.clone(),
                group: group.id.clone(),
                item: repeated.clone(),
            });
        }
    }
    Ok(())
}
