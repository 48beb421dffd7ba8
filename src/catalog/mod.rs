//! Content Catalog
//!
//! Immutable registry of packs, groups and items. The engine reads it
//! through [`ContentCatalog`]; [`StaticCatalog`] is the in-memory
//! implementation validated once at load time.

mod model;
mod registry;

pub use model::{
    ContentGroup, ContentItem, ContentPack, GroupPolicy, LocalizedText, PackPolicy, PackType,
    Unit, VisualAnswer, TAG_HIDDEN,
};
pub use registry::{CatalogError, StaticCatalog};

use crate::types::{Layer, LevelTag};

/// Read-only lookups the engine needs from a content source.
/// Listings keep catalog insertion order.
pub trait ContentCatalog {
    fn list_packs_for_level(&self, level: &LevelTag) -> Vec<&ContentPack>;

    fn get_pack_by_id(&self, id: &str) -> Option<&ContentPack>;

    /// Packs whose required layer is at or below `layer`
    fn list_packs_up_to_layer(&self, level: &LevelTag, layer: Layer) -> Vec<&ContentPack> {
        self.list_packs_for_level(level)
            .into_iter()
            .filter(|p| p.required_layer() <= layer)
            .collect()
    }

    /// Packs shown in browsing lists. Hidden packs still gate progression.
    fn list_visible_packs_for_level(&self, level: &LevelTag) -> Vec<&ContentPack> {
        self.list_packs_for_level(level)
            .into_iter()
            .filter(|p| !p.is_hidden())
            .collect()
    }
}
