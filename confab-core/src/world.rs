//! World books: reusable blocks of lore text linked to chats.

use serde::{Deserialize, Serialize};

use crate::types::WorldBookId;

/// A reusable block of world lore, resolved by id from the world-book store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldBookInfo {
    /// World-book id.
    pub id: WorldBookId,
    /// Book title.
    pub name: String,
    /// Category label, e.g. "geography" or "faction".
    pub category: String,
    /// The lore text itself.
    pub content: String,
    /// Optional editor-facing description.
    #[serde(default)]
    pub description: Option<String>,
}

impl WorldBookInfo {
    /// Create a world book with a fresh id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: WorldBookId::new(),
            name: name.into(),
            category: category.into(),
            content: content.into(),
            description: None,
        }
    }
}
