//! World-book injector: resolves linked lore against the world-book store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use confab_core::stores::WorldBookStore;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};

/// Heading for the world-lore addendum.
pub const WORLD_HEADING: &str = "# World Setting";

/// Concatenates the lore blocks of every resolvable linked world book.
///
/// Unresolvable ids are dropped silently (logged, not fatal); when nothing
/// resolves, no heading is emitted at all.
pub struct WorldBookInjector {
    store: Arc<dyn WorldBookStore>,
}

impl WorldBookInjector {
    /// Create the injector over a world-book store.
    #[must_use]
    pub fn new(store: Arc<dyn WorldBookStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptInjector for WorldBookInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::WorldBook
    }

    fn priority(&self) -> i32 {
        priority::WORLD_BOOK
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        let ids = &ctx.chat.settings.linked_world_book_ids;
        if ids.is_empty() {
            return Ok(String::new());
        }

        let mut blocks = Vec::with_capacity(ids.len());
        for id in ids {
            match self.store.world_book(*id).await {
                Some(book) => blocks.push(format!(
                    "## {} ({})\n{}",
                    book.name, book.category, book.content
                )),
                None => warn!(world_book = %id, chat = %ctx.chat.id, "linked world book not found; dropping"),
            }
        }

        if blocks.is_empty() {
            return Ok(String::new());
        }

        Ok(format!("{WORLD_HEADING}\n\n{}", blocks.join("\n\n")))
    }
}
