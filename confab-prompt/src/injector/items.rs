//! Owned-item injector: renders gifts aggregated from the transaction store.

use std::fmt::Write;
use std::sync::Arc;

use async_trait::async_trait;

use confab_core::commerce::aggregate_owned_items;
use confab_core::stores::TransactionStore;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};

/// Heading for the owned-item addendum.
pub const ITEMS_HEADING: &str = "# Owned Items";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders the character's gift inventory, newest receipt first.
pub struct ItemInjector {
    store: Arc<dyn TransactionStore>,
}

impl ItemInjector {
    /// Create the injector over a transaction store.
    #[must_use]
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptInjector for ItemInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::Item
    }

    fn priority(&self) -> i32 {
        priority::ITEMS
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        let transactions = self.store.transactions_for_chat(ctx.chat.id).await;
        let owned = aggregate_owned_items(&transactions);
        if owned.is_empty() {
            return Ok(String::new());
        }

        let mut block = String::from(ITEMS_HEADING);
        block.push_str("\nGifts you have received; mention or show them off when it fits.");
        for item in owned {
            let _ = write!(
                block,
                "\n- {} x{} (from {}, via {}, received {})",
                item.name,
                item.quantity,
                item.from_user,
                item.shipping_method,
                item.received_at.format(DATE_FORMAT)
            );
        }

        Ok(block)
    }
}
