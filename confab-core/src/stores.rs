//! Read-only store interfaces the injectors resolve against.
//!
//! The surrounding application owns the actual document store; this core
//! sees only these narrow lookup traits. In-memory implementations are
//! provided for tests, demos, and benches.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::commerce::Transaction;
use crate::types::{ChatId, WorldBookId};
use crate::world::WorldBookInfo;

/// Read-only lookup of world books by id.
#[async_trait]
pub trait WorldBookStore: Send + Sync {
    /// Resolve a world book, or `None` if the id is unknown.
    async fn world_book(&self, id: WorldBookId) -> Option<WorldBookInfo>;
}

/// Read-only lookup of transaction records by chat.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// All transactions recorded for `chat_id`, oldest first.
    async fn transactions_for_chat(&self, chat_id: ChatId) -> Vec<Transaction>;
}

/// Hash-map backed [`WorldBookStore`].
#[derive(Debug, Default)]
pub struct InMemoryWorldBooks {
    books: HashMap<WorldBookId, WorldBookInfo>,
}

impl InMemoryWorldBooks {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a world book, replacing any existing entry with the same id.
    pub fn insert(&mut self, book: WorldBookInfo) {
        self.books.insert(book.id, book);
    }
}

#[async_trait]
impl WorldBookStore for InMemoryWorldBooks {
    async fn world_book(&self, id: WorldBookId) -> Option<WorldBookInfo> {
        self.books.get(&id).cloned()
    }
}

/// Hash-map backed [`TransactionStore`].
#[derive(Debug, Default)]
pub struct InMemoryTransactions {
    by_chat: HashMap<ChatId, Vec<Transaction>>,
}

impl InMemoryTransactions {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction to its chat's record list.
    pub fn push(&mut self, transaction: Transaction) {
        self.by_chat
            .entry(transaction.chat_id)
            .or_default()
            .push(transaction);
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactions {
    async fn transactions_for_chat(&self, chat_id: ChatId) -> Vec<Transaction> {
        self.by_chat.get(&chat_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionId;
    use chrono::Utc;

    #[tokio::test]
    async fn world_book_lookup_hits_and_misses() {
        let mut store = InMemoryWorldBooks::new();
        let book = WorldBookInfo::new("Harbor Town", "geography", "A small port.");
        let id = book.id;
        store.insert(book);

        assert!(store.world_book(id).await.is_some());
        assert!(store.world_book(WorldBookId::new()).await.is_none());
    }

    #[tokio::test]
    async fn transactions_grouped_by_chat() {
        let mut store = InMemoryTransactions::new();
        let chat_a = ChatId::new();
        let chat_b = ChatId::new();

        store.push(Transaction {
            id: TransactionId::new(),
            chat_id: chat_a,
            from_user: "User".to_string(),
            created_at: Utc::now(),
            message: "{}".to_string(),
        });

        assert_eq!(store.transactions_for_chat(chat_a).await.len(), 1);
        assert!(store.transactions_for_chat(chat_b).await.is_empty());
    }
}
