//! Integration tests: the core data model working end to end.
//!
//! Exercises the flow a real caller runs before a prompt build: load config,
//! assemble a chat with settings, resolve stores, aggregate gifts, and check
//! status freshness against the configured policy.

use chrono::{Duration, Utc};

use confab_core::chat::{Chat, ChatMessage, GroupMember};
use confab_core::commerce::{Transaction, aggregate_owned_items};
use confab_core::config::PromptConfig;
use confab_core::status::ChatStatus;
use confab_core::stores::{
    InMemoryTransactions, InMemoryWorldBooks, TransactionStore, WorldBookStore,
};
use confab_core::types::TransactionId;
use confab_core::world::WorldBookInfo;

#[tokio::test]
async fn config_stores_and_aggregation_work_together() {
    // 1. Config with a tightened history window.
    let config = PromptConfig::from_toml("[history]\nmax_messages = 10").expect("config");
    assert_eq!(config.history.max_messages, 10);

    // 2. A single chat linked to a world book.
    let mut world_books = InMemoryWorldBooks::new();
    let book = WorldBookInfo::new("Harbor Town", "geography", "A small port.");
    let book_id = book.id;
    world_books.insert(book);

    let mut chat = Chat::single("Lin", "a calm botanist");
    chat.settings.linked_world_book_ids.push(book_id);
    for i in 0..15 {
        chat.messages
            .push(ChatMessage::text("User", Utc::now(), format!("m{i}")));
    }

    // 3. The linked book resolves; the history window slices.
    let resolved = world_books.world_book(book_id).await.expect("resolved");
    assert_eq!(resolved.name, "Harbor Town");
    assert_eq!(chat.recent_messages(config.history.max_messages).len(), 10);

    // 4. Gift transactions aggregate across purchases.
    let mut transactions = InMemoryTransactions::new();
    for (minutes_ago, quantity) in [(120_i64, 1_u32), (30, 2)] {
        transactions.push(Transaction {
            id: TransactionId::new(),
            chat_id: chat.id,
            from_user: "User".to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            message: format!(
                r#"{{"kind": "gift_purchase", "items": [{{"id": "tea-set", "name": "Tea Set", "quantity": {quantity}}}], "shippingMethod": "courier"}}"#
            ),
        });
    }
    let records = transactions.transactions_for_chat(chat.id).await;
    let owned = aggregate_owned_items(&records);
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].quantity, 3);

    // 5. Staleness follows the configured policy.
    let status = ChatStatus {
        is_online: true,
        mood: "calm".to_string(),
        location: "greenhouse".to_string(),
        outfit: "overalls".to_string(),
        last_update: Utc::now() - Duration::minutes(31),
    };
    assert!(status.is_stale(Utc::now(), config.status.stale_after()));
}

#[test]
fn group_roster_memory_shape() {
    let member = GroupMember::new("Wei", "an impulsive painter")
        .with_single_chat_memory(vec![ChatMessage::text("Wei", Utc::now(), "hello")]);
    let chat = Chat::group("Tea House", vec![member]);

    let wei = chat.member("Wei").expect("member");
    assert_eq!(wei.single_chat_memory.len(), 1);
}
