//! Gift transactions and owned-item aggregation.
//!
//! The transaction store hands back raw records whose `message` field is an
//! opaque JSON payload. Only records tagged `gift_purchase` matter to the
//! prompt pipeline; everything else (other kinds, malformed JSON) is
//! skipped without error. Aggregation folds the surviving records into a
//! deduplicated owned-item list the model can reference in conversation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::types::{ChatId, TransactionId};

/// A raw transaction record from the transaction store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: TransactionId,
    /// Chat this transaction belongs to.
    pub chat_id: ChatId,
    /// Display name of the purchasing user.
    pub from_user: String,
    /// When the transaction was recorded.
    pub created_at: DateTime<Utc>,
    /// Opaque JSON payload; see [`TransactionPayload`].
    pub message: String,
}

/// One line item inside a gift purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftItem {
    /// Stable product id used for deduplication.
    pub id: String,
    /// Product display name.
    pub name: String,
    /// Units purchased.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Tagged transaction payloads the pipeline understands.
///
/// Unknown tags fail to parse, which callers treat as "not a gift".
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionPayload {
    /// A gift bought for the character.
    GiftPurchase {
        /// Purchased items.
        items: Vec<GiftItem>,
        /// How the gift was delivered.
        #[serde(default, rename = "shippingMethod")]
        shipping_method: String,
    },
}

impl Transaction {
    /// Parse this record as a gift purchase, or `None` for any other kind.
    #[must_use]
    pub fn gift_purchase(&self) -> Option<(Vec<GiftItem>, String)> {
        match serde_json::from_str::<TransactionPayload>(&self.message) {
            Ok(TransactionPayload::GiftPurchase {
                items,
                shipping_method,
            }) => Some((items, shipping_method)),
            Err(e) => {
                debug!(transaction = %self.id, error = %e, "skipping non-gift transaction payload");
                None
            }
        }
    }
}

/// An owned item derived from gift transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInfo {
    /// Product id.
    pub id: String,
    /// Product display name.
    pub name: String,
    /// Total units owned across all purchases.
    pub quantity: u32,
    /// Most recent receipt time.
    pub received_at: DateTime<Utc>,
    /// Sender of the most recent receipt.
    pub from_user: String,
    /// Shipping method of the most recent receipt.
    pub shipping_method: String,
}

/// Aggregate gift transactions into a deduplicated owned-item list.
///
/// Quantities for the same product id are summed; the most recent receipt
/// supplies the sender and shipping metadata. The result is sorted newest
/// receipt first.
#[must_use]
pub fn aggregate_owned_items(transactions: &[Transaction]) -> Vec<ItemInfo> {
    let mut by_id: HashMap<String, ItemInfo> = HashMap::new();

    for txn in transactions {
        let Some((items, shipping_method)) = txn.gift_purchase() else {
            continue;
        };

        for item in items {
            by_id
                .entry(item.id.clone())
                .and_modify(|existing| {
                    existing.quantity += item.quantity;
                    if txn.created_at > existing.received_at {
                        existing.name = item.name.clone();
                        existing.received_at = txn.created_at;
                        existing.from_user = txn.from_user.clone();
                        existing.shipping_method = shipping_method.clone();
                    }
                })
                .or_insert_with(|| ItemInfo {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    received_at: txn.created_at,
                    from_user: txn.from_user.clone(),
                    shipping_method: shipping_method.clone(),
                });
        }
    }

    let mut owned: Vec<ItemInfo> = by_id.into_values().collect();
    owned.sort_by(|a, b| b.received_at.cmp(&a.received_at));
    owned
}

fn default_quantity() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn gift_txn(
        chat_id: ChatId,
        from_user: &str,
        minutes_ago: i64,
        items_json: &str,
        shipping: &str,
    ) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            chat_id,
            from_user: from_user.to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            message: format!(
                r#"{{"kind": "gift_purchase", "items": {items_json}, "shippingMethod": "{shipping}"}}"#
            ),
        }
    }

    #[test]
    fn same_product_quantities_are_summed() {
        let chat = ChatId::new();
        let txns = vec![
            gift_txn(
                chat,
                "User",
                60,
                r#"[{"id": "rose-1", "name": "Rose", "quantity": 2}]"#,
                "courier",
            ),
            gift_txn(
                chat,
                "Aunt Mei",
                10,
                r#"[{"id": "rose-1", "name": "Rose", "quantity": 3}]"#,
                "in person",
            ),
        ];

        let owned = aggregate_owned_items(&txns);
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].quantity, 5);
        // Metadata comes from the more recent transaction.
        assert_eq!(owned[0].from_user, "Aunt Mei");
        assert_eq!(owned[0].shipping_method, "in person");
    }

    #[test]
    fn items_sorted_newest_receipt_first() {
        let chat = ChatId::new();
        let txns = vec![
            gift_txn(chat, "User", 120, r#"[{"id": "a", "name": "Teapot"}]"#, "courier"),
            gift_txn(chat, "User", 5, r#"[{"id": "b", "name": "Scarf"}]"#, "courier"),
        ];

        let owned = aggregate_owned_items(&txns);
        assert_eq!(owned.len(), 2);
        assert_eq!(owned[0].id, "b");
        assert_eq!(owned[1].id, "a");
    }

    #[test]
    fn malformed_and_foreign_payloads_are_skipped() {
        let chat = ChatId::new();
        let mut txns = vec![gift_txn(
            chat,
            "User",
            30,
            r#"[{"id": "a", "name": "Teapot"}]"#,
            "courier",
        )];
        txns.push(Transaction {
            id: TransactionId::new(),
            chat_id: chat,
            from_user: "User".to_string(),
            created_at: Utc::now(),
            message: "not json at all".to_string(),
        });
        txns.push(Transaction {
            id: TransactionId::new(),
            chat_id: chat,
            from_user: "User".to_string(),
            created_at: Utc::now(),
            message: r#"{"kind": "refund", "amount": 12}"#.to_string(),
        });

        let owned = aggregate_owned_items(&txns);
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "Teapot");
    }

    #[test]
    fn missing_quantity_defaults_to_one() {
        let chat = ChatId::new();
        let txns = vec![gift_txn(
            chat,
            "User",
            1,
            r#"[{"id": "a", "name": "Teapot"}]"#,
            "courier",
        )];

        let owned = aggregate_owned_items(&txns);
        assert_eq!(owned[0].quantity, 1);
    }
}
