//! Rolling message payload: history slicing and content synthesis.
//!
//! The transcript is flattened into one linear narrated sequence: every
//! synthesized entry has role `user`, regardless of who originally sent it.
//! The receiving model sees a single narrated transcript rather than a
//! role-typed dialogue. This is deliberate and load-bearing; changing it
//! changes model behavior.

use serde::Serialize;

use confab_core::chat::{Chat, ChatMessage, MessageBody};

/// Timestamp format embedded in synthesized text entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One entry of the rolling message payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadMessage {
    /// Always `"user"`; see the module docs.
    pub role: String,
    /// Narrated text for this transcript entry.
    pub content: String,
}

/// Slice the chat transcript to the last `window` messages and synthesize
/// the flattened payload, oldest first.
#[must_use]
pub fn build_messages_payload(chat: &Chat, window: usize) -> Vec<PayloadMessage> {
    chat.recent_messages(window)
        .iter()
        .map(|message| PayloadMessage {
            role: "user".to_string(),
            content: synthesize_content(message),
        })
        .collect()
}

/// Flatten one typed message into narrated text.
///
/// Red-packet entries embed the packet id verbatim so later injectors and
/// the model itself can reference it.
#[must_use]
pub fn synthesize_content(message: &ChatMessage) -> String {
    let sender = &message.sender;
    let ts = message.timestamp.format(TIMESTAMP_FORMAT);
    match &message.body {
        MessageBody::Text { content } => {
            format!("{sender} (Timestamp: {ts}): {content}")
        }
        MessageBody::Image { caption } => match caption {
            Some(caption) => format!("[{sender} sent an image: {caption}]"),
            None => format!("[{sender} sent an image]"),
        },
        MessageBody::Voice { transcript } => {
            format!("[{sender} sent a voice message: \"{transcript}\"]")
        }
        MessageBody::Sticker { meaning } => {
            format!("[{sender} sent a sticker meaning \"{meaning}\"]")
        }
        MessageBody::RedPacket {
            packet_id,
            amount,
            greeting,
            status,
        } => {
            format!(
                "[{sender} sent red packet {packet_id} ({amount:.2}) with greeting \
                 \"{greeting}\", current status: {status}]"
            )
        }
        MessageBody::RedPacketAck {
            packet_id,
            accepted,
        } => {
            let verb = if *accepted { "accepted" } else { "declined" };
            format!("[{sender} {verb} red packet {packet_id}]")
        }
    }
}

/// Compact one-line rendering used by memory excerpts, without timestamps.
#[must_use]
pub(crate) fn brief_line(message: &ChatMessage) -> String {
    let sender = &message.sender;
    match &message.body {
        MessageBody::Text { content } => format!("{sender}: {content}"),
        MessageBody::Image { .. } => format!("{sender}: [image]"),
        MessageBody::Voice { transcript } => format!("{sender}: [voice] {transcript}"),
        MessageBody::Sticker { meaning } => format!("{sender}: [sticker: {meaning}]"),
        MessageBody::RedPacket {
            packet_id, status, ..
        } => format!("{sender}: [red packet {packet_id}, {status}]"),
        MessageBody::RedPacketAck {
            packet_id,
            accepted,
        } => {
            let verb = if *accepted { "accepted" } else { "declined" };
            format!("{sender}: [{verb} red packet {packet_id}]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use confab_core::chat::RedPacketStatus;

    fn at_noon() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).single().expect("valid")
    }

    #[test]
    fn text_messages_carry_sender_and_timestamp() {
        let msg = ChatMessage::text("Lin", at_noon(), "the plums looked good today");
        assert_eq!(
            synthesize_content(&msg),
            "Lin (Timestamp: 2024-03-05 12:00): the plums looked good today"
        );
    }

    #[test]
    fn non_text_messages_become_placeholders() {
        let image = ChatMessage::new("Lin", at_noon(), MessageBody::Image { caption: None });
        assert_eq!(synthesize_content(&image), "[Lin sent an image]");

        let voice = ChatMessage::new(
            "Lin",
            at_noon(),
            MessageBody::Voice {
                transcript: "on my way".to_string(),
            },
        );
        assert_eq!(
            synthesize_content(&voice),
            "[Lin sent a voice message: \"on my way\"]"
        );
    }

    #[test]
    fn red_packet_summary_embeds_id_amount_and_status() {
        let msg = ChatMessage::new(
            "User",
            at_noon(),
            MessageBody::RedPacket {
                packet_id: "rp-1024".to_string(),
                amount: 8.88,
                greeting: "for you".to_string(),
                status: RedPacketStatus::Pending,
            },
        );
        let content = synthesize_content(&msg);
        assert!(content.contains("rp-1024"));
        assert!(content.contains("8.88"));
        assert!(content.contains("pending"));
    }

    #[test]
    fn every_payload_entry_is_role_user() {
        let mut chat = Chat::single("Lin", "a calm botanist");
        chat.messages.push(ChatMessage::text("Lin", at_noon(), "hi"));
        chat.messages.push(ChatMessage::text("User", at_noon(), "hello"));

        let payload = build_messages_payload(&chat, 20);
        assert_eq!(payload.len(), 2);
        assert!(payload.iter().all(|m| m.role == "user"));
    }

    #[test]
    fn payload_respects_the_window() {
        let mut chat = Chat::single("Lin", "a calm botanist");
        for i in 0..30 {
            chat.messages
                .push(ChatMessage::text("User", at_noon(), format!("m{i}")));
        }

        let payload = build_messages_payload(&chat, 20);
        assert_eq!(payload.len(), 20);
        assert!(payload[0].content.ends_with("m10"));
        assert!(payload[19].content.ends_with("m29"));
    }
}
