//! Chat data model: conversations, group rosters, and message subtypes.
//!
//! A [`Chat`] is the unit the prompt pipeline composes for. Single chats
//! carry one persona in their settings; group chats carry a member roster
//! where every member owns a persona and, optionally, an excerpt of that
//! member's 1:1 history with the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{ChatId, MessageId, WorldBookId};

/// One member of a group chat roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    /// Display name this member speaks under.
    pub name: String,
    /// Persona description for this member.
    pub persona: String,
    /// Recent excerpt of this member's 1:1 history with the user, if a
    /// single chat is linked. Empty when no link exists.
    #[serde(default)]
    pub single_chat_memory: Vec<ChatMessage>,
}

impl GroupMember {
    /// Create a roster member with no linked 1:1 history.
    #[must_use]
    pub fn new(name: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            persona: persona.into(),
            single_chat_memory: Vec::new(),
        }
    }

    /// Attach an excerpt of this member's 1:1 history with the user.
    #[must_use]
    pub fn with_single_chat_memory(mut self, messages: Vec<ChatMessage>) -> Self {
        self.single_chat_memory = messages;
        self
    }
}

/// Per-chat settings consumed by the prompt pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSettings {
    /// World books linked to this chat.
    #[serde(default)]
    pub linked_world_book_ids: Vec<WorldBookId>,
    /// Group chats whose recent history feeds cross-context memory.
    /// Only meaningful for single chats.
    #[serde(default)]
    pub linked_group_chat_ids: Vec<ChatId>,
    /// Raw persona text for the chat partner. Only meaningful for single
    /// chats; group personas live on the roster.
    #[serde(default)]
    pub persona: String,
    /// Per-chat override of the globally configured history window.
    #[serde(default)]
    pub memory_window: Option<usize>,
}

/// Lifecycle state of a red packet in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedPacketStatus {
    /// Sent, not yet answered.
    Pending,
    /// Accepted by the recipient.
    Accepted,
    /// Rejected by the recipient.
    Rejected,
    /// Funds claimed.
    Claimed,
}

impl fmt::Display for RedPacketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Claimed => "claimed",
        };
        write!(f, "{s}")
    }
}

/// Message subtypes the payload synthesizer switches on.
///
/// Every subtype is flattened into narrated text when the message history
/// payload is built; the enum exists so that flattening is exhaustive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageBody {
    /// Plain text.
    Text {
        /// The message text.
        content: String,
    },
    /// An image attachment.
    Image {
        /// Optional caption the sender attached.
        #[serde(default)]
        caption: Option<String>,
    },
    /// A voice message with its transcript.
    Voice {
        /// Speech-to-text transcript of the recording.
        transcript: String,
    },
    /// A sticker with its conveyed meaning.
    Sticker {
        /// What the sticker expresses.
        meaning: String,
    },
    /// A red packet sent into the chat.
    RedPacket {
        /// Stable id the model must reference verbatim when responding.
        packet_id: String,
        /// Amount inside the packet.
        amount: f64,
        /// Greeting text on the packet.
        #[serde(default)]
        greeting: String,
        /// Current lifecycle state.
        status: RedPacketStatus,
    },
    /// A response to a previously sent red packet.
    RedPacketAck {
        /// Id of the packet being answered.
        packet_id: String,
        /// Whether the packet was accepted.
        accepted: bool,
    },
}

/// A single transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message id.
    pub id: MessageId,
    /// Display name of the sender.
    pub sender: String,
    /// Wall-clock send time.
    pub timestamp: DateTime<Utc>,
    /// Typed message content.
    pub body: MessageBody,
}

impl ChatMessage {
    /// Create a message with a fresh id.
    #[must_use]
    pub fn new(sender: impl Into<String>, timestamp: DateTime<Utc>, body: MessageBody) -> Self {
        Self {
            id: MessageId::new(),
            sender: sender.into(),
            timestamp,
            body,
        }
    }

    /// Convenience constructor for a plain text message.
    #[must_use]
    pub fn text(
        sender: impl Into<String>,
        timestamp: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(
            sender,
            timestamp,
            MessageBody::Text {
                content: content.into(),
            },
        )
    }
}

/// A conversation, single or group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Chat id.
    pub id: ChatId,
    /// Display name: the character's name for single chats, the group
    /// name for group chats.
    pub name: String,
    /// Whether this is a group chat.
    pub is_group: bool,
    /// Group roster. Empty for single chats.
    #[serde(default)]
    pub members: Vec<GroupMember>,
    /// Ordered transcript, oldest first.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Pipeline-relevant settings.
    #[serde(default)]
    pub settings: ChatSettings,
}

impl Chat {
    /// Create a single chat with the given partner name and persona.
    #[must_use]
    pub fn single(name: impl Into<String>, persona: impl Into<String>) -> Self {
        Self {
            id: ChatId::new(),
            name: name.into(),
            is_group: false,
            members: Vec::new(),
            messages: Vec::new(),
            settings: ChatSettings {
                persona: persona.into(),
                ..ChatSettings::default()
            },
        }
    }

    /// Create a group chat with the given display name and roster.
    #[must_use]
    pub fn group(name: impl Into<String>, members: Vec<GroupMember>) -> Self {
        Self {
            id: ChatId::new(),
            name: name.into(),
            is_group: true,
            members,
            messages: Vec::new(),
            settings: ChatSettings::default(),
        }
    }

    /// The last `window` messages of the transcript, oldest first.
    #[must_use]
    pub fn recent_messages(&self, window: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(window);
        &self.messages[start..]
    }

    /// Look up a roster member by display name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&GroupMember> {
        self.members.iter().find(|m| m.name == name)
    }
}
