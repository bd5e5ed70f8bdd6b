//! Static catalogues of chat actions and red-packet protocol rules.
//!
//! Catalogue entries are compiled in, never persisted. Each action is
//! advertised through one canonical example payload rather than a full
//! parameter schema. Group-chat entries embed a `{name}` placeholder that
//! templates substitute with a safe roster name at render time.

use std::fmt::Write;

/// Placeholder substituted with a roster member's name in group examples.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// One entry of the action catalogue advertised to the model.
#[derive(Debug, Clone, Copy)]
pub struct ActionInstruction {
    /// Action type tag emitted in the reply JSON.
    pub action: &'static str,
    /// When to use it.
    pub description: &'static str,
    /// Canonical example payload.
    pub example: &'static str,
    /// Whether every reply must contain at least one of these.
    pub required: bool,
}

/// One entry of the red-packet protocol catalogue.
#[derive(Debug, Clone, Copy)]
pub struct RedPacketRule {
    /// The situation this rule covers.
    pub scenario: &'static str,
    /// What the model must do.
    pub description: &'static str,
    /// Canonical example payload.
    pub example: &'static str,
}

const SINGLE_ACTIONS: &[ActionInstruction] = &[
    ActionInstruction {
        action: "text",
        description: "Send a plain chat message. This is your default way of speaking.",
        example: r#"{"type": "text", "content": "I just got back from the market, the plums looked good today."}"#,
        required: true,
    },
    ActionInstruction {
        action: "sticker",
        description: "Send a sticker when a feeling is easier shown than said.",
        example: r#"{"type": "sticker", "meaning": "pretending to be annoyed"}"#,
        required: false,
    },
    ActionInstruction {
        action: "voice",
        description: "Send a voice message for something warmer or more hurried than typed text.",
        example: r#"{"type": "voice", "transcript": "Give me a second, the kettle is boiling."}"#,
        required: false,
    },
    ActionInstruction {
        action: "image",
        description: "Share a photo of what you are seeing or doing.",
        example: r#"{"type": "image", "caption": "The harbor at dusk."}"#,
        required: false,
    },
    ActionInstruction {
        action: "red_packet",
        description: "Send a red packet on festive occasions or to genuinely thank someone.",
        example: r#"{"type": "red_packet", "amount": 8.88, "greeting": "Treat yourself to something sweet."}"#,
        required: false,
    },
    ActionInstruction {
        action: "accept_red_packet",
        description: "Accept a red packet from the transcript, referencing its id verbatim.",
        example: r#"{"type": "accept_red_packet", "packet_id": "rp-1024", "thanks": "You spoil me."}"#,
        required: false,
    },
    ActionInstruction {
        action: "reject_red_packet",
        description: "Decline a red packet politely, referencing its id verbatim.",
        example: r#"{"type": "reject_red_packet", "packet_id": "rp-1024", "reason": "This is too much, keep it."}"#,
        required: false,
    },
    ActionInstruction {
        action: "status_update",
        description: "Refresh your live status when it no longer matches what you are doing.",
        example: r#"{"type": "status_update", "is_online": true, "mood": "cheerful", "location": "kitchen", "outfit": "apron over a linen dress"}"#,
        required: false,
    },
];

const GROUP_ACTIONS: &[ActionInstruction] = &[
    ActionInstruction {
        action: "text",
        description: "Send a plain chat message as the named member.",
        example: r#"{"type": "text", "name": "{name}", "content": "Who's up for hotpot tonight?"}"#,
        required: true,
    },
    ActionInstruction {
        action: "sticker",
        description: "Send a sticker as the named member.",
        example: r#"{"type": "sticker", "name": "{name}", "meaning": "laughing too hard to type"}"#,
        required: false,
    },
    ActionInstruction {
        action: "voice",
        description: "Send a voice message as the named member.",
        example: r#"{"type": "voice", "name": "{name}", "transcript": "Count me in, I'm leaving work now."}"#,
        required: false,
    },
    ActionInstruction {
        action: "image",
        description: "Share a photo as the named member.",
        example: r#"{"type": "image", "name": "{name}", "caption": "Look what I found at the night market."}"#,
        required: false,
    },
    ActionInstruction {
        action: "red_packet",
        description: "Send a red packet into the group as the named member.",
        example: r#"{"type": "red_packet", "name": "{name}", "amount": 6.66, "greeting": "First round is on me."}"#,
        required: false,
    },
    ActionInstruction {
        action: "accept_red_packet",
        description: "Accept a red packet as the named member, referencing its id verbatim.",
        example: r#"{"type": "accept_red_packet", "name": "{name}", "packet_id": "rp-2048", "thanks": "Ha, lucky me!"}"#,
        required: false,
    },
    ActionInstruction {
        action: "reject_red_packet",
        description: "Decline a red packet as the named member, referencing its id verbatim.",
        example: r#"{"type": "reject_red_packet", "name": "{name}", "packet_id": "rp-2048", "reason": "Save it for the birthday kid."}"#,
        required: false,
    },
];

const SINGLE_RED_PACKET_RULES: &[RedPacketRule] = &[
    RedPacketRule {
        scenario: "A red packet appears in the transcript with status pending",
        description: "Answer it in your next reply with accept_red_packet or reject_red_packet, \
                      copying the packet id from the transcript exactly.",
        example: r#"{"type": "accept_red_packet", "packet_id": "rp-1024", "thanks": "That's so thoughtful of you."}"#,
    },
    RedPacketRule {
        scenario: "You accepted a red packet",
        description: "Follow up with a text action acknowledging it; silence after taking money reads as rude.",
        example: r#"{"type": "text", "content": "I'll put it toward the concert tickets. Thank you!"}"#,
    },
    RedPacketRule {
        scenario: "You want to send money",
        description: "Keep amounts modest and occasional; red packets mark moments, they are not a salary.",
        example: r#"{"type": "red_packet", "amount": 5.20, "greeting": "Because it's Tuesday and I thought of you."}"#,
    },
];

const GROUP_RED_PACKET_RULES: &[RedPacketRule] = &[
    RedPacketRule {
        scenario: "A red packet appears in the group with status pending",
        description: "Members may race to claim it; whoever answers must copy the packet id from \
                      the transcript exactly and carry an explicit name field.",
        example: r#"{"type": "accept_red_packet", "name": "{name}", "packet_id": "rp-2048", "thanks": "Fastest fingers in the group!"}"#,
    },
    RedPacketRule {
        scenario: "A member accepted a red packet",
        description: "Have that member follow up with a text action thanking the sender by name.",
        example: r#"{"type": "text", "name": "{name}", "content": "Thanks for the packet, dinner's on you next time though."}"#,
    },
];

/// Actions available in a single chat.
#[must_use]
pub fn single_chat_actions() -> &'static [ActionInstruction] {
    SINGLE_ACTIONS
}

/// Actions available in a group chat. Every example carries a `name` field.
#[must_use]
pub fn group_chat_actions() -> &'static [ActionInstruction] {
    GROUP_ACTIONS
}

/// Red-packet protocol for single chats.
#[must_use]
pub fn single_chat_red_packet_rules() -> &'static [RedPacketRule] {
    SINGLE_RED_PACKET_RULES
}

/// Red-packet protocol for group chats.
#[must_use]
pub fn group_chat_red_packet_rules() -> &'static [RedPacketRule] {
    GROUP_RED_PACKET_RULES
}

/// Render an action catalogue as a bullet block.
///
/// `example_name`, when given, replaces the `{name}` placeholder in every
/// example payload.
#[must_use]
pub fn render_actions(actions: &[ActionInstruction], example_name: Option<&str>) -> String {
    let mut block = String::new();
    for action in actions {
        let requirement = if action.required {
            "required in every reply"
        } else {
            "optional"
        };
        let _ = writeln!(
            block,
            "- `{}` ({}): {}",
            action.action, requirement, action.description
        );
        let _ = writeln!(block, "  Example: {}", substitute(action.example, example_name));
    }
    block.truncate(block.trim_end().len());
    block
}

/// Render a red-packet rule catalogue as a bullet block.
#[must_use]
pub fn render_red_packet_rules(rules: &[RedPacketRule], example_name: Option<&str>) -> String {
    let mut block = String::new();
    for rule in rules {
        let _ = writeln!(block, "- {}: {}", rule.scenario, rule.description);
        let _ = writeln!(block, "  Example: {}", substitute(rule.example, example_name));
    }
    block.truncate(block.trim_end().len());
    block
}

fn substitute(example: &str, example_name: Option<&str>) -> String {
    match example_name {
        Some(name) => example.replace(NAME_PLACEHOLDER, name),
        None => example.to_string(),
    }
}
