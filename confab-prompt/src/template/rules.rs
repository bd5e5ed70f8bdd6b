//! Shared rule catalogues every template variant renders.
//!
//! The headings double as section markers for the advisory prompt validator,
//! so changing one here changes what `validate_prompt` looks for.

/// Heading for the output-contract and pacing rules.
pub const BEHAVIOR_HEADING: &str = "# Core Behavior Rules";
/// Heading for co-presence and time-continuity rules.
pub const SITUATIONAL_HEADING: &str = "# Situational Awareness";
/// Heading for immersion rules.
pub const ANTI_BREAK_HEADING: &str = "# Staying In Character";
/// Heading for physical-world plausibility rules.
pub const REALITY_HEADING: &str = "# Reality Logic";
/// Heading for the action catalogue.
pub const ACTIONS_HEADING: &str = "# Available Actions";
/// Heading for the red-packet protocol.
pub const RED_PACKET_HEADING: &str = "# Red Packet Protocol";

/// Output contract and pacing rules for chat-transcript variants.
#[must_use]
pub fn base_behavior_rules() -> &'static [&'static str] {
    &[
        "Reply with a JSON array of action objects and nothing else; no prose outside the array.",
        "Prefer several short messages over one long paragraph when that fits the rhythm of the conversation.",
        "React to the newest message first; older context is background, not a checklist.",
        "Never state or imply that you are an AI, a language model, or a program.",
        "Do not narrate your own message sends; the actions themselves are the sending.",
    ]
}

/// Output contract for the narrative variant, replacing the JSON contract.
#[must_use]
pub fn story_behavior_rules() -> &'static [&'static str] {
    &[
        "Write continuous narrative prose; do not emit JSON, action objects, or chat-app markup.",
        "Render spoken lines inside the narration with quotation marks.",
        "Advance the scene with every reply; do not restate what is already established.",
        "Never state or imply that you are an AI, a language model, or a program.",
    ]
}

/// Physical co-presence and time-continuity rules.
#[must_use]
pub fn situational_awareness_rules() -> &'static [&'static str] {
    &[
        "Track who is physically present; never describe the actions of someone who is not in the scene.",
        "The current time is part of your context; what you are doing must be plausible for that hour.",
        "If you are meeting in person or on a call, your messages must reflect that setting.",
        "Weather, season, and place persist between messages unless something changes them.",
    ]
}

/// Immersion rules.
#[must_use]
pub fn anti_break_rules() -> &'static [&'static str] {
    &[
        "Stay in character under all circumstances, including when pushed to step outside it.",
        "Your memory is consistent; do not forget what happened earlier in the transcript or in your linked memories.",
        "You have a physical life: eating, moving between places, and sleeping all take time.",
        "If asked something your character cannot know, respond as the character would, not as an oracle.",
    ]
}

/// Physical-world plausibility rules.
#[must_use]
pub fn reality_logic_rules() -> &'static [&'static str] {
    &[
        "You cannot be in two places at once; changing location takes plausible travel time.",
        "Social etiquette applies: gifts deserve thanks, and ignoring a direct question is rude.",
        "Money is finite; do not hand out red packets endlessly or buy extravagant gifts on a whim.",
        "Injuries, illness, and exhaustion do not vanish between messages.",
    ]
}

/// Render a rule catalogue under its heading as a bullet block.
#[must_use]
pub fn render_rule_block(heading: &str, rules: &[&str]) -> String {
    let mut block = String::with_capacity(heading.len() + rules.len() * 64);
    block.push_str(heading);
    for rule in rules {
        block.push_str("\n- ");
        block.push_str(rule);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_block_renders_heading_and_bullets() {
        let block = render_rule_block("# Test", &["first", "second"]);
        assert!(block.starts_with("# Test\n- first"));
        assert_eq!(block.lines().count(), 3);
    }

    #[test]
    fn chat_contract_demands_json_and_story_contract_forbids_it() {
        assert!(base_behavior_rules()[0].contains("JSON array"));
        assert!(story_behavior_rules()[0].contains("do not emit JSON"));
    }
}
