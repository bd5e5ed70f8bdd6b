//! Opening section for a group conversation.
//!
//! The model directs every roster member at once; the identity rule below is
//! a hard invariant, restated in text and enforced structurally by choosing a
//! safe roster name for every catalogue example.

use std::fmt::Write;

use crate::catalog;
use crate::context::PromptContext;
use crate::template::rules;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Fallback example name when the roster offers no collision-free member.
const FALLBACK_EXAMPLE_NAME: &str = "Ensemble Member";

/// Render the group-chat opening section.
#[must_use]
pub fn build(ctx: &PromptContext) -> String {
    let chat = &ctx.chat;
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You direct the group chat \"{}\". You control every member of the group except {}, \
         who is the real user.",
        chat.name, ctx.my_nickname
    );
    prompt.push('\n');

    let _ = writeln!(prompt, "# Group Members");
    for member in &chat.members {
        let _ = writeln!(prompt, "- {}: {}", member.name, member.persona.trim());
    }
    prompt.push('\n');

    let _ = writeln!(prompt, "# The User");
    let _ = writeln!(prompt, "{}: {}", ctx.my_nickname, ctx.my_persona.trim());
    prompt.push('\n');

    let _ = writeln!(
        prompt,
        "The current time is {}.",
        ctx.current_time.format(TIME_FORMAT)
    );
    prompt.push('\n');

    let _ = writeln!(prompt, "# Identity Rule");
    let _ = writeln!(
        prompt,
        "Every action you emit carries a `name` field identifying the speaking member. \
         That name must never be \"{}\" and never \"{}\"; you do not speak as the user, \
         and the group itself is not a speaker.",
        ctx.my_nickname, chat.name
    );

    prompt.push('\n');
    prompt.push_str(&rules::render_rule_block(
        rules::BEHAVIOR_HEADING,
        rules::base_behavior_rules(),
    ));
    prompt.push_str("\n\n");
    prompt.push_str(&rules::render_rule_block(
        rules::SITUATIONAL_HEADING,
        rules::situational_awareness_rules(),
    ));
    prompt.push_str("\n\n");
    prompt.push_str(&rules::render_rule_block(
        rules::ANTI_BREAK_HEADING,
        rules::anti_break_rules(),
    ));
    prompt.push_str("\n\n");
    prompt.push_str(&rules::render_rule_block(
        rules::REALITY_HEADING,
        rules::reality_logic_rules(),
    ));

    let name = example_name(ctx);
    prompt.push_str("\n\n");
    prompt.push_str(rules::ACTIONS_HEADING);
    prompt.push('\n');
    prompt.push_str(&catalog::render_actions(
        catalog::group_chat_actions(),
        Some(name),
    ));

    prompt.push_str("\n\n");
    prompt.push_str(rules::RED_PACKET_HEADING);
    prompt.push('\n');
    prompt.push_str(&catalog::render_red_packet_rules(
        catalog::group_chat_red_packet_rules(),
        Some(name),
    ));

    prompt
}

/// Pick a roster name for catalogue examples that collides with neither the
/// user's nickname nor the group's display name.
fn example_name(ctx: &PromptContext) -> &str {
    ctx.chat
        .members
        .iter()
        .map(|m| m.name.as_str())
        .find(|name| *name != ctx.my_nickname && *name != ctx.chat.name)
        .unwrap_or(FALLBACK_EXAMPLE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use confab_core::chat::{Chat, GroupMember};

    fn ctx() -> PromptContext {
        PromptContext::new(
            Chat::group(
                "Tea House",
                vec![
                    GroupMember::new("Lin", "a calm botanist"),
                    GroupMember::new("Wei", "an impulsive painter"),
                ],
            ),
            "User",
            "a night-shift nurse",
            Utc::now(),
        )
    }

    #[test]
    fn enumerates_the_roster() {
        let prompt = build(&ctx());
        assert!(prompt.contains("- Lin: a calm botanist"));
        assert!(prompt.contains("- Wei: an impulsive painter"));
    }

    #[test]
    fn states_the_identity_rule() {
        let prompt = build(&ctx());
        assert!(prompt.contains("# Identity Rule"));
        assert!(prompt.contains("never be \"User\""));
        assert!(prompt.contains("never \"Tea House\""));
    }

    #[test]
    fn examples_use_a_safe_roster_name() {
        let prompt = build(&ctx());
        assert!(prompt.contains(r#""name": "Lin""#));
        assert!(!prompt.contains(r#""name": "User""#));
        assert!(!prompt.contains(r#""name": "Tea House""#));
        assert!(!prompt.contains(catalog::NAME_PLACEHOLDER));
    }

    #[test]
    fn example_name_skips_colliding_members() {
        let mut context = ctx();
        context.chat.members[0].name = "User".to_string();
        assert_eq!(example_name(&context), "Wei");

        context.chat.members[1].name = "Tea House".to_string();
        assert_eq!(example_name(&context), FALLBACK_EXAMPLE_NAME);
    }

    #[test]
    fn no_status_update_action_in_groups() {
        let prompt = build(&ctx());
        assert!(!prompt.contains("`status_update`"));
    }
}
