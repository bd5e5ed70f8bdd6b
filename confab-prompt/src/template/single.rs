//! Opening section for a 1:1 conversation.

use std::fmt::Write;

use crate::catalog;
use crate::context::PromptContext;
use crate::template::rules;

/// Timestamp format shown to the model for the current time.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the single-chat opening section.
#[must_use]
pub fn build(ctx: &PromptContext) -> String {
    let chat = &ctx.chat;
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are {}, chatting 1:1 with {} through a messaging app.",
        chat.name, ctx.my_nickname
    );
    prompt.push('\n');

    let _ = writeln!(prompt, "# Who You Are");
    let _ = writeln!(prompt, "{}", chat.settings.persona.trim());
    prompt.push('\n');

    let _ = writeln!(prompt, "# Who You Are Talking To");
    let _ = writeln!(prompt, "{}: {}", ctx.my_nickname, ctx.my_persona.trim());
    prompt.push('\n');

    let _ = writeln!(
        prompt,
        "The current time is {}.",
        ctx.current_time.format(TIME_FORMAT)
    );

    // The memory injector fills this in later; build() stays synchronous.
    if !chat.settings.linked_group_chat_ids.is_empty() {
        prompt.push('\n');
        let _ = writeln!(
            prompt,
            "Memories of how you behave in shared group chats appear in a dedicated section below."
        );
    }

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

    prompt.push_str("\n\n");
    prompt.push_str(rules::ACTIONS_HEADING);
    prompt.push('\n');
    prompt.push_str(&catalog::render_actions(
        catalog::single_chat_actions(),
        None,
    ));

    prompt.push_str("\n\n");
    prompt.push_str(rules::RED_PACKET_HEADING);
    prompt.push('\n');
    prompt.push_str(&catalog::render_red_packet_rules(
        catalog::single_chat_red_packet_rules(),
        None,
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use confab_core::chat::Chat;
    use confab_core::types::ChatId;

    fn ctx() -> PromptContext {
        PromptContext::new(
            Chat::single("Lin", "a calm botanist who runs a rooftop garden"),
            "User",
            "a night-shift nurse",
            Utc::now(),
        )
    }

    #[test]
    fn frames_one_character_with_persona() {
        let prompt = build(&ctx());
        assert!(prompt.contains("You are Lin"));
        assert!(prompt.contains("rooftop garden"));
        assert!(prompt.contains("night-shift nurse"));
    }

    #[test]
    fn includes_status_update_action() {
        let prompt = build(&ctx());
        assert!(prompt.contains("`status_update`"));
    }

    #[test]
    fn memory_placeholder_only_when_groups_are_linked() {
        let prompt = build(&ctx());
        assert!(!prompt.contains("shared group chats"));

        let mut context = ctx();
        context.chat.settings.linked_group_chat_ids.push(ChatId::new());
        let prompt = build(&context);
        assert!(prompt.contains("shared group chats"));
    }

    #[test]
    fn renders_all_shared_rule_blocks() {
        let prompt = build(&ctx());
        for heading in [
            rules::BEHAVIOR_HEADING,
            rules::SITUATIONAL_HEADING,
            rules::ANTI_BREAK_HEADING,
            rules::REALITY_HEADING,
            rules::ACTIONS_HEADING,
            rules::RED_PACKET_HEADING,
        ] {
            assert!(prompt.contains(heading), "missing section {heading}");
        }
    }
}
