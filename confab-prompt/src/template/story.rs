//! Opening section for pure narrative framing.
//!
//! Not part of the default single/group selection; an integration opts into
//! this variant when it wants prose fiction instead of a chat transcript.
//! The output contract changes completely, but the situational, immersion,
//! and reality catalogues still apply to the fiction being written.

use std::fmt::Write;

use crate::context::PromptContext;
use crate::template::rules;

/// Heading for the narrative output contract.
pub const NARRATIVE_HEADING: &str = "# Narrative Contract";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the story-narration opening section.
#[must_use]
pub fn build(ctx: &PromptContext) -> String {
    let chat = &ctx.chat;
    let mut prompt = String::new();

    let _ = writeln!(
        prompt,
        "You are the narrator of an ongoing story. {} takes part as {}; you write everyone \
         and everything else.",
        ctx.my_nickname,
        ctx.my_persona.trim()
    );
    prompt.push('\n');

    if chat.members.is_empty() {
        let _ = writeln!(prompt, "# Principal Character");
        let _ = writeln!(prompt, "{}: {}", chat.name, chat.settings.persona.trim());
    } else {
        let _ = writeln!(prompt, "# Cast");
        for member in &chat.members {
            let _ = writeln!(prompt, "- {}: {}", member.name, member.persona.trim());
        }
    }
    prompt.push('\n');

    let _ = writeln!(
        prompt,
        "The story's present moment is {}.",
        ctx.current_time.format(TIME_FORMAT)
    );

    prompt.push('\n');
    prompt.push_str(&rules::render_rule_block(
        NARRATIVE_HEADING,
        rules::story_behavior_rules(),
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

    prompt
}
