//! Cross-context memory injector.
//!
//! Two sub-behaviors selected by chat shape. In a single chat, the character
//! remembers how they behave in linked group chats; in a group chat, each
//! member remembers their 1:1 history with the user. Only one branch can
//! fire per call because a chat is never simultaneously single and group.

use std::fmt::Write;

use async_trait::async_trait;
use tracing::warn;

use confab_core::chat::ChatMessage;

use crate::context::PromptContext;
use crate::error::InjectError;
use crate::injector::{InjectorKind, PromptInjector, priority};
use crate::payload;

/// Heading for the cross-context memory addendum.
pub const MEMORY_HEADING: &str = "# Cross-Context Memory";

/// Pulls recent excerpts from other conversations into the prompt.
#[derive(Debug, Clone)]
pub struct MemoryInjector {
    excerpt_messages: usize,
}

impl MemoryInjector {
    /// Create the injector with the configured excerpt window.
    #[must_use]
    pub fn new(excerpt_messages: usize) -> Self {
        Self { excerpt_messages }
    }

    fn excerpt(&self, messages: &[ChatMessage]) -> String {
        let start = messages.len().saturating_sub(self.excerpt_messages);
        let mut lines = String::new();
        for message in &messages[start..] {
            let _ = writeln!(lines, "- {}", payload::brief_line(message));
        }
        lines.truncate(lines.trim_end().len());
        lines
    }
}

#[async_trait]
impl PromptInjector for MemoryInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::Memory
    }

    fn priority(&self) -> i32 {
        priority::MEMORY
    }

    async fn inject(&self, ctx: &PromptContext) -> Result<String, InjectError> {
        let mut sections = Vec::new();

        if ctx.chat.is_group {
            // Each member with a linked 1:1 history remembers it here.
            for member in &ctx.chat.members {
                if member.single_chat_memory.is_empty() {
                    continue;
                }
                sections.push(format!(
                    "## {}'s private chats with {}\n{}",
                    member.name,
                    ctx.my_nickname,
                    self.excerpt(&member.single_chat_memory)
                ));
            }
        } else {
            for id in &ctx.chat.settings.linked_group_chat_ids {
                let Some(group) = ctx.linked_chat(*id) else {
                    warn!(linked_chat = %id, chat = %ctx.chat.id, "linked group chat not in context; dropping");
                    continue;
                };
                if group.messages.is_empty() {
                    continue;
                }
                sections.push(format!(
                    "## How you behave in \"{}\"\n{}",
                    group.name,
                    self.excerpt(&group.messages)
                ));
            }
        }

        if sections.is_empty() {
            return Ok(String::new());
        }

        Ok(format!("{MEMORY_HEADING}\n\n{}", sections.join("\n\n")))
    }
}
