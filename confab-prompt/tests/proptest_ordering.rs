//! Property-based test for the priority-ordering guarantee.
//!
//! Whatever priorities are registered, in whatever order, the assembled
//! prompt must carry the sections in ascending priority with registration
//! order breaking ties.

use async_trait::async_trait;
use chrono::Utc;
use proptest::prelude::*;

use confab_core::chat::Chat;
use confab_core::config::PromptConfig;
use confab_prompt::{InjectError, InjectorKind, PromptContext, PromptInjector, PromptManager};

struct LabeledInjector {
    label: String,
    priority: i32,
}

#[async_trait]
impl PromptInjector for LabeledInjector {
    fn kind(&self) -> InjectorKind {
        InjectorKind::ExtraInfo
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    async fn inject(&self, _ctx: &PromptContext) -> Result<String, InjectError> {
        Ok(format!("<<{}>>", self.label))
    }
}

proptest! {
    #[test]
    fn sections_always_appear_in_ascending_priority(priorities in prop::collection::vec(-50..50i32, 1..12)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");

        let mut manager = PromptManager::new(PromptConfig::default());
        for (index, priority) in priorities.iter().enumerate() {
            manager.add_injector(Box::new(LabeledInjector {
                label: format!("S{index}"),
                priority: *priority,
            }));
        }

        let ctx = PromptContext::new(
            Chat::single("Lin", "a calm botanist"),
            "User",
            "a night-shift nurse",
            Utc::now(),
        );
        let result = runtime
            .block_on(manager.build_prompt(&ctx))
            .expect("build");

        // Expected order: stable sort of (priority, registration index).
        let mut expected: Vec<(i32, usize)> = priorities
            .iter()
            .copied()
            .enumerate()
            .map(|(index, priority)| (priority, index))
            .collect();
        expected.sort();

        let positions: Vec<usize> = expected
            .iter()
            .map(|(_, index)| {
                result
                    .system_prompt
                    .find(&format!("<<S{index}>>"))
                    .expect("section present")
            })
            .collect();

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
