//! Response selection: direct keyword match first, contextual fallbacks second.

use super::context::ConversationContext;
use super::interest::{detect_interest, is_greeting};
use super::persona::Persona;
use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
use rand::Rng;
use std::sync::Arc;

/// Picks one response per user turn. Stateless itself; all conversation state lives in the
/// [`ConversationContext`] passed to [`respond`](Self::respond).
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    knowledge: Arc<KnowledgeBase>,
    persona: Persona,
}

impl ResponseSelector {
    pub fn new(knowledge: Arc<KnowledgeBase>, persona: Persona) -> Self {
        Self { knowledge, persona }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Answers one utterance and folds it into `context`. Total over any input; the
    /// default entry absorbs everything else. `rng` only drives the interest-area fallback.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        utterance: &str,
        context: &mut ConversationContext,
        rng: &mut R,
    ) -> String {
        let message = utterance.to_lowercase();
        context.question_count += 1;

        if !context.greeting_acknowledged && is_greeting(&message) {
            context.greeting_acknowledged = true;
        }
        if let Some(area) = detect_interest(&message) {
            context.preferred_area = Some(area);
        }

        let response = match self.find_direct(&message, context) {
            Some(entry) => entry.response.clone(),
            None => self.contextual(context, rng),
        };

        context.update(&message);
        tracing::debug!(
            target: "folio::chat",
            question_count = context.question_count,
            preferred_area = ?context.preferred_area,
            recent_focus = ?context.recent_focus,
            "Chat turn answered"
        );
        response
    }

    /// First entry, in relevance order, with a keyword inside `message`.
    ///
    /// Relevance: entries related to the preferred area first, then longer joined keywords.
    /// The sort is stable so equal entries keep insertion order.
    fn find_direct(&self, message: &str, context: &ConversationContext) -> Option<&KnowledgeEntry> {
        let area = context.preferred_area.map(|a| a.tag());
        let related = |e: &KnowledgeEntry| area.is_some_and(|tag| e.mentions(tag));

        let mut ranked: Vec<&KnowledgeEntry> = self.knowledge.entries().iter().collect();
        ranked.sort_by(|a, b| {
            related(b)
                .cmp(&related(a))
                .then_with(|| b.specificity().cmp(&a.specificity()))
        });
        ranked.into_iter().find(|e| e.matches(message))
    }

    fn contextual<R: Rng + ?Sized>(&self, context: &ConversationContext, rng: &mut R) -> String {
        if let Some(focus) = context.recent_focus.as_deref() {
            if let Some(entry) = self.knowledge.first_containing(focus) {
                return format!("Based on our conversation about {}, {}", focus, entry.response);
            }
        }

        if let Some(area) = context.preferred_area {
            let candidates = self.knowledge.entries_related_to(area.tag());
            if !candidates.is_empty() {
                let pick = candidates[rng.gen_range(0..candidates.len())];
                return format!(
                    "Since you're interested in {}, you might want to know that {}",
                    area.tag(),
                    pick.response
                );
            }
        }

        if context.greeting_acknowledged && context.question_count <= 2 {
            return self.persona.redirect();
        }

        self.knowledge.default_entry().response.clone()
    }
}
