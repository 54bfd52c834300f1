//! Chat widget lifecycle: open with a greeting, exchange turns, close.

use super::context::ConversationContext;
use super::persona::greeting_for_hour;
use super::selector::ResponseSelector;
use chrono::Timelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

/// One line of the visible transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self { role: MessageRole::User, text: text.into() }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self { role: MessageRole::Bot, text: text.into() }
    }
}

/// One visitor's chat: transcript, context and the randomness behind fallbacks.
///
/// Opening always starts a fresh conversation; closing keeps the transcript visible
/// until the next open.
#[derive(Debug)]
pub struct ChatSession {
    selector: Arc<ResponseSelector>,
    state: SessionState,
    context: ConversationContext,
    messages: Vec<ChatMessage>,
    rng: StdRng,
}

impl ChatSession {
    pub fn new(selector: Arc<ResponseSelector>) -> Self {
        Self::with_rng(selector, StdRng::from_entropy())
    }

    /// Deterministic session for tests and replays.
    pub fn with_seed(selector: Arc<ResponseSelector>, seed: u64) -> Self {
        Self::with_rng(selector, StdRng::seed_from_u64(seed))
    }

    fn with_rng(selector: Arc<ResponseSelector>, rng: StdRng) -> Self {
        Self {
            selector,
            state: SessionState::Closed,
            context: ConversationContext::new(),
            messages: Vec::new(),
            rng,
        }
    }

    /// Opens using the local wall-clock hour for the greeting.
    pub fn open(&mut self) -> String {
        self.open_at(chrono::Local::now().hour())
    }

    /// Opens with a greeting for `hour` (0-23). Resets context and transcript.
    pub fn open_at(&mut self, hour: u32) -> String {
        self.state = SessionState::Open;
        self.context.reset();
        self.messages.clear();
        let greeting = greeting_for_hour(hour, self.selector.persona());
        self.messages.push(ChatMessage::bot(greeting.clone()));
        greeting
    }

    pub fn close(&mut self) {
        self.state = SessionState::Closed;
    }

    /// Flips open/closed. Returns the greeting when this call opened the session.
    pub fn toggle(&mut self) -> Option<String> {
        match self.state {
            SessionState::Open => {
                self.close();
                None
            }
            SessionState::Closed => Some(self.open()),
        }
    }

    /// Sends one visitor line. Blank input and closed sessions are ignored (`None`).
    pub fn send(&mut self, text: &str) -> Option<String> {
        if self.state != SessionState::Open {
            return None;
        }
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        let reply = self.selector.respond(text, &mut self.context, &mut self.rng);
        self.messages.push(ChatMessage::bot(reply.clone()));
        Some(reply)
    }

    /// How long the typing indicator shows before a reply: 1000 to 2000 ms.
    pub fn typing_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.gen_range(1000..2000))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Persona;
    use crate::knowledge::KnowledgeBase;

    fn session() -> ChatSession {
        let kb = Arc::new(KnowledgeBase::builtin("Ada"));
        let selector = Arc::new(ResponseSelector::new(kb, Persona::new("Jarvis", "Ada")));
        ChatSession::with_seed(selector, 1)
    }

    #[test]
    fn test_starts_closed_and_ignores_input() {
        let mut s = session();
        assert_eq!(s.state(), SessionState::Closed);
        assert_eq!(s.send("hello"), None);
        assert!(s.messages().is_empty());
    }

    #[test]
    fn test_open_greets_and_send_appends_both_lines() {
        let mut s = session();
        let greeting = s.open_at(14);
        assert_eq!(greeting, "Good afternoon! I'm Jarvis, Ada's digital assistant.");
        let reply = s.send("  Tell me about Python  ").unwrap();
        assert!(reply.contains("Python"));
        let roles: Vec<MessageRole> = s.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::Bot, MessageRole::User, MessageRole::Bot]);
        assert_eq!(s.messages()[1].text, "Tell me about Python");
        assert_eq!(s.context().question_count, 1);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut s = session();
        s.open_at(9);
        assert_eq!(s.send("   "), None);
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.context().question_count, 0);
    }

    #[test]
    fn test_reopen_resets_context_and_transcript() {
        let mut s = session();
        s.open_at(9);
        s.send("python and sql").unwrap();
        s.close();
        assert_eq!(s.send("more"), None);
        assert_eq!(s.messages().len(), 3);

        s.open_at(20);
        assert_eq!(s.context(), &ConversationContext::default());
        assert_eq!(s.messages().len(), 1);
        assert!(s.messages()[0].text.starts_with("Good evening"));
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut s = session();
        assert!(s.toggle().is_some());
        assert!(s.is_open());
        assert!(s.toggle().is_none());
        assert!(!s.is_open());
    }

    #[test]
    fn test_typing_delay_range() {
        let mut s = session();
        for _ in 0..50 {
            let d = s.typing_delay();
            assert!(d >= Duration::from_millis(1000) && d < Duration::from_millis(2000));
        }
    }
}
