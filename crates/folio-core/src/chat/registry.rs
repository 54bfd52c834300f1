//! Concurrent map of live chat sessions keyed by id.

use super::selector::ResponseSelector;
use super::session::{ChatMessage, ChatSession};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// One [`ChatSession`] per visitor, sharing a single selector (and knowledge base).
pub struct SessionRegistry {
    selector: Arc<ResponseSelector>,
    sessions: DashMap<Uuid, ChatSession>,
}

impl SessionRegistry {
    pub fn new(selector: Arc<ResponseSelector>) -> Self {
        Self {
            selector,
            sessions: DashMap::new(),
        }
    }

    /// Creates and opens a session; returns its id and the greeting.
    pub fn open(&self) -> (Uuid, String) {
        let mut session = ChatSession::new(Arc::clone(&self.selector));
        let greeting = session.open();
        self.insert(session, greeting)
    }

    /// Same as [`open`](Self::open) with an explicit local hour.
    pub fn open_at(&self, hour: u32) -> (Uuid, String) {
        let mut session = ChatSession::new(Arc::clone(&self.selector));
        let greeting = session.open_at(hour);
        self.insert(session, greeting)
    }

    fn insert(&self, session: ChatSession, greeting: String) -> (Uuid, String) {
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        tracing::info!(target: "folio::chat", session_id = %id, "Chat session opened");
        (id, greeting)
    }

    /// Runs `f` with exclusive access to the session. `None` if the id is unknown.
    pub fn with_session<T>(&self, id: &Uuid, f: impl FnOnce(&mut ChatSession) -> T) -> Option<T> {
        self.sessions.get_mut(id).map(|mut entry| f(entry.value_mut()))
    }

    /// `None` for unknown ids, closed sessions and blank input.
    pub fn send(&self, id: &Uuid, text: &str) -> Option<String> {
        self.with_session(id, |s| s.send(text)).flatten()
    }

    /// Closes without dropping the transcript. Returns false for unknown ids.
    pub fn close(&self, id: &Uuid) -> bool {
        let closed = self.with_session(id, ChatSession::close).is_some();
        if closed {
            tracing::info!(target: "folio::chat", session_id = %id, "Chat session closed");
        }
        closed
    }

    pub fn messages(&self, id: &Uuid) -> Option<Vec<ChatMessage>> {
        self.with_session(id, |s| s.messages().to_vec())
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{MessageRole, Persona};
    use crate::knowledge::KnowledgeBase;

    fn registry() -> SessionRegistry {
        let kb = Arc::new(KnowledgeBase::builtin("Ada"));
        SessionRegistry::new(Arc::new(ResponseSelector::new(kb, Persona::default())))
    }

    #[test]
    fn test_sessions_are_independent() {
        let reg = registry();
        let (a, _) = reg.open_at(10);
        let (b, _) = reg.open_at(10);
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);

        reg.send(&a, "python please").unwrap();
        let qa = reg.with_session(&a, |s| s.context().question_count).unwrap();
        let qb = reg.with_session(&b, |s| s.context().question_count).unwrap();
        assert_eq!((qa, qb), (1, 0));
    }

    #[test]
    fn test_close_blocks_further_sends() {
        let reg = registry();
        let (id, greeting) = reg.open_at(8);
        assert!(greeting.starts_with("Good morning"));
        assert!(reg.close(&id));
        assert_eq!(reg.send(&id, "hello"), None);
        let messages = reg.messages(&id).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::Bot);
    }

    #[test]
    fn test_unknown_id() {
        let reg = registry();
        let id = Uuid::new_v4();
        assert_eq!(reg.send(&id, "hi"), None);
        assert!(!reg.close(&id));
        assert!(reg.messages(&id).is_none());
        assert!(!reg.remove(&id));
        assert!(reg.is_empty());
    }
}
