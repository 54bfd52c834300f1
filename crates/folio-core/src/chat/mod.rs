//! Rule-based site assistant.
//!
//! `ResponseSelector` picks one canned answer per turn from the [`KnowledgeBase`](crate::KnowledgeBase),
//! threading an explicit [`ConversationContext`] through every call. `ChatSession` wraps the
//! selector in the open/close lifecycle of the chat widget and `SessionRegistry` keeps one
//! session per visitor.

mod context;
mod interest;
mod persona;
mod registry;
mod selector;
mod session;

pub use context::{ConversationContext, MAX_TOPICS};
pub use interest::{detect_interest, is_greeting, InterestArea, INTEREST_AREAS};
pub use persona::{greeting_for_hour, Persona};
pub use registry::SessionRegistry;
pub use selector::ResponseSelector;
pub use session::{ChatMessage, ChatSession, MessageRole, SessionState};
