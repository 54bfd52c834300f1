//! folio-core: portfolio site core library (knowledge base, chat assistant, skill orchestration,
//! theme preference and hero slider state).
//!
//! Network-facing skills live in `folio-skills`; the HTTP surface lives in the gateway add-on.
//!
//! The slider, typing timeline and viewport helpers (`HeroSlider`, `SlideTimer`,
//! `typing_schedule`, `revealed`, `scroll_to_top_visible`) have no gateway route. They are
//! library API for a front-end consumer that drives its own timers and scroll events.

mod chat;
mod error;
mod knowledge;
mod orchestrator;
mod shared;
mod site;

pub use error::FolioError;

// Shared configuration and goal types
pub use shared::{CoreConfig, FormFieldInput, Goal, RequestContext, DEFAULT_SEARCH_PAGES};

// Knowledge base
pub use knowledge::{KnowledgeBase, KnowledgeEntry, DEFAULT_KEYWORD};

// Chat assistant
pub use chat::{
    detect_interest, greeting_for_hour, is_greeting, ChatMessage, ChatSession, ConversationContext,
    InterestArea, MessageRole, Persona, ResponseSelector, SessionRegistry, SessionState,
    INTEREST_AREAS, MAX_TOPICS,
};

// Skill dispatch
pub use orchestrator::{AgentSkill, Orchestrator, SkillRegistry};

// Client-side site state
pub use site::{
    effective_theme, is_in_viewport, resolve_theme, revealed, scroll_to_top_visible, typing_schedule,
    FilterSelection, HeroSlider, PreferenceStore, ProjectCard, ProjectFilter, Rect, SlideTimer, Theme,
    TypingFrame, TypingTarget, Viewport, CHAR_INTERVAL_MS, PARAGRAPH_DELAY_MS, SLIDE_INTERVAL_MS,
};
