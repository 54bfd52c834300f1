//! Site skills that talk to the network: cross-page search, contact form submission and
//! project filtering.

pub use folio_core::{AgentSkill, SkillRegistry};

mod contact;
mod debounce;
mod pages;
mod projects;
mod search;
mod snippet;

pub use contact::{ContactClient, ContactForm, ContactSubmit, FieldError, FormFeedback, FormField, SubmitError};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
pub use pages::{PageError, SitePages};
pub use projects::{parse_project_cards, ProjectFilterSkill};
pub use search::{suggestions, SearchOutcome, SearchResult, SiteSearch};
pub use snippet::{get_snippet, SNIPPET_LENGTH};
