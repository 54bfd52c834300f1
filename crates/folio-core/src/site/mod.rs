//! Client-side page state that survives outside the DOM: theme preference, hero slider,
//! project filter and scroll visibility.

mod projects;
mod slider;
mod theme;
mod viewport;

pub use projects::{FilterSelection, ProjectCard, ProjectFilter};
pub use slider::{
    typing_schedule, HeroSlider, SlideTimer, TypingFrame, TypingTarget, CHAR_INTERVAL_MS,
    PARAGRAPH_DELAY_MS, SLIDE_INTERVAL_MS,
};
pub use theme::{effective_theme, resolve_theme, PreferenceStore, Theme};
pub use viewport::{is_in_viewport, revealed, scroll_to_top_visible, Rect, Viewport};
