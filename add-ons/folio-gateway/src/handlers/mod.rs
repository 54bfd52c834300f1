//! Route handlers grouped by concern. Shared state lives in `main.rs`.

pub(crate) mod chat;
pub(crate) mod site;
