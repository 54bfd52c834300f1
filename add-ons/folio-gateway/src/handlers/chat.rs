//! Chat widget endpoints: open a session, exchange messages, close it.
//!
//! Sessions live in memory only, from open until close.

use crate::AppState;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub(crate) struct SendRequest {
    text: String,
}

/// POST /api/v1/chat/sessions – opens a session and returns the greeting.
pub(crate) async fn open_session(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (id, greeting) = state.sessions.open();
    Json(serde_json::json!({
        "session_id": id,
        "state": "open",
        "greeting": greeting,
    }))
}

/// POST /api/v1/chat/sessions/:id/messages – one visitor turn.
pub(crate) async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendRequest>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let open = state
        .sessions
        .with_session(&id, |s| s.is_open())
        .ok_or(StatusCode::NOT_FOUND)?;

    // The session lock is released before sleeping.
    if open && state.config.simulate_typing {
        if let Some(delay) = state.sessions.with_session(&id, |s| s.typing_delay()) {
            tokio::time::sleep(delay).await;
        }
    }

    match state.sessions.send(&id, &req.text) {
        Some(reply) => {
            tracing::debug!(target: "folio::gateway", session_id = %id, chars = req.text.len(), "Chat message answered");
            Ok(Json(serde_json::json!({ "status": "ok", "reply": reply })))
        }
        None => Ok(Json(serde_json::json!({ "status": "ignored" }))),
    }
}

/// GET /api/v1/chat/sessions/:id/messages – the visible transcript.
pub(crate) async fn list_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let (open, messages) = state
        .sessions
        .with_session(&id, |s| (s.is_open(), s.messages().to_vec()))
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(serde_json::json!({
        "session_id": id,
        "state": if open { "open" } else { "closed" },
        "messages": messages,
    })))
}

/// POST /api/v1/chat/sessions/:id/close – closes and drops the session; the next
/// open starts a new one.
pub(crate) async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if !state.sessions.close(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    state.sessions.remove(&id);
    Ok(Json(serde_json::json!({ "session_id": id, "state": "closed" })))
}
