//! Site endpoints: search, contact form, theme preference and project filter.

use crate::AppState;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use folio_core::{effective_theme, resolve_theme, FormFieldInput, Goal, RequestContext};

#[derive(serde::Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(serde::Deserialize)]
pub(crate) struct ContactRequest {
    fields: Vec<FormFieldInput>,
}

#[derive(serde::Deserialize)]
pub(crate) struct ThemeQuery {
    #[serde(default)]
    prefers_dark: bool,
}

#[derive(serde::Deserialize)]
pub(crate) struct ProjectsQuery {
    skill: Option<String>,
}

async fn dispatch(state: &AppState, goal: Goal) -> Json<serde_json::Value> {
    let label = goal.label();
    match state.orchestrator.dispatch(&RequestContext::default(), goal).await {
        Ok(result) => Json(result),
        Err(e) => {
            tracing::warn!(target: "folio::gateway", goal = label, error = %e, "Goal failed");
            Json(serde_json::json!({
                "error": e.to_string(),
                "status": "error"
            }))
        }
    }
}

/// GET /api/v1/search?q= – suggestions plus matches from every site page.
pub(crate) async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Json<serde_json::Value> {
    dispatch(&state, Goal::SiteSearch { term: query.q }).await
}

/// POST /api/v1/contact – validates and forwards the contact form.
pub(crate) async fn contact(State(state): State<AppState>, Json(req): Json<ContactRequest>) -> Json<serde_json::Value> {
    dispatch(&state, Goal::SubmitContact { fields: req.fields }).await
}

/// GET /api/v1/projects/filter?skill=
pub(crate) async fn filter_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Json<serde_json::Value> {
    dispatch(&state, Goal::FilterProjects { skill: query.skill }).await
}

/// GET /api/v1/theme?prefers_dark= – theme to apply on page load.
pub(crate) async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let saved = state.prefs.load_theme().map_err(|e| {
        tracing::error!(target: "folio::prefs", error = %e, "Theme preference unreadable");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let resolved = resolve_theme(saved, query.prefers_dark);
    let effective = effective_theme(resolved);
    Ok(Json(serde_json::json!({
        "saved": saved,
        "theme": resolved,
        "effective": effective,
        "icon": effective.icon_class(),
    })))
}

/// POST /api/v1/theme/toggle?prefers_dark= – flips the current theme and persists it.
pub(crate) async fn toggle_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let toggled = state
        .prefs
        .load_theme()
        .map(|saved| resolve_theme(saved, query.prefers_dark))
        .and_then(|current| state.prefs.toggle(current))
        .map_err(|e| {
            tracing::error!(target: "folio::prefs", error = %e, "Theme preference not saved");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(serde_json::json!({
        "theme": toggled,
        "icon": toggled.icon_class(),
    })))
}
