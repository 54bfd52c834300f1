//! Axum-based gateway for the portfolio site: chat assistant, cross-page search, contact
//! form, theme preference and project filter. Config-driven via CoreConfig.

mod handlers;

use axum::http::{HeaderValue, Method};
use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use folio_core::{
    CoreConfig, Goal, KnowledgeBase, Orchestrator, Persona, PreferenceStore, RequestContext, ResponseSelector,
    SessionRegistry, SkillRegistry,
};
use folio_skills::{ContactSubmit, ProjectFilterSkill, SiteSearch};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) orchestrator: Arc<Orchestrator>,
    pub(crate) sessions: Arc<SessionRegistry>,
    pub(crate) prefs: Arc<PreferenceStore>,
}

/// Built-in rules, or the JSON rule file named by `knowledge_path`.
fn load_knowledge(config: &CoreConfig) -> Result<KnowledgeBase, BoxError> {
    match config.knowledge_path.as_deref() {
        Some(path) => Ok(KnowledgeBase::from_json_path(path)?),
        None => Ok(KnowledgeBase::builtin(&config.owner_name)),
    }
}

/// Wires skills, chat sessions and the preference store from config.
fn build_state(config: CoreConfig) -> Result<AppState, BoxError> {
    let knowledge = Arc::new(load_knowledge(&config)?);
    tracing::info!(target: "folio::gateway", rules = knowledge.len(), "Knowledge base loaded");

    let persona = Persona::new(config.assistant_name.clone(), config.owner_name.clone());
    let selector = Arc::new(ResponseSelector::new(knowledge, persona));
    let sessions = Arc::new(SessionRegistry::new(selector));

    let prefs = Arc::new(PreferenceStore::open_path(config.prefs_path())?);

    let mut registry = SkillRegistry::new();
    registry.register(Arc::new(SiteSearch::from_config(&config)?));
    registry.register(Arc::new(ContactSubmit::from_config(&config)));
    registry.register(Arc::new(ProjectFilterSkill::from_config(&config)?));
    let orchestrator = Arc::new(Orchestrator::new(Arc::new(registry)));

    Ok(AppState {
        config: Arc::new(config),
        orchestrator,
        sessions,
        prefs,
    })
}

/// Pre-flight check: config, rule set, preference store and port.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking knowledge base... ");
    let knowledge = load_knowledge(&config).map_err(|e| format!("Knowledge base invalid: {}", e))?;
    println!("OK ({} rules)", knowledge.len());

    print!("Checking folio_prefs... ");
    let prefs = PreferenceStore::open_path(config.prefs_path())
        .map_err(|e| format!("folio_prefs LOCKED or inaccessible: {}", e))?;
    prefs
        .load_theme()
        .map_err(|e| format!("folio_prefs unreadable: {}", e))?;
    drop(prefs);
    println!("OK");

    print!("Checking site base url... ");
    SiteSearch::from_config(&config).map_err(|e| e.to_string())?;
    println!("OK ({})", config.site_base_url);

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\nSUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[folio-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = serve().await {
        tracing::error!(target: "folio::gateway", error = %e, "Gateway stopped");
        std::process::exit(1);
    }
}

async fn serve() -> Result<(), BoxError> {
    let config = CoreConfig::load()?;
    let state = build_state(config)?;

    let port = state.config.port;
    let app_name = state.config.app_name.clone();
    let app = build_app(state);

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!(target: "folio::gateway", "{} listening on {}", app_name, addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

/// True for loopback origins and the configured site origin.
fn origin_allowed(origin: &HeaderValue, site_origin: &str) -> bool {
    let s = origin.to_str().unwrap_or("");
    if !site_origin.is_empty() && s == site_origin {
        return true;
    }
    let host = s
        .split("://")
        .nth(1)
        .and_then(|rest| rest.split(':').next())
        .unwrap_or("");
    host == "localhost" || host == "127.0.0.1"
}

fn build_app(state: AppState) -> Router {
    let frontend_enabled = state.config.frontend_enabled;
    let site_root = state.config.site_root.clone();
    let site_origin = state.config.site_base_url.trim_end_matches('/').to_string();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin_allowed(origin, &site_origin)
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any);

    let mut app = Router::new()
        .route("/v1/status", get(status))
        .route("/v1/execute", post(execute))
        .route("/api/v1/health", get(health))
        .route("/api/v1/chat/sessions", post(handlers::chat::open_session))
        .route(
            "/api/v1/chat/sessions/:id/messages",
            post(handlers::chat::send_message).get(handlers::chat::list_messages),
        )
        .route("/api/v1/chat/sessions/:id/close", post(handlers::chat::close_session))
        .route("/api/v1/search", get(handlers::site::search))
        .route("/api/v1/contact", post(handlers::site::contact))
        .route("/api/v1/theme", get(handlers::site::get_theme))
        .route("/api/v1/theme/toggle", post(handlers::site::toggle_theme))
        .route("/api/v1/projects/filter", get(handlers::site::filter_projects))
        .with_state(state);

    if frontend_enabled {
        // Static pages (index.html, about.html, ...) are served from the site root.
        app = app.fallback_service(ServeDir::new(site_root));
    }

    app.layer(cors)
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity, assistant persona and registered skills.
async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "assistant_name": state.config.assistant_name,
        "owner_name": state.config.owner_name,
        "skills": state.orchestrator.registry().skill_names(),
        "chat_sessions": state.sessions.len(),
    }))
}

#[derive(serde::Deserialize)]
struct ExecuteRequest {
    correlation_id: Option<String>,
    goal: Goal,
}

/// POST /v1/execute – dispatches any goal through the orchestrator.
async fn execute(State(state): State<AppState>, Json(req): Json<ExecuteRequest>) -> Json<serde_json::Value> {
    tracing::info!(target: "folio::gateway", goal = req.goal.label(), "Skill execution started");
    let ctx = RequestContext {
        correlation_id: req.correlation_id,
    };
    match state.orchestrator.dispatch(&ctx, req.goal).await {
        Ok(result) => Json(result),
        Err(e) => Json(serde_json::json!({
            "error": e.to_string(),
            "status": "error"
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(dir: &tempfile::TempDir) -> CoreConfig {
        CoreConfig {
            app_name: "Test Folio".to_string(),
            port: 8002,
            storage_path: dir.path().to_string_lossy().into_owned(),
            owner_name: "Ada".to_string(),
            ..CoreConfig::default()
        }
    }

    fn app_for(config: CoreConfig) -> Router {
        build_app(build_state(config).unwrap())
    }

    async fn call(app: Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));
        let (code, json) = call(app.clone(), "GET", "/api/v1/health", None).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(json["status"], "ok");

        let (_, json) = call(app, "GET", "/v1/status", None).await;
        assert_eq!(json["app_name"], "Test Folio");
        assert_eq!(json["owner_name"], "Ada");
        assert_eq!(json["skills"], serde_json::json!(["SiteSearch", "ContactSubmit", "ProjectFilter"]));
    }

    #[tokio::test]
    async fn test_chat_session_flow() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));

        let (_, opened) = call(app.clone(), "POST", "/api/v1/chat/sessions", None).await;
        let id = opened["session_id"].as_str().unwrap().to_string();
        assert!(opened["greeting"].as_str().unwrap().contains("I'm Jarvis, Ada's digital assistant."));

        let uri = format!("/api/v1/chat/sessions/{}/messages", id);
        let (code, reply) = call(app.clone(), "POST", &uri, Some(serde_json::json!({ "text": "Do you use Excel?" }))).await;
        assert_eq!(code, StatusCode::OK);
        assert!(reply["reply"].as_str().unwrap().contains("Excel"));

        let (_, transcript) = call(app.clone(), "GET", &uri, None).await;
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 3);
        assert_eq!(transcript["messages"][1]["role"], "user");

        let close_uri = format!("/api/v1/chat/sessions/{}/close", id);
        let (_, closed) = call(app.clone(), "POST", &close_uri, None).await;
        assert_eq!(closed["state"], "closed");
        let (code, _) = call(app, "POST", &uri, Some(serde_json::json!({ "text": "hello?" }))).await;
        assert_eq!(code, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_closed_sessions_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));

        for _ in 0..50 {
            let (_, opened) = call(app.clone(), "POST", "/api/v1/chat/sessions", None).await;
            let id = opened["session_id"].as_str().unwrap().to_string();
            let close_uri = format!("/api/v1/chat/sessions/{}/close", id);
            let (code, _) = call(app.clone(), "POST", &close_uri, None).await;
            assert_eq!(code, StatusCode::OK);
        }

        let (_, status) = call(app.clone(), "GET", "/v1/status", None).await;
        assert_eq!(status["chat_sessions"], 0);

        let (_, opened) = call(app.clone(), "POST", "/api/v1/chat/sessions", None).await;
        let id = opened["session_id"].as_str().unwrap().to_string();
        let close_uri = format!("/api/v1/chat/sessions/{}/close", id);
        call(app.clone(), "POST", &close_uri, None).await;
        let (code, _) = call(app, "POST", &close_uri, None).await;
        assert_eq!(code, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));
        let uri = format!("/api/v1/chat/sessions/{}/messages", uuid::Uuid::new_v4());
        let (code, _) = call(app, "GET", &uri, None).await;
        assert_eq!(code, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_theme_resolution_and_toggle_persist() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));

        let (_, theme) = call(app.clone(), "GET", "/api/v1/theme?prefers_dark=false", None).await;
        assert!(theme["theme"].is_null());
        assert_eq!(theme["effective"], "dark");

        let (_, theme) = call(app.clone(), "GET", "/api/v1/theme?prefers_dark=true", None).await;
        assert_eq!(theme["theme"], "dark");

        let (_, toggled) = call(app.clone(), "POST", "/api/v1/theme/toggle", None).await;
        assert_eq!(toggled["theme"], "light");
        assert_eq!(toggled["icon"], "fas fa-sun");

        let (_, theme) = call(app, "GET", "/api/v1/theme?prefers_dark=true", None).await;
        assert_eq!(theme["saved"], "light");
        assert_eq!(theme["theme"], "light");
    }

    #[tokio::test]
    async fn test_search_and_project_filter_read_site_pages() {
        let server = MockServer::start().await;
        let projects = r#"<main>
            <div class="project-card" id="leave"><h3>Leave Management</h3><span class="tech-tag">SQL</span></div>
            <div class="project-card" id="vortixa"><h3>Vortixa</h3><span class="tech-tag">HTML</span></div>
        </main>"#;
        Mock::given(method("GET"))
            .and(path("/projects.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(projects))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(&dir);
        config.site_base_url = server.uri();
        let app = app_for(config);

        let (_, found) = call(app.clone(), "GET", "/api/v1/search?q=leave", None).await;
        assert_eq!(found["status"], "ok");
        assert_eq!(found["suggestions"], serde_json::json!(["leave management"]));
        assert_eq!(found["results"][0]["anchor"], "leave");
        assert_eq!(found["results"].as_array().unwrap().len(), 1);

        let (_, filtered) = call(app, "GET", "/api/v1/projects/filter?skill=HTML", None).await;
        assert_eq!(filtered["visibility"], serde_json::json!([false, true]));
        assert_eq!(filtered["buttons"], serde_json::json!(["All", "SQL", "HTML"]));
    }

    #[tokio::test]
    async fn test_contact_validation_blocks_submit() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));
        let body = serde_json::json!({ "fields": [
            { "name": "name", "value": "", "required": true },
            { "name": "message", "value": "hi", "required": true }
        ]});
        let (_, out) = call(app, "POST", "/api/v1/contact", Some(body)).await;
        assert_eq!(out["status"], "invalid");
        assert_eq!(out["errors"][0]["message"], "name is required");
    }

    #[tokio::test]
    async fn test_execute_unknown_skill() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(test_config(&dir));
        let body = serde_json::json!({ "goal": { "ExecuteSkill": { "name": "Nope", "payload": null } } });
        let (_, out) = call(app, "POST", "/v1/execute", Some(body)).await;
        assert_eq!(out["status"], "error");
        assert_eq!(out["error"], "unknown skill: Nope");
    }

    #[tokio::test]
    async fn test_static_site_served_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let site = dir.path().join("site");
        std::fs::create_dir_all(&site).unwrap();
        std::fs::write(site.join("index.html"), "<title>Portfolio</title>").unwrap();

        let mut config = test_config(&dir);
        config.frontend_enabled = true;
        config.site_root = site.to_string_lossy().into_owned();
        let app = app_for(config);

        let req = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("Portfolio"));
    }

    #[test]
    fn test_cors_origins() {
        let site = "https://folio.example";
        assert!(origin_allowed(&HeaderValue::from_static("http://localhost:3000"), site));
        assert!(origin_allowed(&HeaderValue::from_static("http://127.0.0.1:8002"), site));
        assert!(origin_allowed(&HeaderValue::from_static("https://folio.example"), site));
        assert!(!origin_allowed(&HeaderValue::from_static("https://evil.example"), site));
    }
}
