//! Shared types used across the folio crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pages scanned by the cross-page search when the config does not list any.
pub const DEFAULT_SEARCH_PAGES: [&str; 5] = [
    "index.html",
    "about.html",
    "skills.html",
    "projects.html",
    "contact.html",
];

/// Per-request context passed to every skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Optional correlation id for request tracing.
    #[serde(default)]
    pub correlation_id: Option<String>,
}

/// One submitted form field. `required` mirrors the markup's `required` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFieldInput {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
}

/// High-level goals the orchestrator can delegate to skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Goal {
    /// Execute a named skill with optional payload.
    ExecuteSkill { name: String, payload: Option<serde_json::Value> },
    /// Search every configured site page for a term.
    SiteSearch { term: String },
    /// Validate and forward the contact form.
    SubmitContact { fields: Vec<FormFieldInput> },
    /// Filter the project cards by a tech tag; `None` or `"all"` shows everything.
    FilterProjects { skill: Option<String> },
}

impl Goal {
    /// Short label used in logs and responses.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::ExecuteSkill { .. } => "ExecuteSkill",
            Goal::SiteSearch { .. } => "SiteSearch",
            Goal::SubmitContact { .. } => "SubmitContact",
            Goal::FilterProjects { .. } => "FilterProjects",
        }
    }
}

/// Global application configuration (gateway, site and assistant identity). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by `/v1/status`.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Base directory for Sled DBs (the preference store path is derived from this).
    pub storage_path: String,
    /// Origin the site pages are fetched from by the cross-page search.
    pub site_base_url: String,
    /// Page paths, relative to `site_base_url`, scanned by the search.
    #[serde(default = "default_search_pages")]
    pub search_pages: Vec<String>,
    /// Page holding the project grid.
    #[serde(default = "default_projects_page")]
    pub projects_page: String,
    /// Form backend the contact form posts to. Submissions fail when unset.
    #[serde(default)]
    pub contact_endpoint: Option<String>,

    /// If true, the gateway serves the static site from `site_root`. (Config alias: `ui_enabled`)
    #[serde(default, alias = "ui_enabled")]
    pub frontend_enabled: bool,
    #[serde(default = "default_site_root")]
    pub site_root: String,

    /// Optional JSON rule file replacing the built-in knowledge base.
    #[serde(default)]
    pub knowledge_path: Option<String>,
    pub assistant_name: String,
    pub owner_name: String,
    /// Delay chat replies by a random 1-2 s, like the typing indicator on the site.
    #[serde(default)]
    pub simulate_typing: bool,
}

fn default_search_pages() -> Vec<String> {
    DEFAULT_SEARCH_PAGES.iter().map(|p| p.to_string()).collect()
}

fn default_projects_page() -> String {
    "projects.html".to_string()
}

fn default_site_root() -> String {
    "site".to_string()
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `FOLIO_CONFIG` path > `config/gateway.toml` > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Folio Gateway")?
            .set_default("port", 8002_i64)?
            .set_default("storage_path", "./data")?
            .set_default("site_base_url", "http://127.0.0.1:8002/")?
            .set_default("frontend_enabled", false)?
            .set_default("assistant_name", "Jarvis")?
            .set_default("owner_name", "Vathsaran")?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// Directory of the Sled preference store.
    pub fn prefs_path(&self) -> std::path::PathBuf {
        Path::new(&self.storage_path).join("folio_prefs")
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: "Folio Gateway".to_string(),
            port: 8002,
            storage_path: "./data".to_string(),
            site_base_url: "http://127.0.0.1:8002/".to_string(),
            search_pages: default_search_pages(),
            projects_page: default_projects_page(),
            contact_endpoint: None,
            frontend_enabled: false,
            site_root: default_site_root(),
            knowledge_path: None,
            assistant_name: "Jarvis".to_string(),
            owner_name: "Vathsaran".to_string(),
            simulate_typing: false,
        }
    }
}
