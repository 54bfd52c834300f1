//! Cross-page site search: suggestions from a fixed term list plus matches scraped from
//! every configured page.

use crate::debounce::Debouncer;
use crate::pages::{compile, element_id, text_content, PageError, SitePages};
use crate::snippet::{get_snippet, SNIPPET_LENGTH};
use folio_core::{AgentSkill, CoreConfig, RequestContext};
use futures_util::future::join_all;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

const SKILL_NAME: &str = "SiteSearch";

/// Terms offered as suggestions while typing.
const SUGGESTION_TERMS: &[&str] = &[
    "about",
    "skills",
    "projects",
    "contact",
    "portfolio",
    "data analytics",
    "graphic design",
    "vathsaran",
    "yasotharan",
    "leave management",
    "colonist management",
    "vortixa website",
    "data visualization",
    "e-commerce analytics",
    "brand identity",
    "adobe photoshop",
    "adobe illustrator",
    "adobe indesign",
    "adobe premiere pro",
    "adobe after effects",
    "adobe animate",
    "c#",
    "python",
    "sql",
    "html",
    "css",
    "javascript",
    "statistical analysis",
    "machine learning",
    "project management",
    "user interface design",
    "logo design",
];

/// Suggestion terms containing `term` (case-insensitive). Empty for an empty term.
pub fn suggestions(term: &str) -> Vec<String> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    SUGGESTION_TERMS
        .iter()
        .filter(|t| t.to_lowercase().contains(&needle))
        .map(|t| t.to_string())
        .collect()
}

/// One hit: `page#anchor` links to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub page: String,
    pub title: String,
    pub snippet: String,
    pub anchor: String,
}

/// Everything the search dropdown shows for one term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub term: String,
    pub suggestions: Vec<String>,
    pub results: Vec<SearchResult>,
}

impl SearchOutcome {
    /// Dropdown list items. Empty when there is nothing to show (dropdown hidden).
    pub fn render_html(&self) -> String {
        let mut content = String::new();
        if self.term.is_empty() {
            return content;
        }
        for s in &self.suggestions {
            content.push_str(&format!("<li class=\"suggestion\">{}</li>", s));
        }
        if self.results.is_empty() {
            content.push_str("<li class=\"no-results\">No results found.</li>");
        } else {
            content.push_str("<li class=\"search-results-header\">Search Results:</li>");
            for r in &self.results {
                content.push_str(&format!(
                    "<li class=\"search-result\"><a href=\"{}#{}\">{}</a><p>{}</p></li>",
                    r.page, r.anchor, r.title, r.snippet
                ));
            }
        }
        content
    }
}

/// Compiled selectors for the searchable parts of a page.
#[derive(Debug, Clone)]
struct PageSelectors {
    main: Selector,
    role_main: Selector,
    section: Selector,
    section_heading: Selector,
    project_card: Selector,
    card_heading: Selector,
    skill_item: Selector,
    skill_name: Selector,
}

impl PageSelectors {
    fn new() -> Result<Self, PageError> {
        Ok(Self {
            main: compile("main")?,
            role_main: compile("[role=\"main\"]")?,
            section: compile(".section")?,
            section_heading: compile("h2, h3")?,
            project_card: compile(".project-card")?,
            card_heading: compile("h3")?,
            skill_item: compile(".skill-item")?,
            skill_name: compile("h4")?,
        })
    }
}

/// Searches the site's own pages. Pages are fetched concurrently; a page that fails
/// contributes no results.
pub struct SiteSearch {
    pages: SitePages,
    page_list: Vec<String>,
    selectors: PageSelectors,
}

impl SiteSearch {
    pub fn new(base_url: &str, page_list: Vec<String>) -> Result<Self, PageError> {
        Ok(Self {
            pages: SitePages::new(base_url)?,
            page_list,
            selectors: PageSelectors::new()?,
        })
    }

    pub fn from_config(config: &CoreConfig) -> Result<Self, PageError> {
        Self::new(&config.site_base_url, config.search_pages.clone())
    }

    /// Suggestions plus page matches. An empty term yields an empty outcome without fetching.
    pub async fn search(&self, term: &str) -> SearchOutcome {
        if term.is_empty() {
            return SearchOutcome::default();
        }
        SearchOutcome {
            term: term.to_string(),
            suggestions: suggestions(term),
            results: self.perform_search(term).await,
        }
    }

    /// Runs [`search`](Self::search) only if no newer call arrived on `debouncer` meanwhile.
    pub async fn search_debounced(&self, debouncer: &Debouncer, term: &str) -> Option<SearchOutcome> {
        if !debouncer.settle().await {
            return None;
        }
        Some(self.search(term).await)
    }

    /// Matches across every configured page, in page order.
    pub async fn perform_search(&self, term: &str) -> Vec<SearchResult> {
        if term.is_empty() {
            return Vec::new();
        }
        let fetches = self.page_list.iter().map(|page| self.pages.fetch(page));
        let bodies = join_all(fetches).await;

        let mut results = Vec::new();
        for (page, body) in self.page_list.iter().zip(bodies) {
            match body {
                Ok(html) => results.extend(self.extract_matches(page, &html, term)),
                Err(e) => {
                    tracing::warn!(target: "folio::search", page = %page, error = %e, "Error searching page");
                }
            }
        }
        tracing::debug!(target: "folio::search", term = term, hits = results.len(), "Search complete");
        results
    }

    /// Matches inside one page's `main` (or `[role="main"]`) element.
    pub fn extract_matches(&self, page: &str, html: &str, term: &str) -> Vec<SearchResult> {
        let s = &self.selectors;
        let doc = Html::parse_document(html);
        let Some(main) = doc.select(&s.main).next().or_else(|| doc.select(&s.role_main).next()) else {
            return Vec::new();
        };
        let needle = term.to_lowercase();
        let mut results = Vec::new();

        for (index, section) in main.select(&s.section).enumerate() {
            let content = text_content(&section);
            if !content.to_lowercase().contains(&needle) {
                continue;
            }
            let heading = section.select(&s.section_heading).next();
            let title = heading
                .as_ref()
                .map(|h| text_content(h).trim().to_string())
                .unwrap_or_else(|| "Section".to_string());
            let anchor = heading
                .as_ref()
                .and_then(element_id)
                .unwrap_or_else(|| format!("section-{}", index));
            results.push(SearchResult {
                page: page.to_string(),
                title,
                snippet: get_snippet(&content, term, SNIPPET_LENGTH),
                anchor,
            });
        }

        for (index, card) in main.select(&s.project_card).enumerate() {
            let content = text_content(&card);
            if !content.to_lowercase().contains(&needle) {
                continue;
            }
            let title = card
                .select(&s.card_heading)
                .next()
                .map(|h| text_content(&h).trim().to_string())
                .unwrap_or_else(|| "Project".to_string());
            results.push(SearchResult {
                page: page.to_string(),
                title,
                snippet: get_snippet(&content, term, SNIPPET_LENGTH),
                anchor: element_id(&card).unwrap_or_else(|| format!("project-{}", index)),
            });
        }

        for (index, item) in main.select(&s.skill_item).enumerate() {
            let Some(name) = item.select(&s.skill_name).next() else {
                continue;
            };
            let title = text_content(&name).trim().to_string();
            if !title.to_lowercase().contains(&needle) {
                continue;
            }
            results.push(SearchResult {
                page: page.to_string(),
                snippet: format!("Skill: {}", title),
                title,
                anchor: element_id(&item).unwrap_or_else(|| format!("skill-{}", index)),
            });
        }

        results
    }
}

#[async_trait::async_trait]
impl AgentSkill for SiteSearch {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    async fn execute(
        &self,
        _ctx: &RequestContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let term = payload
            .as_ref()
            .and_then(|p| p.get("term"))
            .and_then(|v| v.as_str())
            .ok_or("SiteSearch requires payload: { term: string }")?
            .to_string();

        let outcome = self.search(&term).await;
        Ok(serde_json::json!({
            "status": "ok",
            "skill": SKILL_NAME,
            "term": outcome.term,
            "suggestions": outcome.suggestions,
            "results": outcome.results,
            "html": outcome.render_html(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SKILLS_PAGE: &str = r#"<html><body><main>
        <div class="section"><h2 id="tools">Tools</h2><p>Daily work in Python and SQL.</p></div>
        <div class="section"><p>Python notebooks everywhere.</p></div>
        <div class="skill-item" id="py"><h4>Python</h4></div>
        <div class="skill-item"><h4>Photoshop</h4></div>
        <div class="skill-item"><h4>Python scripting</h4></div>
    </main></body></html>"#;

    const PROJECTS_PAGE: &str = r#"<html><body><div role="main">
        <div class="project-card" id="leave"><h3>Leave Management</h3><span class="tech-tag">C#</span><span class="tech-tag">SQL</span></div>
        <div class="project-card"><span class="tech-tag">Python</span></div>
    </div></body></html>"#;

    fn search() -> SiteSearch {
        SiteSearch::new("http://127.0.0.1:1/", vec![]).unwrap()
    }

    #[test]
    fn test_suggestions_filter() {
        assert_eq!(suggestions("PYTH"), vec!["python"]);
        let adobe = suggestions("adobe");
        assert_eq!(adobe.len(), 6);
        assert!(suggestions("").is_empty());
    }

    #[test]
    fn test_extract_sections_and_skills() {
        let hits = search().extract_matches("skills.html", SKILLS_PAGE, "python");
        let anchors: Vec<&str> = hits.iter().map(|h| h.anchor.as_str()).collect();
        assert_eq!(anchors, vec!["tools", "section-1", "py", "skill-2"]);
        assert_eq!(hits[0].title, "Tools");
        assert_eq!(hits[1].title, "Section");
        assert!(hits[0].snippet.contains("<mark>Python</mark>"));
        assert_eq!(hits[2].snippet, "Skill: Python");
        assert_eq!(hits[3].title, "Python scripting");
    }

    #[test]
    fn test_extract_project_cards_under_role_main() {
        let hits = search().extract_matches("projects.html", PROJECTS_PAGE, "sql");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Leave Management");
        assert_eq!(hits[0].anchor, "leave");

        let hits = search().extract_matches("projects.html", PROJECTS_PAGE, "python");
        assert_eq!(hits[0].title, "Project");
        assert_eq!(hits[0].anchor, "project-1");
    }

    #[test]
    fn test_page_without_main_has_no_hits() {
        let html = r#"<div class="section"><h2>Python</h2></div>"#;
        assert!(search().extract_matches("index.html", html, "python").is_empty());
    }

    #[tokio::test]
    async fn test_failing_page_does_not_abort_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skills.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SKILLS_PAGE))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/about.html"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let pages = vec!["about.html".to_string(), "skills.html".to_string(), "gone.html".to_string()];
        let search = SiteSearch::new(&server.uri(), pages).unwrap();
        let results = search.perform_search("python").await;
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.page == "skills.html"));
    }

    #[tokio::test]
    async fn test_debounced_burst_fetches_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skills.html"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SKILLS_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let search = SiteSearch::new(&server.uri(), vec!["skills.html".to_string()]).unwrap();
        let debouncer = Debouncer::new(std::time::Duration::from_millis(100));
        let (search, debouncer) = (&search, &debouncer);
        let keystroke = |delay_ms: u64, term: &'static str| async move {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            search.search_debounced(debouncer, term).await
        };

        let (first, second, last) = tokio::join!(keystroke(0, "py"), keystroke(10, "pyt"), keystroke(20, "python"));
        assert!(first.is_none());
        assert!(second.is_none());
        let last = last.unwrap();
        assert_eq!(last.term, "python");
        assert_eq!(last.results.len(), 4);
    }

    #[tokio::test]
    async fn test_all_pages_failing_renders_no_results() {
        let server = MockServer::start().await;
        let search = SiteSearch::new(&server.uri(), vec!["index.html".into(), "about.html".into()]).unwrap();
        let outcome = search.search("zzz").await;
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.render_html(), "<li class=\"no-results\">No results found.</li>");
    }

    #[test]
    fn test_render_with_results() {
        let outcome = SearchOutcome {
            term: "sql".into(),
            suggestions: vec!["sql".into()],
            results: vec![SearchResult {
                page: "projects.html".into(),
                title: "Leave Management".into(),
                snippet: "<mark>SQL</mark>".into(),
                anchor: "leave".into(),
            }],
        };
        let html = outcome.render_html();
        assert!(html.starts_with("<li class=\"suggestion\">sql</li><li class=\"search-results-header\">Search Results:</li>"));
        assert!(html.contains("<a href=\"projects.html#leave\">Leave Management</a>"));
        assert_eq!(SearchOutcome::default().render_html(), "");
    }

    #[tokio::test]
    async fn test_skill_requires_term() {
        let err = search().execute(&RequestContext::default(), None).await.unwrap_err();
        assert!(err.to_string().contains("term"));
    }
}
