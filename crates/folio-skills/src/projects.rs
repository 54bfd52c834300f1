//! Project grid scraping and tech-tag filtering.

use crate::pages::{compile, element_id, text_content, PageError, SitePages};
use folio_core::{AgentSkill, CoreConfig, FilterSelection, ProjectCard, ProjectFilter, RequestContext};
use scraper::{Html, Selector};

const SKILL_NAME: &str = "ProjectFilter";

/// Every `.project-card` on the page with its title, anchor and trimmed `.tech-tag` texts.
pub fn parse_project_cards(html: &str) -> Result<Vec<ProjectCard>, PageError> {
    let card_sel = compile(".project-card")?;
    let title_sel = compile("h3")?;
    let tag_sel: Selector = compile(".tech-tag")?;

    let doc = Html::parse_document(html);
    let cards = doc
        .select(&card_sel)
        .enumerate()
        .map(|(index, card)| ProjectCard {
            title: card
                .select(&title_sel)
                .next()
                .map(|h| text_content(&h).trim().to_string())
                .unwrap_or_else(|| "Project".to_string()),
            anchor: element_id(&card).unwrap_or_else(|| format!("project-{}", index)),
            tech_tags: card
                .select(&tag_sel)
                .map(|t| text_content(&t).trim().to_string())
                .collect(),
        })
        .collect();
    Ok(cards)
}

/// Fetches the projects page and applies a skill filter to its cards.
pub struct ProjectFilterSkill {
    pages: SitePages,
    projects_page: String,
}

impl ProjectFilterSkill {
    pub fn new(base_url: &str, projects_page: impl Into<String>) -> Result<Self, PageError> {
        Ok(Self {
            pages: SitePages::new(base_url)?,
            projects_page: projects_page.into(),
        })
    }

    pub fn from_config(config: &CoreConfig) -> Result<Self, PageError> {
        Self::new(&config.site_base_url, config.projects_page.clone())
    }

    pub async fn load_filter(&self) -> Result<ProjectFilter, PageError> {
        let html = self.pages.fetch(&self.projects_page).await?;
        Ok(ProjectFilter::from_cards(parse_project_cards(&html)?))
    }
}

#[async_trait::async_trait]
impl AgentSkill for ProjectFilterSkill {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    async fn execute(
        &self,
        _ctx: &RequestContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let skill = payload
            .as_ref()
            .and_then(|p| p.get("skill"))
            .and_then(|v| v.as_str());
        let selection = FilterSelection::from_param(skill);

        let filter = self.load_filter().await?;
        let buttons: Vec<String> = filter.buttons().iter().map(|b| b.label().to_string()).collect();
        Ok(serde_json::json!({
            "status": "ok",
            "skill": SKILL_NAME,
            "selection": selection.label(),
            "buttons": buttons,
            "visibility": filter.apply(&selection),
            "projects": filter.visible(&selection),
        }))
    }
}
