//! Project grid filter by tech tag.

use serde::{Deserialize, Serialize};

/// One `.project-card` as scraped from the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub anchor: String,
    pub tech_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelection {
    All,
    Skill(String),
}

impl FilterSelection {
    /// `None`, blank and `"all"` select everything.
    pub fn from_param(skill: Option<&str>) -> Self {
        match skill.map(str::trim) {
            None | Some("") | Some("all") => FilterSelection::All,
            Some(s) => FilterSelection::Skill(s.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterSelection::All => "All",
            FilterSelection::Skill(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    cards: Vec<ProjectCard>,
    skills: Vec<String>,
}

impl ProjectFilter {
    /// Collects distinct trimmed tags in first-seen order.
    pub fn from_cards(cards: Vec<ProjectCard>) -> Self {
        let mut skills: Vec<String> = Vec::new();
        for tag in cards.iter().flat_map(|c| c.tech_tags.iter()) {
            let tag = tag.trim();
            if !tag.is_empty() && !skills.iter().any(|s| s == tag) {
                skills.push(tag.to_string());
            }
        }
        Self { cards, skills }
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Filter buttons: `All` then one per skill.
    pub fn buttons(&self) -> Vec<FilterSelection> {
        std::iter::once(FilterSelection::All)
            .chain(self.skills.iter().cloned().map(FilterSelection::Skill))
            .collect()
    }

    /// Visibility per card, in card order. Tags must equal the skill exactly.
    pub fn apply(&self, selection: &FilterSelection) -> Vec<bool> {
        self.cards
            .iter()
            .map(|card| match selection {
                FilterSelection::All => true,
                FilterSelection::Skill(skill) => card.tech_tags.iter().any(|t| t.trim() == skill),
            })
            .collect()
    }

    pub fn visible(&self, selection: &FilterSelection) -> Vec<&ProjectCard> {
        self.cards
            .iter()
            .zip(self.apply(selection))
            .filter_map(|(card, show)| show.then_some(card))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, tags: &[&str]) -> ProjectCard {
        ProjectCard {
            title: title.to_string(),
            anchor: title.to_lowercase(),
            tech_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn filter() -> ProjectFilter {
        ProjectFilter::from_cards(vec![
            card("Leave", &["C#", " SQL "]),
            card("Colonist", &["Python", "SQL"]),
            card("Vortixa", &["HTML", "CSS"]),
        ])
    }

    #[test]
    fn test_buttons_in_first_seen_order() {
        let labels: Vec<String> = filter().buttons().iter().map(|b| b.label().to_string()).collect();
        assert_eq!(labels, vec!["All", "C#", "SQL", "Python", "HTML", "CSS"]);
    }

    #[test]
    fn test_apply_exact_tag() {
        let f = filter();
        assert_eq!(f.apply(&FilterSelection::All), vec![true, true, true]);
        assert_eq!(f.apply(&FilterSelection::Skill("SQL".into())), vec![true, true, false]);
        assert_eq!(f.apply(&FilterSelection::Skill("sql".into())), vec![false, false, false]);
        let visible = f.visible(&FilterSelection::Skill("CSS".into()));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Vortixa");
    }

    #[test]
    fn test_selection_from_param() {
        assert_eq!(FilterSelection::from_param(None), FilterSelection::All);
        assert_eq!(FilterSelection::from_param(Some("all")), FilterSelection::All);
        assert_eq!(FilterSelection::from_param(Some(" Python ")), FilterSelection::Skill("Python".into()));
    }
}
