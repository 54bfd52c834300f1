//! Goal dispatch: routes site operations to the registered skills.

use crate::shared::{Goal, RequestContext};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("unknown skill: {0}")]
struct UnknownSkill(String);

/// Trait implemented by every site capability (search, contact forwarding, project filter).
#[async_trait::async_trait]
pub trait AgentSkill: Send + Sync {
    /// Unique skill name for routing.
    fn name(&self) -> &str;

    /// Executes the skill with the given context and optional payload.
    async fn execute(
        &self,
        ctx: &RequestContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>>;
}

/// Registry of skills that can be dispatched by name.
pub struct SkillRegistry {
    skills: Vec<Arc<dyn AgentSkill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self { skills: Vec::new() }
    }

    pub fn register(&mut self, skill: Arc<dyn AgentSkill>) {
        self.skills.push(skill);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AgentSkill>> {
        self.skills.iter().find(|s| s.name() == name).cloned()
    }

    /// Names of all registered skills, in registration order.
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name().to_string()).collect()
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatches goals to skills.
pub struct Orchestrator {
    registry: Arc<SkillRegistry>,
}

impl Orchestrator {
    pub fn new(registry: Arc<SkillRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    fn skill(&self, name: &str) -> Result<Arc<dyn AgentSkill>, UnknownSkill> {
        self.registry.get(name).ok_or_else(|| UnknownSkill(name.to_string()))
    }

    /// Dispatches a goal to its skill. Unregistered skills yield an `unknown skill` error.
    pub async fn dispatch(
        &self,
        ctx: &RequestContext,
        goal: Goal,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!(target: "folio::gateway", goal = goal.label(), "Dispatching goal");
        match goal {
            Goal::ExecuteSkill { name, payload } => self.skill(&name)?.execute(ctx, payload).await,
            Goal::SiteSearch { term } => {
                let payload = serde_json::json!({ "term": term });
                self.skill("SiteSearch")?.execute(ctx, Some(payload)).await
            }
            Goal::SubmitContact { fields } => {
                let payload = serde_json::json!({ "fields": fields });
                self.skill("ContactSubmit")?.execute(ctx, Some(payload)).await
            }
            Goal::FilterProjects { skill } => {
                let payload = serde_json::json!({ "skill": skill });
                self.skill("ProjectFilter")?.execute(ctx, Some(payload)).await
            }
        }
    }
}
