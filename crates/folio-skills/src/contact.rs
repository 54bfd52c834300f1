//! Contact form: required-field validation and submission to the form backend.

pub use folio_core::FormFieldInput as FormField;
use folio_core::{AgentSkill, CoreConfig, RequestContext};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SKILL_NAME: &str = "ContactSubmit";
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Inline error for one empty required field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{} required field(s) empty", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("no contact endpoint configured")]
    NoEndpoint,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
}

/// The three feedback states shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFeedback {
    Submitting,
    Success,
    Failure,
}

impl FormFeedback {
    pub fn message(&self) -> &'static str {
        match self {
            FormFeedback::Submitting => "Submitting your message...",
            FormFeedback::Success => "Thank you for your message. I will get back to you soon!",
            FormFeedback::Failure => "There was an error submitting your message. Please try again later.",
        }
    }

    /// CSS modifier on the feedback element.
    pub fn css_class(&self) -> &'static str {
        match self {
            FormFeedback::Submitting => "info",
            FormFeedback::Success => "success",
            FormFeedback::Failure => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Endpoint the form posts to.
    pub action: String,
    pub fields: Vec<FormField>,
}

impl ContactForm {
    pub fn new(action: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            action: action.into(),
            fields,
        }
    }

    /// Sets the value of the named field. Returns false if no such field exists.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// One error per required field whose trimmed value is empty, in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        self.fields
            .iter()
            .filter(|f| f.required && f.value.trim().is_empty())
            .map(|f| FieldError {
                field: f.name.clone(),
                message: format!("{} is required", f.name),
            })
            .collect()
    }

    /// Clears every value.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    fn encoded(&self) -> Vec<(&str, &str)> {
        self.fields.iter().map(|f| (f.name.as_str(), f.value.as_str())).collect()
    }
}

/// Posts forms to their `action` endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
}

impl ContactClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(SUBMIT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Validates, then POSTs the fields form-encoded and expects a JSON reply.
    ///
    /// Invalid forms are never sent. Values are cleared only after a successful reply; on
    /// failure the input is kept for a retry.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<serde_json::Value, SubmitError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }
        if form.action.trim().is_empty() {
            return Err(SubmitError::NoEndpoint);
        }

        let response = self
            .client
            .post(&form.action)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form.encoded())
            .send()
            .await?;
        let status = response.status();
        let body = serde_json::from_str::<serde_json::Value>(&response.text().await?).ok();

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or("Form submission failed");
            return Err(SubmitError::Rejected(message.to_string()));
        }
        let body = body.ok_or_else(|| SubmitError::Rejected("Form submission failed".to_string()))?;

        form.reset();
        Ok(body)
    }
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Skill wrapper: `{ fields: [...] }` in, feedback state out.
pub struct ContactSubmit {
    client: ContactClient,
    endpoint: Option<String>,
}

impl ContactSubmit {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: ContactClient::new(),
            endpoint,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::new(config.contact_endpoint.clone())
    }
}

#[async_trait::async_trait]
impl AgentSkill for ContactSubmit {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    async fn execute(
        &self,
        _ctx: &RequestContext,
        payload: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error + Send + Sync>> {
        let fields = payload
            .and_then(|mut p| p.get_mut("fields").map(serde_json::Value::take))
            .ok_or("ContactSubmit requires payload: { fields: [{ name, value, required }] }")?;
        let fields: Vec<FormField> = serde_json::from_value(fields)?;
        let mut form = ContactForm::new(self.endpoint.clone().unwrap_or_default(), fields);

        match self.client.submit(&mut form).await {
            Ok(reply) => {
                tracing::info!(target: "folio::contact", "Contact form submitted");
                Ok(serde_json::json!({
                    "status": "ok",
                    "skill": SKILL_NAME,
                    "feedback": FormFeedback::Success,
                    "message": FormFeedback::Success.message(),
                    "reply": reply,
                }))
            }
            Err(SubmitError::Invalid(errors)) => Ok(serde_json::json!({
                "status": "invalid",
                "skill": SKILL_NAME,
                "errors": errors,
            })),
            Err(e) => {
                tracing::error!(target: "folio::contact", error = %e, "Error submitting form");
                Ok(serde_json::json!({
                    "status": "error",
                    "skill": SKILL_NAME,
                    "feedback": FormFeedback::Failure,
                    "message": FormFeedback::Failure.message(),
                    "error": e.to_string(),
                }))
            }
        }
    }
}
