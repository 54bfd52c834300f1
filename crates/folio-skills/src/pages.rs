//! Fetching and parsing the site's own pages.

use scraper::{ElementRef, Selector};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid site base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid selector '{0}'")]
    Selector(String),
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Same-origin page fetcher rooted at the site base URL.
#[derive(Debug, Clone)]
pub struct SitePages {
    client: reqwest::Client,
    base: reqwest::Url,
}

impl SitePages {
    /// `base_url` is treated as a directory: a missing trailing slash is added.
    pub fn new(base_url: &str) -> Result<Self, PageError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = reqwest::Url::parse(&normalized).map_err(|e| PageError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &reqwest::Url {
        &self.base
    }

    /// GETs `page` relative to the base. Non-success statuses are errors.
    pub async fn fetch(&self, page: &str) -> Result<String, PageError> {
        let url = self.base.join(page).map_err(|e| PageError::InvalidBaseUrl {
            url: format!("{}{}", self.base, page),
            reason: e.to_string(),
        })?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

pub(crate) fn compile(css: &str) -> Result<Selector, PageError> {
    Selector::parse(css).map_err(|_| PageError::Selector(css.to_string()))
}

/// Concatenated text of all descendants, like the DOM's `textContent`.
pub(crate) fn text_content(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Non-empty `id` attribute, if any.
pub(crate) fn element_id(el: &ElementRef<'_>) -> Option<String> {
    el.value().id().filter(|id| !id.is_empty()).map(str::to_string)
}
