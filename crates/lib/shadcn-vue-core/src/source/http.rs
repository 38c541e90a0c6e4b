use std::{error::Error, fmt, sync::Arc, time::Duration};

use reqwest::Client;
use shadcn_vue_catalog::ComponentKind;
use shadcn_vue_catalog::catalog::{
    CDN_DOCS_BASE,
    CDN_NOT_FOUND_MARKER,
    CDN_REGISTRY_BASE,
    CONTEXT7_API_BASE,
    DEMOS_DIR,
    DOCS_DIR,
    RAW_DOCS_BASE,
    RAW_REGISTRY_BASE,
};
use tracing::{debug, warn};

const CONTEXT7_SOURCE_HEADER: &str = "X-Context7-Source";
const CONTEXT7_SOURCE_VALUE: &str = "mcp-server";
const CONTEXT7_RESPONSE_TYPE: &str = "txt";
const CONTEXT7_EMPTY_ANSWERS: [&str; 2] = ["No content available", "No context data available"];

#[derive(Debug)]
pub enum SourceError {
    Http(Box<reqwest::Error>),
    NotFound { path: String },
    InvalidInput(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "HTTP error: {err}"),
            Self::NotFound { path } => write!(f, "not found upstream: {path}"),
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
        }
    }
}

impl Error for SourceError {}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Upstream locations and client settings for [`HttpDocSource`].
#[derive(Debug, Clone)]
pub struct DocSourceConfig {
    pub docs_base: String,
    pub docs_fallback_base: String,
    pub registry_base: String,
    pub registry_fallback_base: String,
    pub context7_base: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl DocSourceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            docs_base: CDN_DOCS_BASE.to_string(),
            docs_fallback_base: RAW_DOCS_BASE.to_string(),
            registry_base: CDN_REGISTRY_BASE.to_string(),
            registry_fallback_base: RAW_REGISTRY_BASE.to_string(),
            context7_base: CONTEXT7_API_BASE.to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: format!("shadcn-vue-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    #[must_use]
    pub fn with_docs_bases(mut self, primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        self.docs_base = trim_base(primary.into());
        self.docs_fallback_base = trim_base(fallback.into());
        self
    }

    #[must_use]
    pub fn with_registry_bases(
        mut self,
        primary: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        self.registry_base = trim_base(primary.into());
        self.registry_fallback_base = trim_base(fallback.into());
        self
    }

    #[must_use]
    pub fn with_context7_base(mut self, base: impl Into<String>) -> Self {
        self.context7_base = trim_base(base.into());
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for DocSourceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Query options for the Context7 library docs endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryDocQuery {
    pub tokens: Option<u32>,
    pub topic: Option<String>,
    pub folders: Option<String>,
}

impl LibraryDocQuery {
    #[must_use]
    pub fn topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens = Some(tokens);
        self
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(tokens) = self.tokens.filter(|tokens| *tokens > 0) {
            pairs.push(("tokens", tokens.to_string()));
        }
        if let Some(topic) = self.topic.as_deref().filter(|value| !value.is_empty()) {
            pairs.push(("topic", topic.to_string()));
        }
        if let Some(folders) = self.folders.as_deref().filter(|value| !value.is_empty()) {
            pairs.push(("folders", folders.to_string()));
        }
        pairs.push(("type", CONTEXT7_RESPONSE_TYPE.to_string()));
        pairs
    }
}

/// HTTP-backed documentation source with a CDN-then-raw fallback.
#[derive(Clone)]
pub struct HttpDocSource {
    client: Client,
    config: Arc<DocSourceConfig>,
}

impl HttpDocSource {
    /// Builds the HTTP client for the given configuration.
    ///
    /// # Errors
    /// Returns `SourceError::Http` if the client cannot be constructed.
    pub fn new(config: DocSourceConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Fetches the markdown page of a component or chart.
    ///
    /// # Errors
    /// Returns `SourceError::NotFound` when neither base serves the page.
    pub async fn fetch_component_markdown(
        &self,
        name: &str,
        kind: ComponentKind,
    ) -> SourceResult<String> {
        ensure_path_segment(name)?;
        let path = format!("{DOCS_DIR}/{kind}/{name}.md");
        self.fetch_with_fallback(&self.config.docs_base, &self.config.docs_fallback_base, &path)
            .await
    }

    /// Fetches a demo file such as `ButtonDemo.vue`.
    ///
    /// # Errors
    /// Returns `SourceError::NotFound` when neither base serves the file.
    pub async fn fetch_demo(&self, file_name: &str) -> SourceResult<String> {
        ensure_path_segment(file_name)?;
        let path = format!("{DEMOS_DIR}/{file_name}");
        self.fetch_with_fallback(&self.config.docs_base, &self.config.docs_fallback_base, &path)
            .await
    }

    /// Fetches a file from the component registry, e.g. `button/index.ts`.
    ///
    /// # Errors
    /// Returns `SourceError::NotFound` when neither base serves the file.
    pub async fn fetch_registry_file(&self, path: &str) -> SourceResult<String> {
        if path.split('/').any(|segment| ensure_path_segment(segment).is_err()) {
            return Err(SourceError::InvalidInput(format!("invalid registry path: {path}")));
        }
        self.fetch_with_fallback(
            &self.config.registry_base,
            &self.config.registry_fallback_base,
            path,
        )
        .await
    }

    /// Fetches library documentation from Context7.
    ///
    /// Never fails: unavailable docs, empty answers, and transport errors all
    /// yield `None`.
    pub async fn fetch_library_docs(
        &self,
        library_id: &str,
        query: &LibraryDocQuery,
    ) -> Option<String> {
        let library_id = library_id.trim_start_matches('/');
        let url = format!("{}/v1/{library_id}", self.config.context7_base);
        let response = match self
            .client
            .get(&url)
            .header(CONTEXT7_SOURCE_HEADER, CONTEXT7_SOURCE_VALUE)
            .query(&query.pairs())
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(%url, error = %err, "failed to fetch library documentation");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "library documentation request failed");
            return None;
        }

        match response.text().await {
            Ok(text) if is_empty_library_answer(&text) => {
                debug!(%url, "library documentation empty");
                None
            }
            Ok(text) => Some(text),
            Err(err) => {
                warn!(%url, error = %err, "failed to read library documentation");
                None
            }
        }
    }

    async fn fetch_with_fallback(
        &self,
        primary: &str,
        fallback: &str,
        path: &str,
    ) -> SourceResult<String> {
        // Only the last attempt decides between NotFound and a transport error.
        let mut last_error = None;
        for base in [primary, fallback] {
            let url = format!("{base}/{path}");
            match self.fetch_once(&url).await {
                Ok(Some(body)) => return Ok(body),
                Ok(None) => {
                    warn!(%url, "upstream document missing");
                    last_error = None;
                }
                Err(err) => {
                    warn!(%url, error = %err, "upstream request failed");
                    last_error = Some(err);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| SourceError::NotFound {
            path: path.to_string(),
        }))
    }

    async fn fetch_once(&self, url: &str) -> SourceResult<Option<String>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body = response.text().await?;
        if body.contains(CDN_NOT_FOUND_MARKER) {
            return Ok(None);
        }
        Ok(Some(body))
    }
}

fn is_empty_library_answer(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || CONTEXT7_EMPTY_ANSWERS.contains(&trimmed)
}

fn ensure_path_segment(segment: &str) -> SourceResult<()> {
    let valid = !segment.is_empty()
        && segment != ".."
        && segment
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(SourceError::InvalidInput(format!("invalid path segment: {segment}")))
    }
}

fn trim_base(base: String) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_query_emits_set_fields_and_type() {
        let pairs = LibraryDocQuery::topic("button").with_tokens(700).pairs();
        assert_eq!(
            pairs,
            vec![
                ("tokens", "700".to_string()),
                ("topic", "button".to_string()),
                ("type", "txt".to_string()),
            ]
        );
    }

    #[test]
    fn empty_library_answers_are_detected() {
        assert!(is_empty_library_answer("  "));
        assert!(is_empty_library_answer("No content available"));
        assert!(is_empty_library_answer("No context data available\n"));
        assert!(!is_empty_library_answer("TITLE: Button"));
    }

    #[test]
    fn path_segments_reject_traversal() {
        assert!(ensure_path_segment("alert-dialog").is_ok());
        assert!(ensure_path_segment("ButtonDemo.vue").is_ok());
        assert!(ensure_path_segment("..").is_err());
        assert!(ensure_path_segment("a/b").is_err());
        assert!(ensure_path_segment("").is_err());
    }

    #[test]
    fn config_trims_trailing_slashes() {
        let config = DocSourceConfig::new()
            .with_docs_bases("http://cdn.test/www/", "http://raw.test/www")
            .with_context7_base("http://ctx.test/api/");
        assert_eq!(config.docs_base, "http://cdn.test/www");
        assert_eq!(config.docs_fallback_base, "http://raw.test/www");
        assert_eq!(config.context7_base, "http://ctx.test/api");
    }
}
