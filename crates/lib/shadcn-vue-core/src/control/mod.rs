use std::{error::Error, fmt, io, sync::Arc};

use shadcn_vue_catalog::catalog::LIBRARY_ID;

use crate::services::MetadataCache;
use crate::source::{HttpDocSource, SourceError};

pub mod docs;
pub mod metadata;
pub mod files;

pub use files::ComponentSource;

const DEFAULT_DOC_TOKENS: u32 = 700;

#[derive(Debug)]
pub enum ControlError {
    Source(SourceError),
    InvalidInput(String),
    NotFound(String),
    Io(io::Error),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
            Self::NotFound(message) => write!(f, "Not found: {message}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl Error for ControlError {}

impl From<SourceError> for ControlError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound { path } => Self::NotFound(path),
            SourceError::InvalidInput(message) => Self::InvalidInput(message),
            err @ SourceError::Http(_) => Self::Source(err),
        }
    }
}

impl From<io::Error> for ControlError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::NotFound(err.to_string())
        } else {
            Self::Io(err)
        }
    }
}

/// Context7 lookup settings used by the library docs fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsSettings {
    pub library_id: String,
    pub doc_tokens: u32,
}

impl DocsSettings {
    #[must_use]
    pub fn new() -> Self {
        Self {
            library_id: LIBRARY_ID.to_string(),
            doc_tokens: DEFAULT_DOC_TOKENS,
        }
    }

    #[must_use]
    pub fn with_library_id(mut self, library_id: impl Into<String>) -> Self {
        self.library_id = library_id.into();
        self
    }

    #[must_use]
    pub const fn with_doc_tokens(mut self, doc_tokens: u32) -> Self {
        self.doc_tokens = doc_tokens;
        self
    }
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point for every component operation exposed over MCP.
#[derive(Clone)]
pub struct ComponentControlPlane {
    source: HttpDocSource,
    cache: MetadataCache,
    settings: Arc<DocsSettings>,
}

impl ComponentControlPlane {
    #[must_use]
    pub fn new(source: HttpDocSource, cache: MetadataCache, settings: DocsSettings) -> Self {
        Self {
            source,
            cache,
            settings: Arc::new(settings),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &MetadataCache {
        &self.cache
    }
}
