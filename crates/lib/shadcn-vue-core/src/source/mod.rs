//! Upstream documentation sources.
//!
//! The source layer fetches component markdown, demo files, registry sources,
//! and library docs over HTTP.

pub mod http;

pub use http::{DocSourceConfig, HttpDocSource, LibraryDocQuery, SourceError, SourceResult};
