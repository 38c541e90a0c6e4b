//! MCP tool modules.
//!
//! Tools are grouped by stage: the generation pipeline, documentation lookup,
//! quality auditing, catalog and metadata queries, and contextual help.

pub mod catalog;
pub mod docs;
pub mod pipeline;
pub mod quality;
mod context;
