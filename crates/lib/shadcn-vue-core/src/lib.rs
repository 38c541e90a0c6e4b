//! Core services for shadcn-vue-mcp.
//!
//! This crate fetches shadcn-vue documentation, demos and registry sources over
//! HTTP, parses the pieces the assistant needs out of them, caches extracted
//! component metadata, and renders the prompt templates returned by the MCP
//! tools.

pub mod control;
pub mod parsers;
pub mod services;
pub mod source;
pub mod templates;
