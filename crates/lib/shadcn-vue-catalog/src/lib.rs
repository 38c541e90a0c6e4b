//! Component catalog and shared models for shadcn-vue-mcp.
//!
//! This crate defines the fixed shadcn-vue component catalog and the data
//! model shared by the doc source, control plane, and MCP handlers.

pub mod catalog;
pub mod models;

pub use models::*;
