//! Parsers for upstream documentation and component sources.
//!
//! Markdown helpers isolate usage examples and inline demo code; the SFC
//! helpers read registry exports, imports, and single-file component blocks.
//! The component API helpers list declared props, events and slots.

pub mod component_api;
pub mod markdown;
pub mod vue_sfc;

pub use component_api::{extract_events, extract_props, extract_slots};

pub use markdown::{extract_usage_vue_blocks, render_usage_blocks, replace_component_previews};
pub use vue_sfc::{
    SfcSections,
    deserialize_component_code,
    extract_dependencies,
    is_valid_vue_component,
    looks_escaped,
    parse_index_exports,
    serialize_component_code,
};
