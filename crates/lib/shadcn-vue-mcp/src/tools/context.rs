use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::ShadcnVueMcp;

/// Payload listing the MCP commands this server offers.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        let commands = [
            "component-builder - Entry point: returns the tool sequence for building a new component.",
            "requirement-structuring - Turns a UI request into a JSON blueprint.",
            "components-filter - Picks the catalog components and charts a blueprint needs.",
            "all-components-doc - Fetches docs for the picked components plus implementation instructions.",
            "component-usage-doc - Reads one component's documentation, or only its usage snippets.",
            "component-quality-check - Audits a .vue file against the quality checklist.",
            "list-components - Lists the component and chart catalog.",
            "component-metadata - Extracts props, slots, events and dependencies of a component from the registry.",
            "metadata-cache-stats - Reports metadata cache usage.",
            "clear-metadata-cache - Empties the metadata cache.",
            "health - Returns 'ok'.",
        ];
        Self {
            commands: commands.into_iter().map(str::to_string).collect(),
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl ShadcnVueMcp {
    #[tool(description = "List the MCP commands and how they chain together.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
