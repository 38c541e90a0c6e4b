//! MCP server implementation for shadcn-vue-mcp.
//!
//! This crate wires the component control plane into rmcp tool, prompt and
//! resource handlers and exposes the stdio and streamable HTTP runners.

mod helpers;
mod prompts;
mod resources;
mod tools;
pub mod server;

use rmcp::{
    ErrorData,
    RoleServer,
    ServerHandler,
    handler::server::{router::prompt::PromptRouter, tool::ToolRouter},
    model::{
        CallToolResult,
        Content,
        GetPromptRequestParams,
        GetPromptResult,
        ListPromptsResult,
        ListResourcesResult,
        PaginatedRequestParams,
        ReadResourceRequestParams,
        ReadResourceResult,
        ServerCapabilities,
        ServerInfo,
    },
    prompt_handler,
    service::RequestContext,
    tool,
    tool_handler,
    tool_router,
};
use shadcn_vue_core::control::ComponentControlPlane;

const SERVER_INSTRUCTIONS: &str = r"shadcn-vue-mcp helps you build Vue 3 components with the shadcn-vue library.

Workflow:
1. `component-builder` is the entry point for a new component. It returns the tool sequence below.
2. `requirement-structuring` turns the request into a JSON blueprint.
3. `components-filter` picks the catalog components and charts the blueprint needs.
4. `all-components-doc` fetches their documentation and the implementation instructions.
5. Write the component, then run `component-quality-check` on the file.

Other tools:
- `component-usage-doc` reads one component's docs with demos inlined (`usage_only` for snippets only).
- `list-components` lists the catalog; `component-metadata` extracts a component's props, slots, events and imports.
- `metadata-cache-stats` and `clear-metadata-cache` manage the metadata cache.
- `help` lists commands; `health` returns `ok`.

Resources:
- `standards://quality-profile` is the JSON quality profile every component is scored against.";

/// MCP server wrapper around the component control plane.
#[derive(Clone)]
pub struct ShadcnVueMcp {
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
    control: ComponentControlPlane,
}

impl ShadcnVueMcp {
    #[must_use]
    pub fn new(control: ComponentControlPlane) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_pipeline()
            + Self::tool_router_docs()
            + Self::tool_router_quality()
            + Self::tool_router_catalog()
            + Self::tool_router_context();
        Self {
            tool_router,
            prompt_router: Self::prompt_router(),
            control,
        }
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl ShadcnVueMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl ServerHandler for ShadcnVueMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        resources::read(&request.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use shadcn_vue_core::control::DocsSettings;
    use shadcn_vue_core::services::{MetadataCache, MetadataCacheConfig};
    use shadcn_vue_core::source::{DocSourceConfig, HttpDocSource};

    fn server() -> ShadcnVueMcp {
        let source = HttpDocSource::new(DocSourceConfig::new()).expect("http client");
        let control = ComponentControlPlane::new(
            source,
            MetadataCache::new(MetadataCacheConfig::new()),
            DocsSettings::new(),
        );
        ShadcnVueMcp::new(control)
    }

    #[test]
    fn registers_every_tool_under_its_wire_name() {
        let server = server();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "all-components-doc",
                "clear-metadata-cache",
                "component-builder",
                "component-metadata",
                "component-quality-check",
                "component-usage-doc",
                "components-filter",
                "health",
                "help",
                "list-components",
                "metadata-cache-stats",
                "requirement-structuring",
            ]
        );
    }

    #[test]
    fn registers_prompts() {
        let server = server();
        let mut names: Vec<String> = server
            .prompt_router
            .list_all()
            .into_iter()
            .map(|prompt| prompt.name.to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["audit-component", "create-component"]);
    }

    #[test]
    fn prompt_arguments_come_from_their_arg_structs() {
        let server = server();
        assert!(server.prompt_router.has_route("create-component"));
        let prompt = server
            .prompt_router
            .list_all()
            .into_iter()
            .find(|prompt| prompt.name == "audit-component")
            .expect("audit prompt");
        let arguments = prompt.arguments.unwrap_or_default();
        assert_eq!(arguments.len(), 1);
        assert_eq!(arguments[0].name, "path");
        assert_eq!(arguments[0].required, Some(true));
    }

    #[test]
    fn advertises_tools_prompts_and_resources() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(
            info.instructions
                .as_deref()
                .is_some_and(|text| text.contains("standards://quality-profile"))
        );
    }
}
