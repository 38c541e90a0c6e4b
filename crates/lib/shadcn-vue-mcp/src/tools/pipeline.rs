use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use shadcn_vue_core::templates;

use crate::ShadcnVueMcp;
use crate::helpers;

/// Parameters for tools that take a free-form message.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MessageParams {
    /// The user's request, or the JSON produced by the previous pipeline step.
    pub message: String,
}

impl MessageParams {
    fn required(self) -> Result<String, ErrorData> {
        let message = self.message.trim();
        if message.is_empty() {
            return Err(helpers::mcp_err(
                rmcp::model::ErrorCode::INVALID_PARAMS,
                "message is required",
            ));
        }
        Ok(message.to_string())
    }
}

#[tool_router(router = tool_router_pipeline, vis = "pub")]
impl ShadcnVueMcp {
    #[tool(
        name = "requirement-structuring",
        description = "Analyze the user's natural language request and structure it into a JSON component blueprint. Call components-filter next."
    )]
    async fn requirement_structuring(
        &self,
        Parameters(params): Parameters<MessageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let message = params.required()?;
        Ok(CallToolResult::success(vec![Content::text(
            templates::requirement_structuring_prompt(&message),
        )]))
    }

    #[tool(
        name = "components-filter",
        description = "Select the shadcn-vue components and charts a blueprint needs. Use when the user mentions /filter. Call all-components-doc next."
    )]
    async fn components_filter(
        &self,
        Parameters(params): Parameters<MessageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let message = params.required()?;
        Ok(CallToolResult::success(vec![Content::text(
            templates::components_filter_prompt(&message),
        )]))
    }

    #[tool(
        name = "component-builder",
        description = "Use when the user asks for a new UI component, mentions /ui, or wants a button, input, dialog, table, form, banner, card or other Vue component. Returns the tool sequence that produces it; edit or add files to integrate the result."
    )]
    async fn component_builder(
        &self,
        Parameters(params): Parameters<MessageParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let message = params.required()?;
        Ok(CallToolResult::success(vec![Content::text(
            templates::component_builder_prompt(&message),
        )]))
    }
}
