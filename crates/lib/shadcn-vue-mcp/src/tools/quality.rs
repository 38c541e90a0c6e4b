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

/// Parameters for auditing a component file.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct QualityCheckParams {
    /// Absolute path of the `.vue` file to audit.
    pub absolute_component_path: String,
}

#[tool_router(router = tool_router_quality, vis = "pub")]
impl ShadcnVueMcp {
    #[tool(
        name = "component-quality-check",
        description = "Check the quality of a component whenever one is generated or updated. Use when the user mentions /check."
    )]
    async fn component_quality_check(
        &self,
        Parameters(params): Parameters<QualityCheckParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let source = self
            .control
            .read_component_source(&params.absolute_component_path)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(
            templates::quality_check_prompt(&source.code, &source.sections),
        )]))
    }
}
