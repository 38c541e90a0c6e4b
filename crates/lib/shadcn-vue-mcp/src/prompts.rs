use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{GetPromptResult, PromptMessage, PromptMessageRole},
    prompt,
    prompt_router,
    schemars,
};
use serde::{Deserialize, Serialize};
use shadcn_vue_core::templates;

use crate::ShadcnVueMcp;
use crate::helpers;

/// Arguments for the create-component prompt.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CreateComponentArgs {
    /// What the component should do and look like.
    pub description: String,
}

/// Arguments for the audit-component prompt.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AuditComponentArgs {
    /// Absolute path of the `.vue` file to audit.
    pub path: String,
}

#[prompt_router(vis = "pub")]
impl ShadcnVueMcp {
    #[prompt(
        name = "create-component",
        description = "Build a shadcn-vue component from a description using the tool pipeline"
    )]
    async fn create_component(
        &self,
        Parameters(args): Parameters<CreateComponentArgs>,
    ) -> Result<GetPromptResult, ErrorData> {
        let description = args.description.trim();
        if description.is_empty() {
            return Err(ErrorData::invalid_params(
                "description cannot be empty".to_string(),
                None,
            ));
        }
        Ok(GetPromptResult {
            description: Some("Component generation workflow".to_string()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                templates::component_builder_prompt(description),
            )],
        })
    }

    #[prompt(
        name = "audit-component",
        description = "Audit a Vue component file against the quality checklist"
    )]
    async fn audit_component(
        &self,
        Parameters(args): Parameters<AuditComponentArgs>,
    ) -> Result<GetPromptResult, ErrorData> {
        let source = self
            .control
            .read_component_source(&args.path)
            .await
            .map_err(helpers::map_err)?;
        Ok(GetPromptResult {
            description: Some(format!("Quality audit of {}", source.path)),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                templates::quality_check_prompt(&source.code, &source.sections),
            )],
        })
    }
}
