use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use shadcn_vue_catalog::catalog::{CHARTS, COMPONENTS, CatalogEntry};

use crate::ShadcnVueMcp;
use crate::helpers;

/// One catalog entry as listed to the client.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
}

impl From<&CatalogEntry> for CatalogItem {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            description: entry.description.to_string(),
        }
    }
}

/// The full component and chart catalog.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CatalogListing {
    pub components: Vec<CatalogItem>,
    pub charts: Vec<CatalogItem>,
}

impl CatalogListing {
    fn build() -> Self {
        Self {
            components: COMPONENTS.iter().map(CatalogItem::from).collect(),
            charts: CHARTS.iter().map(CatalogItem::from).collect(),
        }
    }
}

/// Parameters for extracting component metadata.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ComponentMetadataParams {
    /// Component name, e.g. `button`.
    pub name: String,
    /// Serve and store results in the metadata cache. Defaults to true.
    pub use_cache: Option<bool>,
}

#[tool_router(router = tool_router_catalog, vis = "pub")]
impl ShadcnVueMcp {
    #[tool(
        name = "list-components",
        description = "List every shadcn-vue component and chart with a one-line description."
    )]
    async fn list_components(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(CatalogListing::build())?]))
    }

    #[tool(
        name = "component-metadata",
        description = "Extract props, slots, events and imported dependencies for each file of a shadcn-vue component from the upstream registry."
    )]
    async fn component_metadata(
        &self,
        Parameters(params): Parameters<ComponentMetadataParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let metadata = self
            .control
            .component_metadata(params.name.trim(), params.use_cache.unwrap_or(true))
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(&*metadata)?]))
    }

    #[tool(
        name = "metadata-cache-stats",
        description = "Report the size, capacity and entry lifetime of the metadata cache."
    )]
    async fn metadata_cache_stats(&self) -> Result<CallToolResult, ErrorData> {
        let stats = self.control.cache_stats().await;
        Ok(CallToolResult::success(vec![Content::json(stats)?]))
    }

    #[tool(
        name = "clear-metadata-cache",
        description = "Drop every cached component metadata entry. Returns 'ok'."
    )]
    async fn clear_metadata_cache(&self) -> Result<CallToolResult, ErrorData> {
        self.control.clear_cache().await;
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}
