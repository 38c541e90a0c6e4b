use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use shadcn_vue_catalog::{ComponentKind, ComponentSelection, FilteredComponents, Necessity};
use shadcn_vue_core::templates::{self, IconLibrary};
use tracing::info;

use crate::ShadcnVueMcp;
use crate::helpers;

/// Catalog section accepted by the doc tools.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KindParam {
    Components,
    Charts,
}

impl From<KindParam> for ComponentKind {
    fn from(kind: KindParam) -> Self {
        match kind {
            KindParam::Components => Self::Components,
            KindParam::Charts => Self::Charts,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, schemars::JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NecessityParam {
    Critical,
    Important,
    Optional,
}

impl From<NecessityParam> for Necessity {
    fn from(necessity: NecessityParam) -> Self {
        match necessity {
            NecessityParam::Critical => Self::Critical,
            NecessityParam::Important => Self::Important,
            NecessityParam::Optional => Self::Optional,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, schemars::JsonSchema, PartialEq, Eq)]
pub enum IconParam {
    #[default]
    #[serde(rename = "lucide")]
    Lucide,
    #[serde(rename = "nuxt-icon")]
    NuxtIcon,
}

impl From<IconParam> for IconLibrary {
    fn from(icon: IconParam) -> Self {
        match icon {
            IconParam::Lucide => Self::Lucide,
            IconParam::NuxtIcon => Self::NuxtIcon,
        }
    }
}

/// Parameters for reading one component's documentation.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ComponentDocParams {
    /// `components` or `charts`, as returned by components-filter.
    #[serde(rename = "type")]
    pub kind: KindParam,
    /// Component name as returned by components-filter, e.g. `alert-dialog`.
    pub name: String,
    /// Return only the Usage section's Vue snippets.
    pub usage_only: Option<bool>,
}

/// One component picked by components-filter.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SelectionParams {
    pub name: String,
    pub necessity: NecessityParam,
    pub justification: String,
}

impl From<SelectionParams> for ComponentSelection {
    fn from(params: SelectionParams) -> Self {
        Self::new(params.name, params.necessity.into(), params.justification)
    }
}

/// Parameters for fetching docs for a whole components-filter answer.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AllComponentsDocParams {
    /// Components from components-filter.
    #[serde(default)]
    pub components: Vec<SelectionParams>,
    /// Charts from components-filter.
    #[serde(default)]
    pub charts: Vec<SelectionParams>,
    /// Skip selections weaker than this. Defaults to `optional` (keep all).
    pub min_necessity: Option<NecessityParam>,
    /// Icon library for the generated component. Defaults to `lucide`.
    pub icon: Option<IconParam>,
}

impl AllComponentsDocParams {
    fn into_parts(self) -> (FilteredComponents, Necessity, IconLibrary) {
        let filtered = FilteredComponents {
            components: self.components.into_iter().map(Into::into).collect(),
            charts: self.charts.into_iter().map(Into::into).collect(),
        };
        let min = self
            .min_necessity
            .map_or(Necessity::Optional, Necessity::from);
        let icon = self.icon.unwrap_or_default().into();
        (filtered, min, icon)
    }
}

#[tool_router(router = tool_router_docs, vis = "pub")]
impl ShadcnVueMcp {
    #[tool(
        name = "component-usage-doc",
        description = "Read the documentation of a shadcn-vue component or chart with demos inlined. Use when the user mentions /doc."
    )]
    async fn component_usage_doc(
        &self,
        Parameters(params): Parameters<ComponentDocParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let name = params.name.trim();
        let kind = ComponentKind::from(params.kind);
        let result = if params.usage_only.unwrap_or(false) {
            self.control.component_usage(name, kind).await
        } else {
            self.control.component_doc(name, kind).await
        };
        let doc = result.map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::text(doc)]))
    }

    #[tool(
        name = "all-components-doc",
        description = "Retrieve documentation for every component and chart chosen by components-filter, followed by the implementation instructions."
    )]
    async fn all_components_doc(
        &self,
        Parameters(params): Parameters<AllComponentsDocParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let (filtered, min, icon) = params.into_parts();
        let docs = self.control.library_docs(filtered, min).await;
        info!(count = docs.len(), "fetched library docs");
        let prompt = format!(
            "{}\n{}",
            templates::structured_docs_markdown(&docs),
            templates::create_component_prompt(icon)
        );
        Ok(CallToolResult::success(vec![Content::text(prompt)]))
    }
}
