use futures::future::join_all;
use shadcn_vue_catalog::catalog::{self, NO_DOCUMENTATION, NO_USAGE_EXAMPLES};
use shadcn_vue_catalog::{
    ComponentKind,
    ComponentSelection,
    DemoSource,
    FilteredComponents,
    LibraryDoc,
    Necessity,
};
use tracing::{debug, warn};

use crate::parsers::{extract_usage_vue_blocks, render_usage_blocks, replace_component_previews};
use crate::source::{LibraryDocQuery, SourceError};

use super::{ComponentControlPlane, ControlError};

impl ComponentControlPlane {
    /// Returns the component's documentation page with previews inlined as demo code.
    ///
    /// A page missing upstream yields the "no documentation" fallback text.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` for names outside the catalog and
    /// `ControlError::Source` when both upstream bases fail at the transport level.
    pub async fn component_doc(
        &self,
        name: &str,
        kind: ComponentKind,
    ) -> Result<String, ControlError> {
        ensure_cataloged(name, kind)?;

        let (markdown, demos) = futures::join!(
            self.source.fetch_component_markdown(name, kind),
            self.component_demos(name)
        );

        match markdown {
            Ok(doc) => Ok(replace_component_previews(&doc, &demos)),
            Err(SourceError::NotFound { .. }) => Ok(NO_DOCUMENTATION.to_string()),
            Err(err) => Err(err.into()),
        }
    }

    /// Returns only the `vue` code blocks of the documentation's Usage section.
    ///
    /// # Errors
    /// Returns `ControlError` under the same conditions as [`Self::component_doc`].
    pub async fn component_usage(
        &self,
        name: &str,
        kind: ComponentKind,
    ) -> Result<String, ControlError> {
        ensure_cataloged(name, kind)?;

        let markdown = match self.source.fetch_component_markdown(name, kind).await {
            Ok(markdown) => markdown,
            Err(SourceError::NotFound { .. }) => return Ok(NO_DOCUMENTATION.to_string()),
            Err(err) => return Err(err.into()),
        };

        let blocks = extract_usage_vue_blocks(&markdown);
        if blocks.is_empty() {
            Ok(NO_USAGE_EXAMPLES.to_string())
        } else {
            Ok(render_usage_blocks(&blocks))
        }
    }

    /// Fetches library documentation for every selection meeting `min_necessity`.
    ///
    /// Components come first, then charts, each in input order. Lookups that
    /// fail upstream produce an entry with no doc.
    pub async fn library_docs(
        &self,
        filtered: FilteredComponents,
        min_necessity: Necessity,
    ) -> Vec<LibraryDoc> {
        let FilteredComponents { components, charts } = filtered.retain_necessity(min_necessity);
        let selections = components
            .into_iter()
            .map(|selection| (selection, ComponentKind::Components))
            .chain(
                charts
                    .into_iter()
                    .map(|selection| (selection, ComponentKind::Charts)),
            );

        join_all(selections.map(|(selection, kind)| self.library_doc(selection, kind))).await
    }

    async fn library_doc(&self, selection: ComponentSelection, kind: ComponentKind) -> LibraryDoc {
        let query = LibraryDocQuery::topic(selection.name.as_str())
            .with_tokens(self.settings.doc_tokens);
        let doc = self
            .source
            .fetch_library_docs(&self.settings.library_id, &query)
            .await;
        if doc.is_none() {
            debug!(component = %selection.name, "no library documentation");
        }
        LibraryDoc {
            name: selection.name,
            kind,
            doc,
        }
    }

    async fn component_demos(&self, name: &str) -> Vec<DemoSource> {
        let files = catalog::demos_for(name);
        let fetched = join_all(files.into_iter().map(|file| async move {
            match self.source.fetch_demo(file).await {
                Ok(code) => Some(DemoSource {
                    name: file.trim_end_matches(".vue").to_string(),
                    code,
                }),
                Err(err) => {
                    warn!(demo = file, error = %err, "skipping demo");
                    None
                }
            }
        }))
        .await;
        fetched.into_iter().flatten().collect()
    }
}

fn ensure_cataloged(name: &str, kind: ComponentKind) -> Result<(), ControlError> {
    if catalog::find(kind, name).is_some() {
        Ok(())
    } else {
        Err(ControlError::InvalidInput(format!(
            "{name} is not a shadcn-vue {}",
            kind.label()
        )))
    }
}
