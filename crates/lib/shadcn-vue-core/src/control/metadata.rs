use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use shadcn_vue_catalog::catalog;
use shadcn_vue_catalog::{CacheStats, ComponentMetadata, ExportEntry};
use tracing::info;

use crate::parsers::{
    extract_dependencies,
    extract_events,
    extract_props,
    extract_slots,
    parse_index_exports,
};

use super::{ComponentControlPlane, ControlError};

const METADATA_VERSION: &str = "latest";

impl ComponentControlPlane {
    /// Extracts per-file metadata for a component from the upstream registry.
    ///
    /// Reads `{name}/index.ts`, follows each export to its source file and
    /// records the file's props, slots, events and imports. With `use_cache` the cached answer is
    /// returned when fresh and new answers are stored.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` for unknown components,
    /// `ControlError::NotFound` when the index or an exported file is missing
    /// or the index declares no exports, and `ControlError::Source` on
    /// transport failures.
    pub async fn component_metadata(
        &self,
        name: &str,
        use_cache: bool,
    ) -> Result<Arc<Vec<ComponentMetadata>>, ControlError> {
        if !catalog::is_valid_component(name) {
            return Err(ControlError::InvalidInput(format!(
                "{name} is not a shadcn-vue component"
            )));
        }

        if use_cache && let Some(cached) = self.cache.get(name).await {
            return Ok(cached);
        }

        let index = self
            .source
            .fetch_registry_file(&format!("{name}/index.ts"))
            .await?;
        let exports = parse_index_exports(&index);
        if exports.is_empty() {
            return Err(ControlError::NotFound(format!(
                "no component exports in {name}/index.ts"
            )));
        }

        let metadata = try_join_all(
            exports
                .into_iter()
                .map(|export| self.file_metadata(name, export)),
        )
        .await?;
        info!(component = name, files = metadata.len(), "extracted component metadata");

        if use_cache {
            Ok(self.cache.insert(name, metadata).await)
        } else {
            Ok(Arc::new(metadata))
        }
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
        info!("metadata cache cleared");
    }

    async fn file_metadata(
        &self,
        name: &str,
        export: ExportEntry,
    ) -> Result<ComponentMetadata, ControlError> {
        let source = self
            .source
            .fetch_registry_file(&format!("{name}/{}", export.file_name))
            .await?;
        Ok(ComponentMetadata {
            name: name.to_string(),
            props: extract_props(&source),
            slots: extract_slots(&source),
            events: extract_events(&source),
            dependencies: extract_dependencies(&source),
            file: export,
            extracted_at: Utc::now(),
            version: METADATA_VERSION.to_string(),
        })
    }
}
