use shadcn_vue_core::control::{ComponentControlPlane, DocsSettings};
use shadcn_vue_core::services::{MetadataCache, MetadataCacheConfig};
use shadcn_vue_core::source::{DocSourceConfig, HttpDocSource, SourceError};

use crate::config::McpdConfig;

/// Builds the control plane shared by every transport.
pub fn build_control_plane(config: &McpdConfig) -> Result<ComponentControlPlane, SourceError> {
    let source_config = DocSourceConfig::new()
        .with_docs_bases(&config.docs_base, &config.docs_fallback_base)
        .with_registry_bases(&config.registry_base, &config.registry_fallback_base)
        .with_context7_base(&config.context7_base)
        .with_request_timeout(config.request_timeout);
    let source = HttpDocSource::new(source_config)?;

    let cache = MetadataCache::new(
        MetadataCacheConfig::new()
            .with_ttl(config.cache_ttl)
            .with_max_entries(config.cache_max_entries)
            .with_sweep_interval(config.cache_sweep_interval),
    );

    let settings = DocsSettings::new()
        .with_library_id(&config.library_id)
        .with_doc_tokens(config.doc_tokens);

    Ok(ComponentControlPlane::new(source, cache, settings))
}
