use std::collections::HashMap;
use std::net::SocketAddr;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use shadcn_vue_catalog::catalog::{NO_DOCUMENTATION, NO_USAGE_EXAMPLES};
use shadcn_vue_catalog::{ComponentKind, ComponentSelection, FilteredComponents, Necessity};
use shadcn_vue_core::control::{ComponentControlPlane, ControlError, DocsSettings};
use shadcn_vue_core::services::{MetadataCache, MetadataCacheConfig};
use shadcn_vue_core::source::{DocSourceConfig, HttpDocSource};

const CDN_404_PAGE: &str = r#"<html><body><div class="error-code">404</div></body></html>"#;

const BUTTON_DOC: &str = r#"---
title: Button
---

<ComponentPreview name="ButtonDemo" />

## Usage

```vue
<script setup lang="ts">
import { Button } from '@/components/ui/button'
</script>
```

## Examples

<ComponentPreview name="ButtonGhost" />
"#;

const BUTTON_INDEX: &str = r#"export { default as Button } from './Button.vue'
export const buttonVariants = cva('inline-flex')
"#;

const BUTTON_SFC: &str = r#"<script setup lang="ts">
import { cn } from '@/lib/utils'
import { Spinner } from '@/components/ui/spinner'

const props = withDefaults(defineProps<{ variant?: 'default' | 'ghost'; loading?: boolean }>(), {
  variant: 'default',
})
const emit = defineEmits<{ press: [event: MouseEvent] }>()
</script>

<template><button :class="cn('btn')"><slot /></button></template>
"#;

/// The CDN only knows the button page and serves a 404 page for badge.
async fn cdn(Path(path): Path<String>) -> (StatusCode, String) {
    match path.trim_start_matches('/') {
        "www/src/content/docs/components/button.md" => (StatusCode::OK, BUTTON_DOC.to_string()),
        "www/src/content/docs/components/badge.md" => (StatusCode::OK, CDN_404_PAGE.to_string()),
        "www/src/registry/default/examples/ButtonDemo.vue" => {
            (StatusCode::OK, "<template><Button>Demo</Button></template>".to_string())
        }
        "ui/button/index.ts" => (StatusCode::OK, BUTTON_INDEX.to_string()),
        _ => (StatusCode::NOT_FOUND, String::new()),
    }
}

async fn raw(Path(path): Path<String>) -> (StatusCode, String) {
    match path.trim_start_matches('/') {
        "www/src/content/docs/components/badge.md" => {
            (StatusCode::OK, "# Badge\n\nNo usage here.\n".to_string())
        }
        "ui/button/Button.vue" => (StatusCode::OK, BUTTON_SFC.to_string()),
        _ => (StatusCode::NOT_FOUND, String::new()),
    }
}

async fn context7(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    if headers.get("x-context7-source").and_then(|value| value.to_str().ok()) != Some("mcp-server")
    {
        return (StatusCode::FORBIDDEN, String::new());
    }
    if params.get("type").map(String::as_str) != Some("txt") {
        return (StatusCode::BAD_REQUEST, String::new());
    }
    let tokens = params.get("tokens").cloned().unwrap_or_default();
    match params.get("topic").map(String::as_str) {
        Some("button") => (StatusCode::OK, format!("button docs ({tokens} tokens)")),
        Some("area") => (StatusCode::OK, "area chart docs".to_string()),
        Some("card") => (StatusCode::OK, "No content available".to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
    }
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/cdn/*path", get(cdn))
        .route("/raw/*path", get(raw))
        .route("/ctx/v1/unovue/shadcn-vue", get(context7));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake upstream");
    });
    addr
}

async fn control_plane() -> ComponentControlPlane {
    let addr = spawn_upstream().await;
    let base = format!("http://{addr}");
    let config = DocSourceConfig::new()
        .with_docs_bases(format!("{base}/cdn/www"), format!("{base}/raw/www"))
        .with_registry_bases(format!("{base}/cdn/ui"), format!("{base}/raw/ui"))
        .with_context7_base(format!("{base}/ctx"));
    let source = HttpDocSource::new(config).expect("http client");
    ComponentControlPlane::new(
        source,
        MetadataCache::new(MetadataCacheConfig::new()),
        DocsSettings::new(),
    )
}

/// Builds a control plane whose CDN refuses connections while the raw mirror is up.
async fn control_plane_with_unreachable_cdn() -> ComponentControlPlane {
    let addr = spawn_upstream().await;
    let closed = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind closed port");
        listener.local_addr().expect("closed addr")
    };
    let base = format!("http://{addr}");
    let config = DocSourceConfig::new()
        .with_docs_bases(format!("http://{closed}/www"), format!("{base}/raw/www"))
        .with_registry_bases(format!("http://{closed}/ui"), format!("{base}/raw/ui"))
        .with_context7_base(format!("{base}/ctx"));
    let source = HttpDocSource::new(config).expect("http client");
    ComponentControlPlane::new(
        source,
        MetadataCache::new(MetadataCacheConfig::new()),
        DocsSettings::new(),
    )
}

#[tokio::test]
async fn component_doc_inlines_fetched_demos() {
    let control = control_plane().await;
    let doc = control
        .component_doc("button", ComponentKind::Components)
        .await
        .expect("button doc");

    assert!(doc.contains("```vue\n<template><Button>Demo</Button></template>\n```"));
    assert!(!doc.contains("name=\"ButtonDemo\""));
    // Demos missing upstream leave their preview tag in place.
    assert!(doc.contains("<ComponentPreview name=\"ButtonGhost\" />"));
}

#[tokio::test]
async fn cdn_not_found_page_falls_back_to_raw() {
    let control = control_plane().await;
    let usage = control
        .component_usage("badge", ComponentKind::Components)
        .await
        .expect("badge usage");
    assert_eq!(usage, NO_USAGE_EXAMPLES);
}

#[tokio::test]
async fn missing_page_yields_fallback_text() {
    let control = control_plane().await;
    let doc = control
        .component_doc("card", ComponentKind::Components)
        .await
        .expect("fallback text");
    assert_eq!(doc, NO_DOCUMENTATION);
}

#[tokio::test]
async fn usage_extracts_vue_blocks() {
    let control = control_plane().await;
    let usage = control
        .component_usage("button", ComponentKind::Components)
        .await
        .expect("button usage");
    assert!(usage.starts_with("````vue\n<script setup lang=\"ts\">"));
    assert!(usage.ends_with("</script>\n````"));
}

#[tokio::test]
async fn unknown_components_are_rejected() {
    let control = control_plane().await;
    let err = control
        .component_doc("hero-banner", ComponentKind::Components)
        .await
        .expect_err("unknown component");
    assert!(matches!(err, ControlError::InvalidInput(_)));
}

#[tokio::test]
async fn library_docs_filter_and_keep_order() {
    let control = control_plane().await;
    let filtered = FilteredComponents {
        components: vec![
            ComponentSelection::new("button", Necessity::Critical, "submit"),
            ComponentSelection::new("card", Necessity::Important, "layout"),
            ComponentSelection::new("tooltip", Necessity::Optional, "hints"),
        ],
        charts: vec![ComponentSelection::new("area", Necessity::Important, "trend")],
    };

    let docs = control.library_docs(filtered, Necessity::Important).await;
    let names: Vec<&str> = docs.iter().map(|doc| doc.name.as_str()).collect();
    assert_eq!(names, vec!["button", "card", "area"]);
    assert_eq!(docs[0].doc.as_deref(), Some("button docs (700 tokens)"));
    assert_eq!(docs[1].doc, None);
    assert_eq!(docs[2].kind, ComponentKind::Charts);
    assert_eq!(docs[2].doc.as_deref(), Some("area chart docs"));
}

#[tokio::test]
async fn metadata_is_extracted_and_cached() {
    let control = control_plane().await;
    let metadata = control
        .component_metadata("button", true)
        .await
        .expect("button metadata");

    assert_eq!(metadata.len(), 1);
    assert_eq!(metadata[0].file.export_name, "Button");
    assert_eq!(metadata[0].dependencies.utilities, vec!["@/lib/utils".to_string()]);
    assert_eq!(
        metadata[0].dependencies.components,
        vec!["@/components/ui/spinner".to_string()]
    );
    let props: Vec<(&str, Option<&str>)> = metadata[0]
        .props
        .iter()
        .map(|prop| (prop.name.as_str(), prop.default.as_deref()))
        .collect();
    assert_eq!(props, vec![("variant", Some("'default'")), ("loading", None)]);
    assert_eq!(metadata[0].events[0].name, "press");
    assert_eq!(metadata[0].events[0].payload, vec!["event: MouseEvent"]);
    assert_eq!(metadata[0].slots.len(), 1);
    assert_eq!(metadata[0].slots[0].name, "default");
    assert_eq!(control.cache_stats().await.size, 1);

    control.clear_cache().await;
    assert_eq!(control.cache_stats().await.size, 0);
}

#[tokio::test]
async fn metadata_for_missing_registry_entry_is_not_found() {
    let control = control_plane().await;
    let err = control
        .component_metadata("card", false)
        .await
        .expect_err("card is not served");
    assert!(matches!(err, ControlError::NotFound(_)));
    assert_eq!(control.cache_stats().await.size, 0);
}

#[tokio::test]
async fn reads_escaped_component_files() {
    let control = control_plane().await;
    let dir = std::env::temp_dir().join(format!("shadcn-vue-core-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.expect("temp dir");
    let file = dir.join("Escaped.vue");
    tokio::fs::write(&file, r"<script setup>\nconst a = 1\n</script>\n<template><div /></template>")
        .await
        .expect("write component");

    let path = file.to_string_lossy().into_owned();
    let source = control.read_component_source(&path).await.expect("read component");
    assert!(source.code.contains("<script setup>\nconst a = 1\n</script>"));
    assert!(source.sections.has_script());
    assert!(source.sections.has_template());

    let missing = dir.join("Missing.vue").to_string_lossy().into_owned();
    assert!(matches!(
        control.read_component_source(&missing).await,
        Err(ControlError::NotFound(_))
    ));
    assert!(matches!(
        control.read_component_source("relative/Comp.vue").await,
        Err(ControlError::InvalidInput(_))
    ));
    assert!(matches!(
        control.read_component_source(&file.with_extension("ts").to_string_lossy()).await,
        Err(ControlError::InvalidInput(_))
    ));

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn unreachable_cdn_still_falls_back_to_raw() {
    let control = control_plane_with_unreachable_cdn().await;
    let usage = control
        .component_usage("badge", ComponentKind::Components)
        .await
        .expect("badge usage from raw");
    assert_eq!(usage, NO_USAGE_EXAMPLES);
}

#[tokio::test]
async fn unreachable_cdn_and_missing_raw_page_yield_fallback_text() {
    let control = control_plane_with_unreachable_cdn().await;
    let doc = control
        .component_doc("card", ComponentKind::Components)
        .await
        .expect("fallback text");
    assert_eq!(doc, NO_DOCUMENTATION);

    let err = control
        .component_metadata("card", false)
        .await
        .expect_err("card is not served");
    assert!(matches!(err, ControlError::NotFound(_)));
}
