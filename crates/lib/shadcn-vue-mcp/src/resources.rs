use rmcp::ErrorData;
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};
use shadcn_vue_core::templates::{QUALITY_PROFILE_URI, quality_profile};

const JSON_MIME: &str = "application/json";

/// Resources advertised by the server.
pub fn list() -> Vec<Resource> {
    let mut profile = RawResource::new(QUALITY_PROFILE_URI, "Component Quality Profile");
    profile.description =
        Some("Structured quality profile the generated components are scored against".to_string());
    profile.mime_type = Some(JSON_MIME.to_string());
    vec![profile.no_annotation()]
}

/// Reads a resource by URI.
pub fn read(uri: &str) -> Result<ReadResourceResult, ErrorData> {
    if uri != QUALITY_PROFILE_URI {
        return Err(ErrorData::resource_not_found(
            format!("unknown resource: {uri}"),
            None,
        ));
    }
    let text = serde_json::to_string_pretty(&quality_profile())
        .map_err(|err| ErrorData::internal_error(err.to_string(), None))?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}
