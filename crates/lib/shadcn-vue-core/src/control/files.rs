use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parsers::{SfcSections, deserialize_component_code, looks_escaped};

use super::{ComponentControlPlane, ControlError};

/// A local component file read for a quality audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentSource {
    pub path: String,
    pub code: String,
    pub sections: SfcSections,
}

impl ComponentControlPlane {
    /// Reads a `.vue` file from disk, restoring code that was saved escaped.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` for relative or non-`.vue` paths,
    /// `ControlError::NotFound` when the file does not exist, and
    /// `ControlError::Io` for other read failures.
    pub async fn read_component_source(&self, path: &str) -> Result<ComponentSource, ControlError> {
        let trimmed = path.trim();
        let file = Path::new(trimmed);
        if !file.is_absolute() {
            return Err(ControlError::InvalidInput(format!(
                "component path must be absolute: {trimmed}"
            )));
        }
        let is_vue = file
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("vue"));
        if !is_vue {
            return Err(ControlError::InvalidInput(format!(
                "component path must point to a .vue file: {trimmed}"
            )));
        }

        let raw = tokio::fs::read_to_string(file).await?;
        let code = if looks_escaped(&raw) {
            debug!(path = trimmed, "restoring escaped component source");
            deserialize_component_code(&raw)
        } else {
            raw
        };
        let sections = SfcSections::parse(&code);
        Ok(ComponentSource {
            path: trimmed.to_string(),
            code,
            sections,
        })
    }
}
