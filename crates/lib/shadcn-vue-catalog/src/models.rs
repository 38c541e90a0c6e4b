use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How strongly a selected component is needed by the requested UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Necessity {
    Critical,
    Important,
    Optional,
}

impl Necessity {
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Important => 2,
            Self::Optional => 1,
        }
    }

    /// Returns true when this necessity is at least as strong as `min`.
    #[must_use]
    pub const fn meets(self, min: Self) -> bool {
        self.score() >= min.score()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for Necessity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog section a component lives in. Doubles as the docs directory name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Components,
    Charts,
}

impl ComponentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Charts => "charts",
        }
    }

    /// Singular label used in rendered prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Components => "component",
            Self::Charts => "chart",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a components-filter answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentSelection {
    pub name: String,
    pub necessity: Necessity,
    pub justification: String,
}

impl ComponentSelection {
    pub fn new(
        name: impl Into<String>,
        necessity: Necessity,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            necessity,
            justification: justification.into(),
        }
    }
}

/// Components and charts picked for a requirement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilteredComponents {
    #[serde(default)]
    pub components: Vec<ComponentSelection>,
    #[serde(default)]
    pub charts: Vec<ComponentSelection>,
}

impl FilteredComponents {
    /// Drops every selection weaker than `min`.
    #[must_use]
    pub fn retain_necessity(mut self, min: Necessity) -> Self {
        self.components.retain(|item| item.necessity.meets(min));
        self.charts.retain(|item| item.necessity.meets(min));
        self
    }
}

/// Source code of a single demo file, `name` without the `.vue` suffix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoSource {
    pub name: String,
    pub code: String,
}

/// Library documentation returned for one selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryDoc {
    pub name: String,
    pub kind: ComponentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

/// Export declared by a registry `index.ts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportEntry {
    pub export_name: String,
    pub file_name: String,
}

/// Import paths of a component file, grouped by what they point at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyMetadata {
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub utilities: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
}

/// A prop declared through `defineProps`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
    /// Source text of the `withDefaults` value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// A `<slot>` outlet and the names it binds for the parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotMetadata {
    pub name: String,
    #[serde(default)]
    pub props: Vec<String>,
}

/// An event declared through `defineEmits`, payload as `name: type` entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventMetadata {
    pub name: String,
    #[serde(default)]
    pub payload: Vec<String>,
}

/// Metadata extracted from one registry file of a component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub name: String,
    pub file: ExportEntry,
    #[serde(default)]
    pub props: Vec<PropMetadata>,
    #[serde(default)]
    pub slots: Vec<SlotMetadata>,
    #[serde(default)]
    pub events: Vec<EventMetadata>,
    pub dependencies: DependencyMetadata,
    pub extracted_at: DateTime<Utc>,
    pub version: String,
}

/// Snapshot of the metadata cache counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn necessity_threshold_follows_scores() {
        assert!(Necessity::Critical.meets(Necessity::Important));
        assert!(Necessity::Important.meets(Necessity::Important));
        assert!(!Necessity::Optional.meets(Necessity::Important));
        assert!(Necessity::Optional.meets(Necessity::Optional));
    }

    #[test]
    fn filtered_components_drop_weak_selections() {
        let filtered = FilteredComponents {
            components: vec![
                ComponentSelection::new("button", Necessity::Critical, "submit"),
                ComponentSelection::new("tooltip", Necessity::Optional, "hints"),
            ],
            charts: vec![ComponentSelection::new("bar", Necessity::Important, "totals")],
        }
        .retain_necessity(Necessity::Important);

        assert_eq!(filtered.components.len(), 1);
        assert_eq!(filtered.components[0].name, "button");
        assert_eq!(filtered.charts.len(), 1);
    }

    #[test]
    fn selection_deserializes_from_filter_answer() {
        let json = r#"{"components":[{"name":"card","necessity":"important","justification":"layout"}]}"#;
        let parsed: FilteredComponents = serde_json::from_str(json).expect("valid answer");
        assert_eq!(parsed.components[0].necessity, Necessity::Important);
        assert!(parsed.charts.is_empty());
    }
}
