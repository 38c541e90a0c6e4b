use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use shadcn_vue_catalog::{DependencyMetadata, ExportEntry};

static DEFAULT_EXPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"export\s+\{\s*default\s+as\s+(\w+)\s*\}\s+from\s+['"`]\./([^'"`]+)['"`]"#)
        .expect("valid regex")
});
static NAMED_EXPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"export\s+\{\s*(\w+)\s*\}\s+from\s+['"`]\./([^'"`]+)['"`]"#).expect("valid regex")
});
static IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:type\s+)?(?:\{[^}]*\}|\*\s+as\s+\w+|\w+)\s+from\s+['"`]([^'"`]+)['"`]"#)
        .expect("valid regex")
});
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<template[^>]*>(.*)</template>").expect("valid regex")
});
static SCRIPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("valid regex")
});
static STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("valid regex")
});

/// Parses the component exports of a registry `index.ts`.
///
/// `export { default as Name } from './File.vue'` is preferred; when the file
/// has none of those, plain `export { Name } from './File'` lines are used.
#[must_use]
pub fn parse_index_exports(index_ts: &str) -> Vec<ExportEntry> {
    let collect = |regex: &Regex| -> Vec<ExportEntry> {
        regex
            .captures_iter(index_ts)
            .map(|caps| ExportEntry {
                export_name: caps[1].to_string(),
                file_name: caps[2].to_string(),
            })
            .collect()
    };

    let defaults = collect(&DEFAULT_EXPORT_REGEX);
    if defaults.is_empty() {
        collect(&NAMED_EXPORT_REGEX)
    } else {
        defaults
    }
}

/// Groups the import paths of a component source.
#[must_use]
pub fn extract_dependencies(source: &str) -> DependencyMetadata {
    let mut dependencies = DependencyMetadata::default();
    for caps in IMPORT_REGEX.captures_iter(source) {
        let path = caps[1].to_string();
        if path.contains("components/") {
            dependencies.components.push(path);
        } else if path.contains("utils/") || path.contains("lib/") {
            dependencies.utilities.push(path);
        } else if path.contains(".css") || path.contains(".scss") {
            dependencies.styles.push(path);
        }
    }
    dependencies
}

/// The top-level blocks of a single-file component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SfcSections {
    pub template: Option<String>,
    pub script: Option<String>,
    pub style: Option<String>,
}

impl SfcSections {
    #[must_use]
    pub fn parse(code: &str) -> Self {
        let section = |regex: &Regex| {
            regex
                .captures(code)
                .map(|caps| caps[1].trim().to_string())
        };
        Self {
            template: section(&TEMPLATE_REGEX),
            script: section(&SCRIPT_REGEX),
            style: section(&STYLE_REGEX),
        }
    }

    #[must_use]
    pub const fn has_template(&self) -> bool {
        self.template.is_some()
    }

    #[must_use]
    pub const fn has_script(&self) -> bool {
        self.script.is_some()
    }

    #[must_use]
    pub const fn has_style(&self) -> bool {
        self.style.is_some()
    }
}

/// Bodies of every `<script>` block, or the whole file when it has none.
pub(crate) fn script_blocks(code: &str) -> Vec<&str> {
    let blocks: Vec<&str> = SCRIPT_REGEX
        .captures_iter(code)
        .filter_map(|caps| caps.get(1))
        .map(|body| body.as_str())
        .collect();
    if blocks.is_empty() {
        vec![code]
    } else {
        blocks
    }
}

/// A component needs both a template and a script block.
#[must_use]
pub fn is_valid_vue_component(code: &str) -> bool {
    let sections = SfcSections::parse(code);
    sections.has_template() && sections.has_script()
}

/// Escapes component code into a single-line string literal body.
#[must_use]
pub fn serialize_component_code(code: &str) -> String {
    let mut escaped = String::with_capacity(code.len());
    for ch in code.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Reverses [`serialize_component_code`]. Unknown escapes are kept verbatim.
#[must_use]
pub fn deserialize_component_code(escaped: &str) -> String {
    let mut code = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            code.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => code.push('\n'),
            Some('t') => code.push('\t'),
            Some('r') => code.push('\r'),
            Some('"') => code.push('"'),
            Some('\'') => code.push('\''),
            Some('\\') => code.push('\\'),
            Some(other) => {
                code.push('\\');
                code.push(other);
            }
            None => code.push('\\'),
        }
    }
    code
}

/// True when code arrived as one escaped line instead of real source.
#[must_use]
pub fn looks_escaped(code: &str) -> bool {
    !code.contains('\n') && code.contains("\\n")
}
