//! Prompt templates handed back to the calling assistant.
//!
//! Every template is a pure function over its inputs; the assistant is the one
//! that reads the instructions and produces code.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shadcn_vue_catalog::catalog::{CHARTS, COMPONENTS};
use shadcn_vue_catalog::{ComponentKind, LibraryDoc};

use crate::parsers::SfcSections;

pub const QUALITY_PROFILE_URI: &str = "standards://quality-profile";

const NO_LIBRARY_DOC: &str = "_No documentation available._";

/// Icon set the generated component should draw from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum IconLibrary {
    #[default]
    #[serde(rename = "lucide")]
    Lucide,
    #[serde(rename = "nuxt-icon", alias = "@nuxt/icon")]
    NuxtIcon,
}

impl IconLibrary {
    const fn guidance(self) -> &'static str {
        match self {
            Self::Lucide => {
                "Use Lucide icons from `lucide-vue-next`, e.g. `<Search class=\"size-4\" />`."
            }
            Self::NuxtIcon => {
                "Use `@nuxt/icon` collections such as heroicons or tabler, e.g. `<Icon name=\"heroicons:magnifying-glass\" />`."
            }
        }
    }
}

/// Asks the assistant to turn a free-form request into a JSON blueprint.
#[must_use]
pub fn requirement_structuring_prompt(message: &str) -> String {
    format!(
        r#"You are a Vue 3 front-end architect who builds interfaces with shadcn-vue.
Read the request below, work out what the user is really trying to build, and
describe it as a JSON blueprint. Include the features a production-ready
component needs even when the user did not mention them: loading, empty and
error states, keyboard access, and sensible validation.

REQUEST: "{message}"

Answer with a single JSON object and nothing else:

{{
  "main_goal": "one sentence describing what the component is for",
  "data_structure": {{
    "propertyName": "TypeScript type - what the value holds"
  }},
  "user_actions": {{
    "actionName": "what triggers the action and what it changes"
  }}
}}

After printing the JSON, call the components-filter tool with it."#
    )
}

/// Asks the assistant to pick the catalog entries a blueprint needs.
#[must_use]
pub fn components_filter_prompt(message: &str) -> String {
    let mut prompt = String::from(
        "Respond with JSON only. Pick the smallest set of shadcn-vue components and \
         charts that can implement the interface described in <user-message>.\n\n\
         Rules:\n\
         - choose names from the lists below and nowhere else\n\
         - when something you want is missing, compose it from listed entries\n\
         - skip nice-to-have pieces the description does not call for\n\
         - give every pick a one or two sentence justification tied to the requirement\n\n\
         AVAILABLE COMPONENTS:\n",
    );
    for entry in COMPONENTS {
        let _ = writeln!(prompt, "- {}: {}", entry.name, entry.description);
    }
    prompt.push_str("\nAVAILABLE CHARTS:\n");
    for entry in CHARTS {
        let _ = writeln!(prompt, "- {}: {}", entry.name, entry.description);
    }
    prompt.push_str(
        r#"
RESPONSE FORMAT:
{
  "components": [
    { "name": "component name", "necessity": "critical|important|optional", "justification": "why it is needed" }
  ],
  "charts": [
    { "name": "chart name", "necessity": "critical|important|optional", "justification": "why it is needed" }
  ]
}
"#,
    );
    let _ = write!(
        prompt,
        "\n<user-message>{message}</user-message>\n\nAfter printing the JSON, call the all-components-doc tool with it."
    );
    prompt
}

/// Renders fetched library docs as `# Components` and `# Charts` sections.
#[must_use]
pub fn structured_docs_markdown(docs: &[LibraryDoc]) -> String {
    let mut markdown = String::new();
    for (kind, title) in [
        (ComponentKind::Components, "Components"),
        (ComponentKind::Charts, "Charts"),
    ] {
        let mut section = docs.iter().filter(|doc| doc.kind == kind).peekable();
        if section.peek().is_none() {
            continue;
        }
        let _ = writeln!(markdown, "# {title}\n");
        for doc in section {
            let body = doc.doc.as_deref().unwrap_or(NO_LIBRARY_DOC);
            let _ = writeln!(markdown, "## {}\n\n{}\n", doc.name, body.trim_end());
        }
    }
    markdown
}

/// Final implementation instructions appended after the component docs.
#[must_use]
pub fn create_component_prompt(icon: IconLibrary) -> String {
    format!(
        r#"<role>
You are a Vue 3 engineer fluent in shadcn-vue, Tailwind CSS, accessibility and performance work.
</role>

<prerequisites>
Read the {QUALITY_PROFILE_URI} resource before writing code. It scores five
dimensions at 20% each: accessibility, performance, consistency,
maintainability and developer experience. Target grade A (450 of 500 points or more).
</prerequisites>

<instructions>
- Implement every function body and wire every binding and event in the template.
- Walk the quality profile item by item and satisfy each one.
- Keep mock data in one clearly shaped structure and note in comments how to swap in real data.
- Review the finished code against the profile and fix anything below grade A.
</instructions>

<constraints>
- The component takes no props; everything it shows is defined inside it.
- Do not assume any data arrives from outside the component.
- Inline content in the template rather than spreading it across many variables.
</constraints>

<assets>
- Images: Unsplash, or solid colour blocks as placeholders.
- Icons: {icons}
</assets>

<expectations>
Make the result feel finished. Where the request is vague, fill the gaps with
established UX patterns instead of leaving them out.
</expectations>

<skeleton>
```vue
<script setup lang="ts">
import {{ computed, ref }} from 'vue'
// shadcn-vue imports
// icon imports
</script>

<template>
  <!-- semantic markup with ARIA where needed -->
</template>
```
</skeleton>
"#,
        icons = icon.guidance(),
    )
}

/// Describes the tool chain the assistant should run for a new component.
#[must_use]
pub fn component_builder_prompt(message: &str) -> String {
    format!(
        r"You generate Vue 3 components built on shadcn-vue that meet the quality
profile published at {QUALITY_PROFILE_URI}. Read that resource first; it defines
the five scored dimensions and the target grade of A (450+ of 500).

Call these tools in order, applying the profile at every step:

1. requirement-structuring with the request: {message}
2. components-filter with the blueprint from step 1
3. all-components-doc with the selection from step 2

Write the component into the project once step 3 returns, then run
component-quality-check on the file you wrote."
    )
}

/// Audit checklist for a component followed by its source.
#[must_use]
pub fn quality_check_prompt(code: &str, sections: &SfcSections) -> String {
    let mut prompt = String::from(QUALITY_CHECKLIST);
    let mut missing = Vec::new();
    if !sections.has_template() {
        missing.push("<template>");
    }
    if !sections.has_script() {
        missing.push("<script>");
    }
    if !missing.is_empty() {
        let _ = write!(
            prompt,
            "\nNOTE: the file has no {} block. Score the affected items as failed.\n",
            missing.join(" or ")
        );
    }
    let _ = write!(prompt, "\n```vue\n{}\n```\n", code.trim_end());
    prompt
}

const QUALITY_CHECKLIST: &str = r"You are Component-Auditor. Audit the Vue component below against every item of the checklist.

For each item replace `[ ]` with `[✅]` when the code complies, or with `[❌]`
followed by a one-line note naming the problem and the fix.

## Checklist

### Accessibility
- [ ] Semantic HTML elements for structure and controls
- [ ] Landmark roles and ARIA attributes describe the layout
- [ ] Heading levels are ordered without gaps
- [ ] Icon-only controls carry an `aria-label`
- [ ] ARIA state attributes track the UI state
- [ ] Dynamic updates are announced through live regions
- [ ] Every interactive element is reachable with Tab
- [ ] Focus order follows the visual order
- [ ] Focus is always visible
- [ ] Focus is trapped inside open dialogs and menus
- [ ] Focus returns to the trigger when an overlay closes
- [ ] Escape, Enter and Space behave as expected
- [ ] Text contrast meets WCAG 2.1 AA (4.5:1)
- [ ] Motion respects `prefers-reduced-motion`

### Performance
- [ ] Derived values use `computed`, no heavy calls in the template
- [ ] Long lists are virtualized
- [ ] Non-critical assets load lazily
- [ ] No top-level side effects that defeat tree-shaking
- [ ] Manual event listeners are removed in `onUnmounted`
- [ ] Timers are cleared in `onUnmounted`
- [ ] Observers are disconnected in `onUnmounted`
- [ ] Mock data is isolated and easy to replace

### Consistency
- [ ] Styling uses the shadcn-vue design tokens
- [ ] Props and emits follow the naming conventions
- [ ] Loading, empty and error states match the rest of the library
- [ ] Code passes lint and format checks
- [ ] Props, emits and public functions have JSDoc

### Maintainability
- [ ] The component has a single responsibility
- [ ] Logic is grouped with the Composition API
- [ ] Reusable logic lives in `use*` composables
- [ ] No anti-patterns (`v-html`, mutated props, deep `v-if` nesting)
- [ ] Functions keep cyclomatic complexity under 10

### Developer experience
- [ ] Strict TypeScript everywhere, no `any`
- [ ] The API is predictable and self-describing
- [ ] Slots allow structural customization
- [ ] Types are precise enough for good autocompletion
- [ ] Misuse produces clear warnings
- [ ] Comments explain the mock data and how to replace it

## Scoring
Each dimension is worth 100 points, split across its passed items; the total is out of 500.

| grade | points |
|-------|--------|
| A+ | 450-500 |
| A | 400-449 |
| B+ | 350-399 |
| B | 300-349 |
| C | 200-299 |
| F | 0-199 |

Report the marked checklist, the per-dimension scores, the total and the grade,
then list strengths and improvements. Below B+, revise the component and audit again.
";

/// Machine-readable quality profile served as a resource.
#[must_use]
pub fn quality_profile() -> Value {
    json!({
        "accessibility": {
            "weight": 0.2,
            "description": "The component is usable with assistive technology and keyboard only.",
            "requirements": ["WCAG 2.1 AA", "semantic HTML", "keyboard navigation"],
            "standards": {
                "semanticHtml": ["proper elements", "ordered headings", "landmark roles"],
                "aria": ["labels", "describedby", "states", "live regions"],
                "keyboard": ["tab order", "focus management", "shortcuts", "escape closes overlays"],
                "visual": { "minContrastRatio": 4.5, "focusIndicators": true, "reducedMotion": true }
            }
        },
        "performance": {
            "weight": 0.2,
            "description": "The component loads fast, renders efficiently and leaks nothing.",
            "requirements": ["fast load", "efficient rendering", "memory hygiene"],
            "standards": {
                "budgets": { "bundleKbGzip": 50, "initialRenderMs": 100 },
                "runtime": ["computed over methods", "lazy loading", "virtual scrolling"],
                "cleanup": ["event listeners", "observers", "timers"]
            },
            "webVitals": { "fcpSeconds": 1.5, "lcpSeconds": 2.5, "cls": 0.1, "fidMs": 100 }
        },
        "consistency": {
            "weight": 0.2,
            "description": "Design, API and behavior match the rest of the shadcn-vue library.",
            "requirements": ["design tokens", "API naming", "shared state patterns"],
            "standards": {
                "design": ["CSS custom properties", "4px/8px spacing grid", "shared radii and shadows"],
                "api": ["prop naming", "event naming", "slot naming"],
                "behavior": ["loading states", "error states", "empty states"]
            }
        },
        "maintainability": {
            "weight": 0.2,
            "description": "The component is easy to read, change and extend.",
            "requirements": ["clear structure", "modular logic", "documentation"],
            "standards": {
                "structure": ["single responsibility", "Composition API", "composables", "clear mock data"],
                "metrics": { "maxCyclomaticComplexity": 10, "maxDuplicationPercent": 5, "minTestCoveragePercent": 80 },
                "documentation": ["JSDoc on props and emits", "usage examples"]
            }
        },
        "developer_experience": {
            "weight": 0.2,
            "description": "The component is pleasant to adopt and hard to misuse.",
            "requirements": ["strict types", "intuitive API", "helpful diagnostics"],
            "standards": {
                "typescript": ["no any", "generic support", "precise inference"],
                "api": ["predictable", "composable", "slot driven"],
                "guidance": ["clear warnings", "mock data replacement notes"]
            }
        },
        "anti_patterns": [
            "v-html on untrusted content",
            "any in <script setup>",
            "network requests inside presentational components",
            "component nesting deeper than three levels",
            "!important in styles"
        ],
        "scoring": {
            "max_per_dimension": 100,
            "total_max": 500,
            "target_grade": "A",
            "target_score": 450,
            "grades": {
                "A+": [450, 500],
                "A": [400, 449],
                "B+": [350, 399],
                "B": [300, 349],
                "C": [200, 299],
                "F": [0, 199]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structuring_prompt_embeds_request_and_next_tool() {
        let prompt = requirement_structuring_prompt("a login form");
        assert!(prompt.contains("REQUEST: \"a login form\""));
        assert!(prompt.contains("\"main_goal\""));
        assert!(prompt.trim_end().ends_with("call the components-filter tool with it."));
    }

    #[test]
    fn filter_prompt_lists_catalog_and_wraps_message() {
        let prompt = components_filter_prompt("{\"main_goal\":\"x\"}");
        assert!(prompt.contains("- button: "));
        assert!(prompt.contains("- donut: "));
        assert!(prompt.contains("<user-message>{\"main_goal\":\"x\"}</user-message>"));
        assert!(prompt.ends_with("call the all-components-doc tool with it."));
    }

    #[test]
    fn structured_markdown_groups_by_kind() {
        let docs = vec![
            LibraryDoc {
                name: "button".to_string(),
                kind: ComponentKind::Components,
                doc: Some("Button docs".to_string()),
            },
            LibraryDoc {
                name: "area".to_string(),
                kind: ComponentKind::Charts,
                doc: None,
            },
        ];
        let markdown = structured_docs_markdown(&docs);
        let components = markdown.find("# Components").expect("components section");
        let charts = markdown.find("# Charts").expect("charts section");
        assert!(components < charts);
        assert!(markdown.contains("## button\n\nButton docs"));
        assert!(markdown.contains("## area\n\n_No documentation available._"));
    }

    #[test]
    fn structured_markdown_skips_empty_sections() {
        let docs = vec![LibraryDoc {
            name: "card".to_string(),
            kind: ComponentKind::Components,
            doc: Some("Card docs".to_string()),
        }];
        assert!(!structured_docs_markdown(&docs).contains("# Charts"));
    }

    #[test]
    fn icon_library_changes_guidance() {
        assert!(create_component_prompt(IconLibrary::Lucide).contains("lucide-vue-next"));
        let nuxt = create_component_prompt(IconLibrary::NuxtIcon);
        assert!(nuxt.contains("@nuxt/icon"));
        assert!(!nuxt.contains("lucide-vue-next"));
        let alias: IconLibrary = serde_json::from_str(r#""@nuxt/icon""#).expect("alias");
        assert_eq!(alias, IconLibrary::NuxtIcon);
    }

    #[test]
    fn builder_prompt_orders_the_tool_chain() {
        let prompt = component_builder_prompt("a pricing table");
        let first = prompt.find("1. requirement-structuring").expect("step 1");
        let second = prompt.find("2. components-filter").expect("step 2");
        let third = prompt.find("3. all-components-doc").expect("step 3");
        assert!(first < second && second < third);
        assert!(prompt.contains(QUALITY_PROFILE_URI));
        assert!(prompt.contains("a pricing table"));
    }

    #[test]
    fn quality_prompt_warns_about_missing_blocks() {
        let code = "<template><div /></template>";
        let prompt = quality_check_prompt(code, &SfcSections::parse(code));
        assert!(prompt.contains("no <script> block"));
        assert!(prompt.ends_with("```vue\n<template><div /></template>\n```\n"));

        let full = "<script setup></script>\n<template><div /></template>";
        assert!(!quality_check_prompt(full, &SfcSections::parse(full)).contains("NOTE:"));
    }

    #[test]
    fn quality_profile_weights_sum_to_one() {
        let profile = quality_profile();
        let total: f64 = [
            "accessibility",
            "performance",
            "consistency",
            "maintainability",
            "developer_experience",
        ]
        .iter()
        .filter_map(|key| profile[*key]["weight"].as_f64())
        .sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(profile["scoring"]["target_score"], 450);
    }
}
