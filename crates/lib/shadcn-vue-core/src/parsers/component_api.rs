//! Props, events and slots declared by a single-file component.
//!
//! Extraction is lexical. Type arguments of `defineProps` and `defineEmits`
//! are read when they are object literals or interfaces declared in the same
//! file; imported types contribute nothing.

use std::sync::LazyLock;

use regex::Regex;
use shadcn_vue_catalog::{EventMetadata, PropMetadata, SlotMetadata};

use super::vue_sfc::{SfcSections, script_blocks};

const DEFAULT_SLOT: &str = "default";

static DEFINE_PROPS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdefineProps\s*<").expect("valid regex"));
static WITH_DEFAULTS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bwithDefaults\s*\(\s*\z").expect("valid regex"));
static DEFAULTS_TAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\(\s*\)\s*,\s*\{").expect("valid regex"));
static DEFINE_EMITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdefineEmits\s*<").expect("valid regex"));
static EMITS_ARRAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bdefineEmits\s*\(\s*\[([^\]]*)\]").expect("valid regex")
});
static QUOTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).expect("valid regex"));
static MEMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)^(?:readonly\s+)?(?:'([^']+)'|"([^"]+)"|([A-Za-z_$][\w$]*))\s*(\?)?\s*:(.*)$"#,
    )
    .expect("valid regex")
});
static CALL_SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)^\(\s*\w+\s*:\s*['"]([^'"]+)['"]\s*(?:,(.*))?\)\s*:\s*void$"#)
        .expect("valid regex")
});
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:interface\s+([A-Za-z_$][\w$]*)\b[^{=;]*|type\s+([A-Za-z_$][\w$]*)\s*=\s*)\{",
    )
    .expect("valid regex")
});
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("valid regex"));
static SLOT_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<slot\b([^>]*)>").expect("valid regex"));
static SLOT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)name\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});
static SLOT_BINDING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)(?:v-bind)?:([\w-]+)\s*=").expect("valid regex")
});

/// One `name: value` entry of a type literal or object literal.
#[derive(Debug)]
struct Member {
    name: String,
    optional: bool,
    value: String,
}

/// Props declared with `defineProps<...>()`, defaults taken from `withDefaults`.
#[must_use]
pub fn extract_props(code: &str) -> Vec<PropMetadata> {
    let script = script_source(code);
    let Some(found) = DEFINE_PROPS_REGEX.find(&script) else {
        return Vec::new();
    };
    let Some((type_arg, after)) = enclosed(&script, found.end() - 1) else {
        return Vec::new();
    };
    let defaults = if WITH_DEFAULTS_REGEX.is_match(&script[..found.start()]) {
        defaults_object(&script[after..])
    } else {
        Vec::new()
    };

    type_bodies(&script, type_arg)
        .into_iter()
        .flat_map(members)
        .map(|member| PropMetadata {
            default: defaults
                .iter()
                .find(|entry| entry.name == member.name)
                .map(|entry| entry.value.clone()),
            required: !member.optional,
            type_name: member.value,
            name: member.name,
        })
        .collect()
}

/// Events declared with `defineEmits`.
///
/// Call signatures, named tuples and the runtime array form are understood.
#[must_use]
pub fn extract_events(code: &str) -> Vec<EventMetadata> {
    let script = script_source(code);
    if let Some(found) = DEFINE_EMITS_REGEX.find(&script) {
        let Some((type_arg, _)) = enclosed(&script, found.end() - 1) else {
            return Vec::new();
        };
        return type_bodies(&script, type_arg)
            .into_iter()
            .flat_map(event_signatures)
            .collect();
    }

    EMITS_ARRAY_REGEX
        .captures(&script)
        .map(|caps| {
            QUOTED_REGEX
                .captures_iter(&caps[1])
                .map(|quoted| EventMetadata {
                    name: quoted[1].to_string(),
                    payload: Vec::new(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `<slot>` outlets of the template. Unnamed outlets are the `default` slot.
///
/// Repeated outlets with the same name are merged.
#[must_use]
pub fn extract_slots(code: &str) -> Vec<SlotMetadata> {
    let template = SfcSections::parse(code)
        .template
        .unwrap_or_else(|| code.to_string());
    let mut slots: Vec<SlotMetadata> = Vec::new();

    for caps in SLOT_TAG_REGEX.captures_iter(&template) {
        let attrs = &caps[1];
        let name = SLOT_NAME_REGEX
            .captures(attrs)
            .map_or_else(|| DEFAULT_SLOT.to_string(), |name| name[1].to_string());
        let index = match slots.iter().position(|slot| slot.name == name) {
            Some(index) => index,
            None => {
                slots.push(SlotMetadata {
                    name,
                    props: Vec::new(),
                });
                slots.len() - 1
            }
        };

        let slot = &mut slots[index];
        for binding in SLOT_BINDING_REGEX.captures_iter(attrs) {
            let prop = &binding[1];
            if prop != "name" && !slot.props.iter().any(|known| known == prop) {
                slot.props.push(prop.to_string());
            }
        }
    }
    slots
}

fn script_source(code: &str) -> String {
    strip_comments(&script_blocks(code).join("\n"))
}

fn event_signatures(body: &str) -> Vec<EventMetadata> {
    let segments = split_top_level(body, |ch| matches!(ch, ',' | ';' | '\n'));
    let mut events: Vec<EventMetadata> = segments
        .into_iter()
        .filter_map(|segment| CALL_SIGNATURE_REGEX.captures(segment.trim()))
        .map(|caps| EventMetadata {
            name: caps[1].to_string(),
            payload: caps.get(2).map(|args| payload(args.as_str())).unwrap_or_default(),
        })
        .collect();

    for member in members(body) {
        if let Some(inner) = member
            .value
            .strip_prefix('[')
            .and_then(|value| value.strip_suffix(']'))
        {
            events.push(EventMetadata {
                payload: payload(inner),
                name: member.name,
            });
        }
    }
    events
}

fn payload(args: &str) -> Vec<String> {
    split_top_level(args, |ch| ch == ',')
        .into_iter()
        .map(normalize)
        .filter(|arg| !arg.is_empty())
        .collect()
}

/// Reads the object literal passed as the second argument of `withDefaults`.
fn defaults_object(rest: &str) -> Vec<Member> {
    let Some(tail) = DEFAULTS_TAIL_REGEX.find(rest) else {
        return Vec::new();
    };
    enclosed(rest, tail.end() - 1)
        .map(|(body, _)| members(body))
        .unwrap_or_default()
}

/// Object bodies behind a type argument such as `Props & { class?: string }`.
fn type_bodies<'a>(script: &'a str, type_arg: &'a str) -> Vec<&'a str> {
    split_top_level(type_arg, |ch| ch == '&')
        .into_iter()
        .filter_map(|part| {
            let part = part.trim();
            if part.starts_with('{') {
                enclosed(part, 0).map(|(body, _)| body)
            } else if IDENT_REGEX.is_match(part) {
                local_declaration(script, part)
            } else {
                None
            }
        })
        .collect()
}

fn local_declaration<'a>(script: &'a str, name: &str) -> Option<&'a str> {
    DECLARATION_REGEX.captures_iter(script).find_map(|caps| {
        let declared = caps.get(1).or_else(|| caps.get(2))?;
        if declared.as_str() != name {
            return None;
        }
        let whole = caps.get(0)?;
        enclosed(script, whole.end() - 1).map(|(body, _)| body)
    })
}

/// Parses `name?: value` entries separated by commas, semicolons or newlines.
///
/// Lines that start with `|` or `&`, or follow a value that is still open,
/// continue the previous entry.
fn members(body: &str) -> Vec<Member> {
    let mut members: Vec<Member> = Vec::new();
    for segment in split_top_level(body, |ch| matches!(ch, ',' | ';' | '\n')) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some(last) = members.last_mut()
            && continues(&last.value, segment)
        {
            last.value.push(' ');
            last.value.push_str(segment);
            continue;
        }
        if let Some(caps) = MEMBER_REGEX.captures(segment) {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |name| name.as_str());
            members.push(Member {
                name: name.to_string(),
                optional: caps.get(4).is_some(),
                value: caps[5].trim().to_string(),
            });
        }
    }
    for member in &mut members {
        member.value = normalize(&member.value);
    }
    members
}

fn continues(previous: &str, segment: &str) -> bool {
    let previous = previous.trim_end();
    previous.is_empty()
        || previous.ends_with(['|', '&'])
        || previous.ends_with("=>")
        || segment.starts_with(['|', '&'])
}

fn normalize(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_start_matches(['|', '&'])
        .trim_start()
        .to_string()
}

/// Returns the text inside the bracket at `open_at` and the offset past its closer.
fn enclosed(text: &str, open_at: usize) -> Option<(&str, usize)> {
    let rest = text.get(open_at..)?;
    if !rest.starts_with(['{', '(', '[', '<']) {
        return None;
    }
    code_chars(rest)
        .into_iter()
        .skip(1)
        .find(|(_, _, depth)| *depth == 0)
        .map(|(at, _, _)| (&rest[1..at], open_at + at + 1))
}

fn split_top_level(text: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (at, ch, depth) in code_chars(text) {
        if depth == 0 && is_separator(ch) {
            parts.push(&text[start..at]);
            start = at + ch.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Characters outside string literals with the bracket depth after each one.
///
/// The `>` of an arrow does not close anything.
fn code_chars(text: &str) -> Vec<(usize, char, usize)> {
    let mut chars = Vec::with_capacity(text.len());
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev = '\0';

    for (at, ch) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            prev = ch;
            continue;
        }
        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '{' | '(' | '[' | '<' => depth += 1,
            '}' | ')' | ']' => depth = depth.saturating_sub(1),
            '>' if prev != '=' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if quote.is_none() {
            chars.push((at, ch, depth));
        }
        prev = ch;
    }
    chars
}

fn strip_comments(script: &str) -> String {
    let mut out = String::with_capacity(script.len());
    let mut chars = script.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(ch) = chars.next() {
        if let Some(open) = quote {
            out.push(ch);
            if ch == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else if ch == open {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' | '`' => {
                quote = Some(ch);
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|next| *next != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut last = '\0';
                for next in chars.by_ref() {
                    if last == '*' && next == '/' {
                        break;
                    }
                    last = next;
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop<'a>(props: &'a [PropMetadata], name: &str) -> &'a PropMetadata {
        props
            .iter()
            .find(|prop| prop.name == name)
            .unwrap_or_else(|| panic!("missing prop {name}"))
    }

    #[test]
    fn reads_props_from_a_type_literal() {
        let code = r#"<script setup lang="ts">
import type { HTMLAttributes } from 'vue'

const props = defineProps<{
  // visual style
  variant?: 'default' | 'outline'
  size:
    | 'sm'
    | 'md'
  class?: HTMLAttributes['class']
  onSelect?: (value: string, index: number) => void
}>()
</script>

<template><div :class="props.class" /></template>
"#;
        let props = extract_props(code);
        let names: Vec<&str> = props.iter().map(|prop| prop.name.as_str()).collect();
        assert_eq!(names, vec!["variant", "size", "class", "onSelect"]);

        assert_eq!(prop(&props, "variant").type_name, "'default' | 'outline'");
        assert!(!prop(&props, "variant").required);
        assert_eq!(prop(&props, "size").type_name, "'sm' | 'md'");
        assert!(prop(&props, "size").required);
        assert_eq!(prop(&props, "class").type_name, "HTMLAttributes['class']");
        assert_eq!(
            prop(&props, "onSelect").type_name,
            "(value: string, index: number) => void"
        );
        assert!(props.iter().all(|prop| prop.default.is_none()));
    }

    #[test]
    fn reads_local_interfaces_and_with_defaults() {
        let code = r#"<script setup lang="ts">
interface Props {
  variant?: string
  items?: string[]
  label: string
}

const props = withDefaults(defineProps<Props>(), {
  variant: 'default',
  items: () => [],
})
</script>
"#;
        let props = extract_props(code);
        assert_eq!(props.len(), 3);
        assert_eq!(prop(&props, "variant").default.as_deref(), Some("'default'"));
        assert_eq!(prop(&props, "items").type_name, "string[]");
        assert_eq!(prop(&props, "items").default.as_deref(), Some("() => []"));
        assert!(prop(&props, "label").required);
        assert_eq!(prop(&props, "label").default, None);
    }

    #[test]
    fn imported_prop_types_contribute_nothing() {
        let imported = r#"<script setup lang="ts">
import type { DialogRootProps } from 'reka-ui'
const props = defineProps<DialogRootProps>()
</script>"#;
        assert!(extract_props(imported).is_empty());

        let mixed = r#"<script setup lang="ts">
const props = defineProps<PrimitiveProps & { class?: HTMLAttributes['class'] }>()
</script>"#;
        let props = extract_props(mixed);
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "class");
    }

    #[test]
    fn reads_emits_call_signatures() {
        let code = r#"<script setup lang="ts">
const emit = defineEmits<{
  (e: 'update:modelValue', payload: string | number): void
  (e: 'close'): void
}>()
</script>"#;
        assert_eq!(
            extract_events(code),
            vec![
                EventMetadata {
                    name: "update:modelValue".to_string(),
                    payload: vec!["payload: string | number".to_string()],
                },
                EventMetadata {
                    name: "close".to_string(),
                    payload: Vec::new(),
                },
            ]
        );
    }

    #[test]
    fn reads_emits_tuples_and_arrays() {
        let tuples = r#"<script setup lang="ts">
const emit = defineEmits<{
  change: [value: string, index: number]
  clear: []
}>()
</script>"#;
        let events = extract_events(tuples);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "change");
        assert_eq!(events[0].payload, vec!["value: string", "index: number"]);
        assert_eq!(events[1].name, "clear");
        assert!(events[1].payload.is_empty());

        let array = r#"<script setup>
const emit = defineEmits(['click', "select"])
</script>"#;
        let names: Vec<String> = extract_events(array)
            .into_iter()
            .map(|event| event.name)
            .collect();
        assert_eq!(names, vec!["click", "select"]);
    }

    #[test]
    fn collects_named_and_default_slots() {
        let code = r#"<script setup lang="ts">
const open = ref(false)
</script>

<template>
  <div>
    <slot name="header" :title="title" :open="open" v-bind:extra="extra" />
    <slot :item="item" />
    <slot name="header" :title="title" :size="size"></slot>
    <Slot />
  </div>
</template>
"#;
        assert_eq!(
            extract_slots(code),
            vec![
                SlotMetadata {
                    name: "header".to_string(),
                    props: vec![
                        "title".to_string(),
                        "open".to_string(),
                        "extra".to_string(),
                        "size".to_string(),
                    ],
                },
                SlotMetadata {
                    name: "default".to_string(),
                    props: vec!["item".to_string()],
                },
            ]
        );
    }

    #[test]
    fn comments_and_strings_do_not_confuse_brackets() {
        let code = r#"<script setup lang="ts">
/* defineProps<{ ghost: string }>() */
const props = defineProps<{
  label?: string // shown as "label > value"
  pattern?: RegExp
}>()
</script>"#;
        let props = extract_props(code);
        let names: Vec<&str> = props.iter().map(|prop| prop.name.as_str()).collect();
        assert_eq!(names, vec!["label", "pattern"]);
        assert_eq!(prop(&props, "label").type_name, "string");
    }
}
