use std::sync::LazyLock;

use regex::{Captures, Regex};
use shadcn_vue_catalog::DemoSource;
use tracing::debug;

const USAGE_HEADING: &str = "Usage";

static COMPONENT_PREVIEW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<ComponentPreview\s+name="([^"]+)"\s*/>"#).expect("valid regex")
});

/// Opening fence of a fenced code block.
#[derive(Debug, Clone, Copy)]
struct Fence<'a> {
    marker: char,
    len: usize,
    indent: usize,
    lang: &'a str,
}

/// Returns the bodies of `vue` code blocks inside the `## Usage` section.
///
/// The section runs from a level-2 `Usage` heading to the next level-2
/// heading. When a page carries more than one such heading the last one wins.
/// Only ATX headings are recognized and headings inside fences are ignored.
#[must_use]
pub fn extract_usage_vue_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut seen_usage = false;
    let mut in_usage = false;
    let mut open: Option<(Fence<'_>, Vec<&str>)> = None;

    for line in markdown.lines() {
        if let Some((fence, body)) = open.as_mut() {
            if closes_fence(line, fence) {
                if let Some((fence, body)) = open.take()
                    && fence.lang == "vue"
                    && in_usage
                {
                    blocks.push(body.join("\n"));
                }
            } else {
                body.push(strip_indent(line, fence.indent));
            }
            continue;
        }

        if let Some(fence) = opening_fence(line) {
            open = Some((fence, Vec::new()));
            continue;
        }

        if let Some((level, text)) = atx_heading(line)
            && level == 2
        {
            if text == USAGE_HEADING {
                blocks.clear();
                seen_usage = true;
                in_usage = true;
            } else {
                in_usage = false;
            }
        }
    }

    if let Some((fence, body)) = open
        && fence.lang == "vue"
        && in_usage
    {
        blocks.push(body.join("\n"));
    }

    if !seen_usage {
        debug!("no usage section found in markdown");
    }
    blocks
}

/// Wraps extracted usage blocks in a single four-backtick `vue` fence.
#[must_use]
pub fn render_usage_blocks(blocks: &[String]) -> String {
    format!("````vue\n{}\n````", blocks.join("\n"))
}

/// Replaces `<ComponentPreview name="X" />` tags with the matching demo code.
///
/// Tags without a matching demo, or whose demo has no code, are kept as-is.
#[must_use]
pub fn replace_component_previews(doc: &str, demos: &[DemoSource]) -> String {
    if demos.is_empty() {
        return doc.to_string();
    }
    COMPONENT_PREVIEW_REGEX
        .replace_all(doc, |caps: &Captures<'_>| {
            let name = &caps[1];
            demos
                .iter()
                .find(|demo| demo.name == name && !demo.code.is_empty())
                .map_or_else(
                    || caps[0].to_string(),
                    |demo| format!("```vue\n{}\n```", demo.code),
                )
        })
        .into_owned()
}

fn leading_spaces(line: &str) -> Option<usize> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    (indent <= 3).then_some(indent)
}

fn atx_heading(line: &str) -> Option<(usize, &str)> {
    let indent = leading_spaces(line)?;
    let rest = &line[indent..];
    let level = rest.len() - rest.trim_start_matches('#').len();
    if level == 0 || level > 6 {
        return None;
    }
    let after = &rest[level..];
    if !after.is_empty() && !after.starts_with([' ', '\t']) {
        return None;
    }
    let text = after.trim();
    let text = text.trim_end_matches('#').trim_end();
    Some((level, text))
}

fn opening_fence(line: &str) -> Option<Fence<'_>> {
    let indent = leading_spaces(line)?;
    let rest = &line[indent..];
    let marker = rest.chars().next().filter(|ch| matches!(*ch, '`' | '~'))?;
    let len = rest.len() - rest.trim_start_matches(marker).len();
    if len < 3 {
        return None;
    }
    let info = rest[len..].trim();
    if marker == '`' && info.contains('`') {
        return None;
    }
    let lang = info.split_whitespace().next().unwrap_or_default();
    Some(Fence {
        marker,
        len,
        indent,
        lang,
    })
}

fn closes_fence(line: &str, fence: &Fence<'_>) -> bool {
    let Some(indent) = leading_spaces(line) else {
        return false;
    };
    let rest = &line[indent..];
    let len = rest.len() - rest.trim_start_matches(fence.marker).len();
    len >= fence.len && rest[len..].trim().is_empty()
}

fn strip_indent(line: &str, indent: usize) -> &str {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    &line[spaces.min(indent)..]
}
