//! Leading doc comment extraction and Markdown rendering.
//!
//! A member's documentation is the comment immediately before its anchor
//! node. Block comments stand alone; `//` line comments are merged with the
//! adjacent `//` lines above them.

use super::node_text;
use comrak::{markdown_to_html, Options};
use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

/// ` * ` gutter on block comment continuation lines.
static RE_GUTTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*+ ?").unwrap());

static RE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*//+ ?").unwrap());

/// Rendered documentation for the node, or `""` when it has none.
pub fn doc_body(anchor: Node<'_>, src: &str) -> String {
    leading_comment(anchor, src)
        .map(|raw| render_markdown(&strip_comment(&raw)))
        .unwrap_or_default()
}

/// Raw text of the comment that documents `anchor`, delimiters included.
pub fn leading_comment(anchor: Node<'_>, src: &str) -> Option<String> {
    let nearest = anchor.prev_sibling().filter(is_comment)?;
    if is_trailing(nearest) {
        return None;
    }

    let text = node_text(nearest, src);
    if !text.starts_with("//") {
        return Some(text.to_string());
    }

    let mut lines = vec![text];
    let mut current = nearest;
    while let Some(prev) = current.prev_sibling() {
        let adjacent = prev.end_position().row + 1 == current.start_position().row;
        if !is_comment(&prev)
            || !node_text(prev, src).starts_with("//")
            || !adjacent
            || is_trailing(prev)
        {
            break;
        }
        lines.push(node_text(prev, src));
        current = prev;
    }
    lines.reverse();
    Some(lines.join("\n"))
}

fn is_comment(node: &Node<'_>) -> bool {
    node.kind() == "comment"
}

/// A comment that shares its first row with preceding code belongs to that code.
fn is_trailing(comment: Node<'_>) -> bool {
    let mut prev = comment.prev_sibling();
    while let Some(node) = prev {
        if node.is_named() && !is_comment(&node) {
            return node.end_position().row == comment.start_position().row;
        }
        prev = node.prev_sibling();
    }
    false
}

/// Remove comment delimiters, gutters and blank edge lines.
pub fn strip_comment(raw: &str) -> String {
    let raw = raw.trim();
    let line_comment = raw.starts_with("//");
    let mut lines: Vec<String> = if line_comment {
        raw.lines()
            .map(|line| RE_LINE_COMMENT.replace(line, "").into_owned())
            .collect()
    } else {
        let inner = raw
            .strip_prefix("/**")
            .or_else(|| raw.strip_prefix("/*"))
            .unwrap_or(raw);
        let inner = inner.strip_suffix("*/").unwrap_or(inner);
        inner
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.trim_start().to_string()
                } else {
                    RE_GUTTER.replace(line, "").into_owned()
                }
            })
            .collect()
    };

    // `/** text **/` closes with an extra star
    if let Some(last) = lines.last_mut() {
        let trimmed = last.trim_end();
        if trimmed == "*" || trimmed.ends_with(" *") {
            *last = trimmed[..trimmed.len() - 1].to_string();
        }
    }

    for line in lines.iter_mut() {
        let end = line.trim_end().len();
        line.truncate(end);
    }
    // the first block line follows `/**` and has no indentation of its own
    let body_start = if line_comment { 0 } else { 1.min(lines.len()) };
    dedent(&mut lines[body_start..]);

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

/// Remove the indentation shared by all non-blank lines.
///
/// Indentation is counted in whitespace characters, not bytes, so wide
/// spaces such as U+3000 count as one column.
fn dedent(lines: &mut [String]) {
    let indent = lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);
    if indent == 0 {
        return;
    }
    for line in lines.iter_mut().filter(|l| !l.is_empty()) {
        let cut = line.char_indices().nth(indent).map_or(line.len(), |(i, _)| i);
        line.drain(..cut);
    }
}

/// Render comment Markdown to HTML. Empty input renders as an empty string.
pub fn render_markdown(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.render.unsafe_ = true;
    markdown_to_html(text, &options)
}
