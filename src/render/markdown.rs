//! GitHub-flavored markdown renderer.
//!
//! A reading copy of the API reference: one section per documentation ID
//! with a table per member bucket. Member bodies are already HTML, which
//! GFM passes through, so they are flattened onto one line per table row.

use crate::error::DocError;
use crate::model::{AccessModifier, DocBlock, DocKind, DocSet, Documentation};
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, docs: &DocSet) -> Result<String, DocError> {
        let mut output = String::from("# API reference\n\n");

        if !docs.is_empty() {
            output.push_str("## Index\n\n");
            for (id, _) in docs.iter() {
                output.push_str(&toc::render_toc_item(id));
                output.push('\n');
            }
            output.push('\n');
        }

        for (id, doc) in docs.iter() {
            output.push_str(&format!("## {}\n\n", id));
            match doc {
                Some(doc) => output.push_str(&render_documentation(doc)),
                None => output.push_str("_No exported class found._\n\n"),
            }
        }

        Ok(output)
    }
}

fn render_documentation(doc: &Documentation) -> String {
    let mut lines: Vec<String> = Vec::new();

    let kind = match doc.kind {
        DocKind::Component => "component",
        DocKind::Service => "service",
    };
    lines.push(format!("_{}_\n", kind));

    if !doc.main.is_empty() {
        lines.push(doc.main.trim_end().to_string());
        lines.push(String::new());
    }

    if !doc.inputs.is_empty() {
        lines.push("### Inputs\n".to_string());
        lines.extend(property_table(&doc.inputs));
    }
    if !doc.outputs.is_empty() {
        lines.push("### Outputs\n".to_string());
        lines.extend(property_table(&doc.outputs));
    }
    if !doc.properties.is_empty() {
        lines.push("### Properties\n".to_string());
        lines.extend(property_table(&doc.properties));
    }
    if !doc.methods.is_empty() {
        lines.push("### Methods\n".to_string());
        lines.push("| Signature | Returns | Description |".to_string());
        lines.push("|---|---|---|".to_string());
        for method in &doc.methods {
            let args = method.method_args.as_deref().unwrap_or_default().join(", ");
            lines.push(format!(
                "| {} | {} | {} |",
                member_cell(method, &format!("{}({})", method.identifier, args)),
                code_cell(method.ty.as_deref()),
                table_cell(&method.body)
            ));
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn property_table(blocks: &[DocBlock]) -> Vec<String> {
    let mut lines = vec![
        "| Name | Type | Default | Description |".to_string(),
        "|---|---|---|---|".to_string(),
    ];
    for block in blocks {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            member_cell(block, &block.identifier),
            code_cell(block.ty.as_deref()),
            code_cell(block.default_value.as_deref()),
            table_cell(&block.body)
        ));
    }
    lines.push(String::new());
    lines
}

/// Member name in code style, with its accessibility when not public.
fn member_cell(block: &DocBlock, label: &str) -> String {
    match block.access_modifier {
        AccessModifier::Public => code_cell(Some(label)),
        other => format!("{} _{}_", code_cell(Some(label)), other.as_str()),
    }
}

fn code_cell(text: Option<&str>) -> String {
    match text {
        Some(t) => format!("`{}`", table_cell(t)),
        None => "-".to_string(),
    }
}

/// Flatten onto a single line and escape the column separator.
fn table_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_index_and_tables() {
        let mut doc = Documentation::new(DocKind::Component);
        doc.main = "<p>A modal.</p>\n".into();
        doc.inputs.push(DocBlock {
            identifier: "size".into(),
            body: "<p>Size of\nthe dialog.</p>\n".into(),
            ty: Some("'sm' | 'lg'".into()),
            default_value: Some("'sm'".into()),
            ..Default::default()
        });
        doc.methods.push(DocBlock {
            identifier: "close".into(),
            ty: Some("void".into()),
            access_modifier: AccessModifier::Protected,
            method_args: Some(vec!["reason: string".into()]),
            ..Default::default()
        });
        let mut docs = DocSet::default();
        docs.insert("modal".into(), Some(doc));
        docs.insert("types".into(), None);

        let out = MarkdownRenderer.render(&docs).unwrap();
        assert!(out.contains("* [modal](#modal)"));
        assert!(out.contains("## modal\n\n_component_\n"));
        assert!(out.contains("<p>A modal.</p>"));
        assert!(out.contains("| `size` | `'sm' \\| 'lg'` | `'sm'` | <p>Size of the dialog.</p> |"));
        assert!(out.contains("| `close(reason: string)` _protected_ | `void` |  |"));
        assert!(out.contains("## types\n\n_No exported class found._"));
    }

    #[test]
    fn missing_type_renders_dash() {
        let mut doc = Documentation::new(DocKind::Service);
        doc.properties.push(DocBlock {
            identifier: "handler".into(),
            ..Default::default()
        });
        let mut docs = DocSet::default();
        docs.insert("svc".into(), Some(doc));
        let out = MarkdownRenderer.render(&docs).unwrap();
        assert!(out.contains("| `handler` | - | - |  |"));
    }
}
