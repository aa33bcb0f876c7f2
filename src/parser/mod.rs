//! Syntax analyzer: tree-sitter parse and exported-class lookup.
//!
//! Files ending in `.tsx` use the TSX grammar; everything else is parsed as
//! plain TypeScript.

pub mod classify;
pub mod comment;
pub mod extract;
pub mod infer;

use crate::error::DocError;
use std::path::{Path, PathBuf};
use tracing::warn;
use tree_sitter::{Language, Node, Parser, Tree};

/// One source file and its syntax tree.
pub struct SourceUnit {
    path: PathBuf,
    text: String,
    tree: Tree,
}

/// The class chosen for documentation.
#[derive(Debug, Clone, Copy)]
pub struct ClassDecl<'t> {
    /// `class_declaration`, `abstract_class_declaration` or `class` node
    pub node: Node<'t>,
    /// Node whose preceding comment documents the class. This is the
    /// enclosing `export_statement` when there is one.
    pub anchor: Node<'t>,
}

impl SourceUnit {
    pub fn parse(path: &Path, text: String) -> Result<Self, DocError> {
        let mut parser = Parser::new();
        parser.set_language(&language_for(path))?;

        let tree = parser.parse(&text, None).ok_or_else(|| DocError::Parse {
            path: path.to_path_buf(),
        })?;
        if tree.root_node().has_error() {
            warn!(
                path = %path.display(),
                "syntax errors in source, documentation may be incomplete"
            );
        }

        Ok(SourceUnit {
            path: path.to_path_buf(),
            text,
            tree,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// First exported class in document order, if any.
    pub fn exported_class(&self) -> Option<ClassDecl<'_>> {
        find_exported_class(self.tree.root_node())
    }
}

fn language_for(path: &Path) -> Language {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsx") => tree_sitter_typescript::LANGUAGE_TSX.into(),
        _ => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
    }
}

fn is_class_declaration(kind: &str) -> bool {
    matches!(kind, "class_declaration" | "abstract_class_declaration")
}

/// Pre-order, left-to-right search. Import and export statements are never
/// descended into; a top-level class declaration counts as exported.
fn find_exported_class(node: Node<'_>) -> Option<ClassDecl<'_>> {
    match node.kind() {
        "import_statement" => return None,
        "export_statement" => return exported_declaration(node),
        kind if is_class_declaration(kind)
            && node.parent().is_some_and(|p| p.kind() == "program") =>
        {
            return Some(ClassDecl { node, anchor: node });
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_exported_class(child) {
            return Some(found);
        }
    }
    None
}

/// `export class X {}`, `export default class X {}` or `export default class {}`.
fn exported_declaration(export: Node<'_>) -> Option<ClassDecl<'_>> {
    let class = export
        .child_by_field_name("declaration")
        .filter(|decl| is_class_declaration(decl.kind()))
        .or_else(|| {
            export
                .child_by_field_name("value")
                .filter(|value| value.kind() == "class")
        })?;
    Some(ClassDecl {
        node: class,
        anchor: export,
    })
}

/// Source text covered by `node`.
pub(crate) fn node_text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    &src[node.byte_range()]
}

/// Type text of a `type_annotation` (or return annotation), without the colon.
pub(crate) fn annotation_text(node: Node<'_>, src: &str) -> String {
    let text = node_text(node, src).trim();
    text.strip_prefix(':').unwrap_or(text).trim().to_string()
}

#[cfg(test)]
pub(crate) fn parse_ts(src: &str) -> SourceUnit {
    SourceUnit::parse(Path::new("test.ts"), src.to_string()).unwrap()
}
