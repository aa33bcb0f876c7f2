//! Member extraction: walks a class body and builds the documentation record.
//!
//! Decorators on fields are children of the field node, while decorators on
//! methods are siblings that precede the method in the class body. Both are
//! collected in source order before a member is classified.

use super::classify::{decorator_name, Marker, MarkerSet};
use super::comment::doc_body;
use super::infer::infer_primitive_type;
use super::{annotation_text, node_text, ClassDecl};
use crate::model::{AccessModifier, DocBlock, DocKind, Documentation};
use tracing::debug;
use tree_sitter::Node;

/// Class body node kinds that describe a documentable member.
const MEMBER_KINDS: &[&str] = &[
    "public_field_definition",
    "field_definition",
    "method_definition",
    "method_signature",
    "abstract_method_signature",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Field,
    Getter,
    Setter,
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Inputs,
    Outputs,
    Properties,
    Methods,
}

/// A class body member with the decorators that apply to it.
struct Member<'t> {
    node: Node<'t>,
    shape: Shape,
    /// Sibling decorators followed by the member's own, in source order
    decorators: Vec<Node<'t>>,
    /// Node whose leading comment documents the member
    anchor: Node<'t>,
}

impl<'t> Member<'t> {
    fn new(node: Node<'t>, mut decorators: Vec<Node<'t>>) -> Self {
        let anchor = decorators.first().copied().unwrap_or(node);
        let mut shape = Shape::Field;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "decorator" => decorators.push(child),
                "get" => shape = Shape::Getter,
                "set" => shape = Shape::Setter,
                _ => {}
            }
        }
        if shape == Shape::Field && node.child_by_field_name("parameters").is_some() {
            shape = Shape::Method;
        }
        Member {
            node,
            shape,
            decorators,
            anchor,
        }
    }

    fn bucket(&self, markers: &MarkerSet, src: &str) -> Option<Bucket> {
        let names = self
            .decorators
            .iter()
            .filter_map(|d| decorator_name(*d, src));
        match self.shape {
            Shape::Setter => None,
            Shape::Field | Shape::Getter => match markers.classify(names) {
                Marker::Input => Some(Bucket::Inputs),
                Marker::Output => Some(Bucket::Outputs),
                Marker::Include => Some(Bucket::Properties),
                Marker::None => None,
            },
            Shape::Method => markers.includes(names).then_some(Bucket::Methods),
        }
    }

    fn to_block(&self, identifier: String, private_name: bool, src: &str) -> DocBlock {
        let mut block = DocBlock {
            identifier,
            body: doc_body(self.anchor, src),
            access_modifier: access_modifier(self.node, src, private_name),
            ..Default::default()
        };
        let return_type = self
            .node
            .child_by_field_name("return_type")
            .map(|t| annotation_text(t, src));

        match self.shape {
            Shape::Field => {
                let initializer = self.node.child_by_field_name("value");
                block.ty = self
                    .node
                    .child_by_field_name("type")
                    .map(|t| annotation_text(t, src))
                    .or_else(|| initializer.and_then(infer_primitive_type));
                block.default_value = initializer.map(|v| node_text(v, src).to_string());
            }
            Shape::Getter | Shape::Setter => block.ty = return_type,
            Shape::Method => {
                block.ty = Some(return_type.unwrap_or_else(|| "any".to_string()));
                block.method_args = Some(method_args(self.node, src));
            }
        }
        block
    }
}

/// Build the documentation record for a located class.
pub fn extract_class(
    class: &ClassDecl<'_>,
    src: &str,
    kind: DocKind,
    markers: &MarkerSet,
) -> Documentation {
    let mut doc = Documentation::new(kind);
    doc.main = doc_body(class.anchor, src);

    let Some(body) = class.node.child_by_field_name("body") else {
        return doc;
    };

    let mut pending: Vec<Node<'_>> = Vec::new();
    let mut cursor = body.walk();
    for child in body.children(&mut cursor) {
        match child.kind() {
            "decorator" => pending.push(child),
            "comment" => {}
            member_kind if MEMBER_KINDS.contains(&member_kind) => {
                let member = Member::new(child, std::mem::take(&mut pending));
                document_member(&member, src, markers, &mut doc);
            }
            _ => pending.clear(),
        }
    }

    doc
}

fn document_member(member: &Member<'_>, src: &str, markers: &MarkerSet, doc: &mut Documentation) {
    let Some((identifier, private_name)) = member_name(member.node, src) else {
        debug!(
            member = node_text(member.node, src).lines().next().unwrap_or_default(),
            "skipping anonymous member"
        );
        return;
    };
    let Some(bucket) = member.bucket(markers, src) else {
        debug!(member = %identifier, "skipping undocumented member");
        return;
    };

    let block = member.to_block(identifier, private_name, src);
    match bucket {
        Bucket::Inputs => doc.inputs.push(block),
        Bucket::Outputs => doc.outputs.push(block),
        Bucket::Properties => doc.properties.push(block),
        Bucket::Methods => doc.methods.push(block),
    }
}

/// Declared member name, and whether it is an ECMAScript `#private` name.
///
/// Computed names resolve only when they are string or number literals.
fn member_name(node: Node<'_>, src: &str) -> Option<(String, bool)> {
    let name = node.child_by_field_name("name")?;
    match name.kind() {
        "property_identifier" | "identifier" => Some((node_text(name, src).to_string(), false)),
        "private_property_identifier" => Some((node_text(name, src).to_string(), true)),
        "string" => Some((string_content(name, src), false)),
        "number" => Some((node_text(name, src).to_string(), false)),
        "computed_property_name" => {
            let inner = name.named_child(0)?;
            match inner.kind() {
                "string" => Some((string_content(inner, src), false)),
                "number" => Some((node_text(inner, src).to_string(), false)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn string_content(node: Node<'_>, src: &str) -> String {
    let text = node_text(node, src);
    let quote = text.chars().next().unwrap_or('"');
    text.strip_prefix(quote)
        .and_then(|t| t.strip_suffix(quote))
        .unwrap_or(text)
        .to_string()
}

fn access_modifier(node: Node<'_>, src: &str, private_name: bool) -> AccessModifier {
    let mut cursor = node.walk();
    let declared = node
        .children(&mut cursor)
        .find(|child| child.kind() == "accessibility_modifier")
        .and_then(|child| AccessModifier::from_keyword(node_text(child, src).trim()));
    match declared {
        Some(modifier) => modifier,
        None if private_name => AccessModifier::Private,
        None => AccessModifier::Public,
    }
}

/// `name: type` for each formal parameter.
fn method_args(node: Node<'_>, src: &str) -> Vec<String> {
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut cursor = parameters.walk();
    parameters
        .named_children(&mut cursor)
        .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
        .map(|p| render_parameter(p, src))
        .collect()
}

fn render_parameter(parameter: Node<'_>, src: &str) -> String {
    let ty = parameter
        .child_by_field_name("type")
        .map(|t| annotation_text(t, src));
    let name = parameter
        .child_by_field_name("pattern")
        .and_then(|p| parameter_name(p, src));
    match (name, ty) {
        (Some(name), Some(ty)) => format!("{}: {}", name, ty),
        (Some(name), None) => format!("{}: any", name),
        (None, Some(ty)) => ty,
        (None, None) => "any".to_string(),
    }
}

/// Parameter name, or `None` for destructuring patterns.
fn parameter_name(pattern: Node<'_>, src: &str) -> Option<String> {
    match pattern.kind() {
        "identifier" | "this" => Some(node_text(pattern, src).to_string()),
        "rest_pattern" => pattern
            .named_child(0)
            .filter(|inner| inner.kind() == "identifier")
            .map(|inner| format!("...{}", node_text(inner, src))),
        _ => None,
    }
}
