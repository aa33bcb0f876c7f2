//! Primitive type inference from literal initializers.

use tree_sitter::Node;

/// Infer the type of a literal expression.
///
/// Only a closed set of shapes is recognized: numbers, strings, booleans and
/// arrays of those. An array takes the type of its first element with `[]`
/// appended; an empty array is just `[]`. Anything else yields `None`.
pub fn infer_primitive_type(node: Node<'_>) -> Option<String> {
    match node.kind() {
        "number" => Some("number".to_string()),
        "string" | "template_string" => Some("string".to_string()),
        "true" | "false" => Some("boolean".to_string()),
        "unary_expression" => {
            let operator = node.child_by_field_name("operator")?;
            let argument = node.child_by_field_name("argument")?;
            (matches!(operator.kind(), "-" | "+") && argument.kind() == "number")
                .then(|| "number".to_string())
        }
        "array" => {
            let mut cursor = node.walk();
            let first = node
                .named_children(&mut cursor)
                .find(|child| child.kind() != "comment");
            match first {
                None => Some("[]".to_string()),
                Some(element) => infer_primitive_type(element).map(|ty| format!("{}[]", ty)),
            }
        }
        _ => None,
    }
}
