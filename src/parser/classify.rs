//! Member classification by decorator markers.

use super::node_text;
use tree_sitter::Node;

/// Documentation category a decorator assigns to a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Input,
    Output,
    Include,
    None,
}

/// Decorator names recognized as markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    pub input: String,
    pub output: String,
    pub include: String,
}

impl Default for MarkerSet {
    fn default() -> Self {
        MarkerSet {
            input: "Input".to_string(),
            output: "Output".to_string(),
            include: "DocInclude".to_string(),
        }
    }
}

impl MarkerSet {
    /// Marker for a single decorator name.
    pub fn marker_for(&self, name: &str) -> Marker {
        if name == self.input {
            Marker::Input
        } else if name == self.output {
            Marker::Output
        } else if name == self.include {
            Marker::Include
        } else {
            Marker::None
        }
    }

    /// Marker of the first decorator, in declaration order, that matches.
    pub fn classify<'a, I>(&self, names: I) -> Marker
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| self.marker_for(name))
            .find(|marker| *marker != Marker::None)
            .unwrap_or(Marker::None)
    }

    /// Whether any of the names is the include marker.
    pub fn includes<'a, I>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .any(|name| self.marker_for(name) == Marker::Include)
    }
}

/// Callee name of a decorator: `@Input()`, `@Input`, `@core.Input('x')` → `Input`.
pub fn decorator_name<'s>(decorator: Node<'_>, src: &'s str) -> Option<&'s str> {
    let mut expr = decorator.named_child(0)?;
    loop {
        match expr.kind() {
            "call_expression" => expr = expr.child_by_field_name("function")?,
            "member_expression" => expr = expr.child_by_field_name("property")?,
            "parenthesized_expression" => expr = expr.named_child(0)?,
            "identifier" | "property_identifier" => return Some(node_text(expr, src)),
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_ts;

    #[test]
    fn classify_by_name() {
        let markers = MarkerSet::default();
        assert_eq!(markers.classify(["Input"]), Marker::Input);
        assert_eq!(markers.classify(["Output"]), Marker::Output);
        assert_eq!(markers.classify(["DocInclude"]), Marker::Include);
        assert_eq!(markers.classify(["HostListener"]), Marker::None);
        assert_eq!(markers.classify(Vec::<&str>::new()), Marker::None);
    }

    #[test]
    fn first_matching_marker_wins() {
        let markers = MarkerSet::default();
        assert_eq!(markers.classify(["DocInclude", "Input"]), Marker::Include);
        assert_eq!(markers.classify(["Input", "DocInclude"]), Marker::Input);
        assert_eq!(
            markers.classify(["HostBinding", "Output", "Input"]),
            Marker::Output
        );
    }

    #[test]
    fn custom_marker_names() {
        let markers = MarkerSet {
            input: "Prop".into(),
            output: "Emit".into(),
            include: "Public".into(),
        };
        assert_eq!(markers.classify(["Emit"]), Marker::Output);
        assert_eq!(markers.classify(["Input"]), Marker::None);
        assert!(markers.includes(["Prop", "Public"]));
    }

    fn decorator_names(src: &str) -> Vec<String> {
        let unit = parse_ts(src);
        let mut names = Vec::new();
        collect(unit.tree.root_node(), unit.text(), &mut names);
        names
    }

    fn collect(node: Node<'_>, src: &str, out: &mut Vec<String>) {
        if node.kind() == "decorator" {
            out.push(decorator_name(node, src).unwrap_or("?").to_string());
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            collect(child, src, out);
        }
    }

    #[test]
    fn decorator_name_shapes() {
        let names = decorator_names(
            "export class A {\n  @Input() a = 1;\n  @Output b;\n  @ng.Input('alias') c = '';\n}\n",
        );
        assert_eq!(names, vec!["Input", "Output", "Input"]);
    }
}
