//! Documentation records and the artifact they serialize into.
//!
//! The serialized field names are what the demo application reads, so the
//! serde attributes here are part of the output contract.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What kind of class a manifest entry documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Component,
    Service,
}

/// Declared accessibility of a class member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    #[default]
    Public,
    Protected,
    Private,
}

impl AccessModifier {
    /// Map an `accessibility_modifier` keyword to its variant.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(AccessModifier::Public),
            "protected" => Some(AccessModifier::Protected),
            "private" => Some(AccessModifier::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Protected => "protected",
            AccessModifier::Private => "private",
        }
    }
}

/// A single documented class member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocBlock {
    pub identifier: String,
    /// Leading doc comment rendered to HTML (empty when undocumented)
    pub body: String,
    /// Declared or inferred type; `null` when neither is available
    #[serde(rename = "type")]
    pub ty: Option<String>,
    /// Initializer source text (properties only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub access_modifier: AccessModifier,
    /// `name: type` parameter signatures (methods only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_args: Option<Vec<String>>,
}

/// Complete documentation for the exported class of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Documentation {
    #[serde(rename = "type")]
    pub kind: DocKind,
    /// Class-level doc comment rendered to HTML
    pub main: String,
    pub inputs: Vec<DocBlock>,
    pub outputs: Vec<DocBlock>,
    pub properties: Vec<DocBlock>,
    pub methods: Vec<DocBlock>,
}

impl Documentation {
    pub fn new(kind: DocKind) -> Self {
        Documentation {
            kind,
            main: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Number of documented members across all buckets.
    pub fn member_count(&self) -> usize {
        self.inputs.len() + self.outputs.len() + self.properties.len() + self.methods.len()
    }
}

/// The whole output artifact: documentation ID → record.
///
/// A `None` record means the source file had no exported class; it is
/// serialized as `null` so the ID stays visible in the artifact.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct DocSet {
    records: BTreeMap<String, Option<Documentation>>,
}

impl DocSet {
    pub fn insert(&mut self, id: String, doc: Option<Documentation>) {
        self.records.insert(id, doc);
    }

    /// Look up the documentation for an ID.
    ///
    /// Unknown IDs and IDs without an exported class both yield `None`, which
    /// callers treat as "no documentation available".
    #[allow(dead_code)] // lookup contract for artifact consumers
    pub fn get_documentation(&self, id: &str) -> Option<&Documentation> {
        self.records.get(id).and_then(Option::as_ref)
    }

    #[cfg(test)]
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Documentation>)> {
        self.records.iter().map(|(id, doc)| (id.as_str(), doc.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tolerates_missing_and_null_ids() {
        let mut set = DocSet::default();
        set.insert("button".into(), Some(Documentation::new(DocKind::Component)));
        set.insert("empty".into(), None);

        assert!(set.get_documentation("button").is_some());
        assert!(set.get_documentation("empty").is_none());
        assert!(set.get_documentation("nope").is_none());
        assert!(set.contains("empty"));
    }

    #[test]
    fn doc_block_serializes_camel_case() {
        let block = DocBlock {
            identifier: "disabled".into(),
            ty: Some("boolean".into()),
            default_value: Some("false".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "boolean");
        assert_eq!(json["defaultValue"], "false");
        assert_eq!(json["accessModifier"], "public");
        assert!(json.get("methodArgs").is_none());
    }

    #[test]
    fn unknown_type_serializes_as_null() {
        let block = DocBlock {
            identifier: "handler".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&block).unwrap();
        assert!(json["type"].is_null());
    }

    #[test]
    fn record_kind_serializes_as_type() {
        let doc = Documentation::new(DocKind::Service);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "service");
        assert_eq!(json["inputs"], serde_json::json!([]));
    }
}
