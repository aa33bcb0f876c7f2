//! JSON renderer: the artifact the demo application imports.
//!
//! Keys are sorted and the output is pretty-printed with a trailing newline,
//! so regenerating from unchanged sources yields byte-identical files.

use crate::error::DocError;
use crate::model::DocSet;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, docs: &DocSet) -> Result<String, DocError> {
        let mut out = serde_json::to_string_pretty(docs)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocBlock, DocKind, Documentation};

    fn sample() -> DocSet {
        let mut doc = Documentation::new(DocKind::Component);
        doc.main = "<p>Tabs.</p>\n".into();
        doc.inputs.push(DocBlock {
            identifier: "active".into(),
            ty: Some("number".into()),
            default_value: Some("0".into()),
            ..Default::default()
        });
        let mut docs = DocSet::default();
        docs.insert("tabs".into(), Some(doc));
        docs.insert("interfaces".into(), None);
        docs
    }

    #[test]
    fn keys_sorted_and_null_sentinel() {
        let out = JsonRenderer.render(&sample()).unwrap();
        let interfaces = out.find("\"interfaces\"").unwrap();
        let tabs = out.find("\"tabs\"").unwrap();
        assert!(interfaces < tabs);
        assert!(out.contains("\"interfaces\": null"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn record_shape() {
        let out = JsonRenderer.render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let tabs = &value["tabs"];
        assert_eq!(tabs["type"], "component");
        assert_eq!(tabs["main"], "<p>Tabs.</p>\n");
        assert_eq!(tabs["inputs"][0]["identifier"], "active");
        assert_eq!(tabs["inputs"][0]["defaultValue"], "0");
        assert_eq!(tabs["outputs"], serde_json::json!([]));
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            JsonRenderer.render(&sample()).unwrap(),
            JsonRenderer.render(&sample()).unwrap()
        );
    }
}
