//! Documentation assembler: one record per manifest entry.

use crate::error::DocError;
use crate::manifest::SourceFile;
use crate::model::DocSet;
use crate::parser::classify::MarkerSet;
use crate::parser::extract::extract_class;
use crate::parser::SourceUnit;
use tracing::{info, warn};

/// Parse every source and collect the documentation of its exported class.
///
/// An entry whose file has no exported class is recorded as `None` and the
/// run continues; parse failures abort it.
pub fn assemble(sources: Vec<SourceFile>, markers: &MarkerSet) -> Result<DocSet, DocError> {
    let mut docs = DocSet::default();

    for source in sources {
        let unit = SourceUnit::parse(&source.path, source.text)?;

        let Some(class) = unit.exported_class() else {
            warn!(
                id = %source.id,
                path = %unit.path().display(),
                "no exported class found, recording null documentation"
            );
            docs.insert(source.id, None);
            continue;
        };

        let doc = extract_class(&class, unit.text(), source.kind, markers);
        info!(
            id = %source.id,
            inputs = doc.inputs.len(),
            outputs = doc.outputs.len(),
            properties = doc.properties.len(),
            methods = doc.methods.len(),
            "documented {} members",
            doc.member_count()
        );
        docs.insert(source.id, Some(doc));
    }

    Ok(docs)
}
