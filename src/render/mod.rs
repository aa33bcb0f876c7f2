//! Emitter: trait-based format dispatch and artifact writing.

pub mod json;
pub mod markdown;

use crate::error::DocError;
use crate::model::DocSet;
use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::Path;

/// Trait for rendering the documentation set into a specific output format.
pub trait Renderer {
    fn render(&self, docs: &DocSet) -> Result<String, DocError>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json or markdown", format)),
    }
}

/// Replace the artifact at `path` with `contents`.
///
/// The new contents go to a temporary file next to the destination which is
/// then renamed over it, so readers never see a half-written artifact.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), DocError> {
    let write_err = |source: std::io::Error| DocError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
