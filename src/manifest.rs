//! Source loader: reads the manifest and every source file it references.
//!
//! The manifest is a JSON object keyed by documentation ID:
//!
//! ```json
//! { "button": { "type": "component", "sourceFile": "src/button.ts" } }
//! ```
//!
//! Loading is all-or-nothing: any unreadable file aborts the run before a
//! single record is produced.

use crate::error::DocError;
use crate::model::DocKind;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One manifest line: which class to document and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub id: String,
    pub kind: DocKind,
    /// Path as written in the manifest, relative to the manifest's directory
    pub source_file: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: DocKind,
    source_file: PathBuf,
}

/// Parsed manifest, entries in declaration order.
#[derive(Debug, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

/// A manifest entry together with the text of its source file.
#[derive(Debug)]
pub struct SourceFile {
    pub id: String,
    pub kind: DocKind,
    pub path: PathBuf,
    pub text: String,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, DocError> {
        let content = fs::read_to_string(path).map_err(|e| DocError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|e| DocError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse manifest JSON. Duplicate IDs are rejected.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Read every referenced source file, resolving paths against `base_dir`.
    pub fn read_sources(&self, base_dir: &Path) -> Result<Vec<SourceFile>, DocError> {
        let mut sources = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let path = base_dir.join(&entry.source_file);
            debug!(id = %entry.id, path = %path.display(), "reading source");
            let text = fs::read_to_string(&path).map_err(|source| DocError::SourceFile {
                id: entry.id.clone(),
                path: path.clone(),
                source,
            })?;
            sources.push(SourceFile {
                id: entry.id.clone(),
                kind: entry.kind,
                path,
                text,
            });
        }
        Ok(sources)
    }
}

/// Map visitor that keeps manifest order and refuses repeated keys.
struct ManifestVisitor;

impl<'de> Visitor<'de> for ManifestVisitor {
    type Value = Manifest;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping unique documentation IDs to entries")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut entries: Vec<ManifestEntry> = Vec::new();

        while let Some((id, raw)) = map.next_entry::<String, RawEntry>()? {
            if entries.iter().any(|e| e.id == id) {
                return Err(de::Error::custom(format!("duplicate documentation ID '{}'", id)));
            }
            entries.push(ManifestEntry {
                id,
                kind: raw.kind,
                source_file: raw.source_file,
            });
        }

        Ok(Manifest { entries })
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ManifestVisitor)
    }
}
