//! Fatal error taxonomy for a documentation run.
//!
//! Everything here aborts the batch. Recoverable gaps (no exported class,
//! unresolvable types) are handled in place and only logged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("failed to load manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("failed to read source file {path} for '{id}': {source}")]
    SourceFile {
        id: String,
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("failed to parse {path}")]
    Parse { path: PathBuf },

    #[error("failed to serialize documentation: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
