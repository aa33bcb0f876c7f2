//! apidoc: generate API documentation from TypeScript UI component sources.
//!
//! Reads a manifest of documentation IDs, finds the first exported class in
//! each referenced file and writes one artifact describing every class's
//! inputs, outputs, properties and methods:
//!
//! - `apidoc` reads `api-doc.manifest.json` and writes `api-doc.json`
//! - `apidoc -m docs/manifest.json -o docs/api.md -f markdown`
//! - `apidoc --check` fails when the existing artifact is stale
//!
//! The run is all-or-nothing: any manifest, file or parse failure aborts it
//! before the artifact is touched.

mod assemble;
mod error;
mod manifest;
mod model;
mod parser;
mod render;
mod toc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use manifest::Manifest;
use parser::classify::MarkerSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    about = "Generate API documentation from TypeScript component and service sources"
)]
struct Cli {
    /// Manifest mapping documentation IDs to source files.
    /// Source paths are resolved relative to the manifest's directory.
    #[arg(short = 'm', long, default_value = "api-doc.manifest.json")]
    manifest: PathBuf,

    /// Output artifact, replaced on every run
    #[arg(short = 'o', long, default_value = "api-doc.json")]
    output: PathBuf,

    /// Output format: json (default) or markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Decorator marking a member as an input
    #[arg(long, default_value = "Input")]
    input_marker: String,

    /// Decorator marking a member as an output
    #[arg(long, default_value = "Output")]
    output_marker: String,

    /// Decorator marking a property or method for inclusion
    #[arg(long, default_value = "DocInclude")]
    include_marker: String,

    /// Do not write; exit non-zero if the existing artifact differs
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Explicit log level (overrides --verbose/--quiet)
    #[arg(long, value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: Option<String>,
}

impl Cli {
    fn markers(&self) -> MarkerSet {
        MarkerSet {
            input: self.input_marker.clone(),
            output: self.output_marker.clone(),
            include: self.include_marker.clone(),
        }
    }

    fn level(&self) -> Level {
        if let Some(level) = &self.log_level {
            level.parse().unwrap_or(Level::INFO)
        } else if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::INFO
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.level());
    debug!("arguments: {:?}", cli);

    run(&cli)
}

/// Log to stderr. `RUST_LOG` takes precedence over the flag-derived level.
fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("apidoc={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let renderer = render::create_renderer(&cli.format)?;

    let manifest = Manifest::load(&cli.manifest)?;
    info!(
        manifest = %cli.manifest.display(),
        entries = manifest.entries.len(),
        "loaded manifest"
    );

    // Every source is read before anything is parsed or written
    let sources = manifest.read_sources(base_dir(&cli.manifest))?;
    let docs = assemble::assemble(sources, &cli.markers())?;
    let rendered = renderer.render(&docs)?;

    if cli.check {
        if !is_current(&cli.output, &rendered)? {
            bail!(
                "{} is out of date; rerun apidoc to regenerate it",
                cli.output.display()
            );
        }
        info!(output = %cli.output.display(), "documentation is up to date");
        return Ok(());
    }

    render::write_artifact(&cli.output, &rendered)?;
    info!(
        output = %cli.output.display(),
        records = docs.len(),
        "wrote documentation"
    );
    Ok(())
}

/// Whether the artifact at `path` already holds `rendered`. A missing
/// artifact is stale; any other read failure is an error.
fn is_current(path: &Path, rendered: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(current) => Ok(current == rendered),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Directory that manifest source paths are relative to.
fn base_dir(manifest: &Path) -> &Path {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dir_of_bare_file_is_cwd() {
        assert_eq!(base_dir(Path::new("api-doc.manifest.json")), Path::new("."));
    }

    #[test]
    fn base_dir_of_nested_manifest() {
        assert_eq!(base_dir(Path::new("docs/manifest.json")), Path::new("docs"));
    }

    #[test]
    fn missing_artifact_is_stale() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(!is_current(&dir.path().join("api-doc.json"), "{}\n").unwrap());
    }

    #[test]
    fn unreadable_artifact_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = is_current(dir.path(), "{}\n").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn matching_artifact_is_current() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("api-doc.json");
        fs::write(&path, "{}\n").unwrap();
        assert!(is_current(&path, "{}\n").unwrap());
        assert!(!is_current(&path, "[]\n").unwrap());
    }

    #[test]
    fn defaults_need_no_arguments() {
        let cli = Cli::parse_from(["apidoc"]);
        assert_eq!(cli.manifest, PathBuf::from("api-doc.manifest.json"));
        assert_eq!(cli.output, PathBuf::from("api-doc.json"));
        assert_eq!(cli.markers(), MarkerSet::default());
        assert_eq!(cli.level(), Level::INFO);
    }

    #[test]
    fn log_level_flags() {
        assert_eq!(Cli::parse_from(["apidoc", "-v"]).level(), Level::DEBUG);
        assert_eq!(Cli::parse_from(["apidoc", "-q"]).level(), Level::ERROR);
        assert_eq!(
            Cli::parse_from(["apidoc", "-v", "--log-level", "warn"]).level(),
            Level::WARN
        );
    }
}
