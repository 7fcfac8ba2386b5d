//! javadoc-stub — turn a javadoc class page into a compilable-looking Java stub.
//!
//! Reads one HTML page produced by the standard doclet, extracts the class
//! header, fields, constructors and methods with their documentation, and
//! writes `<ClassName>.java` to the current directory with placeholder bodies.
//!
//! ```text
//! javadoc-stub docs/com/example/Widget.html   # writes ./Widget.java
//! ```

mod dom;
mod error;
mod model;
mod parser;
mod render;
mod text;

use anyhow::{bail, Context, Result};
use clap::Parser;
use render::{java::JavaRenderer, Renderer};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

/// Environment variable holding the `tracing` filter directive.
const LOG_ENV: &str = "JAVADOC_STUB_LOG";

#[derive(Parser)]
#[command(
    name = "javadoc-stub",
    version,
    about = "Convert a Java class .html page generated by javadoc into a .java source stub"
)]
struct Cli {
    /// The path to the .html file to convert
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    if !cli.file.is_file() {
        eprintln!("error: file doesn't exist: {}", cli.file.display());
        process::exit(1);
    }

    let out_path = convert(&cli.file)?;
    info!(path = %out_path.display(), "wrote stub");
    Ok(())
}

/// Read, extract, render and write. Nothing touches the filesystem until the
/// whole stub has been rendered in memory.
fn convert(input: &Path) -> Result<PathBuf> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let doc = parser::parse_document(&source)
        .with_context(|| format!("failed to extract class from {}", input.display()))?;

    let renderer = JavaRenderer;
    let class_name = doc.class.simple_name();
    if class_name.is_empty() {
        bail!("class name is empty in {}", input.display());
    }
    let out_path = PathBuf::from(format!("{}.{}", class_name, renderer.file_extension()));

    let output = renderer.render(&doc);
    fs::write(&out_path, output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(out_path)
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
