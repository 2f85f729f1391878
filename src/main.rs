//! code2asciidoc — generate AsciiDoc from documentation comments in Go tests.
//!
//! Test functions opt in with a comment right after the declaration:
//!
//! ```go
//! func Test_CreateUser(t *testing.T) {
//!     // startapidocs Create a user
//!     // Explanation rendered above the code.
//!     // enddocs
//! }
//! ```
//!
//! Each documented test becomes a section that includes the test's own
//! `tag::`-region and, for `startapidocs`, the matching region of the
//! `.apisamples` file the test writes.

mod config;
mod model;
mod parser;
mod render;
mod runner;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::{PathFlags, RenderConfig};
use model::SourceFile;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Exit status for invalid invocations.
const USAGE_ERROR: u8 = 100;

#[derive(Parser)]
#[command(
    name = "code2asciidoc",
    version,
    about = "Generate AsciiDoc documentation from Go test files"
)]
struct Cli {
    /// Source file to parse into AsciiDoc, recommended is to set the absolute path.
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    source: String,

    /// File to write to, if left empty writes to stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Overwrite the existing out file
    #[arg(short = 'f', long = "f")]
    overwrite: bool,

    /// Run the tests to produce the output file for the JSON samples.
    /// The JSON samples need to be written to a file called the same as
    /// the source Go file minus the _test with a .apisamples extension
    #[arg(long)]
    run: bool,

    /// Do not set a document header and ToC
    #[arg(long)]
    no_header: bool,

    /// Skip JSON sample sections in output (useful when .apisamples file doesn't exist)
    #[arg(long)]
    skip_json: bool,

    /// Use Antora-compatible include paths (example$ prefix instead of absolute paths)
    #[arg(long)]
    antora: bool,

    /// Do not insert page break markers (<<<) before sections
    #[arg(long)]
    no_page_breaks: bool,

    /// Do not generate section headings from tag names
    #[arg(long)]
    no_headings: bool,

    /// Do not wrap generated content in outer tag markers
    #[arg(long)]
    no_outer_tags: bool,

    /// Make include paths relative to the specified directory
    #[arg(long)]
    relative_to: Option<String>,

    /// Prepend a prefix to all include paths (e.g., 'example$')
    #[arg(long)]
    include_prefix: Option<String>,

    /// Preview output to stdout without writing files
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self) -> Result<RenderConfig, config::ConfigError> {
        let path_mode = PathFlags {
            antora: self.antora,
            relative_to: self.relative_to.as_deref(),
            include_prefix: self.include_prefix.as_deref(),
        }
        .resolve()?;

        Ok(RenderConfig {
            no_header: self.no_header,
            skip_json: self.skip_json,
            no_page_breaks: self.no_page_breaks,
            no_headings: self.no_headings,
            no_outer_tags: self.no_outer_tags,
            path_mode,
        })
    }

    /// Output file, unless writing to stdout.
    fn out_path(&self) -> Option<&Path> {
        if self.dry_run {
            return None;
        }
        self.out.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are reported through the same path
            return if err.use_stderr() {
                ExitCode::from(USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.render_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &RenderConfig) -> Result<()> {
    let source = SourceFile::new(Path::new(&cli.source));
    let content = fs::read_to_string(source.path())
        .with_context(|| format!("Could not read source file {}", source.path().display()))?;

    let doc = parser::parse(&content, source);
    info!(
        file = %doc.source.file_name,
        blocks = doc.blocks.len(),
        "extracted documentation"
    );

    let output = render::render_document(&doc, config);
    match cli.out_path() {
        Some(path) => write_output(path, &output, cli.overwrite)?,
        None => print!("{}", output),
    }

    if cli.run {
        runner::run_tests(&doc)?;
    }

    Ok(())
}

/// Write the finished document, replacing `path` only when `overwrite` is set.
///
/// The text goes to a sibling temp file first so a failed write never leaves
/// a truncated document behind.
fn write_output(path: &Path, output: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!("File already exists: {}", path.display());
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid output path: {}", path.display()))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    if let Err(err) = fs::write(&tmp, output) {
        let _ = fs::remove_file(&tmp);
        return Err(err)
            .with_context(|| format!("Could not create file for writing: {}", tmp.display()));
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("Could not write file: {}", path.display()));
    }

    info!(path = %path.display(), "wrote document");
    Ok(())
}
