mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use update_log::{CatalogIssue, Changelog, catalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal listing
    Console,
    /// Markdown document
    Markdown,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "update-log", version)]
#[command(about = "Show and audit the game's update log")]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// Only show the given version
    #[arg(long, conflicts_with = "latest")]
    release: Option<String>,

    /// Only show the newest release
    #[arg(long)]
    latest: bool,

    /// Check the update log for authoring mistakes instead of printing it
    #[arg(long)]
    audit: bool,

    /// Optional path to write output to instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.output.is_some() {
        colored::control::set_override(false);
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    let clean = run(&args, catalog(), output_target.writer())?;
    output_target.flush_inner()?;

    if !clean {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Render or audit `changelog`. Returns `false` when an audit found errors;
/// notices such as unknown category tags are printed but do not fail.
fn run(args: &Args, changelog: &Changelog, out: &mut dyn Write) -> Result<bool> {
    if args.audit {
        let issues = changelog.audit();
        match args.format {
            OutputFormat::Console => render::write_audit_console(out, &issues)?,
            OutputFormat::Markdown => render::write_audit_markdown(out, &issues)?,
            OutputFormat::Json => render::write_audit_json(out, &issues)?,
        }
        return Ok(!issues.iter().any(CatalogIssue::is_error));
    }

    let selected = select_entries(args, changelog)?;
    log::debug!("rendering {} release(s) as {:?}", selected.len(), args.format);
    match args.format {
        OutputFormat::Console => render::write_console(out, &selected)?,
        OutputFormat::Markdown => render::write_markdown(out, &selected)?,
        OutputFormat::Json => render::write_json(out, &selected)?,
    }
    Ok(true)
}

fn select_entries(args: &Args, changelog: &Changelog) -> Result<Changelog> {
    if let Some(version) = args.release.as_deref() {
        let Some(entry) = changelog.get_by_version(version) else {
            bail!("no release {version:?} in the update log");
        };
        return Ok(Changelog::from_entries(vec![entry.clone()]));
    }
    if args.latest {
        return Ok(Changelog::from_entries(changelog.latest().cloned().into_iter().collect()));
    }
    Ok(changelog.clone())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
