use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tagcat::{
    CatalogIndexer, ConfigError, FsStore, RebuildReport, Settings, SuggestionGenerator,
    logging,
};
use thiserror::Error;

/// tagcat - catalog hashtags across a folder of notes and find near-duplicates
#[derive(Parser)]
#[command(name = "tagcat")]
#[command(about = "Catalog labels across markdown notes and suggest merges for near-duplicates")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to {config_dir}/tagcat/settings.json if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log progress and diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Scan a folder and report how many labels it contains
    Scan(ScanCommand),
    /// List labels by occurrence count
    List(ListCommand),
    /// Show every occurrence of one label
    Show(ShowCommand),
    /// Suggest merges for similar labels
    Similar(SimilarCommand),
}

/// Folder of markdown documents to index
#[derive(Args)]
struct CorpusArg {
    #[arg(value_name = "DIR")]
    dir: PathBuf,
}

#[derive(Args)]
struct ScanCommand {
    #[command(flatten)]
    corpus: CorpusArg,
}

#[derive(Args)]
struct ListCommand {
    #[command(flatten)]
    corpus: CorpusArg,

    /// Maximum number of labels to print
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowCommand {
    #[command(flatten)]
    corpus: CorpusArg,

    /// Label to show, with or without its marker (e.g. "#todo" or "todo")
    #[arg(value_name = "LABEL")]
    label: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SimilarCommand {
    #[command(flatten)]
    corpus: CorpusArg,

    /// Only compare against this label (marker optional)
    #[arg(short, long, value_name = "LABEL")]
    label: Option<String>,

    /// Minimum similarity in [0, 1], overriding the settings file
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Errors caused by user input rather than the environment.
#[derive(Debug, Error)]
enum UsageError {
    #[error("Label not found: {0}")]
    UnknownLabel(String),

    #[error("Threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
}

fn main() {
    let cli = Cli::parse();
    logging::configure_logging(cli.verbose);

    let result = run(&cli, &mut io::stdout().lock());

    if let Err(e) = result {
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

/// Determines if an error is a user error (vs internal error).
///
/// User errors are bad arguments, invalid settings, and unknown labels.
/// Everything else (I/O, unreadable folders) is internal.
fn is_user_error(error: &anyhow::Error) -> bool {
    error
        .chain()
        .any(|cause| cause.is::<UsageError>() || cause.is::<ConfigError>())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;

    match &cli.command {
        Commands::Scan(cmd) => execute_scan(&cmd.corpus.dir, settings, true, out),
        Commands::List(cmd) => execute_list(cmd, settings, out),
        Commands::Show(cmd) => execute_show(cmd, settings, out),
        Commands::Similar(cmd) => execute_similar(cmd, settings, out),
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default()?,
    };
    Ok(settings)
}

/// Accepts a label typed with or without its marker.
fn with_marker(label: &str, marker: char) -> String {
    if label.starts_with(marker) {
        label.to_string()
    } else {
        format!("{marker}{label}")
    }
}

/// Opens the folder and runs a full rebuild over it.
fn build_catalog(
    dir: &Path,
    settings: &Settings,
    show_progress: bool,
) -> Result<(CatalogIndexer, RebuildReport)> {
    let store = FsStore::open(dir)
        .with_context(|| format!("Failed to open folder: {}", dir.display()))?;
    let root = store.root().to_path_buf();
    let indexer = CatalogIndexer::with_store(Arc::new(store), settings.clone());

    let mut print_progress = |current: usize, total: usize| {
        eprint!("\rIndexing {current}/{total}");
        if current == total {
            eprintln!();
        }
    };
    let progress: Option<&mut dyn FnMut(usize, usize)> = if show_progress {
        Some(&mut print_progress)
    } else {
        None
    };

    let report = indexer
        .rebuild_all(progress)
        .with_context(|| format!("Failed to index folder: {}", root.display()))?;
    Ok((indexer, report))
}

fn execute_scan(
    dir: &Path,
    settings: Settings,
    show_progress: bool,
    out: &mut impl Write,
) -> Result<()> {
    let (indexer, report) = build_catalog(dir, &settings, show_progress)?;
    let stats = indexer.catalog().stats();

    writeln!(
        out,
        "Indexed {} label(s), {} occurrence(s) across {} of {} document(s)",
        stats.labels, stats.occurrences, report.indexed, report.total
    )?;
    for failure in &report.failures {
        writeln!(out, "Skipped {}: {}", failure.document, failure.error)?;
    }
    Ok(())
}

fn execute_list(cmd: &ListCommand, settings: Settings, out: &mut impl Write) -> Result<()> {
    let (indexer, _) = build_catalog(&cmd.corpus.dir, &settings, false)?;
    let catalog = indexer.catalog();
    let limit = cmd.limit.unwrap_or(usize::MAX);
    let labels: Vec<_> = catalog.labels_by_count().into_iter().take(limit).collect();

    if cmd.json {
        let rows: Vec<serde_json::Value> = labels
            .iter()
            .map(|info| {
                serde_json::json!({
                    "label": info.label(),
                    "canonical": info.canonical(),
                    "count": info.count(),
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    writeln!(out, "Total labels: {}", catalog.len())?;
    for info in labels {
        writeln!(out, "{:>6}  {}", info.count(), info.label())?;
    }
    Ok(())
}

fn execute_show(cmd: &ShowCommand, settings: Settings, out: &mut impl Write) -> Result<()> {
    let (indexer, _) = build_catalog(&cmd.corpus.dir, &settings, false)?;
    let label = with_marker(&cmd.label, indexer.marker());
    let info = indexer
        .label_info(&label)
        .ok_or(UsageError::UnknownLabel(label))?;

    if cmd.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} (canonical: {}, {} occurrence(s))",
        info.label(),
        info.canonical(),
        info.count()
    )?;
    for occ in info.occurrences() {
        writeln!(
            out,
            "  {}:{} [{}] {}",
            occ.document(),
            occ.line() + 1,
            occ.source(),
            occ.context().trim()
        )?;
    }
    Ok(())
}

fn execute_similar(
    cmd: &SimilarCommand,
    mut settings: Settings,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(threshold) = cmd.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(UsageError::InvalidThreshold(threshold).into());
        }
        settings.similarity_threshold = threshold;
    }

    let (indexer, _) = build_catalog(&cmd.corpus.dir, &settings, false)?;
    let generator = SuggestionGenerator::from_settings(&settings);
    let catalog = indexer.catalog();

    let suggestions = match &cmd.label {
        Some(label) => {
            let label = with_marker(label, indexer.marker());
            if !catalog.contains(&label) {
                return Err(UsageError::UnknownLabel(label).into());
            }
            generator.find_similar_to(&label, &catalog)
        }
        None => generator.find_similar_pairs(&catalog),
    };

    if cmd.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&suggestions)?)?;
        return Ok(());
    }

    if suggestions.is_empty() {
        writeln!(out, "No similar labels found.")?;
        return Ok(());
    }

    writeln!(out, "{} merge suggestion(s)", suggestions.len())?;
    for suggestion in &suggestions {
        writeln!(out, "{suggestion}")?;
        writeln!(out, "    {}", suggestion.reason)?;
        writeln!(
            out,
            "    {} document(s) affected",
            suggestion.affected_documents.len()
        )?;
    }
    Ok(())
}
