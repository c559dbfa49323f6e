//! RobotLens main entry point
//!
//! This is the command-line interface for the RobotLens robots.txt analyzer.

use anyhow::Context;
use clap::Parser;
use robotlens::analyzer::analyze;
use robotlens::config::load_config_with_hash;
use robotlens::output::{
    format_markdown_report, to_csv, to_json, write_json, write_markdown_report, ReportFormat,
    ReportSource,
};
use robotlens::parser::parse;
use robotlens::url::{normalize_base_url, origin};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// RobotLens: a robots.txt analysis toolkit
///
/// RobotLens parses a robots.txt snapshot into structured rules, scores the
/// configuration, and reports recommendations about crawler accessibility,
/// SEO risk, and security exposure. Snapshots are read from disk or stdin;
/// RobotLens never fetches anything itself.
#[derive(Parser, Debug)]
#[command(name = "robotlens")]
#[command(version = "1.0.0")]
#[command(about = "A robots.txt analysis toolkit", long_about = None)]
struct Cli {
    /// Path to a robots.txt snapshot, or '-' to read stdin
    #[arg(value_name = "INPUT", required_unless_present = "config")]
    input: Option<PathBuf>,

    /// Base URL the snapshot was captured from (enables absolute URL output)
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Output format (defaults to markdown, or the config's setting in batch mode)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the parsed rules as JSON and skip analysis
    #[arg(long)]
    rules_only: bool,

    /// Analyze every site listed in a TOML config file
    #[arg(short, long, value_name = "CONFIG", conflicts_with_all = ["input", "output", "rules_only"])]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match (&cli.config, &cli.input) {
        (Some(config_path), _) => handle_batch(config_path, &cli),
        (None, Some(input)) => handle_single(input, &cli),
        // clap enforces one of the two, but degrade gracefully anyway
        (None, None) => anyhow::bail!("provide a robots.txt path or --config"),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robotlens=info,warn"),
            1 => EnvFilter::new("robotlens=debug,info"),
            2 => EnvFilter::new("robotlens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reads the robots.txt snapshot named on the command line
fn read_input(input: &Path) -> anyhow::Result<(String, String)> {
    if input == Path::new("-") {
        let content = std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
        Ok((content, "stdin".to_string()))
    } else {
        let content = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let name = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "robots".to_string());
        Ok((content, name))
    }
}

/// Handles the single-snapshot mode
fn handle_single(input: &Path, cli: &Cli) -> anyhow::Result<()> {
    let (content, name) = read_input(input)?;

    tracing::info!("Parsing {} bytes of robots.txt", content.len());
    let rules = parse(&content);

    if cli.rules_only {
        let json = serde_json::to_string_pretty(&rules)?;
        return emit(cli.output.as_deref(), &json);
    }

    // Normalize the base URL up front so typos fail loudly instead of
    // silently producing raw-path output
    let base = match &cli.base_url {
        Some(raw) => Some(normalize_base_url(raw)?),
        None => None,
    };
    let base_str = base.as_ref().map(|url| url.to_string());

    let result = analyze(&rules, base_str.as_deref());
    tracing::info!(
        "Analysis complete: {} rules, score {}/100",
        result.summary.total_rules,
        result.summary.score
    );

    let rendered = match cli.format.unwrap_or_default() {
        ReportFormat::Markdown => {
            let source = ReportSource::new(name, base.as_ref().map(origin), &content);
            format_markdown_report(&result, &source)
        }
        ReportFormat::Json => to_json(&result)?,
        ReportFormat::Csv => to_csv(&result),
    };

    emit(cli.output.as_deref(), &rendered)
}

/// Writes rendered output to a file or stdout
fn emit(output: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("✓ Output written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Handles the --config batch mode: analyzes every configured site
fn handle_batch(config_path: &Path, cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("Loading configuration from: {}", config_path.display());
    let (config, config_hash) = load_config_with_hash(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    // CLI --format overrides the config's output format when given
    let format = cli.format.unwrap_or(config.output.format);

    let report_dir = Path::new(&config.output.report_dir);
    std::fs::create_dir_all(report_dir)
        .with_context(|| format!("failed to create {}", report_dir.display()))?;

    let mut written = 0usize;
    let mut failed = 0usize;

    for site in &config.sites {
        match analyze_site(site, format, report_dir) {
            Ok(report_path) => {
                written += 1;
                println!("✓ {}: {}", site.name, report_path.display());
            }
            Err(e) => {
                failed += 1;
                tracing::error!("Failed to analyze '{}': {:#}", site.name, e);
            }
        }
    }

    println!("\n{} report(s) written, {} failed", written, failed);
    if written == 0 && failed > 0 {
        anyhow::bail!("every configured site failed to analyze");
    }
    Ok(())
}

/// Analyzes one configured site and writes its report
fn analyze_site(
    site: &robotlens::config::SiteEntry,
    format: ReportFormat,
    report_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let content = std::fs::read_to_string(&site.robots_path)
        .with_context(|| format!("failed to read {}", site.robots_path))?;

    let base = match &site.base_url {
        Some(raw) => Some(normalize_base_url(raw)?),
        None => None,
    };
    let base_str = base.as_ref().map(|url| url.to_string());

    let rules = parse(&content);
    let result = analyze(&rules, base_str.as_deref());
    tracing::debug!(
        "'{}': {} rules, score {}/100",
        site.name,
        result.summary.total_rules,
        result.summary.score
    );

    let report_path = report_dir.join(format!("{}.{}", site.name, format.extension()));
    match format {
        ReportFormat::Markdown => {
            let source = ReportSource::new(site.name.clone(), base.as_ref().map(origin), &content);
            write_markdown_report(&result, &source, &report_path)?;
        }
        ReportFormat::Json => write_json(&result, &report_path)?,
        ReportFormat::Csv => std::fs::write(&report_path, to_csv(&result))?,
    }

    Ok(report_path)
}
