//! `docclass`: batch review / non-review classification of bibliographic records.

mod input;
mod output;
mod summary;
mod tracing_setup;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docclass_core::config::CliOverrides;
use docclass_core::{DocclassConfig, ProfileKind};
use docclass_engine::{classify_batch, ClassificationEngine};

use crate::output::OutputFormat;
use crate::summary::RunSummary;

#[derive(Debug, Parser)]
#[command(name = "docclass", version)]
#[command(about = "Classify bibliographic records as review, non-review or unknown")]
struct Cli {
    /// Emit logs as JSON objects on stderr.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify every record in an input file.
    Classify(ClassifyArgs),
    /// Load and validate configuration, term tables and the MeSH table.
    Check(ConfigArgs),
}

/// Flags that feed the layered configuration.
#[derive(Debug, Args)]
struct ConfigArgs {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// TOML file overriding the built-in term tables.
    #[arg(long)]
    terms: Option<PathBuf>,
    /// CSV of experimental MeSH probabilities.
    #[arg(long)]
    mesh: Option<PathBuf>,
    #[arg(long, value_parser = parse_profile)]
    profile: Option<ProfileKind>,
    #[arg(long)]
    threshold: Option<f64>,
    #[arg(long)]
    delta: Option<f64>,
    #[arg(long)]
    k_min: Option<usize>,
    /// Resolve ambiguous single-vote records to unknown. A bare flag means
    /// `true`; `--unknown-mode false` overrides the environment or file.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    unknown_mode: Option<bool>,
    #[arg(long)]
    prefer_pubmed_epsilon: Option<f64>,
    /// Characters that split a raw field into tokens.
    #[arg(long)]
    separators: Option<String>,
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    #[command(flatten)]
    config: ConfigArgs,
    /// CSV/TSV file, or `.jsonl` of serialized records.
    #[arg(long)]
    input: PathBuf,
    /// Destination file. Results go to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Input delimiter (`tab` for TSV). Sniffed from the header when omitted.
    #[arg(long)]
    delimiter: Option<String>,
    /// Write raw fields and full decisions as JSON lines.
    #[arg(long)]
    audit_log: Option<PathBuf>,
}

fn parse_profile(value: &str) -> Result<ProfileKind, String> {
    ProfileKind::parse(value)
        .ok_or_else(|| format!("unknown profile '{value}' (expected margin, vote or class_vote)"))
}

impl ConfigArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            profile: self.profile,
            separators: self.separators.clone(),
            threshold: self.threshold,
            delta: self.delta,
            k_min: self.k_min,
            unknown_mode: self.unknown_mode,
            prefer_pubmed_epsilon: self.prefer_pubmed_epsilon,
            terms_path: self.terms.as_deref().map(path_string),
            mesh_path: self.mesh.as_deref().map(path_string),
        }
    }

    fn load(&self) -> Result<DocclassConfig> {
        DocclassConfig::load(self.config.as_deref(), Some(&self.overrides()))
            .context("invalid configuration")
    }
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.log_json);

    match cli.command {
        Command::Classify(args) => run_classify(&args),
        Command::Check(args) => run_check(&args),
    }
}

fn build_engine(config: &DocclassConfig) -> Result<ClassificationEngine> {
    ClassificationEngine::from_config(config).context("failed to build classification engine")
}

fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let config = args.config.load()?;
    let engine = build_engine(&config)?;
    let delimiter = args
        .delimiter
        .as_deref()
        .map(input::parse_delimiter_arg)
        .transpose()?;

    let records = input::read_records(&args.input, delimiter)?;
    let results = classify_batch(&engine, &records);

    output::write_results(args.output.as_deref(), args.format, &results)?;
    if let Some(path) = &args.audit_log {
        output::write_audit_log(path, &records, &results)?;
    }

    let summary = RunSummary::collect(&records, &results);
    summary.log();
    eprintln!("{summary}");
    Ok(())
}

fn run_check(args: &ConfigArgs) -> Result<()> {
    let config = args.load()?;
    let engine = build_engine(&config)?;
    let tables = engine.tables();

    println!("profile: {}", engine.profile());
    println!("separators: {:?}", config.engine.separators);
    println!("synonym rules: {}", tables.synonyms.len());
    println!("dictionary terms: {}", tables.dictionary.term_count());
    println!("review aliases: {}", tables.review_aliases.len());
    println!("experimental qualifiers: {}", tables.experimental_qualifiers.len());
    println!("experimental descriptors: {}", tables.experimental_descriptors.len());
    match engine.mesh_table() {
        Some(mesh) => println!("mesh terms: {}", mesh.len()),
        None => println!("mesh terms: none"),
    }
    Ok(())
}
