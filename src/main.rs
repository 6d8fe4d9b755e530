use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ccg_versions::batch::config::{
    DEFAULT_CARDS_STEM, DEFAULT_INDEX_INPUT, DEFAULT_INDEX_OUTPUT,
};
use ccg_versions::{run_build, run_index, BuildJob, IndexJob, JsonStyle};

#[derive(Parser)]
#[command(name = "ccg-versions", version, about = "Card catalog version index and build")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the printing version index for one catalog file
    Index(IndexArgs),
    /// Merge catalog overlays and add version data to the card catalog
    Build(BuildArgs),
}

#[derive(Args)]
struct IndexArgs {
    /// Card catalog to read
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INDEX_INPUT)]
    input: PathBuf,
    /// Where to write the version index
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INDEX_OUTPUT)]
    output: PathBuf,
    /// Sort printings by key before choosing primaries
    #[arg(long)]
    sort_keys: bool,
    /// Write single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Args)]
struct BuildArgs {
    /// Directory with `<stem>.json` catalogs and their overlays
    #[arg(long, value_name = "DIR", default_value = "../data")]
    data_dir: PathBuf,
    /// Directory merged catalogs are written to
    #[arg(long, value_name = "DIR", default_value = "data")]
    out_dir: PathBuf,
    /// Catalog stem to build; repeatable. Defaults to the full catalog set
    #[arg(long = "file", value_name = "STEM")]
    files: Vec<String>,
    /// Stem of the card catalog that receives version data
    #[arg(long, value_name = "STEM", default_value = DEFAULT_CARDS_STEM)]
    cards_stem: String,
    /// Keep every key and the merged key order (no sorting or key removal)
    #[arg(long)]
    no_cleanup: bool,
    /// Write indented JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("fatal: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Index(args) => {
            let mut job = IndexJob::new(args.input, args.output);
            if args.sort_keys {
                job = job.sorted();
            }
            if args.compact {
                job = job.with_style(JsonStyle::Compact);
            }

            let summary = run_index(&job)
                .with_context(|| format!("building version index from {}", job.input.display()))?;
            println!("{summary}");
        }
        Commands::Build(args) => {
            let mut job = BuildJob::new(args.data_dir, args.out_dir).with_cards_stem(args.cards_stem);
            if !args.files.is_empty() {
                job = job.with_catalogs(args.files);
            }
            if args.no_cleanup {
                job = job.without_cleanup();
            }
            if args.pretty {
                job = job.with_style(JsonStyle::Pretty);
            }

            let reports = run_build(&job)
                .with_context(|| format!("building catalogs from {}", job.data_dir.display()))?;
            for report in &reports {
                println!(
                    "{}: {} records, {} overlays merged -> {}",
                    report.stem,
                    report.records,
                    report.overlays_applied.len(),
                    report.output.display()
                );
                if let Some(summary) = &report.versions {
                    println!("{summary}");
                }
            }
        }
    }
    Ok(())
}
