//! Narrative Builder CLI
//!
//! cricsheet JSON → ball-by-ball narrative text reports.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use cs_core::NarrativeConfig;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tracing::{info, warn};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "narrative_builder")]
#[command(about = "Build ball-by-ball match narratives from cricsheet JSON", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build a report for every JSON file in a folder
    Folder {
        /// Folder containing cricsheet JSON files
        #[arg(long)]
        r#in: PathBuf,

        /// Output folder for reports
        #[arg(long, default_value = narrative_builder::DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Layout config file (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Include sub-folders
        #[arg(long, default_value = "false")]
        recursive: bool,

        /// Build one match at a time
        #[arg(long, default_value = "false")]
        sequential: bool,

        /// Write the batch summary as JSON
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Build a report for a single JSON file
    File {
        /// cricsheet JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Output folder for the report
        #[arg(long, default_value = narrative_builder::DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Layout config file (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report instead of writing it
        #[arg(long, default_value = "false")]
        stdout: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Folder { r#in, out, config, recursive, sequential, summary } => {
            let config = load_config(config.as_deref())?;
            let options = narrative_builder::BuildOptions { output_dir: out, recursive, parallel: !sequential };

            info!(input = %r#in.display(), output = %options.output_dir.display(), "Building narratives");
            let batch = narrative_builder::process_folder(&r#in, &config, &options)
                .with_context(|| format!("Failed to process folder: {}", r#in.display()))?;

            for failed in &batch.failed {
                warn!(input = %failed.input.display(), bad_input = failed.bad_input, "{}", failed.error);
            }
            info!(built = batch.built.len(), failed = batch.failed.len(), "Batch finished");

            if let Some(path) = summary {
                save_summary(&path, &batch)?;
            }

            if !batch.is_success() {
                anyhow::bail!("{} of {} matches failed", batch.failed.len(), batch.total());
            }
        }

        Commands::File { r#in, out, config, stdout } => {
            let config = load_config(config.as_deref())?;

            if stdout {
                let (_, report) = narrative_builder::render_report(&r#in, &config)?;
                println!("{}", report);
            } else {
                let outcome = narrative_builder::build_report(&r#in, &out, &config)?;
                info!(output = %outcome.output.display(), bytes = outcome.bytes, "Report written");
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Also installs the `log` bridge so cs_core's records come through.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

#[cfg(feature = "cli")]
fn load_config(path: Option<&Path>) -> Result<NarrativeConfig> {
    NarrativeConfig::load(path).context("Failed to load narrative config")
}

#[cfg(feature = "cli")]
fn save_summary(path: &Path, batch: &narrative_builder::BatchSummary) -> Result<()> {
    let summary_json = serde_json::to_string_pretty(batch)?;
    std::fs::write(path, summary_json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    info!(path = %path.display(), "Summary saved");
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("narrative_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
