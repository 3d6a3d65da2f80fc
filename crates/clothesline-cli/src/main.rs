//! Clothesline CLI: headless runs, material listing, and scenario checks.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "clothesline")]
#[command(version, about = "Clothesline: cloth on a line in wind and rain")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless scenario and export per-frame positions.
    Run {
        /// Path to scenario config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Output JSON file path.
        #[arg(short, long, default_value = "frames.json")]
        output: String,

        /// Override the number of frames.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Override the turbulence seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also write scene events as JSON lines to this path.
        #[arg(long)]
        events: Option<String>,
    },

    /// List the material presets.
    Materials {
        /// Include the extra materials of this scenario.
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Validate a scenario config or an exported frames file.
    Validate {
        /// Path to a .toml scenario or a .json export.
        path: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            config,
            output,
            frames,
            seed,
            events,
        } => commands::run(config.as_deref(), &output, frames, seed, events.as_deref()),
        Commands::Materials { config } => commands::materials(config.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
