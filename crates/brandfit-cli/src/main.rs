use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod report;
mod run;

#[derive(Debug, Parser)]
#[command(name = "brandfit")]
#[command(about = "Brand-creator compatibility scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Brand selection shared by the scoring commands.
///
/// Either `--brand` (a roster entry from the brands file) or an ad-hoc
/// brand built from `--category`/`--target-tier`.
#[derive(Debug, Args)]
struct BrandArgs {
    /// Brand name from the configured roster
    #[arg(long)]
    brand: Option<String>,

    /// Ad-hoc brand category (used when --brand is not given)
    #[arg(long)]
    category: Option<String>,

    /// Target audience tier: nano, micro, mid-tier, macro, mega, or any
    #[arg(long)]
    target_tier: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score a single creator against a brand
    Score {
        #[command(flatten)]
        brand: BrandArgs,

        /// Creator username to evaluate
        #[arg(long)]
        creator: String,

        /// Read creator profiles from a JSON file instead of the profile service
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emit the full JSON document instead of the console summary
        #[arg(long)]
        json: bool,
    },
    /// Rank multiple creators for a brand
    Rank {
        #[command(flatten)]
        brand: BrandArgs,

        /// Creator usernames to evaluate
        #[arg(long, num_args = 1..)]
        creators: Vec<String>,

        /// Read creator profiles from a JSON file instead of the profile service
        #[arg(long)]
        input: Option<PathBuf>,

        /// Emit the full JSON document instead of the console summary
        #[arg(long)]
        json: bool,
    },
    /// List the configured brand roster
    Brands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = brandfit_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score {
            brand,
            creator,
            input,
            json,
        } => run::run_score(&config, &brand, &creator, input.as_deref(), json).await,
        Commands::Rank {
            brand,
            creators,
            input,
            json,
        } => run::run_rank(&config, &brand, &creators, input.as_deref(), json).await,
        Commands::Brands => run::run_brands(&config),
    }
}
