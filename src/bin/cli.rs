//! Club Crawler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use club_crawler::{
    error::Result,
    models::Config,
    pipeline::{self, report},
    storage::{ClubStorage, LocalStorage},
    utils::http,
};

/// Club Crawler - PES University club directory scraper
#[derive(Parser, Debug)]
#[command(
    name = "club-crawler",
    version,
    about = "Scrapes campus club pages into a JSON document"
)]
struct Cli {
    /// Path to the TOML configuration file (defaults apply when missing)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the listing and every club page (default)
    Crawl {
        /// Output file (default: output.path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration
    Validate,

    /// Show the state of the output document
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command.unwrap_or(Command::Crawl { output: None }) {
        Command::Crawl { output } => {
            if let Some(path) = output {
                config.output.path = path.display().to_string();
            }
            config.validate()?;

            log::info!("Starting to scrape clubs...");

            let client = http::create_client(&config.crawler)?;
            let storage = LocalStorage::new(&config.output.path);
            let outcome = pipeline::run_crawler(&config, &client, &storage).await?;

            report::log_summary(&outcome);

            if let Some(first) = outcome.clubs.first() {
                println!("\nSample data for first club:");
                println!("{}", report::preview(first, config.output.preview_chars)?);
            }
        }

        Command::Validate => pipeline::run_validate(&config)?,

        Command::Info => {
            let storage = LocalStorage::new(&config.output.path);
            log::info!("Listing URL: {}", config.source.listing_url);

            match storage.load_clubs().await? {
                Some(clubs) => {
                    let failed = clubs.iter().filter(|c| c.is_failed()).count();
                    log::info!("Output: {} ({} clubs)", storage.location(), clubs.len());
                    log::info!("    Detail pages recorded as errors: {}", failed);
                }
                None => log::info!("Output: {} not found yet.", storage.location()),
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
