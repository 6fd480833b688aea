//! gitgod CLI
//!
//! Runs the terminal UI by default; subcommands print JSON for scripting.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use gitgod::{
    app::App,
    catalog::Tier,
    config::Config,
    error::Result,
    logging, search, stars,
    trending::{TimeRange, TrendingService},
};

/// gitgod - curated open-source directory
#[derive(Parser, Debug)]
#[command(name = "gitgod", version, about = "Browse, search, and discover open-source projects")]
struct Cli {
    /// Catalog JSON file to use instead of the builtin dataset
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank catalog projects against a free-text query
    Search {
        /// Query terms
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Fetch recently created popular repositories from GitHub
    Trending {
        /// daily, weekly, or monthly
        #[arg(short, long, default_value = "weekly")]
        range: String,
    },

    /// List categories
    Categories {
        /// Only categories of this tier (legendary, domain, rising)
        #[arg(short, long)]
        tier: Option<Tier>,
    },

    /// Refresh star and fork counts from GitHub and write the catalog
    UpdateStars {
        /// Output file (default: the loaded catalog file, or data/catalog.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One line of `categories` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorySummary<'a> {
    id: &'a str,
    name: &'a str,
    tier: Tier,
    project_count: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let Some(command) = cli.command else {
        return run_tui(&config, cli.verbose).await;
    };

    logging::init_stderr(cli.verbose);
    let mut catalog = config.load_catalog()?;

    match command {
        Command::Search { query } => {
            let response = search::search(&catalog, &query.join(" "));
            tracing::info!(
                query = %response.query,
                results = response.results.len(),
                "search complete"
            );
            print_json(&response)?;
        }

        Command::Trending { range } => {
            let mut service = TrendingService::new(config.github_client()?);
            let response = service.fetch(&TimeRange::parse(&range)).await;
            print_json(&response)?;
        }

        Command::Categories { tier } => {
            let categories = match tier {
                Some(tier) => catalog.by_tier(tier),
                None => catalog.categories().iter().collect(),
            };
            let summaries: Vec<CategorySummary> = categories
                .into_iter()
                .map(|c| CategorySummary {
                    id: &c.id,
                    name: &c.name,
                    tier: c.tier,
                    project_count: c.projects.len(),
                })
                .collect();
            print_json(&summaries)?;
        }

        Command::UpdateStars { output } => {
            let output = output
                .or_else(|| config.catalog_path.clone())
                .unwrap_or_else(|| PathBuf::from("data/catalog.json"));

            let mut client = config.github_client()?;
            if !client.is_authenticated() {
                tracing::warn!("GITHUB_TOKEN not set; anonymous requests are heavily rate limited");
            }

            let report = stars::refresh(&mut client, &mut catalog, stars::REQUEST_DELAY).await;
            catalog.save(&output)?;
            tracing::info!("Catalog written to {}", output.display());
            print_json(&report)?;
        }
    }

    Ok(())
}

async fn run_tui(config: &Config, verbose: bool) -> Result<()> {
    let log_path = logging::init_file(verbose)?;
    let catalog = config.load_catalog()?;
    let client = config.github_client()?;

    if let Some(path) = &log_path {
        tracing::info!("gitgod starting, logging to {}", path.display());
    }

    let mut terminal = ratatui::init();
    let mut app = App::new(catalog, client);
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result?;
    Ok(())
}
