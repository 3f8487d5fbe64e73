//! launchtrack - SpaceX launch data CLI
//!
//! Thin front-end over the library: parses arguments, constructs the cache
//! and fetch client once, dispatches to the aggregation core, and prints
//! results as JSON (or writes export files).

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use launchtrack::cache::CacheManager;
use launchtrack::cli::{Cli, Command, StatCommand};
use launchtrack::config::Settings;
use launchtrack::data::launches::{fetch_launch_views, sort_views, LaunchFilters};
use launchtrack::data::{launch_frequency, launch_site_rate, rocket_success_rate, LaunchApiClient};
use launchtrack::export::export_launches;
use launchtrack::logging;
use launchtrack::paginate::paginate;

/// Base used for pagination links in listing output
const LISTING_LINK_BASE: &str = "launches";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _ = logging::init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = cli.settings();

    match cli.command {
        Command::Launches(args) => {
            let client = LaunchApiClient::new(&settings);
            let filters = args.filters.to_filters(settings.rocket_match);
            let mut views = fetch_launch_views(&client, &filters).await?;
            if let Some(key) = args.sort {
                sort_views(&mut views, key, args.desc);
            }

            let page = paginate(
                &views,
                args.page_size,
                args.page,
                LISTING_LINK_BASE,
                &args.filters.query_pairs(),
            )?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Stats { stat } => {
            let client = LaunchApiClient::new(&settings);
            let views = fetch_launch_views(&client, &LaunchFilters::default()).await?;

            let json = match stat {
                StatCommand::SuccessRate => {
                    serde_json::to_string_pretty(&rocket_success_rate(&views))?
                }
                StatCommand::LaunchSite => serde_json::to_string_pretty(&launch_site_rate(&views))?,
                StatCommand::Frequency => serde_json::to_string_pretty(&launch_frequency(&views))?,
            };
            println!("{}", json);
        }
        Command::Export(args) => {
            let client = LaunchApiClient::new(&settings);
            let filters = args.filters.to_filters(settings.rocket_match);
            let views = fetch_launch_views(&client, &filters).await?;

            let artifact = export_launches(&views, &args.format)?;
            let path = args
                .output
                .unwrap_or_else(|| PathBuf::from(artifact.filename));
            fs::write(&path, &artifact.body)?;
            println!("Wrote {} launches to {}", views.len(), path.display());
        }
        Command::CacheClear => match cache_from_settings(&settings) {
            Some(cache) => {
                if !cache.clear_all() {
                    return Err("Failed to clear cache".into());
                }
                println!("Cache cleared");
            }
            None => println!("No cache directory configured, nothing to clear"),
        },
    }
    Ok(())
}

/// Builds the cache manager the fetch client would use, for administration
fn cache_from_settings(settings: &Settings) -> Option<CacheManager> {
    match settings.cache_dir.clone() {
        Some(dir) => Some(CacheManager::with_dir(dir)),
        None => CacheManager::new(),
    }
}
