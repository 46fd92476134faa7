//! Builds the filter set of one listing against Manticore and prints it as JSON.

use std::sync::Arc;

use anyhow::Context;
use backend::{
    FiltersBuilder,
    config::FiltersConfig,
    region::CountryRegionPolicy,
    searcher::ManticoreSearcher,
};
use clap::Parser;
use common::condition::Condition;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "build_filters", about = "Build catalog filters for a category and condition")]
struct Args {
    /// Category of the listing.
    #[arg(long)]
    category: u64,

    /// Active selections as a JSON object, e.g. '{"producer": [12]}'.
    #[arg(long, default_value = "{}")]
    condition: String,

    /// Filters config file. Falls back to FILTERS_CONFIG, then config/filters.json.
    #[arg(long)]
    config: Option<String>,

    /// Current country code, checked against seller_disabled_countries.
    #[arg(long, default_value = "ua")]
    country: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => FiltersConfig::load(path)?,
        None => FiltersConfig::from_env()?,
    };
    let condition: Condition = serde_json::from_str(&args.condition).context("condition is not valid JSON")?;

    let region_policy = CountryRegionPolicy::new(args.country, config.seller_disabled_countries.clone());
    let mut builder = FiltersBuilder::new(
        args.category,
        condition,
        Arc::new(ManticoreSearcher::from_env()),
        Arc::new(region_policy),
        Arc::new(config),
    )?;

    let filter_set = builder.build_filters().await?;
    println!("{}", serde_json::to_string_pretty(filter_set)?);
    Ok(())
}
