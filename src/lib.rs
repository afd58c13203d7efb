//! `listing-matcher`: resolves merchant price listings against a product catalog.
//!
//! Listings are bucketed by manufacturer, scored against each product with a
//! fixed rule cascade, ranked, and accepted one at a time while the number of
//! matches already accepted keeps lowering the expected cost of the next one.

pub mod config;
pub mod matcher;
pub mod model;
pub mod normalizer;
pub mod output;
pub mod parser;
pub mod source;

use crate::config::AppConfig;
use crate::matcher::{
    ManufacturerIndex, MatchDecider, MatchEngine, MatchSummary, match_concurrently,
};
use crate::model::{AppError, MatchGroup};
use crate::output::write_results;
use crate::parser::{ListingParser, ProductParser};
use crate::source::{FileSource, load_records};
use chrono::Utc;
use futures::future::try_join;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub use matcher::match_listings;
pub use model::{Listing, Product};

/// Reads both inputs, matches every product and writes the result file.
/// Nothing is written unless every step before it succeeded.
pub async fn run_batch(config: &AppConfig) -> Result<MatchSummary, AppError> {
    let started_at = Utc::now();

    info!("Loading products and listings...");
    let products_source = FileSource::new(&config.products_path);
    let listings_source = FileSource::new(&config.listings_path);
    let (products, listings) = try_join(
        load_records(&products_source, &ProductParser::new()),
        load_records(&listings_source, &ListingParser::new()),
    )
    .await?;
    info!("Loaded {} products and {} listings", products.len(), listings.len());

    let engine = Arc::new(MatchEngine::new(
        ManufacturerIndex::build(listings),
        MatchDecider::new(config.error_tolerance),
    ));
    info!(
        "Indexed {} listings into {} manufacturer buckets",
        engine.index().listing_count(),
        engine.index().buckets().len()
    );

    info!(
        "Matching with error tolerance {} on {} workers...",
        engine.decider().error_tolerance(),
        config.workers
    );
    let outcomes = match_concurrently(engine, &products, config.workers).await?;
    let summary = MatchSummary::from_outcomes(&outcomes, started_at);

    let groups: Vec<MatchGroup> = outcomes.into_iter().map(|o| o.group).collect();
    write_results(Path::new(&config.output_path), &groups).await?;

    log_summary(&summary);
    Ok(summary)
}

fn log_summary(summary: &MatchSummary) {
    info!("Match Summary:");
    info!(
        "Products: {} | matched: {} | no bucket: {}",
        summary.products, summary.matched_products, summary.without_bucket
    );
    info!(
        "Accepted listings: {} (avg {:.2} per matched product)",
        summary.accepted_listings,
        summary.avg_listings_per_match()
    );
    for (tier, count) in &summary.tiers {
        info!("  {}: {}", tier, count);
    }
    info!(
        "Run started {} took {} ms",
        summary.started_at.to_rfc3339(),
        summary.elapsed.num_milliseconds()
    );
}
