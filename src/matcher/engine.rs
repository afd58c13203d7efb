use crate::matcher::decision::MatchDecider;
use crate::matcher::index::ManufacturerIndex;
use crate::matcher::ranking::rank;
use crate::matcher::relevancy::Relevancy;
use crate::model::{Listing, MatchError, MatchGroup, Product};
use futures::future::join_all;
use std::sync::Arc;
use tracing::debug;

/// Result of matching one product, with the bookkeeping needed for the run summary.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub group: MatchGroup,
    /// Number of listings in the product's bucket, `None` when no bucket matched.
    pub candidates: Option<usize>,
    /// Relevancy of each accepted listing, parallel to `group.listings`.
    pub accepted: Vec<Relevancy>,
}

pub struct MatchEngine {
    index: ManufacturerIndex,
    decider: MatchDecider,
}

impl MatchEngine {
    pub fn new(index: ManufacturerIndex, decider: MatchDecider) -> Self {
        Self { index, decider }
    }

    pub fn index(&self) -> &ManufacturerIndex {
        &self.index
    }

    pub fn decider(&self) -> &MatchDecider {
        &self.decider
    }

    /// Ranks the product's bucket and walks it once, accepting listings while
    /// the running accepted count feeds back into each decision.
    pub fn match_product(&self, product: &Product) -> MatchOutcome {
        let Some(bucket) = self.index.lookup(product) else {
            debug!("No bucket for '{}' ({})", product.name, product.manufacturer);
            return MatchOutcome {
                group: MatchGroup::empty(&product.name),
                candidates: None,
                accepted: Vec::new(),
            };
        };

        let mut group = MatchGroup::empty(&product.name);
        let mut accepted = Vec::new();
        for candidate in rank(&bucket.listings, product) {
            if self.decider.decide(candidate.relevancy, accepted.len()) {
                accepted.push(candidate.relevancy);
                group.listings.push(candidate.listing.clone());
            }
        }

        debug!(
            "'{}': {} candidates in '{}', {} accepted",
            product.name,
            bucket.listings.len(),
            bucket.key,
            accepted.len()
        );
        MatchOutcome {
            group,
            candidates: Some(bucket.listings.len()),
            accepted,
        }
    }

    /// Matches products sequentially, preserving input order.
    pub fn match_products(&self, products: &[Product]) -> Vec<MatchOutcome> {
        products.iter().map(|p| self.match_product(p)).collect()
    }
}

/// Splits products into contiguous chunks matched on blocking worker threads.
/// Output order equals input order, so the result is the same as `match_products`.
pub async fn match_concurrently(
    engine: Arc<MatchEngine>,
    products: &[Product],
    workers: usize,
) -> Result<Vec<MatchOutcome>, MatchError> {
    if products.is_empty() {
        return Ok(Vec::new());
    }
    let chunk_size = products.len().div_ceil(workers.max(1));

    let tasks: Vec<_> = products
        .chunks(chunk_size)
        .map(|chunk| {
            let engine = engine.clone();
            let chunk = chunk.to_vec();
            tokio::task::spawn_blocking(move || engine.match_products(&chunk))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(products.len());
    for joined in join_all(tasks).await {
        outcomes.extend(joined?);
    }
    Ok(outcomes)
}

/// Groups `listings` under each product in `products`, in product order.
pub fn match_listings(
    products: &[Product],
    listings: Vec<Listing>,
    error_tolerance: f64,
) -> Vec<MatchGroup> {
    let engine = MatchEngine::new(
        ManufacturerIndex::build(listings),
        MatchDecider::new(error_tolerance),
    );
    engine
        .match_products(products)
        .into_iter()
        .map(|outcome| outcome.group)
        .collect()
}
