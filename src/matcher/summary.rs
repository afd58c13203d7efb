use crate::matcher::engine::MatchOutcome;
use crate::matcher::relevancy::Relevancy;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Aggregate statistics over one matching run.
#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub products: usize,
    pub matched_products: usize,
    pub without_bucket: usize,
    pub accepted_listings: usize,
    /// Accepted listings per relevancy tier.
    pub tiers: BTreeMap<Relevancy, usize>,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl MatchSummary {
    pub fn from_outcomes(outcomes: &[MatchOutcome], started_at: DateTime<Utc>) -> Self {
        let mut tiers = BTreeMap::new();
        for relevancy in outcomes.iter().flat_map(|o| o.accepted.iter()) {
            *tiers.entry(*relevancy).or_insert(0) += 1;
        }

        Self {
            products: outcomes.len(),
            matched_products: outcomes.iter().filter(|o| !o.group.listings.is_empty()).count(),
            without_bucket: outcomes.iter().filter(|o| o.candidates.is_none()).count(),
            accepted_listings: outcomes.iter().map(|o| o.group.listings.len()).sum(),
            tiers,
            started_at,
            elapsed: Utc::now() - started_at,
        }
    }

    /// Average accepted listings over products that matched at least once.
    pub fn avg_listings_per_match(&self) -> f64 {
        if self.matched_products == 0 {
            return 0.0;
        }
        let avg = self.accepted_listings as f64 / self.matched_products as f64;
        (avg * 100.0).round() / 100.0
    }
}
