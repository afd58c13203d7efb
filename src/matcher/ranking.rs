use crate::matcher::relevancy::{Relevancy, score};
use crate::model::{Listing, Product};

/// A listing paired with its relevancy to the product currently being matched.
#[derive(Debug, Clone, Copy)]
pub struct ScoredListing<'a> {
    pub listing: &'a Listing,
    pub relevancy: Relevancy,
}

/// Scores every listing of a bucket and orders them by descending relevancy.
/// Ties keep their bucket order.
pub fn rank<'a>(bucket: &'a [Listing], product: &Product) -> Vec<ScoredListing<'a>> {
    let mut scored: Vec<ScoredListing<'a>> = bucket
        .iter()
        .map(|listing| ScoredListing {
            listing,
            relevancy: score(listing, product),
        })
        .collect();
    scored.sort_by(|a, b| b.relevancy.cmp(&a.relevancy));
    scored
}
