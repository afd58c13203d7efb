use crate::model::{Listing, Product};
use std::collections::HashMap;

/// Listings sharing one manufacturer head word, in input order.
#[derive(Debug, Clone)]
pub struct ManufacturerBucket {
    pub key: String,
    pub listings: Vec<Listing>,
}

/// Buckets listings by the first word of their manufacturer so each product
/// only has to be compared against listings from its own brand.
#[derive(Debug, Default)]
pub struct ManufacturerIndex {
    buckets: Vec<ManufacturerBucket>,
    positions: HashMap<String, usize>,
}

impl ManufacturerIndex {
    pub fn build(listings: impl IntoIterator<Item = Listing>) -> Self {
        let mut index = Self::default();
        for listing in listings {
            index.insert(listing);
        }
        index
    }

    fn insert(&mut self, listing: Listing) {
        let key = listing.manufacturer_head();
        if let Some(&pos) = self.positions.get(key) {
            self.buckets[pos].listings.push(listing);
            return;
        }
        let key = key.to_string();
        self.positions.insert(key.clone(), self.buckets.len());
        self.buckets.push(ManufacturerBucket {
            key,
            listings: vec![listing],
        });
    }

    /// First bucket, in build order, whose key the product's manufacturer starts with.
    /// Later buckets that would also qualify are never consulted.
    pub fn lookup(&self, product: &Product) -> Option<&ManufacturerBucket> {
        self.buckets
            .iter()
            .find(|bucket| product.manufacturer.starts_with(&bucket.key))
    }

    pub fn buckets(&self) -> &[ManufacturerBucket] {
        &self.buckets
    }

    pub fn listing_count(&self) -> usize {
        self.buckets.iter().map(|b| b.listings.len()).sum()
    }
}
