use crate::model::{Listing, Product};

/// Lowercases every field of a product in place.
pub fn normalize_product(product: &mut Product) {
    for field in [
        &mut product.name,
        &mut product.manufacturer,
        &mut product.model,
        &mut product.family,
        &mut product.announced_date,
    ] {
        *field = field.to_lowercase();
    }
}

/// Lowercases every field of a listing in place.
pub fn normalize_listing(listing: &mut Listing) {
    for field in [
        &mut listing.title,
        &mut listing.manufacturer,
        &mut listing.currency,
        &mut listing.price,
    ] {
        *field = field.to_lowercase();
    }
}
