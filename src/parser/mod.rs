// Line-oriented record decoding for the product and listing inputs.

mod lenient;
pub mod record_parser;

pub use record_parser::{ListingParser, ProductParser, RecordParser};
