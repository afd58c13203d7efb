// Matcher module: bucketing, scoring, ranking and the accept/reject walk.

pub mod decision;
pub mod engine;
pub mod index;
pub mod ranking;
pub mod relevancy;
pub mod summary;

pub use decision::MatchDecider;
pub use engine::{MatchEngine, MatchOutcome, match_concurrently, match_listings};
pub use index::ManufacturerIndex;
pub use relevancy::Relevancy;
pub use summary::MatchSummary;
