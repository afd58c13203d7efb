pub mod writer;

pub use writer::{render_results, write_results};
