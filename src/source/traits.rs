use crate::model::{ParserError, SourceError};

/// One raw line, or the reason it could not be decoded as text.
pub type SourceLine = Result<String, ParserError>;

/// Supplier of serialized records, one per line.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Fails only when the input as a whole cannot be read.
    async fn fetch_lines(&self) -> Result<Vec<SourceLine>, SourceError>;
}
