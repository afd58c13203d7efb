// Input side: where record lines come from and how they become typed records.

pub mod file;
pub mod traits;

pub use file::FileSource;
pub use traits::{RecordSource, SourceLine};

use crate::model::SourceError;
use crate::parser::RecordParser;
use tracing::warn;

/// Fetches every line from `source` and decodes it with `parser`.
/// Blank lines are ignored; undecodable or malformed lines are logged and skipped.
pub async fn load_records<S, P>(
    source: &S,
    parser: &P,
) -> Result<Vec<P::Record>, SourceError>
where
    S: RecordSource + ?Sized,
    P: RecordParser,
{
    let lines = source.fetch_lines().await?;
    let mut records = Vec::with_capacity(lines.len());
    for (idx, line) in lines.into_iter().enumerate() {
        let parsed = line.and_then(|line| match line.trim() {
            "" => Ok(None),
            _ => parser.parse(&line).map(Some),
        });
        match parsed {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => warn!("Skipping line {}: {}", idx + 1, e),
        }
    }
    Ok(records)
}
