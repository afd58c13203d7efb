use crate::model::{ParserError, SourceError};
use crate::source::traits::{RecordSource, SourceLine};
use std::path::PathBuf;
use tracing::debug;

/// Reads records from a newline-delimited file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl RecordSource for FileSource {
    async fn fetch_lines(&self) -> Result<Vec<SourceLine>, SourceError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Unavailable {
                path: self.path.clone(),
                source,
            })?;
        let lines = split_lines(&content);
        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }
}

/// Splits on `\n` (dropping a trailing `\r`) and decodes each line on its own,
/// so one badly encoded line does not take the rest of the file with it.
fn split_lines(content: &[u8]) -> Vec<SourceLine> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return Vec::new();
    }
    content
        .split(|b| *b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8(line.to_vec()).map_err(ParserError::from)
        })
        .collect()
}
