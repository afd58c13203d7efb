// Core structs: Product, Listing, MatchGroup and the error types
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A canonical catalog product. All fields are lowercase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub family: String,
    pub announced_date: String,
}

impl Product {
    /// Trailing token of the model after the last space, hyphen or underscore.
    pub fn short_model(&self) -> &str {
        self.model
            .rsplit([' ', '-', '_'])
            .next()
            .unwrap_or(&self.model)
    }
}

/// A merchant price listing. All fields are lowercase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Listing {
    pub title: String,
    pub manufacturer: String,
    pub currency: String,
    pub price: String,
}

impl Listing {
    /// First space-delimited word of the manufacturer, used as the bucket key.
    pub fn manufacturer_head(&self) -> &str {
        match self.manufacturer.find(' ') {
            Some(idx) => self.manufacturer[..idx].trim(),
            None => &self.manufacturer,
        }
    }
}

/// Listings accepted for one product, in ranked order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchGroup {
    pub product_name: String,
    pub listings: Vec<Listing>,
}

impl MatchGroup {
    pub fn empty(product_name: &str) -> Self {
        Self {
            product_name: product_name.to_string(),
            listings: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },
    #[error("line is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input {path} unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("matching worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Top-level failure of a batch run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error(transparent)]
    Match(#[from] MatchError),
}
