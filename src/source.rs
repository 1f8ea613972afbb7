use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// How a word list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One word per line.
    Lines,
    /// A JSON array of words.
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Lines,
        }
    }

    /// Splits `text` into raw word values.
    ///
    /// JSON arrays are passed through as-is, so non-string entries survive
    /// until the trie validates the batch.
    pub fn parse(self, text: &str) -> Result<Vec<Value>, SourceError> {
        match self {
            Format::Lines => Ok(text
                .lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.is_empty())
                .map(|line| Value::String(line.to_string()))
                .collect()),
            Format::Json => match serde_json::from_str::<Value>(text)? {
                Value::Array(values) => Ok(values),
                _ => Err(SourceError::NotAnArray),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{}", .0)]
    Io(#[from] std::io::Error),

    #[error("{}", .0)]
    Json(#[from] serde_json::Error),

    #[error("A JSON word list must be an array")]
    NotAnArray,
}

/// Somewhere a word list can be loaded from.
#[async_trait::async_trait]
pub trait WordSource {
    async fn load(&self) -> Result<Vec<Value>, SourceError>;

    /// A short human readable name, used in logs and error messages.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: Format,
}

impl FileSource {
    /// Guesses the format from the file extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self { path, format }
    }

    pub fn with_format(path: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

#[async_trait::async_trait]
impl WordSource for FileSource {
    async fn load(&self) -> Result<Vec<Value>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let values = self.format.parse(&text)?;
        debug!("Loaded {} values from {}", values.len(), self.path.display());
        Ok(values)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct StdinSource {
    format: Format,
}

impl StdinSource {
    pub fn new(format: Format) -> Self {
        Self { format }
    }
}

#[async_trait::async_trait]
impl WordSource for StdinSource {
    async fn load(&self) -> Result<Vec<Value>, SourceError> {
        let mut stdin = tokio::io::stdin();
        let mut buf = Vec::with_capacity(256);
        stdin.read_to_end(&mut buf).await?;
        let values = self.format.parse(&String::from_utf8_lossy(&buf))?;
        debug!("Loaded {} values from stdin", values.len());
        Ok(values)
    }

    fn describe(&self) -> String {
        "<stdin>".into()
    }
}
