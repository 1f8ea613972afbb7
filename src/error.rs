use thiserror::Error;

/// The two classes of failure a trie operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value that should have been a string was something else.
    Type,
    /// A prefix has no path in the tree.
    Lookup,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("expected a string at position {index}, found {found}")]
    NotAString { index: usize, found: &'static str },

    #[error("no words match the prefix {prefix:?}")]
    NoMatch { prefix: String },
}

impl TrieError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrieError::NotAString { .. } => ErrorKind::Type,
            TrieError::NoMatch { .. } => ErrorKind::Lookup,
        }
    }
}
