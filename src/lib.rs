//! An in-memory, case-insensitive prefix tree for exact lookup and
//! prefix-based suggestion of words.

mod error;
mod node;
pub mod source;
mod trie;

pub use error::{ErrorKind, TrieError};
pub use node::Node;
pub use trie::Trie;
