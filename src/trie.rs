use serde_json::Value;
use tracing::{debug, trace};

use crate::{node::Node, TrieError};

/// A case-insensitive prefix tree of words.
///
/// Words are lower-cased on the way in, and every query is lower-cased before
/// it is walked. Nodes are only ever added, so the tree grows monotonically.
///
/// Mutation needs `&mut self`; callers sharing a trie between threads should
/// wrap it in a lock.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie { root: Node::root() }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts a single word. Re-inserting a stored word changes nothing.
    pub fn add_word(&mut self, word: &str) -> &mut Self {
        self.insert(word);
        self
    }

    /// Inserts every word of `words`, in order.
    pub fn add_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inserted = 0usize;
        for word in words {
            if self.insert(word.as_ref()) {
                inserted += 1;
            }
        }
        debug!("Added {} new words to trie", inserted);
        self
    }

    /// Inserts a batch of dynamically typed values.
    ///
    /// The whole batch is checked before anything is inserted: if any element
    /// is not a string, [`TrieError::NotAString`] is returned and the trie is
    /// left untouched.
    pub fn try_add_values(&mut self, values: &[Value]) -> Result<&mut Self, TrieError> {
        let words = values
            .iter()
            .enumerate()
            .map(|(index, value)| expect_str(index, value))
            .collect::<Result<Vec<&str>, _>>()?;

        Ok(self.add_words(words))
    }

    /// Walks the trie along `word` and returns the node reached, or `None` if
    /// some character has no edge.
    pub fn tail_node(&self, word: &str) -> Option<&Node> {
        self.walk(&word.to_lowercase())
    }

    /// Whether `word` was inserted, ignoring case.
    pub fn search_word(&self, word: &str) -> bool {
        self.tail_node(word).is_some_and(Node::is_word)
    }

    pub fn search_value(&self, value: &Value) -> Result<bool, TrieError> {
        Ok(self.search_word(expect_str(0, value)?))
    }

    /// Whether any stored word starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.tail_node(prefix).is_some()
    }

    /// Returns every stored word beginning with `prefix`.
    ///
    /// The prefix itself comes first when it is a stored word, followed by its
    /// extensions in depth-first, insertion order. A prefix with no path in the
    /// tree is an error rather than an empty list.
    pub fn suggest_word(&self, prefix: &str) -> Result<Vec<String>, TrieError> {
        let prefix = prefix.to_lowercase();
        let node = self.walk(&prefix).ok_or_else(|| TrieError::NoMatch {
            prefix: prefix.clone(),
        })?;

        if node.is_word() && node.is_leaf() {
            return Ok(vec![prefix]);
        }

        let suggestions = collect_words(node, prefix);
        trace!("Collected {} suggestions", suggestions.len());
        Ok(suggestions)
    }

    pub fn suggest_value(&self, value: &Value) -> Result<Vec<String>, TrieError> {
        self.suggest_word(expect_str(0, value)?)
    }

    /// Returns every stored word in depth-first, insertion order.
    ///
    /// The empty word is never listed, even if it was inserted.
    pub fn all_words(&self) -> Vec<String> {
        self.root
            .children()
            .flat_map(|child| collect_words(child, child.value().to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && !self.root.is_word()
    }

    /// Returns true if `word` was not already stored.
    fn insert(&mut self, word: &str) -> bool {
        let mut current = &mut self.root;
        for c in word.to_lowercase().chars() {
            current = current.child_or_insert(c);
        }
        current.set_word()
    }

    fn walk(&self, normalized: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in normalized.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.add_words(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_words(iter);
    }
}

/// Pre-order walk from `start`, which is reached by `prefix`. Uses an explicit
/// stack so long words cannot exhaust the call stack.
fn collect_words(start: &Node, prefix: String) -> Vec<String> {
    let mut words = Vec::new();
    let mut stack = vec![(start, prefix)];

    while let Some((node, word)) = stack.pop() {
        // Reversed so the first-inserted child is popped first.
        for child in node.children().rev() {
            let mut next = word.clone();
            next.push(child.value());
            stack.push((child, next));
        }
        if node.is_word() {
            words.push(word);
        }
    }

    words
}

fn expect_str(index: usize, value: &Value) -> Result<&str, TrieError> {
    value.as_str().ok_or(TrieError::NotAString {
        index,
        found: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
