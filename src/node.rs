use std::fmt;

/// Sentinel value held by the root node. It is never appended to a word.
const ROOT_VALUE: char = '\0';

/// A single vertex in the trie.
pub struct Node {
    value: char,
    // Kept in insertion order so traversals are reproducible.
    children: Vec<Node>,
    is_word: bool,
}

impl Node {
    /// Creates the root node, representing the empty prefix.
    pub fn root() -> Self {
        Self::new(ROOT_VALUE)
    }

    pub fn new(value: char) -> Self {
        Node {
            value,
            children: Vec::new(),
            is_word: false,
        }
    }

    pub fn value(&self) -> char {
        self.value
    }

    /// Whether the path from the root to this node spells a stored word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Marks this node as terminating a word. Returns `true` if the flag was not already set.
    pub fn set_word(&mut self) -> bool {
        !std::mem::replace(&mut self.is_word, true)
    }

    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.iter().find(|n| n.value == c)
    }

    pub fn child_mut(&mut self, c: char) -> Option<&mut Node> {
        self.children.iter_mut().find(|n| n.value == c)
    }

    pub fn has_child(&self, c: char) -> bool {
        self.child(c).is_some()
    }

    /// Returns the child keyed by `c`, creating it first if the edge does not exist yet.
    pub fn child_or_insert(&mut self, c: char) -> &mut Node {
        let idx = match self.children.iter().position(|n| n.value == c) {
            Some(idx) => idx,
            None => {
                self.children.push(Node::new(c));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    /// Iterates over the children in the order their edges were created.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.children.iter()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::root()
    }
}

// Only the direct edges are shown; formatting the whole subtree would
// recurse once per character.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: String = self.children.iter().map(|n| n.value).collect();
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("is_word", &self.is_word)
            .field("children", &edges)
            .finish()
    }
}

// Dropping a long chain of nodes recursively could exhaust the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
