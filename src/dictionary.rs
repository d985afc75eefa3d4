//! Trie dictionary for spelling correction.
//!
//! Words are stored in a prefix tree: one edge per character, with the full
//! word recorded at its terminal node. Children are kept sorted by character
//! so traversal visits candidates in a stable, reproducible order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;

use crate::error::Result;

/// A single node of the dictionary trie.
///
/// Each node exclusively owns its children. The `word` field holds the full
/// inserted word when this node terminates one; interior prefix nodes carry
/// `None`. A node can be both terminal and the prefix of longer words.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Child nodes, sorted by edge character.
    children: Vec<(char, TrieNode)>,
    /// The inserted word ending at this node, if any.
    word: Option<String>,
}

impl TrieNode {
    /// Look up the child reached by `ch`.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&ch, |(label, _)| *label)
            .ok()
            .map(|index| &self.children[index].1)
    }

    /// Get or create the child reached by `ch`, preserving sort order.
    fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        match self.children.binary_search_by_key(&ch, |(label, _)| *label) {
            Ok(index) => &mut self.children[index].1,
            Err(index) => {
                self.children.insert(index, (ch, TrieNode::default()));
                &mut self.children[index].1
            }
        }
    }

    /// Children in ascending character order.
    pub fn children(&self) -> &[(char, TrieNode)] {
        &self.children
    }

    /// The word terminating at this node, if any.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }
}

/// A word dictionary backed by a trie.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            root: TrieNode::default(),
            word_count: 0,
        }
    }

    /// Insert a word into the dictionary.
    ///
    /// The word is expected to be non-empty lowercase alphabetic text;
    /// callers filter and normalize their input before inserting. Duplicate
    /// insertions re-count the word, so dedupe upstream if exact counts
    /// matter.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        node.word = Some(word.to_string());
        self.word_count += 1;
    }

    /// Check whether `word` traces an existing path from the root.
    ///
    /// This accepts prefixes of inserted words as well as whole words: the
    /// path for "colo" exists once "color" has been inserted, even though no
    /// terminal marker sits at that depth. Callers relying on this check get
    /// path membership, not strict word membership.
    pub fn contains_path(&self, word: &str) -> bool {
        let mut node = &self.root;
        for ch in word.chars() {
            match node.child(ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        true
    }

    /// Sample a random word by descending random children from the root.
    ///
    /// The descent stops at the first childless node, which in a well-formed
    /// trie always terminates an inserted word. Returns `None` when the
    /// dictionary is empty.
    pub fn sample_random_word(&self) -> Option<&str> {
        let mut rng = rand::rng();
        let mut node = &self.root;
        while !node.children.is_empty() {
            let index = rng.random_range(0..node.children.len());
            node = &node.children[index].1;
        }
        node.word()
    }

    /// Root node of the trie.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of insertions performed (duplicates counted).
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Lines are trimmed and lowercased; lines that are empty or contain
    /// non-alphabetic characters are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) {
                dictionary.insert(&word.to_lowercase());
            }
        }

        Ok(dictionary)
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_insert_and_contains_path() {
        let mut dict = Dictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains_path("hello"));

        dict.insert("hello");
        assert!(dict.contains_path("hello"));
        assert!(!dict.contains_path("help"));
        assert_eq!(dict.word_count(), 1);
        assert!(!dict.is_empty());
    }

    #[test]
    fn test_contains_path_accepts_prefixes() {
        let mut dict = Dictionary::new();
        dict.insert("color");

        // Path membership, not strict word membership.
        assert!(dict.contains_path("col"));
        assert!(dict.contains_path("colo"));
        assert!(!dict.contains_path("colors"));
    }

    #[test]
    fn test_duplicate_insertion_recounts() {
        let mut dict = Dictionary::new();
        dict.insert("word");
        dict.insert("word");
        assert_eq!(dict.word_count(), 2);
        assert!(dict.contains_path("word"));
    }

    #[test]
    fn test_terminal_inside_longer_word() {
        let mut dict = Dictionary::new();
        dict.insert("car");
        dict.insert("cart");

        let node = dict
            .root()
            .child('c')
            .and_then(|n| n.child('a'))
            .and_then(|n| n.child('r'))
            .unwrap();
        assert_eq!(node.word(), Some("car"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_children_sorted_by_character() {
        let mut dict = Dictionary::new();
        dict.insert("zebra");
        dict.insert("apple");
        dict.insert("mango");

        let labels: Vec<char> = dict
            .root()
            .children()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(labels, vec!['a', 'm', 'z']);
    }

    #[test]
    fn test_sample_random_word_empty() {
        let dict = Dictionary::new();
        assert_eq!(dict.sample_random_word(), None);
    }

    #[test]
    fn test_sample_random_word_is_member() {
        let dict = Dictionary::from_words(["color", "colour", "collar", "apple"]);

        for _ in 0..50 {
            let sampled = dict.sample_random_word().unwrap();
            assert!(dict.contains_path(sampled));
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello").unwrap();
        writeln!(temp_file, "world").unwrap();
        writeln!(temp_file, "it's").unwrap();
        writeln!(temp_file, "  ").unwrap();
        writeln!(temp_file, "3rd").unwrap();
        temp_file.flush().unwrap();

        let dict = Dictionary::load_from_file(temp_file.path()).unwrap();
        assert_eq!(dict.word_count(), 2);
        assert!(dict.contains_path("hello"));
        assert!(dict.contains_path("world"));
        assert!(!dict.contains_path("3rd"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Dictionary::load_from_file("/nonexistent/words");
        assert!(result.is_err());
    }
}
