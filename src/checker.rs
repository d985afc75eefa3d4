//! Distance-bounded spell checking over the trie dictionary.
//!
//! The checker walks the trie depth-first, extending one Wagner–Fischer row
//! per edge so that every dictionary word sharing a prefix shares the
//! distance computation for it. A subtree is abandoned as soon as the row
//! minimum exceeds the budget, since no completion below can recover.

use crate::dictionary::{Dictionary, TrieNode};
use crate::levenshtein::{extend_row, initial_row};
use crate::normalize::{collapse_repeats, edit_budget, normalize};
use crate::suggest::{self, Candidate, Correction};

/// Spell checker over an immutable dictionary.
pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    /// Create a checker over a populated dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        SpellChecker { dictionary }
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Check the spelling of `raw` and propose a correction.
    ///
    /// The input is trimmed and lowercased. A word whose character path
    /// already exists in the dictionary is accepted as correctly spelled
    /// and suggested as itself. Otherwise repeated letters are collapsed,
    /// an edit budget is derived from the collapsed word's vowel count,
    /// and every dictionary word within budget competes for the
    /// suggestion slot.
    pub fn check(&self, raw: &str) -> Correction {
        let word = normalize(raw);

        if self.dictionary.contains_path(&word) {
            return Correction::exact(word);
        }

        let collapsed = collapse_repeats(&word);
        let candidates = self.candidates_within(&collapsed, edit_budget(&collapsed));

        suggest::select(candidates, &collapsed)
    }

    /// Collect every dictionary word within `max_distance` of `word`, in
    /// traversal discovery order (ascending character order per node).
    pub fn candidates_within(&self, word: &str, max_distance: usize) -> Vec<Candidate> {
        let word_chars: Vec<char> = word.chars().collect();
        let row = initial_row(word_chars.len());

        let mut found = Vec::new();
        for (edge, child) in self.dictionary.root().children() {
            collect(child, *edge, &word_chars, &row, max_distance, &mut found);
        }
        found
    }
}

/// Recursive bounded traversal step.
///
/// Extends the parent's DP row along `edge`, records the node's terminal
/// word when it lands within budget, and descends only while the row
/// minimum still meets the budget.
fn collect(
    node: &TrieNode,
    edge: char,
    word: &[char],
    prev: &[usize],
    max_distance: usize,
    found: &mut Vec<Candidate>,
) {
    let row = extend_row(prev, word, edge);

    if let Some(terminal) = node.word() {
        let distance = row[word.len()];
        if distance <= max_distance {
            found.push(Candidate::new(terminal, distance));
        }
    }

    let reachable = row.iter().min().copied().unwrap_or(0);
    if reachable <= max_distance {
        for (next_edge, child) in node.children() {
            collect(child, *next_edge, word, &row, max_distance, found);
        }
    }
}
