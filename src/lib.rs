//! # Orthos
//!
//! A trie-backed spelling corrector with bounded edit-distance search.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Prefix-tree dictionary sharing distance computation across common prefixes
//! - Adaptive edit-distance budgets derived from vowel counts
//! - Early subtree pruning once no completion can stay within budget
//! - Discovery-order tie-breaking with first-letter affinity
//! - Word-list loading, an interactive loop, and a misspelling fuzzer

pub mod checker;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod levenshtein;
pub mod normalize;
pub mod suggest;
pub mod typo;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
