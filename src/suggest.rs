//! Suggestion selection policy.
//!
//! The traversal hands over every dictionary word found within budget, in
//! discovery order. Selection keeps the words tied for the smallest distance,
//! then picks a primary: the last-discovered minimal candidate by default,
//! displaced by the first remaining candidate that shares the input's first
//! letter. The policy is ordering-sensitive and reproduced here exactly.

use serde::{Deserialize, Serialize};

/// Display sentinel used when no candidate is within budget.
pub const NO_SUGGESTION: &str = "NO SUGGESTION";

/// A dictionary word found within the edit-distance budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The dictionary word.
    pub word: String,
    /// Edit distance from the (collapsed) input.
    pub distance: usize,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(word: S, distance: usize) -> Self {
        Candidate {
            word: word.into(),
            distance,
        }
    }
}

/// The outcome of a spell check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Primary suggestion; `None` when nothing was within budget.
    pub suggestion: Option<String>,
    /// Remaining minimal-distance candidates, discovery order preserved.
    pub alternates: Vec<String>,
}

impl Correction {
    /// A correction carrying no suggestion.
    pub fn none() -> Self {
        Correction {
            suggestion: None,
            alternates: Vec::new(),
        }
    }

    /// A word accepted as correctly spelled, suggested as itself.
    pub fn exact<S: Into<String>>(word: S) -> Self {
        Correction {
            suggestion: Some(word.into()),
            alternates: Vec::new(),
        }
    }

    /// Whether a suggestion was found.
    pub fn has_suggestion(&self) -> bool {
        self.suggestion.is_some()
    }

    /// The suggestion for display, with the sentinel standing in for `None`.
    pub fn display_suggestion(&self) -> &str {
        self.suggestion.as_deref().unwrap_or(NO_SUGGESTION)
    }
}

/// Reduce candidates to a primary suggestion plus alternates.
///
/// `input` is the collapsed query word; its first character drives the
/// tie-break. Candidates must be in discovery order.
pub fn select(candidates: Vec<Candidate>, input: &str) -> Correction {
    let min_distance = match candidates.iter().map(|c| c.distance).min() {
        Some(distance) => distance,
        None => return Correction::none(),
    };

    // Single left-to-right scan keeping candidates at or below the smallest
    // distance seen so far, tightening as it goes. Seeded with the true
    // minimum, this keeps exactly the minimal ties in discovery order.
    let mut threshold = min_distance;
    let mut pool = Vec::new();
    for candidate in candidates {
        if candidate.distance <= threshold {
            threshold = candidate.distance;
            pool.push(candidate.word);
        }
    }

    // Default primary is the last-discovered minimal candidate. When a
    // remaining candidate shares the input's first letter it takes over,
    // and the displaced default is dropped rather than demoted.
    let mut primary = match pool.pop() {
        Some(word) => word,
        None => return Correction::none(),
    };

    if let Some(first) = input.chars().next()
        && let Some(position) = pool.iter().position(|word| word.starts_with(first))
    {
        primary = pool.remove(position);
    }

    Correction {
        suggestion: Some(primary),
        alternates: pool,
    }
}
