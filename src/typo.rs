//! Synthetic misspelling generation.
//!
//! Produces the three error families the checker is built to absorb:
//! repeated letters, case noise, and vowel substitution, plus their
//! composition. The fuzz command feeds these back through the checker to
//! verify that sampled dictionary words correct back to themselves.
//!
//! Every generator takes the RNG as a parameter so tests can pin a seeded
//! [`rand::rngs::StdRng`].

use rand::Rng;

use crate::normalize::VOWELS;

/// Repeat each letter one to three times.
pub fn repeat_letters<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for ch in word.chars() {
        let times = rng.random_range(1..=3);
        for _ in 0..times {
            out.push(ch);
        }
    }
    out
}

/// Upper-case each letter with probability one half.
pub fn scramble_case<R: Rng>(word: &str, rng: &mut R) -> String {
    word.chars()
        .map(|ch| {
            if rng.random_bool(0.5) {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

/// Replace each vowel with a uniformly random vowel.
pub fn swap_vowels<R: Rng>(word: &str, rng: &mut R) -> String {
    word.chars()
        .map(|ch| {
            if VOWELS.contains(&ch) {
                VOWELS[rng.random_range(0..VOWELS.len())]
            } else {
                ch
            }
        })
        .collect()
}

/// Compose all three error families: vowels, then case, then repeats.
pub fn garble<R: Rng>(word: &str, rng: &mut R) -> String {
    let swapped = swap_vowels(word, rng);
    let cased = scramble_case(&swapped, rng);
    repeat_letters(&cased, rng)
}
