//! Pronounceable name synthesis.
//!
//! Alternating consonant/vowel phonemes, first letter capitalized. The
//! consonant table carries a duplicate "l", which doubles its weight in the
//! draw; the digraphs ("sh", "zh", "ae") count as one phoneme each.

use rand::Rng;
use rand_chacha::ChaChaRng;

const CONSONANTS: [&str; 22] = [
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "l", "n", "p", "q", "r", "s", "sh", "zh",
    "t", "v", "w", "x",
];

const VOWELS: [&str; 7] = ["a", "e", "i", "o", "u", "ae", "y"];

/// Default phoneme count per generated name.
pub const DEFAULT_NAME_LENGTH: usize = 7;

/// Generate a pronounceable name of at least `length` phonemes.
///
/// Phonemes are appended in consonant/vowel pairs after the initial
/// capitalized pair, so an odd `length` rounds up by one.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use galaxy::naming::{generate_name, DEFAULT_NAME_LENGTH};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let name = generate_name(&mut rng, DEFAULT_NAME_LENGTH);
/// assert!(name.chars().next().unwrap().is_uppercase());
/// ```
pub fn generate_name(rng: &mut ChaChaRng, length: usize) -> String {
    let mut name = String::new();

    let first = CONSONANTS[rng.random_range(0..CONSONANTS.len())];
    let mut chars = first.chars();
    if let Some(initial) = chars.next() {
        name.extend(initial.to_uppercase());
        name.push_str(chars.as_str());
    }
    name.push_str(VOWELS[rng.random_range(0..VOWELS.len())]);

    let mut phonemes = 2;
    while phonemes < length {
        name.push_str(CONSONANTS[rng.random_range(0..CONSONANTS.len())]);
        phonemes += 1;
        name.push_str(VOWELS[rng.random_range(0..VOWELS.len())]);
        phonemes += 1;
    }

    name
}
