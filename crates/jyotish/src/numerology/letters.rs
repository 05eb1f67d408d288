use serde::{Deserialize, Serialize};

use super::romaji;

/// Fixed letter -> digit table. Nothing maps to 9.
const LETTER_VALUES: &[(char, u32)] = &[
    ('A', 1),
    ('I', 1),
    ('J', 1),
    ('Q', 1),
    ('Y', 1),
    ('B', 2),
    ('K', 2),
    ('R', 2),
    ('C', 3),
    ('G', 3),
    ('L', 3),
    ('S', 3),
    ('D', 4),
    ('M', 4),
    ('T', 4),
    ('E', 5),
    ('H', 5),
    ('N', 5),
    ('X', 5),
    ('U', 6),
    ('V', 6),
    ('W', 6),
    ('O', 7),
    ('Z', 7),
    ('F', 8),
    ('P', 8),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

/// Value of an uppercase letter; anything outside the table counts as 0.
pub fn letter_value(letter: char) -> u32 {
    LETTER_VALUES
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, v)| *v)
        .unwrap_or(0)
}

/// Romanise the name if it contains any hiragana (katakana in the same name
/// is romanised with it), uppercase, and keep only `A-Z`.
pub fn normalize_name(raw: &str) -> String {
    let romanised = if romaji::contains_hiragana(raw) {
        romaji::hiragana_to_romaji(raw)
    } else {
        raw.to_string()
    };
    romanised
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Per-letter values of an already normalised name.
pub fn name_values(name: &str) -> Vec<LetterValue> {
    name.chars()
        .map(|letter| LetterValue {
            letter,
            value: letter_value(letter),
        })
        .collect()
}
