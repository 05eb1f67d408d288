//! Digit-reduction numerology over names and birth dates.

pub mod grid;
pub mod letters;
pub mod profile;
pub mod romaji;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub use grid::NumerologyGrid;
pub use letters::{letter_value, name_values, normalize_name, LetterValue};
pub use profile::NumerologyProfile;

/// Result of reducing a number to one digit.
///
/// `steps` starts with the input and records every intermediate digit sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reduction {
    #[serde(rename = "final")]
    pub value: u32,
    pub steps: Vec<u32>,
}

pub fn decimal_digits(number: u32) -> Vec<u32> {
    number
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

pub fn digit_sum(number: u32) -> u32 {
    decimal_digits(number).iter().sum()
}

/// Sum digits until a single digit remains. Zero stays zero.
pub fn reduce_to_single_digit(number: u32) -> Reduction {
    let mut value = number;
    let mut steps = vec![value];
    while value >= 10 {
        value = digit_sum(value);
        steps.push(value);
    }
    Reduction { value, steps }
}

/// Reduced sum of every digit of the `YYYY-MM-DD` date.
pub fn bhagyank(date: NaiveDate) -> Reduction {
    let total =
        digit_sum(date.year().unsigned_abs()) + digit_sum(date.month()) + digit_sum(date.day());
    reduce_to_single_digit(total)
}

/// Reduced day of month.
pub fn moolank(date: NaiveDate) -> Reduction {
    reduce_to_single_digit(date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_records_steps() {
        let r = reduce_to_single_digit(1999);
        assert_eq!(r.steps, vec![1999, 28, 10, 1]);
        assert_eq!(r.value, 1);
    }

    #[test]
    fn test_reduce_single_digit_is_identity() {
        assert_eq!(
            reduce_to_single_digit(7),
            Reduction { value: 7, steps: vec![7] }
        );
        assert_eq!(reduce_to_single_digit(0).value, 0);
    }

    #[test]
    fn test_reduce_positive_always_lands_in_range() {
        for n in (1..5000).chain([u32::MAX, 999_999_999, 1_000_000_000]) {
            let r = reduce_to_single_digit(n);
            assert!((1..=9).contains(&r.value), "{} reduced to {}", n, r.value);
            assert_eq!(r.value, 1 + (n - 1) % 9);
        }
    }

    #[test]
    fn test_bhagyank_and_moolank() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        // 1+9+9+0 + 0+5 + 1+5 = 30 -> 3
        let b = bhagyank(date);
        assert_eq!(b.steps, vec![30, 3]);
        assert_eq!(b.value, 3);
        let m = moolank(date);
        assert_eq!(m.steps, vec![15, 6]);
    }

    #[test]
    fn test_reduction_serializes_final_key() {
        let json = serde_json::to_value(reduce_to_single_digit(38)).unwrap();
        assert_eq!(json["final"], 2);
        assert_eq!(json["steps"], serde_json::json!([38, 11, 2]));
    }
}
