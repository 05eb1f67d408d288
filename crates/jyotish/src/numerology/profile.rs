use serde::Serialize;

use super::grid::NumerologyGrid;
use super::letters::{name_values, normalize_name, LetterValue};
use super::{bhagyank, moolank, reduce_to_single_digit, Reduction};
use crate::dasha::BirthRecord;

/// Everything derived from a name and a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub converted_name: String,
    pub letter_values: Vec<LetterValue>,
    pub total: u32,
    pub name_number: Reduction,
    pub bhagyank: Reduction,
    pub moolank: Reduction,
    pub grid: NumerologyGrid,
}

impl NumerologyProfile {
    pub fn compute(name: &str, birth: &BirthRecord) -> Self {
        let converted_name = normalize_name(name);
        let letter_values = name_values(&converted_name);
        let total = letter_values.iter().map(|l| l.value).sum();
        let bhagyank = bhagyank(birth.date());
        let moolank = moolank(birth.date());
        let grid = NumerologyGrid::from_birth(birth.date(), bhagyank.value, moolank.value);

        Self {
            converted_name,
            letter_values,
            total,
            name_number: reduce_to_single_digit(total),
            bhagyank,
            moolank,
            grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_for_ram() {
        let birth = BirthRecord::parse("1990-05-15").unwrap();
        let profile = NumerologyProfile::compute("Ram", &birth);
        assert_eq!(profile.converted_name, "RAM");
        assert_eq!(profile.total, 7);
        assert_eq!(profile.name_number.value, 7);
        assert_eq!(profile.name_number.steps, vec![7]);
        assert_eq!(profile.bhagyank.value, 3);
        assert_eq!(profile.moolank.value, 6);
        assert_eq!(profile.grid.cell(5), "55");
    }

    #[test]
    fn test_profile_without_letters() {
        let birth = BirthRecord::parse("2000-01-01").unwrap();
        let profile = NumerologyProfile::compute("1234", &birth);
        assert_eq!(profile.converted_name, "");
        assert!(profile.letter_values.is_empty());
        assert_eq!(profile.name_number.value, 0);
    }
}
