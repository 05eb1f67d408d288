use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use super::decimal_digits;

/// Occurrences of the digits 1-9 drawn from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumerologyGrid {
    counts: [u32; 9],
}

impl NumerologyGrid {
    /// Digits come from the last two digits of the year, the month, the day
    /// (none zero padded), the Bhagyank, and the Moolank when the day has two
    /// digits. Zeros are dropped.
    pub fn from_birth(date: NaiveDate, bhagyank: u32, moolank: u32) -> Self {
        let day = date.day();
        let mut digits = decimal_digits(date.year().rem_euclid(100) as u32);
        digits.extend(decimal_digits(date.month()));
        digits.extend(decimal_digits(day));
        digits.push(bhagyank);
        if day >= 10 {
            digits.push(moolank);
        }
        Self::from_digits(digits)
    }

    pub fn from_digits(digits: impl IntoIterator<Item = u32>) -> Self {
        let mut counts = [0; 9];
        for digit in digits.into_iter().filter(|d| (1..=9).contains(d)) {
            counts[(digit - 1) as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, digit: u32) -> u32 {
        match digit {
            1..=9 => self.counts[(digit - 1) as usize],
            _ => 0,
        }
    }

    /// The digit repeated once per occurrence, e.g. `"55"`; empty when absent.
    pub fn cell(&self, digit: u32) -> String {
        digit.to_string().repeat(self.count(digit) as usize)
    }

    /// Digits that never occur.
    pub fn missing(&self) -> Vec<u32> {
        (1..=9).filter(|d| self.count(*d) == 0).collect()
    }

    pub fn cells(&self) -> BTreeMap<u32, String> {
        (1..=9).map(|d| (d, self.cell(d))).collect()
    }
}

impl Serialize for NumerologyGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_with_two_digit_day() {
        // 90 | 5 | 15 | bhagyank 3 | moolank 6
        let grid = NumerologyGrid::from_birth(date(1990, 5, 15), 3, 6);
        assert_eq!(grid.cell(9), "9");
        assert_eq!(grid.cell(5), "55");
        assert_eq!(grid.cell(1), "1");
        assert_eq!(grid.cell(3), "3");
        assert_eq!(grid.cell(6), "6");
        assert_eq!(grid.missing(), vec![2, 4, 7, 8]);
    }

    #[test]
    fn test_grid_skips_moolank_for_single_digit_day() {
        // year 05 -> "5", month "11", day "7", bhagyank 2+5+1+1+7 = 16 -> 7
        let grid = NumerologyGrid::from_birth(date(2005, 11, 7), 7, 7);
        assert_eq!(grid.count(5), 1);
        assert_eq!(grid.count(1), 2);
        assert_eq!(grid.count(7), 2);
        assert_eq!(grid.count(0), 0);
    }

    #[test]
    fn test_grid_serializes_as_string_keyed_map() {
        let grid = NumerologyGrid::from_digits([2, 2, 8]);
        let json = serde_json::to_value(grid).unwrap();
        assert_eq!(json["2"], "22");
        assert_eq!(json["8"], "8");
        assert_eq!(json["1"], "");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }
}
