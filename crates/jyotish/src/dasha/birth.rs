use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::numerology::reduce_to_single_digit;

/// Wire format for every date this crate reads or writes.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A birth date. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthRecord {
    date: NaiveDate,
}

impl BirthRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Parse a `YYYY-MM-DD` string. Blank input is reported as a missing field.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingField("birth_date"));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self::new)
            .map_err(|_| Error::InvalidDate {
                input: trimmed.to_string(),
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Digit root of the day of month; seeds the first Maha period.
    pub fn start_number(&self) -> u32 {
        reduce_to_single_digit(self.date.day()).value
    }

    pub fn age_at(&self, date: NaiveDate) -> i64 {
        age_in_years(self.date, date)
    }
}

/// `floor(days / 365.25)`, evaluated as `floor(4 * days / 1461)` so that
/// boundary dates never land on the wrong side through float rounding.
pub fn age_in_years(birth: NaiveDate, at: NaiveDate) -> i64 {
    let days = (at - birth).num_days();
    (days * 4).div_euclid(1461)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        let birth = BirthRecord::parse("1990-05-15").unwrap();
        assert_eq!(birth.date(), date(1990, 5, 15));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let birth = BirthRecord::parse("  2001-01-09 \n").unwrap();
        assert_eq!(birth.date(), date(2001, 1, 9));
    }

    #[test]
    fn test_parse_rejects_blank_and_garbage() {
        assert_eq!(
            BirthRecord::parse("   "),
            Err(Error::MissingField("birth_date"))
        );
        assert!(matches!(
            BirthRecord::parse("15/05/1990"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(matches!(
            BirthRecord::parse("1990-02-30"),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_start_number_is_digit_root_of_day() {
        assert_eq!(BirthRecord::new(date(1990, 5, 15)).start_number(), 6);
        assert_eq!(BirthRecord::new(date(1990, 5, 29)).start_number(), 2);
        assert_eq!(BirthRecord::new(date(1990, 5, 9)).start_number(), 9);
        assert_eq!(BirthRecord::new(date(1990, 5, 10)).start_number(), 1);
    }

    #[test]
    fn test_age_floors_on_quarter_day_years() {
        let birth = date(2000, 1, 1);
        assert_eq!(age_in_years(birth, birth), 0);
        // 365 days is still short of 365.25
        assert_eq!(age_in_years(birth, date(2000, 12, 31)), 0);
        assert_eq!(age_in_years(birth, date(2001, 1, 1)), 1);
        // 1461 days is exactly four years
        assert_eq!(age_in_years(birth, date(2004, 1, 1)), 4);
        assert_eq!(age_in_years(birth, date(1999, 12, 31)), -1);
    }
}
