use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

use super::birth::BirthRecord;

pub const DAYS_PER_YEAR: i64 = 365;
pub const ANTARA_COUNT: usize = 9;
pub const DEFAULT_MAX_PERIODS: usize = 54;

/// Sum of the Antara weights 1..=9.
const ANTARA_WEIGHT_TOTAL: i64 = 45;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntaraPeriod {
    pub number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub start_age: i64,
    pub end_age: i64,
}

impl AntaraPeriod {
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaPeriod {
    #[serde(rename = "maha_dasha")]
    pub number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub years: u32,
    pub start_age: i64,
    pub end_age: i64,
    #[serde(rename = "antara_dashas")]
    pub antaras: Vec<AntaraPeriod>,
}

impl DashaPeriod {
    pub fn days(&self) -> i64 {
        i64::from(self.years) * DAYS_PER_YEAR
    }

    /// Both ends inclusive; the next Maha period starts the day after `end_date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.contains(today)
    }

    /// Antara periods share their boundary dates, so each one owns
    /// `[start, end)` and the last one also owns the Maha end date.
    pub fn antara_at(&self, date: NaiveDate) -> Option<&AntaraPeriod> {
        if !self.contains(date) {
            return None;
        }
        self.antaras
            .iter()
            .find(|a| a.start_date <= date && date < a.end_date)
            .or_else(|| self.antaras.last().filter(|a| a.end_date == date))
    }
}

/// 1 -> 2 -> ... -> 9 -> 1
pub fn next_number(number: u32) -> u32 {
    if number >= 9 {
        1
    } else {
        number + 1
    }
}

/// `round(period_days / 45 * antara_number)` in integer arithmetic.
pub fn antara_days(period_days: i64, antara_number: u32) -> i64 {
    let scaled = period_days * i64::from(antara_number);
    (2 * scaled + ANTARA_WEIGHT_TOTAL).div_euclid(2 * ANTARA_WEIGHT_TOTAL)
}

fn build_antaras(
    birth: &BirthRecord,
    maha_number: u32,
    start: NaiveDate,
    period_days: i64,
) -> Option<Vec<AntaraPeriod>> {
    let mut antaras = Vec::with_capacity(ANTARA_COUNT);
    let mut current = start;
    let mut number = maha_number;
    let mut remaining = period_days;

    for index in 0..ANTARA_COUNT {
        let days = if index == ANTARA_COUNT - 1 {
            remaining
        } else {
            let days = antara_days(period_days, number);
            remaining -= days;
            days
        };
        let end = current.checked_add_days(Days::new(u64::try_from(days).ok()?))?;

        antaras.push(AntaraPeriod {
            number,
            start_date: current,
            end_date: end,
            days,
            start_age: birth.age_at(current),
            end_age: birth.age_at(end),
        });

        current = end;
        number = next_number(number);
    }

    Some(antaras)
}

/// Lazily yields successive Maha periods from a birth date.
///
/// The sequence is finite (`max_periods` items) and cannot be restarted; a
/// period whose end date would overflow the calendar ends it early.
#[derive(Debug, Clone)]
pub struct MahaDashaIter {
    birth: BirthRecord,
    next_start: NaiveDate,
    next_number: u32,
    remaining: usize,
}

impl MahaDashaIter {
    pub fn new(birth: BirthRecord, max_periods: usize) -> Self {
        Self {
            birth,
            next_start: birth.date(),
            next_number: birth.start_number(),
            remaining: max_periods,
        }
    }

    fn build_next(&self) -> Option<DashaPeriod> {
        let number = self.next_number;
        let start = self.next_start;
        let days = i64::from(number) * DAYS_PER_YEAR;
        let end = start.checked_add_days(Days::new(u64::try_from(days).ok()?))?;
        let antaras = build_antaras(&self.birth, number, start, days)?;

        Some(DashaPeriod {
            number,
            start_date: start,
            end_date: end,
            years: number,
            start_age: self.birth.age_at(start),
            end_age: self.birth.age_at(end),
            antaras,
        })
    }
}

impl Iterator for MahaDashaIter {
    type Item = DashaPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let Some(period) = self.build_next() else {
            self.remaining = 0;
            return None;
        };
        match period.end_date.succ_opt() {
            Some(next_start) => {
                self.next_start = next_start;
                self.next_number = next_number(period.number);
                self.remaining -= 1;
            }
            None => self.remaining = 0,
        }
        Some(period)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl FusedIterator for MahaDashaIter {}

pub fn generate_periods(birth: &BirthRecord, max_periods: usize) -> Vec<DashaPeriod> {
    MahaDashaIter::new(*birth, max_periods).collect()
}

/// The Maha period containing `date`, if the sequence reaches it.
pub fn find_period(periods: &[DashaPeriod], date: NaiveDate) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(date))
}
