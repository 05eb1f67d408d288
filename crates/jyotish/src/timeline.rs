//! Side-by-side dasha timeline for two birth dates.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::dasha::{
    find_period, generate_periods, BirthRecord, DashaPeriod, DEFAULT_MAX_PERIODS,
};
use crate::error::Error;

pub const DEFAULT_YEARS: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Yearly,
    Monthly,
    /// Every Maha or Antara start of either person.
    Transitions,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Yearly,
        Granularity::Monthly,
        Granularity::Transitions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Yearly => "yearly",
            Granularity::Monthly => "monthly",
            Granularity::Transitions => "transitions",
        }
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| Error::InvalidGranularity {
                value: s.to_string(),
                valid: Self::ALL.iter().map(|g| g.as_str().to_string()).collect(),
            })
    }
}

/// Where one person stands on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPosition {
    pub age: i64,
    pub maha: u32,
    pub antara: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub date: NaiveDate,
    /// `None` before birth or past the generated periods.
    pub a: Option<PersonPosition>,
    pub b: Option<PersonPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTimeline {
    pub granularity: Granularity,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<TimelineRow>,
}

#[derive(Debug, Clone)]
pub struct TimelineBuilder {
    granularity: Granularity,
    years: u32,
    max_periods: usize,
}

impl TimelineBuilder {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            years: DEFAULT_YEARS,
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }

    pub fn years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    pub fn max_periods(mut self, max_periods: usize) -> Self {
        self.max_periods = max_periods;
        self
    }

    /// Rows cover `[start, end)`, where `start` is the earlier birth date and
    /// `end` lies `years` later.
    pub fn build(&self, a: &BirthRecord, b: &BirthRecord) -> ComparisonTimeline {
        let start = a.date().min(b.date());
        let end = start
            .checked_add_months(Months::new(self.years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX);

        let periods_a = generate_periods(a, self.max_periods);
        let periods_b = generate_periods(b, self.max_periods);

        let dates = match self.granularity {
            Granularity::Yearly => stepped_dates(start, end, 12),
            Granularity::Monthly => stepped_dates(start, end, 1),
            Granularity::Transitions => {
                transition_dates(start, end, [periods_a.as_slice(), periods_b.as_slice()])
            }
        };

        let rows = dates
            .into_iter()
            .map(|date| TimelineRow {
                date,
                a: position_at(a, &periods_a, date),
                b: position_at(b, &periods_b, date),
            })
            .collect();

        ComparisonTimeline {
            granularity: self.granularity,
            start,
            end,
            rows,
        }
    }
}

/// Offsets are taken from `start` each time so month-end clamping never drifts.
fn stepped_dates(start: NaiveDate, end: NaiveDate, step_months: u32) -> Vec<NaiveDate> {
    (0u32..)
        .map_while(|k| start.checked_add_months(Months::new(k.checked_mul(step_months)?)))
        .take_while(|d| *d < end)
        .collect()
}

fn transition_dates(
    start: NaiveDate,
    end: NaiveDate,
    sequences: [&[DashaPeriod]; 2],
) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = sequences
        .iter()
        .flat_map(|periods| periods.iter())
        .flat_map(|p| {
            std::iter::once(p.start_date).chain(p.antaras.iter().map(|a| a.start_date))
        })
        .chain(std::iter::once(start))
        .filter(|d| *d >= start && *d < end)
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

pub fn position_at(
    birth: &BirthRecord,
    periods: &[DashaPeriod],
    date: NaiveDate,
) -> Option<PersonPosition> {
    if date < birth.date() {
        return None;
    }
    let maha = find_period(periods, date)?;
    let antara = maha.antara_at(date)?;
    Some(PersonPosition {
        age: birth.age_at(date),
        maha: maha.number,
        antara: antara.number,
    })
}
