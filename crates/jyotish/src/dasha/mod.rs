//! Numerological Maha/Antara dasha periods.
//!
//! The seed is the digit root of the birth day. Each Maha period lasts
//! `number * 365` days and is split into nine Antara periods weighted by
//! their own numbers.

pub mod birth;
pub mod periods;

pub use birth::{age_in_years, BirthRecord, DATE_FORMAT};
pub use periods::{
    antara_days, find_period, generate_periods, next_number, AntaraPeriod, DashaPeriod,
    MahaDashaIter, ANTARA_COUNT, DAYS_PER_YEAR, DEFAULT_MAX_PERIODS,
};
