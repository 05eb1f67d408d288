//! Jyotish - numerological Dasha periods and name/birth-date numerology.
//!
//! Everything here is pure arithmetic over calendar dates. Callers parse
//! their input into a [`BirthRecord`] and pass it to the generators.

pub mod dasha;
pub mod error;
pub mod numerology;
pub mod timeline;

pub use dasha::{
    age_in_years, find_period, generate_periods, AntaraPeriod, BirthRecord, DashaPeriod,
    MahaDashaIter, DEFAULT_MAX_PERIODS,
};
pub use error::{Error, Result};
pub use numerology::{reduce_to_single_digit, NumerologyGrid, NumerologyProfile, Reduction};
pub use timeline::{ComparisonTimeline, Granularity, PersonPosition, TimelineBuilder, TimelineRow};
