//! JSON request and response bodies.

use chrono::NaiveDate;
use jyotish::{AntaraPeriod, DashaPeriod, Granularity, NumerologyProfile, TimelineRow};
use serde::{Deserialize, Serialize};

use crate::store::StoredRecord;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashaRequest {
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Persist the birth date in the record store.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub birth_date_a: Option<String>,
    #[serde(default)]
    pub birth_date_b: Option<String>,
    #[serde(default)]
    pub granularity: Option<String>,
    #[serde(default)]
    pub years: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumerologyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AntaraView {
    pub number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub start_age: i64,
    pub end_age: i64,
    pub is_current: bool,
}

impl AntaraView {
    pub fn new(antara: &AntaraPeriod, today: NaiveDate) -> Self {
        Self {
            number: antara.number,
            start_date: antara.start_date,
            end_date: antara.end_date,
            days: antara.days,
            start_age: antara.start_age,
            end_age: antara.end_age,
            is_current: antara.is_current(today),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodView {
    pub maha_dasha: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub years: u32,
    pub start_age: i64,
    pub end_age: i64,
    pub antara_dashas: Vec<AntaraView>,
    pub is_current: bool,
}

impl PeriodView {
    pub fn new(period: &DashaPeriod, today: NaiveDate) -> Self {
        Self {
            maha_dasha: period.number,
            start_date: period.start_date,
            end_date: period.end_date,
            years: period.years,
            start_age: period.start_age,
            end_age: period.end_age,
            antara_dashas: period
                .antaras
                .iter()
                .map(|a| AntaraView::new(a, today))
                .collect(),
            is_current: period.is_current(today),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashaResponse {
    pub success: bool,
    pub start_number: u32,
    pub periods: Vec<PeriodView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub success: bool,
    pub start_number_a: u32,
    pub start_number_b: u32,
    pub granularity: Granularity,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub rows: Vec<TimelineRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumerologyResponse {
    pub success: bool,
    #[serde(flatten)]
    pub profile: NumerologyProfile,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordsResponse {
    pub success: bool,
    pub records: Vec<StoredRecord>,
}
