//! Saved birth dates, optionally mirrored to an append-only JSON Lines file.

use chrono::{DateTime, NaiveDate, Utc};
use jyotish::BirthRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: u64,
    pub birth_date: NaiveDate,
    pub start_number: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct RecordStore {
    records: Vec<StoredRecord>,
    path: Option<PathBuf>,
    next_id: u64,
}

impl RecordStore {
    pub fn in_memory() -> Self {
        Self {
            records: Vec::new(),
            path: None,
            next_id: 1,
        }
    }

    /// Load existing records from `path`. A missing file starts empty;
    /// unparseable lines are skipped with a warning.
    pub async fn open(path: impl Into<PathBuf>) -> ApiResult<Self> {
        let path = path.into();
        let mut records = Vec::new();

        if fs::try_exists(&path).await? {
            let text = fs::read_to_string(&path).await?;
            for (line_no, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<StoredRecord>(line) {
                    Ok(record) => records.push(record),
                    Err(e) => log::warn!(
                        "Skipping record at {}:{}: {}",
                        path.display(),
                        line_no + 1,
                        e
                    ),
                }
            }
        }

        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        log::info!("Loaded {} saved records from {}", records.len(), path.display());

        Ok(Self {
            records,
            path: Some(path),
            next_id,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub async fn insert(&mut self, birth: &BirthRecord) -> ApiResult<StoredRecord> {
        let record = StoredRecord {
            id: self.next_id,
            birth_date: birth.date(),
            start_number: birth.start_number(),
            created_at: Utc::now(),
        };

        if let Some(path) = &self.path {
            let line =
                serde_json::to_string(&record).map_err(|e| ApiError::Internal(e.to_string()))?;
            append_line(path, &line).await?;
        }

        self.next_id += 1;
        self.records.push(record.clone());
        log::debug!("Saved record {} for {}", record.id, record.birth_date);
        Ok(record)
    }

    /// Newest first.
    pub fn list(&self) -> Vec<StoredRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records
    }
}

async fn append_line(path: &Path, line: &str) -> ApiResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth(s: &str) -> BirthRecord {
        BirthRecord::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_insert_and_list() {
        let mut store = RecordStore::in_memory();
        let first = store.insert(&birth("1990-05-15")).await.unwrap();
        let second = store.insert(&birth("1984-11-27")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.start_number, 6);
        assert_eq!(second.id, 2);

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, 2);
        assert!(store.path().is_none());
    }

    #[tokio::test]
    async fn test_file_round_trip_keeps_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.jsonl");

        let mut store = RecordStore::open(&path).await.unwrap();
        assert!(store.is_empty());
        store.insert(&birth("1990-05-15")).await.unwrap();
        store.insert(&birth("2001-01-09")).await.unwrap();

        let mut reopened = RecordStore::open(&path).await.unwrap();
        assert_eq!(reopened.len(), 2);
        let third = reopened.insert(&birth("1970-07-07")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_open_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let good = r#"{"id":4,"birth_date":"1990-05-15","start_number":6,"created_at":"2024-01-01T00:00:00Z"}"#;
        tokio::fs::write(&path, format!("{good}\nnot json\n\n")).await.unwrap();

        let store = RecordStore::open(&path).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, 4);
    }
}
