// src/store/jobs.rs
use crate::agent::CrawledJob;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

/// A persisted, deduplicated, visa-flagged job posting.
///
/// `date_found` is stamped once, when the record is first merged into the
/// store, and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub visa_sponsorship: bool,
    pub url: String,
    pub date_posted: String,
    pub date_found: String,
}

/// Flat JSON file holding the deduplicated job records, keyed by job id.
#[derive(Debug, Clone)]
pub struct JobStore {
    path: PathBuf,
}

impl JobStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read all records from disk. An absent or unparsable file yields an
    /// empty list; corruption is logged and swallowed, which means a damaged
    /// file silently loses its history.
    pub async fn load(&self) -> Vec<JobRecord> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read jobs file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!(
                    "Ignoring unparsable jobs file {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the jobs file. Writes to a sibling temp file first and
    /// renames it into place so a failure mid-write cannot corrupt the store.
    pub async fn save(&self, jobs: &[JobRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let body = serde_json::to_string_pretty(jobs).context("Failed to serialize job records")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)
            .await
            .with_context(|| format!("Failed to write temp jobs file: {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace jobs file: {}", self.path.display()))
    }

    /// Merge newly-crawled jobs into an existing record list.
    ///
    /// A crawled job is appended only when no existing record shares its id;
    /// first write wins. `date_found` is stamped here, at insertion time.
    /// Returns the merged list and the number of records inserted.
    pub fn merge(
        mut existing: Vec<JobRecord>,
        incoming: Vec<CrawledJob>,
    ) -> (Vec<JobRecord>, usize) {
        let mut known: HashSet<String> = existing.iter().map(|job| job.id.clone()).collect();
        let mut inserted = 0;

        for job in incoming {
            if !known.insert(job.id.clone()) {
                continue;
            }
            existing.push(JobRecord {
                id: job.id,
                title: job.title,
                company: job.company,
                location: job.location,
                description: job.description,
                visa_sponsorship: true,
                url: job.url,
                date_posted: job.date_posted,
                date_found: Utc::now().to_rfc3339(),
            });
            inserted += 1;
        }

        (existing, inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawled(id: &str, description: &str) -> CrawledJob {
        CrawledJob {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            location: "San Francisco".to_string(),
            description: description.to_string(),
            url: format!("https://example.com/jobs/{}", id),
            date_posted: "2025-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::new(dir.path().join("jobs.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(&path, "[{\"id\": truncated").unwrap();

        let store = JobStore::new(path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::new(dir.path().join("jobs.json"));

        let (records, inserted) =
            JobStore::merge(Vec::new(), vec![crawled("a", "h1b ok"), crawled("b", "visa ok")]);
        assert_eq!(inserted, 2);
        store.save(&records).await.unwrap();

        let mut loaded = store.load().await;
        loaded.sort_by(|x, y| x.id.cmp(&y.id));
        let mut expected = records.clone();
        expected.sort_by(|x, y| x.id.cmp(&y.id));
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let incoming = vec![crawled("a", "first"), crawled("b", "second")];

        let (merged, inserted) = JobStore::merge(Vec::new(), incoming.clone());
        assert_eq!(inserted, 2);

        let (merged_again, inserted_again) = JobStore::merge(merged.clone(), incoming);
        assert_eq!(inserted_again, 0);
        assert_eq!(merged_again, merged);
    }

    #[test]
    fn test_merge_first_write_wins() {
        let (merged, _) = JobStore::merge(Vec::new(), vec![crawled("a", "original text")]);
        let first_found = merged[0].date_found.clone();

        // Same id, different description in a later cycle: not inserted,
        // date_found untouched.
        let (merged, inserted) = JobStore::merge(merged, vec![crawled("a", "changed text")]);
        assert_eq!(inserted, 0);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].description, "original text");
        assert_eq!(merged[0].date_found, first_found);
    }

    #[test]
    fn test_merge_dedupes_within_incoming_batch() {
        let (merged, inserted) =
            JobStore::merge(Vec::new(), vec![crawled("a", "one"), crawled("a", "two")]);
        assert_eq!(inserted, 1);
        assert_eq!(merged[0].description, "one");
    }

    #[test]
    fn test_merged_records_are_visa_flagged() {
        let (merged, _) = JobStore::merge(Vec::new(), vec![crawled("a", "visa sponsorship")]);
        assert!(merged[0].visa_sponsorship);
    }
}
