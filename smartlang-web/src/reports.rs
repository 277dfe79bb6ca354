//! Persistence for user-submitted translation error reports
//!
//! Reports are kept as a pretty-printed JSON array in a single file. Writes
//! go through an async mutex so concurrent submissions cannot interleave a
//! read-modify-write cycle.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::info;

/// A report as submitted by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub original_text: String,
    pub incorrect_translation: String,
    #[serde(default)]
    pub expected_translation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A report as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: String,
    /// Submission time as whole seconds since the Unix epoch (UTC), stored as
    /// a JSON number
    pub timestamp: u64,
    #[serde(flatten)]
    pub report: ErrorReport,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The report file could not be read or written
    IoError(String),
    /// The report file does not hold a JSON array of reports
    FormatError(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::IoError(msg) => write!(f, "Report storage error: {}", msg),
            ReportError::FormatError(msg) => write!(f, "Report file is corrupt: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {}

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug)]
pub struct ReportStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ReportStore {
    /// Open the store at `path`, creating an empty report file if missing.
    pub async fn open(path: impl Into<PathBuf>) -> ReportResult<Self> {
        let path = path.into();
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ReportError::IoError(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            write_reports(&path, &[]).await?;
            info!("Created error report file {}", path.display());
        }

        Ok(ReportStore {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a report and return its id (`ERR-0001`, `ERR-0002`, ...).
    pub async fn submit(&self, report: ErrorReport) -> ReportResult<String> {
        let _guard = self.lock.lock().await;

        let mut reports = read_reports(&self.path).await?;
        let id = format!("ERR-{:04}", reports.len() + 1);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        reports.push(StoredReport {
            id: id.clone(),
            timestamp,
            report,
            status: "pending".to_string(),
        });
        write_reports(&self.path, &reports).await?;

        info!("Stored error report {}", id);
        Ok(id)
    }

    pub async fn all(&self) -> ReportResult<Vec<StoredReport>> {
        let _guard = self.lock.lock().await;
        read_reports(&self.path).await
    }
}

async fn read_reports(path: &Path) -> ReportResult<Vec<StoredReport>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        ReportError::IoError(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ReportError::FormatError(format!("Failed to parse '{}': {}", path.display(), e))
    })
}

async fn write_reports(path: &Path, reports: &[StoredReport]) -> ReportResult<()> {
    let content = serde_json::to_string_pretty(reports)
        .map_err(|e| ReportError::FormatError(format!("Failed to serialize reports: {}", e)))?;
    tokio::fs::write(path, content).await.map_err(|e| {
        ReportError::IoError(format!("Failed to write '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn report(text: &str) -> ErrorReport {
        ErrorReport {
            original_text: text.to_string(),
            incorrect_translation: "la casa viejo".to_string(),
            expected_translation: Some("la casa vieja".to_string()),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_open_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("reports.json");
        let store = ReportStore::open(&path).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let store = ReportStore::open(dir.path().join("reports.json")).await.unwrap();

        assert_eq!(store.submit(report("the old house")).await.unwrap(), "ERR-0001");
        assert_eq!(store.submit(report("the old car")).await.unwrap(), "ERR-0002");

        let stored = store.all().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].report.original_text, "the old car");
        assert_eq!(stored[1].status, "pending");
        assert!(stored[0].timestamp > 0);
    }

    #[tokio::test]
    async fn test_existing_reports_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.json");
        {
            let store = ReportStore::open(&path).await.unwrap();
            store.submit(report("first")).await.unwrap();
        }
        let store = ReportStore::open(&path).await.unwrap();
        assert_eq!(store.submit(report("second")).await.unwrap(), "ERR-0002");
    }

    #[tokio::test]
    async fn test_stored_format_is_flat() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.json");
        let store = ReportStore::open(&path).await.unwrap();
        store.submit(report("the old house")).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entry = &json[0];
        assert_eq!(entry["id"], "ERR-0001");
        assert_eq!(entry["original_text"], "the old house");
        assert_eq!(entry["expected_translation"], "la casa vieja");
        assert_eq!(entry["notes"], serde_json::Value::Null);
        assert_eq!(entry["status"], "pending");
        assert!(entry["timestamp"].as_u64().is_some_and(|secs| secs > 0));
    }

    #[tokio::test]
    async fn test_concurrent_submissions() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(ReportStore::open(dir.path().join("reports.json")).await.unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.submit(report(&format!("text {}", i))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<String> = store.all().await.unwrap().into_iter().map(|r| r.id).collect();
        ids.sort();
        let expected: Vec<String> = (1..=8).map(|i| format!("ERR-{:04}", i)).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = ReportStore::open(&path).await.unwrap();
        assert!(matches!(
            store.submit(report("x")).await,
            Err(ReportError::FormatError(_))
        ));
    }
}
