//! Append-only contact message log
//!
//! Each submission appends `[timestamp, name, email, message]` to a CSV file.
//! Appends are unsynchronized and at-least-once; concurrent submitters may
//! interleave, which is acceptable for this log.

use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::Local;

use crate::domain::DomainError;

#[derive(Debug, Clone)]
pub struct ContactLog {
    path: PathBuf,
}

impl ContactLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, name: &str, email: &str, message: &str) -> Result<(), DomainError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                DomainError::storage(format!("failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        writer
            .write_record([timestamp.as_str(), name, email, message])
            .map_err(|e| DomainError::storage(format!("failed to write record: {}", e)))?;
        writer
            .flush()
            .map_err(|e| DomainError::storage(format!("failed to flush: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_append_writes_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.csv");
        let log = ContactLog::new(&path);

        log.append("Asha", "asha@example.com", "Hello there").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Asha"));
        assert!(contents.contains("asha@example.com"));
        assert!(contents.contains("Hello there"));
    }

    #[test]
    fn test_appends_accumulate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.csv");
        let log = ContactLog::new(&path);

        log.append("A", "a@example.com", "first").unwrap();
        log.append("B", "b@example.com", "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_message_with_commas_stays_one_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messages.csv");
        let log = ContactLog::new(&path);

        log.append("C", "c@example.com", "hello, with, commas").unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 4);
        assert_eq!(&record[3], "hello, with, commas");
    }
}
