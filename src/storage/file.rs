//! File-backed counter and journal storage.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::traits::{CounterStore, JournalSink};
use crate::error::{ChorebotError, Result};

/// Counter persisted as a plain decimal integer in a text file.
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path used for the write-then-rename dance.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CounterStore for FileCounterStore {
    fn read(&self) -> Result<Option<u64>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ChorebotError::Storage(format!("Failed to read counter file: {}", e))),
        };

        match content.trim().parse::<u64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                log::warn!(
                    "Counter file {} holds unparsable content, treating as zero",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn write(&mut self, value: u64) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| ChorebotError::Storage(format!("Failed to create counter dir: {}", e)))?;
        }

        // Stage the full value in a sibling file, then rename over the old
        // one so a reader never observes a torn write.
        let staging = self.staging_path();
        fs::write(&staging, value.to_string())
            .map_err(|e| ChorebotError::Storage(format!("Failed to stage counter value: {}", e)))?;
        fs::rename(&staging, &self.path)
            .map_err(|e| ChorebotError::Storage(format!("Failed to replace counter file: {}", e)))?;

        Ok(())
    }
}

/// Append-only journal file.
///
/// The file handle is opened lazily on first append, so constructing a
/// `FileJournal` to inspect the tail does not create an empty file.
pub struct FileJournal {
    path: PathBuf,
    file: Option<File>,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> Result<&mut File> {
        if self.file.is_none() {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .map_err(|e| ChorebotError::Journal(format!("Failed to create journal dir: {}", e)))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| ChorebotError::Journal(format!("Failed to open journal file: {}", e)))?;
            self.file = Some(file);
        }
        Ok(self.file.as_mut().unwrap())
    }
}

impl JournalSink for FileJournal {
    fn append(&mut self, line: &str) -> Result<()> {
        let file = self.open()?;
        writeln!(file, "{}", line).map_err(|e| ChorebotError::Journal(format!("Failed to append entry: {}", e)))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.sync_all()
                .map_err(|e| ChorebotError::Journal(format!("Failed to sync journal: {}", e)))?;
        }
        Ok(())
    }

    fn tail(&self, n: usize) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ChorebotError::Journal(format!("Failed to read journal file: {}", e))),
        };

        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(n);
        Ok(lines[start..].iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_counter_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = FileCounterStore::new(temp.path().join("count.txt"));
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_counter_write_then_read() {
        let temp = TempDir::new().unwrap();
        let mut store = FileCounterStore::new(temp.path().join("count.txt"));

        store.write(7).unwrap();
        assert_eq!(store.read().unwrap(), Some(7));
    }

    #[test]
    fn test_counter_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = FileCounterStore::new(temp.path().join("count.txt"));

        store.write(1).unwrap();
        store.write(2).unwrap();
        assert_eq!(store.read().unwrap(), Some(2));
    }

    #[test]
    fn test_counter_read_unparsable_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("count.txt");
        fs::write(&path, "not a number").unwrap();

        let store = FileCounterStore::new(&path);
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_counter_read_tolerates_whitespace() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("count.txt");
        fs::write(&path, "  42\n").unwrap();

        let store = FileCounterStore::new(&path);
        assert_eq!(store.read().unwrap(), Some(42));
    }

    #[test]
    fn test_counter_read_negative_is_unparsable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("count.txt");
        fs::write(&path, "-3").unwrap();

        let store = FileCounterStore::new(&path);
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_counter_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("count.txt");
        let mut store = FileCounterStore::new(&path);

        store.write(1).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1");
    }

    #[test]
    fn test_counter_write_leaves_no_staging_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("count.txt");
        let mut store = FileCounterStore::new(&path);

        store.write(5).unwrap();
        assert!(!temp.path().join("count.txt.tmp").exists());
    }

    #[test]
    fn test_journal_append_and_tail() {
        let temp = TempDir::new().unwrap();
        let mut journal = FileJournal::new(temp.path().join("run.log"));

        journal.append("first line").unwrap();
        journal.append("second line").unwrap();
        journal.flush().unwrap();

        let tail = journal.tail(10).unwrap();
        assert_eq!(tail, vec!["first line".to_string(), "second line".to_string()]);
    }

    #[test]
    fn test_journal_tail_limits_lines() {
        let temp = TempDir::new().unwrap();
        let mut journal = FileJournal::new(temp.path().join("run.log"));

        for i in 0..5 {
            journal.append(&format!("line {}", i)).unwrap();
        }

        let tail = journal.tail(2).unwrap();
        assert_eq!(tail, vec!["line 3".to_string(), "line 4".to_string()]);
    }

    #[test]
    fn test_journal_tail_missing_file() {
        let temp = TempDir::new().unwrap();
        let journal = FileJournal::new(temp.path().join("run.log"));
        assert!(journal.tail(10).unwrap().is_empty());
    }

    #[test]
    fn test_journal_tail_does_not_create_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.log");
        let journal = FileJournal::new(&path);

        journal.tail(10).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_journal_appends_across_instances() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("run.log");

        {
            let mut journal = FileJournal::new(&path);
            journal.append("from first run").unwrap();
            journal.flush().unwrap();
        }

        {
            let mut journal = FileJournal::new(&path);
            journal.append("from second run").unwrap();
            journal.flush().unwrap();
        }

        let journal = FileJournal::new(&path);
        let tail = journal.tail(10).unwrap();
        assert_eq!(tail, vec!["from first run".to_string(), "from second run".to_string()]);
    }
}
