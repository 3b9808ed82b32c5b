//! Storage trait definitions.

use crate::error::Result;

/// Port for the durable execution counter.
///
/// `read` returns `None` when the backing store is absent or does not hold a
/// parsable non-negative integer; callers treat that as a zero baseline
/// rather than an error.
pub trait CounterStore {
    /// Read the persisted value, if a usable one exists.
    fn read(&self) -> Result<Option<u64>>;

    /// Persist a new value. Must leave the store readable even if the
    /// process crashes immediately after.
    fn write(&mut self, value: u64) -> Result<()>;
}

/// Port for the append-only run journal.
pub trait JournalSink {
    /// Append one pre-formatted line.
    fn append(&mut self, line: &str) -> Result<()>;

    /// Ensure all appended lines are persisted.
    fn flush(&mut self) -> Result<()>;

    /// Read the last `n` persisted lines, oldest first.
    fn tail(&self, n: usize) -> Result<Vec<String>>;
}
