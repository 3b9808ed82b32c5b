//! Durable storage for the execution counter and the run journal.
//!
//! Components depend on the `CounterStore` and `JournalSink` ports, never on
//! the filesystem directly, so tests substitute in-memory implementations.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::{FileCounterStore, FileJournal};
pub use memory::{MemoryCounterStore, MemoryJournal};
pub use traits::{CounterStore, JournalSink};
