//! Core domain types: run outcomes and journal entries.

pub mod entry;
pub mod outcome;

pub use entry::{EntryLevel, JournalEntry};
pub use outcome::RunOutcome;
