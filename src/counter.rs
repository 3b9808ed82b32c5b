//! Durable execution counter.
//!
//! Tracks how many runs have ever completed, surviving process restarts.
//! The value moves by exactly one per run and is never reset from inside
//! the program.

use crate::error::Result;
use crate::storage::CounterStore;

/// Monotonic run counter over an injected store.
pub struct RunCounter<S: CounterStore> {
    store: S,
}

impl<S: CounterStore> RunCounter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Advance the counter by one and return the new total.
    ///
    /// An absent or unparsable store reads as zero, so the first increment
    /// after external deletion or corruption returns 1. The new value is
    /// persisted before this returns.
    pub fn increment(&mut self) -> Result<u64> {
        let next = self.store.read()?.unwrap_or(0) + 1;
        self.store.write(next)?;
        Ok(next)
    }

    /// Read the current total without advancing it.
    pub fn current(&self) -> Result<u64> {
        Ok(self.store.read()?.unwrap_or(0))
    }
}
