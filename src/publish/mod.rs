//! Artifact publishing: trigger policy and publisher implementations.

pub mod git;

pub use git::GitPublisher;

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{ChorebotError, Result};

/// Whether run `count` is a publish boundary.
///
/// True exactly on positive multiples of `interval`; count zero never
/// publishes and a zero interval disables publishing outright.
pub fn should_publish(count: u64, interval: u64) -> bool {
    interval != 0 && count != 0 && count % interval == 0
}

/// Pushes run artifacts (journal and counter files) to a remote store.
pub trait ArtifactPublisher {
    fn publish(&self, paths: &[PathBuf], message: &str) -> Result<()>;
}

/// Publisher that records calls instead of touching a remote.
///
/// Used by tests and dry runs to observe what would have been published.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    calls: Mutex<Vec<(Vec<PathBuf>, String)>>,
    fail: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publisher whose every publish attempt fails.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// All `(paths, message)` pairs passed to `publish`, in order.
    pub fn calls(&self) -> Vec<(Vec<PathBuf>, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ArtifactPublisher for RecordingPublisher {
    fn publish(&self, paths: &[PathBuf], message: &str) -> Result<()> {
        self.calls.lock().unwrap().push((paths.to_vec(), message.to_string()));
        if self.fail {
            return Err(ChorebotError::Publish("recording publisher set to fail".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_publish_on_interval_multiples() {
        for count in [50, 100, 150, 500] {
            assert!(should_publish(count, 50), "count {} should publish", count);
        }
    }

    #[test]
    fn test_should_not_publish_off_interval() {
        for count in [1, 49, 51, 99, 101] {
            assert!(!should_publish(count, 50), "count {} should not publish", count);
        }
    }

    #[test]
    fn test_zero_count_never_publishes() {
        assert!(!should_publish(0, 50));
        assert!(!should_publish(0, 1));
    }

    #[test]
    fn test_zero_interval_never_publishes() {
        assert!(!should_publish(50, 0));
        assert!(!should_publish(0, 0));
    }

    #[test]
    fn test_interval_one_publishes_every_run() {
        assert!(should_publish(1, 1));
        assert!(should_publish(2, 1));
    }

    #[test]
    fn test_recording_publisher_captures_calls() {
        let publisher = RecordingPublisher::new();
        let paths = vec![PathBuf::from("a.log"), PathBuf::from("count.txt")];

        publisher.publish(&paths, "update artifacts").unwrap();

        let calls = publisher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, paths);
        assert_eq!(calls[0].1, "update artifacts");
    }

    #[test]
    fn test_failing_publisher_still_records() {
        let publisher = RecordingPublisher::failing();
        let result = publisher.publish(&[PathBuf::from("a.log")], "msg");

        assert!(result.is_err());
        assert_eq!(publisher.calls().len(), 1);
    }
}
