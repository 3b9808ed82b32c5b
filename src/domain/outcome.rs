//! Run outcome types.
//!
//! A run's result is an explicit value handled by pattern matching, not an
//! exception unwinding through the driver.

use std::fmt;

/// Outcome of one automation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Login succeeded and the full command script was delivered
    Success,
    /// Login was rejected before any command was sent
    LoginFailed(String),
    /// A CAPTCHA challenge blocked the login flow
    CaptchaDetected,
    /// A bounded wait inside the automation expired
    Timeout(String),
    /// Unrecoverable failure outside the known categories
    Failed(String),
}

impl RunOutcome {
    /// Whether the command script was delivered in full.
    pub fn succeeded(&self) -> bool {
        matches!(self, RunOutcome::Success)
    }

    /// Failure description, if the run did not succeed.
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            RunOutcome::Success => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Success => write!(f, "success"),
            RunOutcome::LoginFailed(reason) => write!(f, "login failed: {}", reason),
            RunOutcome::CaptchaDetected => write!(f, "captcha challenge detected"),
            RunOutcome::Timeout(what) => write!(f, "timed out waiting for {}", what),
            RunOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
