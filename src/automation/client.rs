//! The automation trait and a scripted fake.

use std::sync::Mutex;

use super::types::{ChannelTarget, CommandScript, Credentials};
use crate::domain::RunOutcome;
use crate::error::Result;

/// Boundary to the browser/UI side of a run.
///
/// Implementations log in with the given credentials, deliver the command
/// script to the target channel in order, and report what happened as a
/// `RunOutcome`. An `Err` from `run` means the collaborator itself could not
/// execute (e.g. its process would not start); protocol-level failures such
/// as a rejected login are values, not errors.
pub trait ChannelAutomation {
    fn run(&self, credentials: &Credentials, target: &ChannelTarget, script: &CommandScript) -> Result<RunOutcome>;
}

/// In-process fake returning a fixed outcome.
///
/// Records every command it was asked to deliver so tests can assert on the
/// script without a browser anywhere near the build.
pub struct ScriptedAutomation {
    outcome: RunOutcome,
    delivered: Mutex<Vec<String>>,
}

impl ScriptedAutomation {
    /// Fake that reports success.
    pub fn succeeding() -> Self {
        Self::with_outcome(RunOutcome::Success)
    }

    /// Fake that reports the given outcome.
    pub fn with_outcome(outcome: RunOutcome) -> Self {
        Self {
            outcome,
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Commands delivered across all runs, in order.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }
}

impl ChannelAutomation for ScriptedAutomation {
    fn run(&self, _credentials: &Credentials, _target: &ChannelTarget, script: &CommandScript) -> Result<RunOutcome> {
        if self.outcome.succeeded() {
            let mut delivered = self.delivered.lock().unwrap();
            delivered.extend(script.commands().iter().cloned());
        }
        Ok(self.outcome.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_target() -> ChannelTarget {
        ChannelTarget::new("https://chat.example.com/channels/1/2", "[role=\"textbox\"]")
    }

    fn test_script() -> CommandScript {
        CommandScript::new(vec!["$tu".to_string(), "$daily".to_string()], Duration::from_millis(0))
    }

    #[test]
    fn test_scripted_success_records_commands() {
        let automation = ScriptedAutomation::succeeding();
        let creds = Credentials::new("a@b.c", "pw");

        let outcome = automation.run(&creds, &test_target(), &test_script()).unwrap();
        assert!(outcome.succeeded());
        assert_eq!(automation.delivered(), ["$tu", "$daily"]);
    }

    #[test]
    fn test_scripted_failure_delivers_nothing() {
        let automation = ScriptedAutomation::with_outcome(RunOutcome::LoginFailed("nope".into()));
        let creds = Credentials::new("a@b.c", "pw");

        let outcome = automation.run(&creds, &test_target(), &test_script()).unwrap();
        assert_eq!(outcome, RunOutcome::LoginFailed("nope".into()));
        assert!(automation.delivered().is_empty());
    }

    #[test]
    fn test_scripted_accumulates_across_runs() {
        let automation = ScriptedAutomation::succeeding();
        let creds = Credentials::new("a@b.c", "pw");

        automation.run(&creds, &test_target(), &test_script()).unwrap();
        automation.run(&creds, &test_target(), &test_script()).unwrap();
        assert_eq!(automation.delivered().len(), 4);
    }
}
