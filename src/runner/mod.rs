//! Run driver.
//!
//! Composes counter, automation, journal and publisher into the single
//! linear sequence a run consists of. One invocation per process lifetime.

use std::path::PathBuf;

use crate::automation::{ChannelAutomation, ChannelTarget, CommandScript, Credentials};
use crate::counter::RunCounter;
use crate::domain::RunOutcome;
use crate::error::Result;
use crate::journal::RunJournal;
use crate::publish::{should_publish, ArtifactPublisher};
use crate::storage::{CounterStore, JournalSink};

/// What one run did, for the caller to report on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Total historical executions including this one.
    pub execution: u64,
    /// Result of the automation collaborator.
    pub outcome: RunOutcome,
    /// Whether an artifact publish was attempted and succeeded.
    pub published: bool,
}

/// Publishing knobs for the driver.
#[derive(Debug, Clone)]
pub struct PublishPolicy {
    /// Publish every `interval` runs; zero disables.
    pub interval: u64,
    /// Artifact files handed to the publisher.
    pub artifact_paths: Vec<PathBuf>,
    /// Commit message for each publish.
    pub commit_message: String,
}

impl PublishPolicy {
    /// Policy that never publishes.
    pub fn disabled() -> Self {
        Self {
            interval: 0,
            artifact_paths: Vec::new(),
            commit_message: String::new(),
        }
    }
}

/// Drives one run end to end.
pub struct Driver<A, P, C, J>
where
    A: ChannelAutomation,
    P: ArtifactPublisher,
    C: CounterStore,
    J: JournalSink,
{
    automation: A,
    publisher: P,
    counter: RunCounter<C>,
    journal: RunJournal<J>,
    policy: PublishPolicy,
}

impl<A, P, C, J> Driver<A, P, C, J>
where
    A: ChannelAutomation,
    P: ArtifactPublisher,
    C: CounterStore,
    J: JournalSink,
{
    pub fn new(
        automation: A,
        publisher: P,
        counter: RunCounter<C>,
        journal: RunJournal<J>,
        policy: PublishPolicy,
    ) -> Self {
        Self {
            automation,
            publisher,
            counter,
            journal,
            policy,
        }
    }

    /// Execute one run: count it, hand the script to the automation
    /// collaborator, journal the outcome, and publish artifacts when the
    /// counter crosses a publish boundary.
    ///
    /// An automation failure is captured in the report, not raised; the
    /// publish boundary check still runs afterwards, since the counter has
    /// already advanced.
    pub fn run(
        &mut self,
        credentials: &Credentials,
        target: &ChannelTarget,
        script: &CommandScript,
    ) -> Result<RunReport> {
        self.journal.info("Run started.");

        let execution = match self.counter.increment() {
            Ok(n) => n,
            Err(e) => {
                self.journal.error(format!("Failed to update execution counter: {}", e));
                self.journal.flush();
                return Err(e);
            }
        };
        self.journal.info(format!("Total executions: {}", execution));
        log::info!("Run {} started", execution);

        let outcome = match self.automation.run(credentials, target, script) {
            Ok(outcome) => outcome,
            Err(e) => RunOutcome::Failed(e.to_string()),
        };

        match &outcome {
            RunOutcome::Success => {
                self.journal
                    .info(format!("Command script executed successfully ({} commands).", script.len()));
            }
            failed => {
                self.journal.error(format!("Run did not complete: {}", failed));
            }
        }

        let published = self.maybe_publish(execution);

        self.journal.separator();
        self.journal.flush();

        Ok(RunReport {
            execution,
            outcome,
            published,
        })
    }

    fn maybe_publish(&mut self, execution: u64) -> bool {
        if !should_publish(execution, self.policy.interval) {
            return false;
        }

        match self
            .publisher
            .publish(&self.policy.artifact_paths, &self.policy.commit_message)
        {
            Ok(()) => {
                self.journal.info("Run artifacts pushed to remote repository.");
                true
            }
            Err(e) => {
                // Reported, never escalated: the run itself already finished
                self.journal.error(format!("Artifact publish failed: {}", e));
                false
            }
        }
    }

    /// Access the journal, e.g. to inspect entries after a run.
    pub fn journal(&self) -> &RunJournal<J> {
        &self.journal
    }

    /// Access the automation collaborator, e.g. a recording fake in tests.
    pub fn automation(&self) -> &A {
        &self.automation
    }
}
