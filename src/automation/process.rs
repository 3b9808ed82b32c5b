//! Process-backed automation adapter.
//!
//! Delegates the browser work to an external driver command supplied by the
//! operator. Credentials, target and script travel over the environment; the
//! process result is classified back into a `RunOutcome`. The driver is
//! expected to print a failure marker (`captcha`, `login-failed`, `timeout`)
//! before exiting non-zero when it can tell what went wrong.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::client::ChannelAutomation;
use super::types::{ChannelTarget, CommandScript, Credentials};
use crate::domain::RunOutcome;
use crate::error::{ChorebotError, Result};

/// Configuration for the external driver command.
#[derive(Debug, Clone)]
pub struct DriverProcessConfig {
    /// Shell command line to execute.
    pub command: String,
    /// Upper bound on the whole driver run.
    pub wait_timeout: Duration,
}

impl DriverProcessConfig {
    pub fn new(command: impl Into<String>, wait_timeout: Duration) -> Self {
        Self {
            command: command.into(),
            wait_timeout,
        }
    }
}

/// Automation adapter that shells out to the configured driver command.
pub struct DriverProcess {
    config: DriverProcessConfig,
}

impl DriverProcess {
    pub fn new(config: DriverProcessConfig) -> Self {
        Self { config }
    }

    pub fn command(&self) -> &str {
        &self.config.command
    }
}

impl ChannelAutomation for DriverProcess {
    fn run(&self, credentials: &Credentials, target: &ChannelTarget, script: &CommandScript) -> Result<RunOutcome> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(&self.config.command)
            .env("CHOREBOT_EMAIL", credentials.email())
            .env("CHOREBOT_PASSWORD", credentials.password())
            .env("CHOREBOT_CHANNEL_URL", &target.url)
            .env("CHOREBOT_INPUT_SELECTOR", &target.input_selector)
            .env("CHOREBOT_COMMANDS", script.commands().join("\n"))
            .env("CHOREBOT_COMMAND_DELAY_MS", script.delay().as_millis().to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| ChorebotError::Automation(format!("Failed to spawn driver command: {}", e)))?;

        let deadline = Instant::now() + self.config.wait_timeout;
        let status = loop {
            match child
                .try_wait()
                .map_err(|e| ChorebotError::Automation(format!("Failed to poll driver command: {}", e)))?
            {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(RunOutcome::Timeout(format!(
                        "driver command after {}ms",
                        self.config.wait_timeout.as_millis()
                    )));
                }
                None => thread::sleep(Duration::from_millis(100)),
            }
        };

        let mut stdout = String::new();
        if let Some(mut pipe) = child.stdout.take() {
            let _ = pipe.read_to_string(&mut stdout);
        }
        let mut stderr = String::new();
        if let Some(mut pipe) = child.stderr.take() {
            let _ = pipe.read_to_string(&mut stderr);
        }

        if status.success() {
            return Ok(RunOutcome::Success);
        }
        Ok(classify_failure(status.code(), &stdout, &stderr))
    }
}

/// Map a failed driver process to an outcome using its output markers.
fn classify_failure(code: Option<i32>, stdout: &str, stderr: &str) -> RunOutcome {
    let combined = format!("{}\n{}", stdout, stderr).to_lowercase();

    if combined.contains("captcha") {
        return RunOutcome::CaptchaDetected;
    }
    if combined.contains("login-failed") || combined.contains("login failed") {
        return RunOutcome::LoginFailed(last_line(stderr).unwrap_or_else(|| "reported by driver".to_string()));
    }
    if combined.contains("timed-out") || combined.contains("timeout") {
        return RunOutcome::Timeout("driver-reported wait".to_string());
    }

    let detail = last_line(stderr).map(|l| format!(": {}", l)).unwrap_or_default();
    RunOutcome::Failed(format!("driver exited with code {:?}{}", code, detail))
}

fn last_line(output: &str) -> Option<String> {
    output
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}
