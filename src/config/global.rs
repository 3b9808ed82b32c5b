//! Global configuration file format and loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use chorebot::automation::{ChannelTarget, CommandScript};

/// Top-level configuration for chorebot.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Artifact file locations.
    pub files: FilesConfig,

    /// Artifact publishing settings.
    pub publish: PublishConfig,

    /// Channel automation settings.
    pub automation: AutomationConfig,

    /// Environment variable names for credentials.
    pub credentials: CredentialsConfig,
}

impl GlobalConfig {
    /// Load configuration with the fallback chain.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".chorebot.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .chorebot.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .chorebot.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("chorebot").join("chorebot.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.publish.enabled && self.publish.interval == 0 {
            eyre::bail!("publish.interval must be > 0 when publishing is enabled");
        }
        if self.automation.commands.is_empty() {
            eyre::bail!("automation.commands must not be empty");
        }
        if self.automation.wait_timeout_ms == 0 {
            eyre::bail!("automation.wait-timeout-ms must be > 0");
        }
        Ok(())
    }

    /// Files handed to the publisher at a publish boundary.
    pub fn artifact_paths(&self) -> Vec<PathBuf> {
        vec![self.files.counter_file.clone(), self.files.journal_file.clone()]
    }
}

/// Artifact file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Durable execution counter.
    #[serde(rename = "counter-file")]
    pub counter_file: PathBuf,

    /// Append-only run journal.
    #[serde(rename = "journal-file")]
    pub journal_file: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            counter_file: PathBuf::from("execution_count.txt"),
            journal_file: PathBuf::from("automation_journal.log"),
        }
    }
}

/// Artifact publishing settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Whether to publish at all.
    pub enabled: bool,

    /// Publish every N runs.
    pub interval: u64,

    /// Git work tree holding the artifact files.
    #[serde(rename = "work-dir")]
    pub work_dir: PathBuf,

    /// Commit message for artifact pushes.
    #[serde(rename = "commit-message")]
    pub commit_message: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: 50,
            work_dir: PathBuf::from("."),
            commit_message: "Update run artifacts".to_string(),
        }
    }
}

/// Channel automation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// External driver command; required for real runs.
    #[serde(rename = "driver-command")]
    pub driver_command: Option<String>,

    /// Channel URL to deliver commands to.
    #[serde(rename = "channel-url")]
    pub channel_url: String,

    /// Selector for the message input element.
    #[serde(rename = "input-selector")]
    pub input_selector: String,

    /// Commands sent each run, in order.
    pub commands: Vec<String>,

    /// Pause between consecutive commands.
    #[serde(rename = "command-delay-ms")]
    pub command_delay_ms: u64,

    /// Upper bound on the whole driver run.
    #[serde(rename = "wait-timeout-ms")]
    pub wait_timeout_ms: u64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            driver_command: None,
            channel_url: String::new(),
            input_selector: "[role=\"textbox\"]".to_string(),
            commands: vec!["$tu".to_string(), "$daily".to_string(), "$dk".to_string()],
            command_delay_ms: 3000,
            wait_timeout_ms: 120_000,
        }
    }
}

impl AutomationConfig {
    pub fn script(&self) -> CommandScript {
        CommandScript::new(self.commands.clone(), Duration::from_millis(self.command_delay_ms))
    }

    pub fn target(&self) -> ChannelTarget {
        ChannelTarget::new(&self.channel_url, &self.input_selector)
    }
}

/// Environment variable names for credentials.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Variable holding the login email.
    #[serde(rename = "email-env")]
    pub email_env: String,

    /// Variable holding the login password.
    #[serde(rename = "password-env")]
    pub password_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            email_env: "DISCORD_EMAIL".to_string(),
            password_env: "DISCORD_PASS".to_string(),
        }
    }
}
