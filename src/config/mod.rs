//! Configuration for the chorebot binary.
//!
//! A single YAML file with a fallback chain:
//! 1. Explicit --config path
//! 2. .chorebot.yml in the current directory (project config)
//! 3. ~/.config/chorebot/chorebot.yml (user config)
//! 4. Default values
//!
//! Credentials never live in the file; they are read from the environment
//! (with .env support) using the variable names the file points at.

pub mod credentials;
mod global;

pub use self::credentials::load_credentials;
pub use self::global::{AutomationConfig, CredentialsConfig, FilesConfig, GlobalConfig, PublishConfig};
