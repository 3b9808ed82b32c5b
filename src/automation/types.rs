//! Types crossing the automation boundary.

use std::fmt;
use std::time::Duration;

/// Login credentials for the chat service.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Where to deliver the command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTarget {
    /// Channel URL to navigate to after login.
    pub url: String,
    /// Selector for the message input element.
    pub input_selector: String,
}

impl ChannelTarget {
    pub fn new(url: impl Into<String>, input_selector: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            input_selector: input_selector.into(),
        }
    }
}

/// Ordered list of text commands with a fixed inter-command delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandScript {
    commands: Vec<String>,
    delay: Duration,
}

impl CommandScript {
    pub fn new(commands: Vec<String>, delay: Duration) -> Self {
        Self { commands, delay }
    }

    /// Commands in delivery order.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Pause between consecutive commands.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_accessors() {
        let creds = Credentials::new("user@example.com", "hunter2");
        assert_eq!(creds.email(), "user@example.com");
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn test_command_script_preserves_order() {
        let script = CommandScript::new(
            vec!["$tu".to_string(), "$daily".to_string(), "$dk".to_string()],
            Duration::from_secs(3),
        );
        assert_eq!(script.commands(), ["$tu", "$daily", "$dk"]);
        assert_eq!(script.len(), 3);
        assert!(!script.is_empty());
    }

    #[test]
    fn test_command_script_empty() {
        let script = CommandScript::new(Vec::new(), Duration::from_secs(1));
        assert!(script.is_empty());
        assert_eq!(script.len(), 0);
    }
}
