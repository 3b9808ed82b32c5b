//! Credential loading from the environment.

use chorebot::automation::Credentials;
use chorebot::{ChorebotError, Result};

use super::global::CredentialsConfig;

/// Read credentials from the environment variables the config names.
///
/// A `.env` file in the working directory is honored if present. Absent or
/// empty values are a `ConfigMissing` error; the caller journals it before
/// terminating the run.
pub fn load_credentials(config: &CredentialsConfig) -> Result<Credentials> {
    let _ = dotenvy::dotenv();

    let email = require_var(&config.email_env)?;
    let password = require_var(&config.password_env)?;

    Ok(Credentials::new(email, password))
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ChorebotError::ConfigMissing(format!(
            "environment variable {} is not set",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Variable names are unique per test; the test runner shares one
    // process environment.

    #[test]
    fn test_load_credentials_from_env() {
        unsafe {
            std::env::set_var("CHOREBOT_TEST_EMAIL_A", "user@example.com");
            std::env::set_var("CHOREBOT_TEST_PASS_A", "hunter2");
        }

        let config = CredentialsConfig {
            email_env: "CHOREBOT_TEST_EMAIL_A".to_string(),
            password_env: "CHOREBOT_TEST_PASS_A".to_string(),
        };

        let creds = load_credentials(&config).unwrap();
        assert_eq!(creds.email(), "user@example.com");
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn test_missing_email_is_config_missing() {
        unsafe {
            std::env::set_var("CHOREBOT_TEST_PASS_B", "hunter2");
        }

        let config = CredentialsConfig {
            email_env: "CHOREBOT_TEST_EMAIL_B_UNSET".to_string(),
            password_env: "CHOREBOT_TEST_PASS_B".to_string(),
        };

        let err = load_credentials(&config).unwrap_err();
        assert!(matches!(err, ChorebotError::ConfigMissing(_)));
        assert!(err.to_string().contains("CHOREBOT_TEST_EMAIL_B_UNSET"));
    }

    #[test]
    fn test_empty_value_is_config_missing() {
        unsafe {
            std::env::set_var("CHOREBOT_TEST_EMAIL_C", "  ");
            std::env::set_var("CHOREBOT_TEST_PASS_C", "hunter2");
        }

        let config = CredentialsConfig {
            email_env: "CHOREBOT_TEST_EMAIL_C".to_string(),
            password_env: "CHOREBOT_TEST_PASS_C".to_string(),
        };

        assert!(load_credentials(&config).is_err());
    }
}
