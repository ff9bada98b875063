use thiserror::Error;

/// Unified error type for npub operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Missing input string")]
    MissingInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Publishing only allowed from branch <{release_branch}> (current: {branch})")]
    WrongBranch {
        branch: String,
        release_branch: String,
    },

    #[error("Command `{command}` failed: {detail}")]
    Command { command: String, detail: String },

    #[error("{0} script failed")]
    PrecheckFailed(String),

    #[error("npm publish failed")]
    PublishFailed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in npub
pub type Result<T> = std::result::Result<T, PublishError>;

impl PublishError {
    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        PublishError::Manifest(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        PublishError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PublishError::Config(msg.into())
    }

    /// Create a command error for a command line that could not run or exited non-zero
    pub fn command(command: impl Into<String>, detail: impl Into<String>) -> Self {
        PublishError::Command {
            command: command.into(),
            detail: detail.into(),
        }
    }

    /// Follow-up advice printed under the error line, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            PublishError::MissingInput => Some(format!("usage: {}", crate::cli::USAGE)),
            PublishError::InvalidInput(_) => Some(format!(
                "usage: {}\nexplicit versions must be bare semver, e.g. 1.2.3 (no leading 'v' or '=')",
                crate::cli::USAGE
            )),
            PublishError::WrongBranch { .. } => {
                Some("pass flag --allow-branch to override".to_string())
            }
            PublishError::PublishFailed => Some(
                "package.json already holds the new version; restore it manually before retrying"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PublishError::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PublishError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_wrong_branch_message() {
        let err = PublishError::WrongBranch {
            branch: "feature/x".to_string(),
            release_branch: "master".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Publishing only allowed from branch <master> (current: feature/x)"
        );
        assert!(err.hint().unwrap().contains("--allow-branch"));
    }

    #[test]
    fn test_precheck_message_names_script() {
        let err = PublishError::PrecheckFailed("npub:precheck".to_string());
        assert_eq!(err.to_string(), "npub:precheck script failed");
    }

    #[test]
    fn test_command_constructor() {
        let err = PublishError::command("git rev-parse HEAD", "not a git repository");
        assert_eq!(
            err.to_string(),
            "Command `git rev-parse HEAD` failed: not a git repository"
        );
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_input_errors_carry_usage_hint() {
        for err in [
            PublishError::MissingInput,
            PublishError::InvalidInput("banana".to_string()),
        ] {
            assert!(err.hint().unwrap().starts_with("usage: npub"));
        }
    }

    #[test]
    fn test_invalid_input_hint_explains_bare_versions() {
        let hint = PublishError::InvalidInput("v1.2.3".to_string()).hint().unwrap();
        assert!(hint.contains("bare semver"));
        assert!(hint.contains("no leading 'v' or '='"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PublishError::manifest("x"), "Manifest error"),
            (PublishError::version("x"), "Version error"),
            (PublishError::config("x"), "Configuration error"),
            (PublishError::InvalidInput("x".to_string()), "Invalid input"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
