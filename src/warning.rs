use std::fmt;

/// Non-fatal problems met after `npm publish` succeeded.
/// The registry already holds the release, so these are reported, never raised.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishWarning {
    /// A git write step exited non-zero or could not be spawned
    GitStepFailed { command: String },
}

impl fmt::Display for PublishWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishWarning::GitStepFailed { command } => {
                write!(f, "`{}` failed; run it manually", command)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_step_failed_display() {
        let warning = PublishWarning::GitStepFailed {
            command: "git push origin master".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "`git push origin master` failed; run it manually"
        );
    }
}
