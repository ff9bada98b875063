use crate::error::{PublishError, Result};
use crate::git_ops::as_strs;
use crate::runner::{format_command, CommandRunner};

const NPM: &str = "npm";

/// Runs the npm side of a release: the precheck script and `npm publish`.
pub struct Registry<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Registry<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Registry { runner }
    }

    /// Arguments for `npm run <script>`
    pub fn precheck_args(script: &str) -> Vec<String> {
        vec!["run".to_string(), script.to_string()]
    }

    /// Arguments for `npm publish --access <access> --tag <tag>`
    pub fn publish_args(access: &str, tag: &str) -> Vec<String> {
        vec![
            "publish".to_string(),
            "--access".to_string(),
            access.to_string(),
            "--tag".to_string(),
            tag.to_string(),
        ]
    }

    /// Command line of the precheck, for display
    pub fn precheck_command(script: &str) -> String {
        format_command(NPM, &as_strs(&Self::precheck_args(script)))
    }

    /// Command line of the publish, for display
    pub fn publish_command(access: &str, tag: &str) -> String {
        format_command(NPM, &as_strs(&Self::publish_args(access, tag)))
    }

    /// Runs the project's precheck script
    ///
    /// # Returns
    /// * `Ok(())` - The script exited 0
    /// * `Err(PublishError::PrecheckFailed)` - Any other outcome
    pub fn precheck(&self, script: &str) -> Result<()> {
        let args = Self::precheck_args(script);
        if self.runner.status(NPM, &as_strs(&args)) {
            Ok(())
        } else {
            Err(PublishError::PrecheckFailed(script.to_string()))
        }
    }

    /// Publishes the package in the working directory under `tag`
    pub fn publish(&self, access: &str, tag: &str) -> Result<()> {
        let args = Self::publish_args(access, tag);
        if self.runner.status(NPM, &as_strs(&args)) {
            Ok(())
        } else {
            Err(PublishError::PublishFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::MockRunner;

    #[test]
    fn test_command_lines() {
        assert_eq!(
            Registry::precheck_command("npub:precheck"),
            "npm run npub:precheck"
        );
        assert_eq!(
            Registry::publish_command("public", "next"),
            "npm publish --access public --tag next"
        );
    }

    #[test]
    fn test_precheck_success() {
        let runner = MockRunner::new();
        assert!(Registry::new(&runner).precheck("npub:precheck").is_ok());
        assert!(runner.ran("npm run npub:precheck"));
    }

    #[test]
    fn test_precheck_failure() {
        let runner = MockRunner::new().failing("npm run npub:precheck");
        let err = Registry::new(&runner).precheck("npub:precheck").unwrap_err();
        assert!(matches!(err, PublishError::PrecheckFailed(ref s) if s == "npub:precheck"));
    }

    #[test]
    fn test_publish_failure() {
        let runner = MockRunner::new().failing("npm publish --access public --tag latest");
        let err = Registry::new(&runner).publish("public", "latest").unwrap_err();
        assert!(matches!(err, PublishError::PublishFailed));
    }
}
