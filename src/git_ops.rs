use crate::domain::TagPattern;
use crate::error::Result;
use crate::runner::{format_command, CommandRunner};
use crate::ui;
use crate::warning::PublishWarning;

const GIT: &str = "git";

/// The commit, tag and pushes that record a release in git.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseCommit {
    pub message: String,
    pub tag: String,
    pub remote: String,
    pub branch: String,
}

impl ReleaseCommit {
    /// Builds the commit for `version` from the configured naming patterns.
    pub fn new(
        version: &str,
        commit_pattern: &TagPattern,
        tag_pattern: &TagPattern,
        remote: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        ReleaseCommit {
            message: commit_pattern.format(version),
            tag: tag_pattern.format(version),
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// The five git invocations, in the order they run.
    pub fn steps(&self) -> Vec<Vec<String>> {
        vec![
            vec!["add".to_string(), ".".to_string()],
            vec!["commit".to_string(), "-am".to_string(), self.message.clone()],
            vec!["tag".to_string(), self.tag.clone()],
            vec!["push".to_string(), self.remote.clone(), self.branch.clone()],
            vec![
                "push".to_string(),
                self.remote.clone(),
                "tag".to_string(),
                self.tag.clone(),
            ],
        ]
    }

    /// The steps rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.steps()
            .iter()
            .map(|args| format_command(GIT, &as_strs(args)))
            .collect()
    }
}

/// Git operations the publish pipeline needs, all through the system `git` CLI.
pub struct GitOps<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitOps<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        GitOps { runner }
    }

    /// Name of the checked-out branch.
    ///
    /// Fatal on failure: outside a repository or without git there is
    /// nothing safe to publish from.
    pub fn current_branch(&self) -> Result<String> {
        self.runner.output(
            GIT,
            &["rev-parse", "--symbolic-full-name", "--abbrev-ref", "HEAD"],
        )
    }

    /// Runs every step of the release commit, continuing past failures.
    ///
    /// # Returns
    /// One warning per step that did not succeed, in step order.
    pub fn record_release(&self, release: &ReleaseCommit) -> Vec<PublishWarning> {
        let mut warnings = Vec::new();

        for args in release.steps() {
            let args = as_strs(&args);
            let line = format_command(GIT, &args);
            ui::display_step("running", &line);

            if !self.runner.status(GIT, &args) {
                log::debug!("git step failed: {}", line);
                warnings.push(PublishWarning::GitStepFailed { command: line });
            }
        }

        warnings
    }
}

pub(crate) fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}
