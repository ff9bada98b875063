use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{PublishError, Result};
use crate::runner::{format_command, CommandRunner};

/// Mock runner for testing without spawning processes
///
/// Commands are keyed by their full command line, e.g. `"git add ."`.
/// Every call is recorded in order, whether it succeeds or not.
#[derive(Default)]
pub struct MockRunner {
    outputs: HashMap<String, String>,
    failures: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    /// Create a runner on which every `status` call succeeds and no output is known
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `output` return `stdout` for the given command line
    pub fn with_output(mut self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), stdout.into());
        self
    }

    /// Make the given command line fail for both capabilities
    pub fn failing(mut self, command: impl Into<String>) -> Self {
        self.failures.insert(command.into());
        self
    }

    /// Command lines run so far, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Whether a command line has been run
    pub fn ran(&self, command: &str) -> bool {
        self.calls().iter().any(|call| call == command)
    }

    fn record(&self, line: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.to_string());
        }
    }
}

impl CommandRunner for MockRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = format_command(program, args);
        self.record(&line);

        if self.failures.contains(&line) {
            return Err(PublishError::command(&line, "exit code 1"));
        }

        self.outputs
            .get(&line)
            .map(|stdout| stdout.trim().to_string())
            .ok_or_else(|| PublishError::command(&line, "no output configured"))
    }

    fn status(&self, program: &str, args: &[&str]) -> bool {
        let line = format_command(program, args);
        self.record(&line);
        !self.failures.contains(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_trimmed() {
        let runner = MockRunner::new().with_output("git rev-parse HEAD", "  abc123\n");
        assert_eq!(runner.output("git", &["rev-parse", "HEAD"]).unwrap(), "abc123");
    }

    #[test]
    fn test_unknown_output_is_error() {
        let runner = MockRunner::new();
        assert!(runner.output("git", &["status"]).is_err());
    }

    #[test]
    fn test_failing_command() {
        let runner = MockRunner::new()
            .with_output("git status", "clean")
            .failing("git status")
            .failing("npm publish");
        assert!(runner.output("git", &["status"]).is_err());
        assert!(!runner.status("npm", &["publish"]));
        assert!(runner.status("npm", &["test"]));
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let runner = MockRunner::new().failing("git push");
        runner.status("git", &["add", "."]);
        runner.status("git", &["push"]);
        assert_eq!(runner.calls(), vec!["git add .", "git push"]);
        assert!(runner.ran("git push"));
        assert!(!runner.ran("git tag"));
    }
}
