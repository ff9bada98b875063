//! External command abstraction layer
//!
//! Every side effect outside of `package.json` goes through the
//! [CommandRunner] trait: the git branch query, the precheck script,
//! `npm publish` and the git commit/tag/push steps.
//!
//! The trait offers two capabilities matching the two failure policies of
//! the publish pipeline:
//!
//! - [CommandRunner::output] is fail-fast. It captures trimmed stdout and
//!   turns a spawn failure or non-zero exit into an error.
//! - [CommandRunner::status] is best-effort. The command inherits the
//!   terminal and only its success is reported back.
//!
//! Implementations:
//!
//! - [system::SystemRunner]: spawns real processes with `std::process::Command`
//! - [mock::MockRunner]: records calls and returns canned results for tests

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use crate::error::Result;

/// Runs external programs on behalf of the publish pipeline
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`.
pub trait CommandRunner: Send + Sync {
    /// Run a command and capture its standard output
    ///
    /// # Returns
    /// * `Ok(String)` - Standard output with surrounding whitespace removed
    /// * `Err` - If the program cannot be spawned or exits non-zero
    ///
    /// # Example
    /// ```rust
    /// # use npub::runner::CommandRunner;
    /// # fn example<R: CommandRunner>(runner: &R) -> npub::Result<()> {
    /// let branch = runner.output("git", &["rev-parse", "--abbrev-ref", "HEAD"])?;
    /// println!("on {}", branch);
    /// # Ok(())
    /// # }
    /// ```
    fn output(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Run a command with inherited stdio and report whether it succeeded
    ///
    /// Never errors; a program that cannot be spawned counts as a failure.
    fn status(&self, program: &str, args: &[&str]) -> bool;
}

/// Render a command line for display and logging
pub fn format_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        return program.to_string();
    }
    format!("{} {}", program, args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_command() {
        assert_eq!(format_command("git", &["add", "."]), "git add .");
        assert_eq!(format_command("npm", &[]), "npm");
    }
}
