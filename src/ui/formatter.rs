//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic for the publish
//! pipeline. Nothing here reads input or touches the package.

use console::style;

use crate::warning::PublishWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), style(message).red());
}

/// Print a dimmed follow-up line under an error.
pub fn display_hint(message: &str) {
    eprintln!("{}", style(message).dim());
}

/// Print a dimmed informational notice.
pub fn display_notice(message: &str) {
    println!("{}", style(message).dim());
}

/// Print one pipeline step: a magenta bullet, the action and its subject.
///
/// # Example
/// ```ignore
/// display_step("running", "git add .");   // • running git add .
/// ```
pub fn display_step(action: &str, subject: &str) {
    println!(
        "{} {} {}",
        style("•").magenta(),
        action,
        style(subject).green()
    );
}

/// Announce what is about to be published.
pub fn display_announcement(name: &str, version: &str, tag: &str) {
    println!(
        "\nAbout to publish {} -> {} with tag {}",
        style(name).cyan(),
        style(version).yellow(),
        style(format!("@{}", tag)).magenta()
    );
}

/// Display a non-fatal warning.
pub fn display_warning(warning: &PublishWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print the commands a dry run would have executed.
pub fn display_plan(commands: &[String]) {
    println!("\n{}", style("Dry run, nothing will be changed. Planned steps:").bold());
    for (i, command) in commands.iter().enumerate() {
        println!("  {}. {}", i + 1, style(command).green());
    }
}

/// Final line after a successful publish.
pub fn display_success(name: &str, version: &str, tag: &str) {
    println!(
        "{} published {}@{} with tag {}",
        style("✓").green(),
        style(name).cyan(),
        style(version).yellow(),
        style(format!("@{}", tag)).magenta()
    );
}

/// Print an empty separator line.
pub fn blank_line() {
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_step() {
        // Visual verification test - output is printed to stdout
        display_step("running", "git add .");
    }

    #[test]
    fn test_display_plan() {
        display_plan(&["npm publish --access public --tag latest".to_string()]);
    }
}
