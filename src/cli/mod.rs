//! Command-line surface and the publish pipeline it drives

pub mod args;
pub mod orchestration;

pub use args::Args;
pub use orchestration::{PublishOptions, Workflow, WorkflowResult};

/// Synopsis printed with input errors
pub const USAGE: &str = "npub patch|minor|major|prerelease|3.7.3|1.2.0-beta.3";
