pub mod cli;
pub mod config;
pub mod delay;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod manifest;
pub mod registry;
pub mod runner;
pub mod ui;
pub mod version;
pub mod warning;

pub use error::{PublishError, Result};
