use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PublishError, Result};
use crate::runner::{format_command, CommandRunner};

/// Runs commands as child processes of npub inside the package directory
pub struct SystemRunner {
    work_dir: PathBuf,
}

impl SystemRunner {
    /// Create a runner whose commands execute in `work_dir`
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        SystemRunner {
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    fn command(&self, program: &str, args: &[&str]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.work_dir);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<String> {
        let line = format_command(program, args);
        log::debug!("running (captured): {}", line);

        let output = self
            .command(program, args)
            .output()
            .map_err(|e| PublishError::command(&line, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PublishError::command(
                &line,
                format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn status(&self, program: &str, args: &[&str]) -> bool {
        let line = format_command(program, args);
        log::debug!("running: {}", line);

        match self.command(program, args).status() {
            Ok(status) => {
                log::debug!("`{}` exited with {}", line, status);
                status.success()
            }
            Err(e) => {
                log::warn!("failed to spawn `{}`: {}", line, e);
                false
            }
        }
    }
}
