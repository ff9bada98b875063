//! Main publish workflow orchestration logic
//!
//! The pipeline runs once, top to bottom:
//!
//! 1. Validate the input and resolve the next version
//! 2. Guard the release branch
//! 3. Select the dist-tag
//! 4. Announce and pause
//! 5. Run the precheck
//! 6. Write the manifest and publish
//! 7. Commit, tag and push
//!
//! Every failure up to step 5 leaves the package untouched. Once the
//! manifest is written it is never rolled back: a failed publish leaves
//! the new version on disk for the operator to deal with.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::delay::Pause;
use crate::domain::{select_dist_tag, BranchContext, TagPattern};
use crate::error::Result;
use crate::git_ops::{GitOps, ReleaseCommit};
use crate::manifest::{self, MANIFEST_FILE};
use crate::registry::Registry;
use crate::runner::CommandRunner;
use crate::ui;
use crate::version::{resolve_next_version, ReleaseInput};
use crate::warning::PublishWarning;

/// Options for the publish workflow
///
/// Built once from the CLI arguments. Every switch defaults to `false`,
/// which is the full pipeline: branch guard, pause, precheck and git steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// Release type keyword or explicit version, unvalidated
    pub input: String,

    /// Publish from any branch
    pub allow_branch: bool,

    /// Skip the git commit/tag/push steps
    pub no_git: bool,

    /// Skip the confirmation pause
    pub no_delay: bool,

    /// Skip the precheck script
    pub no_check: bool,

    /// Dist-tag override
    pub tag: Option<String>,

    /// Stop after announcing the plan
    pub dry_run: bool,
}

impl PublishOptions {
    /// Options for a default run with the given input
    pub fn new(input: impl Into<String>) -> Self {
        PublishOptions {
            input: input.into(),
            allow_branch: false,
            no_git: false,
            no_delay: false,
            no_check: false,
            tag: None,
            dry_run: false,
        }
    }
}

/// Result of a publish workflow that did not fail
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Package name from the manifest
    pub name: String,

    /// The version that was (or would be) published
    pub version: String,

    /// The dist-tag used
    pub tag: String,

    /// Whether `npm publish` ran and succeeded; false for dry runs
    pub published: bool,

    /// Git steps that failed after the publish
    pub warnings: Vec<PublishWarning>,
}

/// The publish pipeline bound to its collaborators
pub struct Workflow<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    pause: &'a dyn Pause,
    root: PathBuf,
}

impl<'a> Workflow<'a> {
    /// # Arguments
    ///
    /// * `config` - Loaded configuration
    /// * `runner` - Executes git and npm
    /// * `pause` - Provides the confirmation delay
    /// * `root` - Directory holding `package.json`
    pub fn new(
        config: &'a Config,
        runner: &'a dyn CommandRunner,
        pause: &'a dyn Pause,
        root: impl Into<PathBuf>,
    ) -> Self {
        Workflow {
            config,
            runner,
            pause,
            root: root.into(),
        }
    }

    /// Runs the whole pipeline once.
    pub fn run(&self, options: &PublishOptions) -> Result<WorkflowResult> {
        let input = ReleaseInput::parse(&options.input)?;

        let package = manifest::read_package_info(&self.root)?;
        let next_version = resolve_next_version(&package.version, &input)?;
        log::debug!(
            "resolved {} {} -> {} ({:?})",
            package.name,
            package.version,
            next_version,
            input
        );

        let git = GitOps::new(self.runner);
        let release_branch = &self.config.branch.release;
        let branch = BranchContext::new(git.current_branch()?, release_branch);
        branch.ensure_publishable(release_branch, options.allow_branch)?;

        let tag = select_dist_tag(&next_version, options.tag.as_deref());
        let release = ReleaseCommit::new(
            &next_version,
            &TagPattern::new(&self.config.git.commit_pattern),
            &TagPattern::new(&self.config.git.tag_pattern),
            &self.config.branch.remote,
            &branch.name,
        );

        let mut result = WorkflowResult {
            name: package.name.clone(),
            version: next_version.clone(),
            tag: tag.clone(),
            published: false,
            warnings: Vec::new(),
        };

        ui::display_announcement(&package.name, &next_version, &tag);
        if !options.no_git {
            ui::display_notice("git add/commit/tag operations will be made (--no-git to disable)");
        }

        if options.dry_run {
            ui::display_plan(&self.plan(options, &next_version, &tag, &release));
            return Ok(result);
        }

        self.confirm(options);

        let registry = Registry::new(self.runner);
        let publish = &self.config.publish;

        if !options.no_check {
            ui::display_step(
                "running",
                &Registry::precheck_command(&publish.precheck_script),
            );
            ui::display_notice("--no-check to disable");
            registry.precheck(&publish.precheck_script)?;
            ui::blank_line();
        }

        ui::display_step(
            "setting new version",
            &format!("{} in {}", next_version, MANIFEST_FILE),
        );
        manifest::write_version(&self.root, &next_version)?;

        ui::display_step("publishing", &format!("{}@{}", next_version, tag));
        if let Err(e) = registry.publish(&publish.access, &tag) {
            log::debug!(
                "publish failed after {} was set to {}",
                MANIFEST_FILE,
                next_version
            );
            return Err(e);
        }
        result.published = true;
        ui::blank_line();

        if !options.no_git {
            result.warnings = git.record_release(&release);
            ui::blank_line();
        }

        for warning in &result.warnings {
            ui::display_warning(warning);
        }
        ui::display_success(&package.name, &next_version, &tag);

        Ok(result)
    }

    fn confirm(&self, options: &PublishOptions) {
        if options.no_delay {
            ui::blank_line();
            return;
        }

        let secs = self.config.publish.delay_secs;
        ui::display_notice(&format!(
            "You have {} seconds to abort with <Ctrl-C> (--no-delay to disable)...",
            secs
        ));
        ui::blank_line();
        self.pause.wait(Duration::from_secs(secs));
    }

    fn plan(
        &self,
        options: &PublishOptions,
        version: &str,
        tag: &str,
        release: &ReleaseCommit,
    ) -> Vec<String> {
        let publish = &self.config.publish;
        let mut commands = Vec::new();

        if !options.no_check {
            commands.push(Registry::precheck_command(&publish.precheck_script));
        }
        commands.push(format!("set version {} in {}", version, MANIFEST_FILE));
        commands.push(Registry::publish_command(&publish.access, tag));
        if !options.no_git {
            commands.extend(release.command_lines());
        }

        commands
    }
}
