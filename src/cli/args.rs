use crate::cli::orchestration::PublishOptions;
use crate::error::{PublishError, Result};

#[derive(clap::Parser, Debug)]
#[command(
    name = "npub",
    version,
    about = "Bump, check and publish an npm package, then commit and tag the release",
    args_override_self = true
)]
pub struct Args {
    #[arg(
        value_name = "RELEASE_TYPE|VERSION",
        help = "patch, minor, major, prerelease or an explicit version such as 1.2.0-beta.3"
    )]
    pub input: Option<String>,

    #[arg(long, help = "Allow publishing from a branch other than the release branch")]
    pub allow_branch: bool,

    #[arg(long, help = "Skip the git add/commit/tag/push steps")]
    pub no_git: bool,

    #[arg(long, help = "Do not pause before publishing")]
    pub no_delay: bool,

    #[arg(long, help = "Do not run the precheck npm script")]
    pub no_check: bool,

    #[arg(short, long, value_name = "NAME", help = "Publish under this dist-tag")]
    pub tag: Option<String>,

    #[arg(long, help = "Show what would happen without changing anything")]
    pub dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,
}

impl Args {
    /// Converts parsed arguments into pipeline options.
    ///
    /// Fails with [PublishError::MissingInput] when no positional was given.
    pub fn into_options(self) -> Result<PublishOptions> {
        let input = self.input.ok_or(PublishError::MissingInput)?;

        Ok(PublishOptions {
            input,
            allow_branch: self.allow_branch,
            no_git: self.no_git,
            no_delay: self.no_delay,
            no_check: self.no_check,
            tag: self.tag,
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("npub").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["patch"]).into_options().unwrap();
        assert_eq!(options, PublishOptions::new("patch"));
    }

    #[test]
    fn test_all_flags() {
        let options = parse(&[
            "1.2.0-beta.3",
            "--allow-branch",
            "--no-git",
            "--no-delay",
            "--no-check",
            "--dry-run",
            "-t",
            "canary",
        ])
        .into_options()
        .unwrap();

        assert_eq!(options.input, "1.2.0-beta.3");
        assert!(options.allow_branch);
        assert!(options.no_git);
        assert!(options.no_delay);
        assert!(options.no_check);
        assert!(options.dry_run);
        assert_eq!(options.tag.as_deref(), Some("canary"));
    }

    #[test]
    fn test_flags_before_input() {
        let options = parse(&["--no-delay", "minor"]).into_options().unwrap();
        assert_eq!(options.input, "minor");
        assert!(options.no_delay);
    }

    #[test]
    fn test_last_tag_wins() {
        let options = parse(&["patch", "-t", "first", "--tag", "second"])
            .into_options()
            .unwrap();
        assert_eq!(options.tag.as_deref(), Some("second"));
    }

    #[test]
    fn test_repeated_switch_is_accepted() {
        let options = parse(&["patch", "--no-git", "--no-git"]).into_options().unwrap();
        assert!(options.no_git);
    }

    #[test]
    fn test_missing_input() {
        let err = parse(&["--no-git"]).into_options().unwrap_err();
        assert!(matches!(err, PublishError::MissingInput));
    }

    #[test]
    fn test_tag_without_value_is_rejected() {
        let result = Args::try_parse_from(["npub", "patch", "--tag"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_and_debug() {
        let args = parse(&["major", "-c", "ci/npub.toml", "--debug"]);
        assert_eq!(args.config.as_deref(), Some("ci/npub.toml"));
        assert!(args.debug);
    }
}
