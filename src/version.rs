use std::fmt;
use std::str::FromStr;

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{PublishError, Result};

/// Represents the kind of semantic version increment to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Patch,
    Minor,
    Major,
    Prerelease,
}

impl ReleaseType {
    pub const ALL: [ReleaseType; 4] = [
        ReleaseType::Patch,
        ReleaseType::Minor,
        ReleaseType::Major,
        ReleaseType::Prerelease,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReleaseType::Patch => "patch",
            ReleaseType::Minor => "minor",
            ReleaseType::Major => "major",
            ReleaseType::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReleaseType {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PublishError::InvalidInput(s.to_string()))
    }
}

/// The positional argument: a release type keyword or an explicit version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseInput {
    Increment(ReleaseType),
    /// Kept exactly as typed; it is published verbatim.
    Explicit(String),
}

impl ReleaseInput {
    /// Validates the raw token.
    ///
    /// Keywords are matched exactly (`patch`, `minor`, `major`, `prerelease`).
    /// Anything else must be a strict semantic version such as `3.7.3` or
    /// `1.2.0-beta.3`.
    pub fn parse(token: &str) -> Result<Self> {
        if let Ok(kind) = token.parse::<ReleaseType>() {
            return Ok(ReleaseInput::Increment(kind));
        }

        match Version::parse(token) {
            Ok(_) => Ok(ReleaseInput::Explicit(token.to_string())),
            Err(_) => Err(PublishError::InvalidInput(token.to_string())),
        }
    }
}

/// Computes the version to publish from the manifest's current version.
///
/// # Returns
/// * `Ok(String)` - The incremented version, or the explicit literal unchanged
/// * `Err` - If the current version cannot be parsed or the increment overflows
pub fn resolve_next_version(current: &str, input: &ReleaseInput) -> Result<String> {
    match input {
        ReleaseInput::Explicit(literal) => Ok(literal.clone()),
        ReleaseInput::Increment(kind) => {
            let current = Version::parse(current).map_err(|e| {
                PublishError::version(format!(
                    "current version '{}' is not valid semver: {}",
                    current, e
                ))
            })?;
            increment(&current, *kind).map(|v| v.to_string())
        }
    }
}

/// Applies one increment following the npm semver rules.
///
/// A pre-release version is first "released" by the matching increment:
/// `1.3.0-beta.1` bumped by `minor` becomes `1.3.0`, not `1.4.0`.
/// Build metadata never survives an increment.
pub fn increment(current: &Version, kind: ReleaseType) -> Result<Version> {
    let mut next = current.clone();
    next.build = BuildMetadata::EMPTY;
    let is_pre = !current.pre.is_empty();

    match kind {
        ReleaseType::Major => {
            if !(is_pre && current.minor == 0 && current.patch == 0) {
                next.major = bump(current.major, "major")?;
            }
            next.minor = 0;
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        ReleaseType::Minor => {
            if !(is_pre && current.patch == 0) {
                next.minor = bump(current.minor, "minor")?;
            }
            next.patch = 0;
            next.pre = Prerelease::EMPTY;
        }
        ReleaseType::Patch => {
            if !is_pre {
                next.patch = bump(current.patch, "patch")?;
            }
            next.pre = Prerelease::EMPTY;
        }
        ReleaseType::Prerelease => {
            if is_pre {
                next.pre = bump_prerelease(&current.pre)?;
            } else {
                next.patch = bump(current.patch, "patch")?;
                next.pre = Prerelease::new("0")
                    .map_err(|e| PublishError::version(e.to_string()))?;
            }
        }
    }

    Ok(next)
}

fn bump(component: u64, name: &str) -> Result<u64> {
    component
        .checked_add(1)
        .ok_or_else(|| PublishError::version(format!("{} component overflows", name)))
}

/// Increments the last numeric identifier, or appends `.0` when there is none.
fn bump_prerelease(pre: &Prerelease) -> Result<Prerelease> {
    let mut identifiers: Vec<String> = pre.as_str().split('.').map(str::to_string).collect();

    let last_numeric = identifiers
        .iter()
        .rposition(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()));

    match last_numeric {
        Some(index) => {
            let value: u64 = identifiers[index].parse().map_err(|_| {
                PublishError::version(format!(
                    "pre-release identifier '{}' is out of range",
                    identifiers[index]
                ))
            })?;
            identifiers[index] = bump(value, "pre-release")?.to_string();
        }
        None => identifiers.push("0".to_string()),
    }

    Prerelease::new(&identifiers.join(".")).map_err(|e| PublishError::version(e.to_string()))
}
