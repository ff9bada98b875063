use regex::Regex;

/// Dist-tag used when nothing marks the version as a pre-release
pub const DEFAULT_DIST_TAG: &str = "latest";

/// Dist-tag used for alpha, beta and rc versions
pub const PRERELEASE_DIST_TAG: &str = "next";

const PRERELEASE_MARKERS: &str = r"(alpha|beta|rc)";

/// Selects the npm dist-tag for a version.
///
/// An explicit tag always wins. Otherwise versions containing `alpha`, `beta`
/// or `rc` anywhere go to `next` and everything else to `latest`.
///
/// # Example
/// ```ignore
/// assert_eq!(select_dist_tag("2.0.0", None), "latest");
/// assert_eq!(select_dist_tag("2.0.0-beta.1", None), "next");
/// assert_eq!(select_dist_tag("2.0.0-beta.1", Some("custom")), "custom");
/// ```
pub fn select_dist_tag(version: &str, explicit: Option<&str>) -> String {
    if let Some(tag) = explicit {
        return tag.to_string();
    }

    let is_prerelease = Regex::new(PRERELEASE_MARKERS)
        .map(|re| re.is_match(version))
        .unwrap_or(false);

    if is_prerelease {
        PRERELEASE_DIST_TAG.to_string()
    } else {
        DEFAULT_DIST_TAG.to_string()
    }
}

/// Naming pattern for release commits and git tags (e.g., "v{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace("{version}", version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_goes_to_latest() {
        assert_eq!(select_dist_tag("2.0.0", None), "latest");
    }

    #[test]
    fn test_prerelease_markers_go_to_next() {
        assert_eq!(select_dist_tag("2.0.0-beta.1", None), "next");
        assert_eq!(select_dist_tag("2.0.0-alpha", None), "next");
        assert_eq!(select_dist_tag("2.0.0-rc.3", None), "next");
    }

    #[test]
    fn test_numeric_prerelease_stays_latest() {
        assert_eq!(select_dist_tag("1.2.4-0", None), "latest");
    }

    #[test]
    fn test_explicit_tag_wins() {
        assert_eq!(select_dist_tag("2.0.0-beta.1", Some("custom")), "custom");
        assert_eq!(select_dist_tag("2.0.0", Some("legacy")), "legacy");
    }

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::new("v{version}");
        assert_eq!(pattern.format("1.2.3"), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}");
        assert_eq!(pattern.format("1.2.3-rc.1"), "release-1.2.3-rc.1");
    }
}
