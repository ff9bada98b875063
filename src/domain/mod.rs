//! Domain logic - pure release rules independent of npm and git

pub mod branch;
pub mod tag;

pub use branch::BranchContext;
pub use tag::{select_dist_tag, TagPattern, DEFAULT_DIST_TAG, PRERELEASE_DIST_TAG};
