use crate::error::{PublishError, Result};

/// The checked-out branch compared against the configured release branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_release: bool,
}

impl BranchContext {
    /// Create a new branch context
    pub fn new(name: impl Into<String>, release_branch: &str) -> Self {
        let name_str = name.into();
        let is_release = name_str == release_branch;

        BranchContext {
            name: name_str,
            is_release,
        }
    }

    /// Check if publishing from this branch is allowed
    ///
    /// Any branch passes when `allow_any` is set.
    pub fn ensure_publishable(&self, release_branch: &str, allow_any: bool) -> Result<()> {
        if self.is_release || allow_any {
            return Ok(());
        }

        Err(PublishError::WrongBranch {
            branch: self.name.clone(),
            release_branch: release_branch.to_string(),
        })
    }
}
