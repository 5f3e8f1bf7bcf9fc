//! Abstraction over the code-hosting API used by the event handlers

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::Result;

/// Reviewers currently requested on a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewRequestState {
    /// Requested user logins
    pub users: BTreeSet<String>,
    /// Requested team slugs
    pub teams: BTreeSet<String>,
}

impl ReviewRequestState {
    /// Whether any user reviewer is already requested
    pub fn has_user_requests(&self) -> bool {
        !self.users.is_empty()
    }
}

/// Operations the handlers need from the hosting platform
///
/// An implementation is bound to a single repository. Errors returned from
/// any method other than [`check_collaborator`](Self::check_collaborator)
/// are transport failures and propagate out of the handlers untouched.
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch a file from the repository's default branch.
    /// Returns `None` when the file does not exist.
    async fn fetch_file(&self, path: &str) -> Result<Option<String>>;

    /// List outstanding review requests on a pull request
    async fn list_review_requests(&self, pr_number: u64) -> Result<ReviewRequestState>;

    /// Request review from the given users
    async fn create_review_request(&self, pr_number: u64, reviewers: &[String]) -> Result<()>;

    /// Succeeds only if `login` is a collaborator on the repository
    async fn check_collaborator(&self, login: &str) -> Result<()>;

    /// Post a plain comment on an issue or pull request
    async fn post_comment(&self, issue_number: u64, body: &str) -> Result<()>;
}
