//! In-memory gateway for handler tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{Error, Result, ReviewGateway, ReviewRequestState};

/// A call made through [`RecordingGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ListReviewRequests(u64),
    CreateReviewRequest { pr_number: u64, reviewers: Vec<String> },
    CheckCollaborator(String),
    PostComment { issue_number: u64, body: String },
}

/// Gateway backed by fixed data that records every call
#[derive(Debug, Default)]
pub struct RecordingGateway {
    files: HashMap<String, String>,
    requested: ReviewRequestState,
    collaborators: HashSet<String>,
    fail_fetch: bool,
    fail_mutations: bool,
    calls: Mutex<Vec<GatewayCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn with_requested_user(mut self, login: &str) -> Self {
        self.requested.users.insert(login.to_string());
        self
    }

    pub fn with_requested_team(mut self, slug: &str) -> Self {
        self.requested.teams.insert(slug.to_string());
        self
    }

    pub fn with_collaborator(mut self, login: &str) -> Self {
        self.collaborators.insert(login.to_string());
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Reviewer lists of every review request created
    pub fn review_requests(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GatewayCall::CreateReviewRequest { reviewers, .. } => Some(reviewers),
                _ => None,
            })
            .collect()
    }

    /// Bodies of every comment posted
    pub fn comments(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GatewayCall::PostComment { body, .. } => Some(body),
                _ => None,
            })
            .collect()
    }

    /// Number of calls that would change state on the platform
    pub fn mutation_count(&self) -> usize {
        self.review_requests().len() + self.comments().len()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ReviewGateway for RecordingGateway {
    async fn fetch_file(&self, path: &str) -> Result<Option<String>> {
        if self.fail_fetch {
            return Err(Error::Gateway("connection reset".to_string()));
        }
        Ok(self.files.get(path).cloned())
    }

    async fn list_review_requests(&self, pr_number: u64) -> Result<ReviewRequestState> {
        self.record(GatewayCall::ListReviewRequests(pr_number));
        Ok(self.requested.clone())
    }

    async fn create_review_request(&self, pr_number: u64, reviewers: &[String]) -> Result<()> {
        if self.fail_mutations {
            return Err(Error::Gateway("502 Bad Gateway".to_string()));
        }
        self.record(GatewayCall::CreateReviewRequest {
            pr_number,
            reviewers: reviewers.to_vec(),
        });
        Ok(())
    }

    async fn check_collaborator(&self, login: &str) -> Result<()> {
        self.record(GatewayCall::CheckCollaborator(login.to_string()));
        if self.collaborators.contains(login) {
            Ok(())
        } else {
            Err(Error::Gateway(format!("{} is not a collaborator", login)))
        }
    }

    async fn post_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        if self.fail_mutations {
            return Err(Error::Gateway("502 Bad Gateway".to_string()));
        }
        self.record(GatewayCall::PostComment {
            issue_number,
            body: body.to_string(),
        });
        Ok(())
    }
}
