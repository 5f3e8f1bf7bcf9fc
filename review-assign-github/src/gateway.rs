//! [`ReviewGateway`] over the GitHub REST API

use async_trait::async_trait;
use review_assign_core::{ReviewGateway, ReviewRequestState};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, GitHubClient, Result};

#[derive(Debug, Deserialize)]
struct Login {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Team {
    slug: String,
}

/// Body of `GET /repos/{owner}/{repo}/pulls/{n}/requested_reviewers`
#[derive(Debug, Default, Deserialize)]
struct RequestedReviewers {
    #[serde(default)]
    users: Vec<Login>,
    #[serde(default)]
    teams: Vec<Team>,
}

impl From<RequestedReviewers> for ReviewRequestState {
    fn from(r: RequestedReviewers) -> Self {
        ReviewRequestState {
            users: r.users.into_iter().map(|u| u.login).collect(),
            teams: r.teams.into_iter().map(|t| t.slug).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReviewRequestBody<'a> {
    reviewers: &'a [String],
}

fn is_not_found(e: &octocrab::Error) -> bool {
    matches!(e, octocrab::Error::GitHub { source, .. } if source.message.contains("Not Found"))
}

impl GitHubClient {
    /// Decoded contents of a file on the default branch, `None` if absent
    pub async fn get_file_contents(&self, path: &str) -> Result<Option<String>> {
        debug!(path, "Fetching repository file");

        let items = match self
            .client()
            .repos(self.owner(), self.repo())
            .get_content()
            .path(path)
            .send()
            .await
        {
            Ok(items) => items,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(Error::Api(e)),
        };

        // A directory listing has several entries and no inline content
        match items.items.into_iter().next() {
            Some(item) => Ok(item.decoded_content()),
            None => Ok(None),
        }
    }

    /// Users and teams currently asked to review a pull request
    pub async fn get_requested_reviewers(&self, pr_number: u64) -> Result<ReviewRequestState> {
        let route = self.route(&format!("pulls/{}/requested_reviewers", pr_number));
        let reviewers: RequestedReviewers = self
            .client()
            .get(route, None::<&()>)
            .await
            .map_err(Error::Api)?;

        Ok(reviewers.into())
    }

    /// Ask users to review a pull request
    pub async fn request_reviewers(&self, pr_number: u64, reviewers: &[String]) -> Result<()> {
        let route = self.route(&format!("pulls/{}/requested_reviewers", pr_number));
        let _: serde_json::Value = self
            .client()
            .post(route, Some(&ReviewRequestBody { reviewers }))
            .await
            .map_err(Error::Api)?;

        Ok(())
    }

    /// Succeeds when `login` is a collaborator on the repository
    ///
    /// GitHub answers 204 for collaborators and 404 otherwise.
    pub async fn ensure_collaborator(&self, login: &str) -> Result<()> {
        let route = self.route(&format!("collaborators/{}", login));
        let response = self.client()._get(route).await.map_err(Error::Api)?;

        match response.status().as_u16() {
            204 => Ok(()),
            404 => Err(Error::NotCollaborator(login.to_string())),
            status => Err(Error::Other(format!(
                "Unexpected status {} checking collaborator {}",
                status, login
            ))),
        }
    }

    /// Post a comment on an issue or pull request
    pub async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        self.client()
            .issues(self.owner(), self.repo())
            .create_comment(issue_number, body)
            .await
            .map_err(Error::Api)?;

        Ok(())
    }
}

#[async_trait]
impl ReviewGateway for GitHubClient {
    async fn fetch_file(&self, path: &str) -> review_assign_core::Result<Option<String>> {
        Ok(self.get_file_contents(path).await?)
    }

    async fn list_review_requests(
        &self,
        pr_number: u64,
    ) -> review_assign_core::Result<ReviewRequestState> {
        Ok(self.get_requested_reviewers(pr_number).await?)
    }

    async fn create_review_request(
        &self,
        pr_number: u64,
        reviewers: &[String],
    ) -> review_assign_core::Result<()> {
        Ok(self.request_reviewers(pr_number, reviewers).await?)
    }

    async fn check_collaborator(&self, login: &str) -> review_assign_core::Result<()> {
        Ok(self.ensure_collaborator(login).await?)
    }

    async fn post_comment(&self, issue_number: u64, body: &str) -> review_assign_core::Result<()> {
        Ok(self.create_comment(issue_number, body).await?)
    }
}
