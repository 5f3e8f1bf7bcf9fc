//! Handling of `r? @user` commands posted as comments

use std::fmt;

use tracing::{debug, info, warn};

use crate::command::{find_review_command, ReviewCommand};
use crate::{CommentEvent, Result, ReviewGateway};

/// Why a requested reviewer was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The reviewer is the author of the issue or pull request
    SelfRequest,
    /// The collaborator check did not succeed
    NotCollaborator,
}

impl Rejection {
    /// Sentence explaining the rejection to the commenter
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::SelfRequest => "Reviewer cannot be the pull request author.",
            Rejection::NotCollaborator => "Reviewer is not a collaborator.",
        }
    }

    /// Comment body quoting the command followed by the reason
    pub fn render(&self, command: &ReviewCommand) -> String {
        format!("> {}\n\n{}", command.matched, self.reason())
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// What the parser did for one comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentOutcome {
    /// The comment came from a bot account
    IgnoredBot,
    /// The comment contained no review command
    NoCommand,
    /// A rejection comment was posted
    Rejected {
        reviewer: String,
        rejection: Rejection,
    },
    /// Review was requested from this login
    Requested(String),
}

/// Turns review commands found in comments into review requests
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentCommandParser;

impl CommentCommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Handle a newly created comment
    ///
    /// Produces at most one side effect: a rejection comment or a review
    /// request. Only transport failures of the gateway are returned as errors.
    pub async fn handle<G>(&self, gateway: &G, event: &CommentEvent) -> Result<CommentOutcome>
    where
        G: ReviewGateway + ?Sized,
    {
        if event.comment_author_is_bot {
            debug!(author = %event.comment_author, "Ignoring bot comment");
            return Ok(CommentOutcome::IgnoredBot);
        }

        let Some(command) = find_review_command(&event.body) else {
            debug!(issue = event.issue_number, "No review request found");
            return Ok(CommentOutcome::NoCommand);
        };

        info!(
            issue = event.issue_number,
            reviewer = %command.reviewer,
            requested_by = %event.comment_author,
            "Review request"
        );

        if command.reviewer == event.issue_author {
            return self
                .reject(gateway, event, command, Rejection::SelfRequest)
                .await;
        }

        // Any failure here, including transport errors, counts as "not a
        // collaborator".
        if let Err(e) = gateway.check_collaborator(&command.reviewer).await {
            warn!(
                reviewer = %command.reviewer,
                error = %e,
                "Collaborator check failed"
            );
            return self
                .reject(gateway, event, command, Rejection::NotCollaborator)
                .await;
        }

        gateway
            .create_review_request(event.issue_number, std::slice::from_ref(&command.reviewer))
            .await?;

        info!(issue = event.issue_number, reviewer = %command.reviewer, "Requested review");
        Ok(CommentOutcome::Requested(command.reviewer))
    }

    async fn reject<G>(
        &self,
        gateway: &G,
        event: &CommentEvent,
        command: ReviewCommand,
        rejection: Rejection,
    ) -> Result<CommentOutcome>
    where
        G: ReviewGateway + ?Sized,
    {
        info!(
            issue = event.issue_number,
            reviewer = %command.reviewer,
            reason = %rejection,
            "Rejecting review request"
        );

        gateway
            .post_comment(event.issue_number, &rejection.render(&command))
            .await?;

        Ok(CommentOutcome::Rejected {
            reviewer: command.reviewer,
            rejection,
        })
    }
}
