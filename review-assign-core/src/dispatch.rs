//! Routing of webhook deliveries to the two handlers

use rand::rngs::StdRng;
use rand::RngCore;
use tracing::info;

use crate::event::{IssueCommentAction, PullRequestAction, WebhookEvent};
use crate::{
    AssignOutcome, AutoAssigner, CommentCommandParser, CommentOutcome, Result, ReviewGateway,
};

/// Result of dispatching one webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handled by the pull request assigner
    Assigned(AssignOutcome),
    /// Handled by the comment command parser
    Comment(CommentOutcome),
    /// Not an event/action pair the bot reacts to
    Ignored(String),
}

/// Routes `pull_request.opened` to [`AutoAssigner`] and
/// `issue_comment.created` to [`CommentCommandParser`]
#[derive(Debug)]
pub struct Dispatcher<R = StdRng> {
    assigner: AutoAssigner<R>,
    parser: CommentCommandParser,
}

impl Dispatcher<StdRng> {
    pub fn new() -> Self {
        Self::with_assigner(AutoAssigner::new())
    }
}

impl Default for Dispatcher<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + Send> Dispatcher<R> {
    pub fn with_assigner(assigner: AutoAssigner<R>) -> Self {
        Self {
            assigner,
            parser: CommentCommandParser::new(),
        }
    }

    /// Run the matching handler for a delivery, if any
    pub async fn dispatch<G>(&self, gateway: &G, event: &WebhookEvent) -> Result<DispatchOutcome>
    where
        G: ReviewGateway + ?Sized,
    {
        match event {
            WebhookEvent::PullRequest(payload) if payload.action == PullRequestAction::Opened => {
                info!(
                    repo = %payload.repository.full_name,
                    pr = payload.pull_request.number,
                    "Processing pull_request.opened"
                );
                let outcome = self.assigner.handle(gateway, &payload.event()).await?;
                Ok(DispatchOutcome::Assigned(outcome))
            }
            WebhookEvent::IssueComment(payload)
                if payload.action == IssueCommentAction::Created =>
            {
                info!(
                    repo = %payload.repository.full_name,
                    issue = payload.issue.number,
                    "Processing issue_comment.created"
                );
                let outcome = self.parser.handle(gateway, &payload.event()).await?;
                Ok(DispatchOutcome::Comment(outcome))
            }
            _ => {
                let what = event.label();
                info!(event = %what, "Ignoring webhook event");
                Ok(DispatchOutcome::Ignored(what))
            }
        }
    }
}
