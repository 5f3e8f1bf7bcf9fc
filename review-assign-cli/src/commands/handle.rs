//! Handle command - run the bot against one webhook delivery

use std::path::PathBuf;

use clap::Args;
use review_assign_core::{
    AssignOutcome, AutoAssigner, CommentOutcome, DispatchOutcome, Dispatcher, Settings,
    WebhookEvent,
};
use review_assign_github::GitHubClient;

/// Arguments for the handle command
#[derive(Args, Debug)]
pub struct HandleArgs {
    /// Webhook event name, as sent in the X-GitHub-Event header
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event: String,

    /// Path to the JSON webhook payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub payload: PathBuf,

    /// Repository to act on (owner/repo); defaults to the payload's repository
    #[arg(long)]
    pub repo: Option<String>,
}

impl HandleArgs {
    /// Execute the handle command
    pub async fn execute(&self, settings: &Settings) -> anyhow::Result<()> {
        let bytes = tokio::fs::read(&self.payload).await.map_err(|e| {
            anyhow::anyhow!("Failed to read payload {}: {}", self.payload.display(), e)
        })?;

        let event = WebhookEvent::parse(&self.event, &bytes)?;

        // No credentials are needed for deliveries the bot does not act on.
        if !event.is_actionable() {
            let what = event.label();
            tracing::info!(event = %what, "Ignoring webhook event");
            println!("{}", describe(&DispatchOutcome::Ignored(what)));
            return Ok(());
        }

        let client = match (&self.repo, event.repository()) {
            (Some(repo), _) => GitHubClient::from_url(repo)?,
            (None, Some(repository)) => GitHubClient::for_repository(repository)?,
            (None, None) => anyhow::bail!("No repository in payload; pass --repo"),
        };

        let assigner =
            AutoAssigner::new().with_config_path(settings.repository.config_path.clone());
        tracing::debug!(
            owner = %client.owner(),
            repo = %client.repo(),
            config_path = %assigner.config_path(),
            "Dispatching webhook event"
        );
        let dispatcher = Dispatcher::with_assigner(assigner);

        let outcome = dispatcher.dispatch(&client, &event).await?;
        println!("{}", describe(&outcome));

        Ok(())
    }
}

/// One-line summary of what the bot did
pub fn describe(outcome: &DispatchOutcome) -> String {
    match outcome {
        DispatchOutcome::Assigned(AssignOutcome::AlreadyRequested) => {
            "Review already requested; nothing to do".to_string()
        }
        DispatchOutcome::Assigned(AssignOutcome::NoEligibleReviewer) => {
            "No eligible reviewer in the configured pool".to_string()
        }
        DispatchOutcome::Assigned(AssignOutcome::Requested(reviewer))
        | DispatchOutcome::Comment(CommentOutcome::Requested(reviewer)) => {
            format!("Requested review from @{}", reviewer)
        }
        DispatchOutcome::Comment(CommentOutcome::IgnoredBot) => {
            "Ignored comment from bot account".to_string()
        }
        DispatchOutcome::Comment(CommentOutcome::NoCommand) => {
            "No review request found in comment".to_string()
        }
        DispatchOutcome::Comment(CommentOutcome::Rejected {
            reviewer,
            rejection,
        }) => format!("Rejected review request for @{}: {}", reviewer, rejection),
        DispatchOutcome::Ignored(what) => format!("Ignored {} event", what),
    }
}
