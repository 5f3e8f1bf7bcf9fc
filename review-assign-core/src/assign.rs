//! Random reviewer assignment for newly opened pull requests

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::app_config::{load_app_config, DEFAULT_CONFIG_PATH};
use crate::{PullRequestEvent, Result, ReviewGateway};

/// What the assigner did for one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// A reviewer was already requested; nothing was changed
    AlreadyRequested,
    /// The pool held nobody but the author
    NoEligibleReviewer,
    /// Review was requested from this login
    Requested(String),
}

/// Picks a reviewer from the repository's pool when a pull request opens
///
/// The random source is held behind a mutex so a single assigner can serve
/// concurrent events; it is only locked for the pick itself.
#[derive(Debug)]
pub struct AutoAssigner<R = StdRng> {
    config_path: String,
    rng: Mutex<R>,
}

impl AutoAssigner<StdRng> {
    /// Create an assigner seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for AutoAssigner<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + Send> AutoAssigner<R> {
    /// Create an assigner drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            rng: Mutex::new(rng),
        }
    }

    /// Read the reviewer pool from a different repository path
    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Repository path the reviewer pool is read from
    pub fn config_path(&self) -> &str {
        &self.config_path
    }

    /// Handle a pull-request-opened event
    ///
    /// Fails only when the configuration cannot be loaded or the gateway
    /// itself fails. Makes at most one review request.
    pub async fn handle<G>(&self, gateway: &G, event: &PullRequestEvent) -> Result<AssignOutcome>
    where
        G: ReviewGateway + ?Sized,
    {
        let config = load_app_config(gateway, &self.config_path).await?;

        let existing = gateway.list_review_requests(event.number).await?;
        if existing.has_user_requests() {
            info!(
                pr = event.number,
                existing = ?existing.users,
                "Skipping review assignment due to existing review request"
            );
            return Ok(AssignOutcome::AlreadyRequested);
        }

        let available = config.available_reviewers(&event.author);
        let Some(reviewer) = self.pick(&available) else {
            info!(
                pr = event.number,
                author = %event.author,
                "No eligible reviewer in pool"
            );
            return Ok(AssignOutcome::NoEligibleReviewer);
        };

        debug!(
            pr = event.number,
            candidates = available.len(),
            reviewer = %reviewer,
            "Selected reviewer"
        );

        gateway
            .create_review_request(event.number, std::slice::from_ref(&reviewer))
            .await?;

        info!(pr = event.number, reviewer = %reviewer, "Requested review");
        Ok(AssignOutcome::Requested(reviewer))
    }

    fn pick(&self, available: &[&str]) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        available.choose(&mut *rng).map(|r| r.to_string())
    }
}
