//! Per-repository reviewer configuration
//!
//! Each repository using the bot carries a YAML file (by default
//! `.github/review-assign-bot.yml`) listing the reviewer pool:
//!
//! ```yaml
//! reviewers:
//!   - alice
//!   - bob
//! ```
//!
//! The file is fetched through the [`ReviewGateway`] on every event and never
//! cached.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result, ReviewGateway};

/// Default location of the reviewer configuration inside a repository
pub const DEFAULT_CONFIG_PATH: &str = ".github/review-assign-bot.yml";

/// Reviewer configuration for a single repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Logins eligible for random assignment, in file order
    #[serde(default)]
    pub reviewers: Vec<String>,
}

impl AppConfig {
    /// Parse a configuration document
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Err(Error::Config("configuration file is empty".to_string()));
        }

        serde_yaml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Reviewers from the pool other than `author`
    pub fn available_reviewers(&self, author: &str) -> Vec<&str> {
        self.reviewers
            .iter()
            .map(String::as_str)
            .filter(|r| *r != author)
            .collect()
    }
}

/// Fetch and parse the reviewer configuration through the gateway
///
/// A missing or malformed file is [`Error::Config`]. Failures of the gateway
/// itself are passed through unchanged.
pub async fn load_app_config<G>(gateway: &G, path: &str) -> Result<AppConfig>
where
    G: ReviewGateway + ?Sized,
{
    debug!(path, "Loading reviewer configuration");

    let contents = gateway
        .fetch_file(path)
        .await?
        .ok_or_else(|| Error::Config(format!("configuration file {} not found", path)))?;

    AppConfig::from_yaml(&contents)
}
