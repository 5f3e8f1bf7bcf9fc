//! Check-config command - validate a local reviewer configuration file

use std::path::{Path, PathBuf};

use clap::Args;
use review_assign_core::AppConfig;

/// Arguments for the check-config command
#[derive(Args, Debug)]
pub struct CheckConfigArgs {
    /// Path to a review-assign-bot.yml file
    #[arg(default_value = ".github/review-assign-bot.yml")]
    pub path: PathBuf,
}

impl CheckConfigArgs {
    /// Execute the check-config command
    pub fn execute(&self) -> anyhow::Result<()> {
        let config = load(&self.path)?;

        println!("Reviewer pool ({}):", self.path.display());
        if config.reviewers.is_empty() {
            println!("  (empty - pull requests will not be assigned)");
        }
        for reviewer in &config.reviewers {
            println!("  @{}", reviewer);
        }

        Ok(())
    }
}

fn load(path: &Path) -> anyhow::Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(AppConfig::from_yaml(&contents)?)
}
