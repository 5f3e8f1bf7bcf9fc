//! review-assign core - reviewer assignment logic for pull requests
//!
//! Two stateless handlers react to repository events: [`AutoAssigner`]
//! requests review from a random member of the configured pool when a pull
//! request opens, and [`CommentCommandParser`] acts on `r? @user` commands in
//! comments. Both talk to the hosting platform only through [`ReviewGateway`].

pub mod app_config;
pub mod assign;
pub mod command;
pub mod comment;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod gateway;
pub mod secrets;

#[cfg(test)]
mod testing;

pub use app_config::{load_app_config, AppConfig, DEFAULT_CONFIG_PATH};
pub use assign::{AssignOutcome, AutoAssigner};
pub use command::{find_review_command, ReviewCommand};
pub use comment::{CommentCommandParser, CommentOutcome, Rejection};
pub use config::Settings;
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use error::{Error, Result};
pub use event::{CommentEvent, PullRequestEvent, Repository, WebhookEvent};
pub use gateway::{ReviewGateway, ReviewRequestState};
pub use secrets::Secrets;
