//! review-assign GitHub - GitHub integration for review-assign
//!
//! This crate implements [`review_assign_core::ReviewGateway`] on top of the
//! GitHub REST API.

mod client;
mod error;
mod gateway;

pub use client::{parse_github_url, GitHubClient};
pub use error::{Error, Result};
