//! Parsing of `r? @user` review requests in comment bodies
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// ASCII word boundary: `確認r? @alice` is still a command.
static REVIEW_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)r\?\s+@([-A-Za-z0-9_]+)").expect("review command regex")
});

/// A review request found in a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCommand {
    /// Requested reviewer login
    pub reviewer: String,
    /// The command text exactly as written, e.g. `r?  @alice`
    pub matched: String,
}

impl fmt::Display for ReviewCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.matched)
    }
}

/// Find the first review command in a comment body
///
/// A command is `r?`, at least one whitespace character, `@`, then a login
/// made of ASCII letters, digits, `-` and `_`. The `r` may not follow an
/// ASCII letter, digit or `_`, so `bar? @alice` is not a command. Only the
/// leftmost command counts.
pub fn find_review_command(body: &str) -> Option<ReviewCommand> {
    let captures = REVIEW_COMMAND.captures(body)?;
    let matched = captures.get(0)?;
    let reviewer = captures.get(1)?;

    Some(ReviewCommand {
        reviewer: reviewer.as_str().to_string(),
        matched: matched.as_str().to_string(),
    })
}
