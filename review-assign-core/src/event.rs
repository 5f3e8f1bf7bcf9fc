//! Events handled by the bot and the webhook payloads they come from
//!
//! Only the fields the handlers read are modelled; everything else in the
//! GitHub payload is ignored.

use serde::Deserialize;

use crate::Result;

/// A pull request that was just opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    pub number: u64,
    /// Login of the pull request author
    pub author: String,
}

/// A comment that was just posted on an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEvent {
    pub issue_number: u64,
    /// Login of the issue or pull request author
    pub issue_author: String,
    pub comment_author: String,
    /// Whether the comment author is an automated account
    pub comment_author_is_bot: bool,
    pub body: String,
}

/// Account type GitHub reports for apps and integrations
const BOT_USER_TYPE: &str = "Bot";

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(rename = "type", default)]
    pub user_type: Option<String>,
}

impl User {
    pub fn is_bot(&self) -> bool {
        self.user_type.as_deref() == Some(BOT_USER_TYPE)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    Opened,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub user: User,
}

/// Payload of a `pull_request` webhook
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub action: PullRequestAction,
    pub pull_request: PullRequest,
    pub repository: Repository,
}

impl PullRequestPayload {
    pub fn event(&self) -> PullRequestEvent {
        PullRequestEvent {
            number: self.pull_request.number,
            author: self.pull_request.user.login.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCommentAction {
    Created,
    Edited,
    Deleted,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub user: User,
    #[serde(default)]
    pub body: Option<String>,
}

/// Payload of an `issue_comment` webhook
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentPayload {
    pub action: IssueCommentAction,
    pub issue: Issue,
    pub comment: Comment,
    pub repository: Repository,
}

impl IssueCommentPayload {
    pub fn event(&self) -> CommentEvent {
        CommentEvent {
            issue_number: self.issue.number,
            issue_author: self.issue.user.login.clone(),
            comment_author: self.comment.user.login.clone(),
            comment_author_is_bot: self.comment.user.is_bot(),
            body: self.comment.body.clone().unwrap_or_default(),
        }
    }
}

/// A decoded webhook delivery
#[derive(Debug, Clone)]
pub enum WebhookEvent {
    PullRequest(PullRequestPayload),
    IssueComment(IssueCommentPayload),
    /// Any event type the bot does not subscribe to
    Unsupported(String),
}

impl WebhookEvent {
    /// Decode a payload given the `X-GitHub-Event` name it was delivered with
    pub fn parse(event_name: &str, payload: &[u8]) -> Result<Self> {
        Ok(match event_name {
            "pull_request" => WebhookEvent::PullRequest(serde_json::from_slice(payload)?),
            "issue_comment" => WebhookEvent::IssueComment(serde_json::from_slice(payload)?),
            other => WebhookEvent::Unsupported(other.to_string()),
        })
    }

    /// Repository the event belongs to
    pub fn repository(&self) -> Option<&Repository> {
        match self {
            WebhookEvent::PullRequest(p) => Some(&p.repository),
            WebhookEvent::IssueComment(p) => Some(&p.repository),
            WebhookEvent::Unsupported(_) => None,
        }
    }

    /// Whether this is `pull_request.opened` or `issue_comment.created`
    pub fn is_actionable(&self) -> bool {
        match self {
            WebhookEvent::PullRequest(p) => p.action == PullRequestAction::Opened,
            WebhookEvent::IssueComment(p) => p.action == IssueCommentAction::Created,
            WebhookEvent::Unsupported(_) => false,
        }
    }

    /// Event and action, e.g. `pull_request.Other`
    pub fn label(&self) -> String {
        match self {
            WebhookEvent::PullRequest(p) => format!("pull_request.{:?}", p.action),
            WebhookEvent::IssueComment(p) => format!("issue_comment.{:?}", p.action),
            WebhookEvent::Unsupported(name) => name.clone(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_parse_pull_request_opened() {
        let event = WebhookEvent::parse("pull_request", PULL_REQUEST_OPENED.as_bytes()).unwrap();
        let WebhookEvent::PullRequest(payload) = event else {
            panic!("expected pull request payload");
        };

        assert_eq!(payload.action, PullRequestAction::Opened);
        assert_eq!(
            payload.event(),
            PullRequestEvent {
                number: 42,
                author: "bob".to_string(),
            }
        );
        assert_eq!(payload.repository.full_name, "acme/widgets");
        assert_eq!(payload.repository.owner.login, "acme");
    }

    #[test]
    fn test_unknown_pull_request_action() {
        let json = PULL_REQUEST_OPENED.replace("\"opened\"", "\"ready_for_review\"");
        let event = WebhookEvent::parse("pull_request", json.as_bytes()).unwrap();
        let WebhookEvent::PullRequest(payload) = event else {
            panic!("expected pull request payload");
        };
        assert_eq!(payload.action, PullRequestAction::Other);
    }

    #[test]
    fn test_parse_issue_comment() {
        let event =
            WebhookEvent::parse("issue_comment", ISSUE_COMMENT_CREATED.as_bytes()).unwrap();
        let WebhookEvent::IssueComment(payload) = event else {
            panic!("expected issue comment payload");
        };

        assert_eq!(payload.action, IssueCommentAction::Created);
        let event = payload.event();
        assert_eq!(event.issue_number, 42);
        assert_eq!(event.issue_author, "bob");
        assert_eq!(event.comment_author, "bob");
        assert!(!event.comment_author_is_bot);
        assert_eq!(event.body, "Ready for a look. r? @alice");
    }

    #[test]
    fn test_bot_comment_author() {
        let mut value: serde_json::Value = serde_json::from_str(ISSUE_COMMENT_CREATED).unwrap();
        value["comment"]["user"] = serde_json::json!({
            "login": "renovate[bot]",
            "id": 3,
            "type": "Bot"
        });
        let json = serde_json::to_vec(&value).unwrap();

        let WebhookEvent::IssueComment(payload) =
            WebhookEvent::parse("issue_comment", &json).unwrap()
        else {
            panic!("expected issue comment payload");
        };

        assert!(payload.event().comment_author_is_bot);
        assert_eq!(payload.event().comment_author, "renovate[bot]");
    }

    #[test]
    fn test_unsupported_event() {
        let event = WebhookEvent::parse("ping", b"not even json").unwrap();
        assert!(matches!(event, WebhookEvent::Unsupported(ref name) if name == "ping"));
        assert!(event.repository().is_none());
    }

    #[test]
    fn test_actionable_events() {
        let event = WebhookEvent::parse("pull_request", PULL_REQUEST_OPENED.as_bytes()).unwrap();
        assert!(event.is_actionable());
        assert_eq!(event.label(), "pull_request.Opened");

        let closed = PULL_REQUEST_OPENED.replace("\"opened\"", "\"closed\"");
        let event = WebhookEvent::parse("pull_request", closed.as_bytes()).unwrap();
        assert!(!event.is_actionable());
        assert_eq!(event.label(), "pull_request.Other");

        let deleted = ISSUE_COMMENT_CREATED.replace("\"created\"", "\"deleted\"");
        let event = WebhookEvent::parse("issue_comment", deleted.as_bytes()).unwrap();
        assert!(!event.is_actionable());
        assert_eq!(event.label(), "issue_comment.Deleted");

        let event = WebhookEvent::parse("ping", b"{}").unwrap();
        assert!(!event.is_actionable());
        assert_eq!(event.label(), "ping");
    }

    #[test]
    fn test_malformed_payload() {
        let result = WebhookEvent::parse("pull_request", b"{\"action\": \"opened\"}");
        assert!(matches!(result, Err(crate::Error::Json(_))));
    }
}
