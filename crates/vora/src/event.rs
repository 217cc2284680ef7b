//! Inbound payloads: issue events and manual routing requests

use anyhow::anyhow;
use serde::Deserialize;
use tracing::warn;
use vora_core::{Router, RoutingOptions, RoutingResult};

/// Label an issue must carry to be routed
pub const AGENT_TASK_LABEL: &str = "agent-task";

#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    pub action: String,
    pub issue: Issue,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Why an event was not routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotOpened,
    MissingLabel,
}

impl IgnoreReason {
    pub fn message(self) -> &'static str {
        match self {
            IgnoreReason::NotOpened => "not a new issue",
            IgnoreReason::MissingLabel => "no agent-task label",
        }
    }
}

impl Issue {
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}

impl IssueEvent {
    /// The issue to route: only newly opened issues labelled `agent-task`
    pub fn routable_issue(&self) -> Result<&Issue, IgnoreReason> {
        if self.action != "opened" {
            return Err(IgnoreReason::NotOpened);
        }
        if !self.issue.has_label(AGENT_TASK_LABEL) {
            return Err(IgnoreReason::MissingLabel);
        }
        Ok(&self.issue)
    }

    /// `owner/name` of the repository, when present
    pub fn repository_slug(&self) -> Option<String> {
        self.repository
            .as_ref()
            .map(|r| format!("{}/{}", r.owner.login, r.name))
    }
}

/// Manual routing request `{ title, body?, options? }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub options: Option<RoutingOptions>,
}

impl RouteRequest {
    pub fn route(&self, router: &Router) -> anyhow::Result<RoutingResult> {
        let title = self
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("title is required"))?;
        let default_options = RoutingOptions::default();
        let options = self.options.as_ref().unwrap_or(&default_options);

        if let Some(label) = options.cost_tolerance.as_deref() {
            if options.cost_tolerance().is_none() {
                warn!(cost_tolerance = label, "unrecognized cost tolerance, ignoring");
            }
        }

        Ok(router.route(title, self.body.as_deref().unwrap_or(""), options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vora_core::Config;

    fn event(action: &str, labels: &[&str]) -> IssueEvent {
        let labels: Vec<_> = labels
            .iter()
            .map(|name| serde_json::json!({ "name": name }))
            .collect();
        serde_json::from_value(serde_json::json!({
            "action": action,
            "issue": {
                "number": 7,
                "title": "Fix typo in README",
                "body": null,
                "labels": labels,
            },
            "repository": { "name": "router", "owner": { "login": "acme" } },
        }))
        .unwrap()
    }

    #[test]
    fn test_opened_with_label_is_routable() {
        let event = event("opened", &["bug", "agent-task"]);
        let issue = event.routable_issue().unwrap();
        assert_eq!(issue.number, 7);
        assert_eq!(issue.body(), "");
        assert_eq!(event.repository_slug().as_deref(), Some("acme/router"));
    }

    #[test]
    fn test_non_opened_is_ignored() {
        let event = event("edited", &["agent-task"]);
        assert_eq!(event.routable_issue().unwrap_err(), IgnoreReason::NotOpened);
        assert_eq!(IgnoreReason::NotOpened.message(), "not a new issue");
    }

    #[test]
    fn test_missing_label_is_ignored() {
        let event = event("opened", &["bug"]);
        assert_eq!(
            event.routable_issue().unwrap_err(),
            IgnoreReason::MissingLabel
        );
    }

    #[test]
    fn test_minimal_event_parses() {
        let event: IssueEvent = serde_json::from_str(
            r#"{"action":"opened","issue":{"number":1,"title":"t"}}"#,
        )
        .unwrap();
        assert!(event.issue.labels.is_empty());
        assert!(event.repository_slug().is_none());
    }

    #[test]
    fn test_route_request_requires_title() {
        let router = Router::new(Config::new()).unwrap();

        let missing: RouteRequest = serde_json::from_str(r#"{"body":"text"}"#).unwrap();
        let err = missing.route(&router).unwrap_err();
        assert_eq!(err.to_string(), "title is required");

        let empty: RouteRequest = serde_json::from_str(r#"{"title":""}"#).unwrap();
        assert!(empty.route(&router).is_err());
    }

    #[test]
    fn test_route_request_with_options() {
        let router = Router::new(Config::new()).unwrap();
        let request: RouteRequest = serde_json::from_str(
            r#"{"title":"x","options":{"difficulty":"R7"}}"#,
        )
        .unwrap();
        let result = request.route(&router).unwrap();
        assert_eq!(result.agent.name, "Manager");
    }

    #[test]
    fn test_unrecognized_cost_tolerance_is_ignored() {
        let router = Router::new(Config::new()).unwrap();
        let request: RouteRequest = serde_json::from_str(
            r#"{"title":"x","options":{"costTolerance":"whatever","difficulty":"R7"}}"#,
        )
        .unwrap();
        let result = request.route(&router).unwrap();
        assert_eq!(result.agent.name, "Manager");
    }
}
