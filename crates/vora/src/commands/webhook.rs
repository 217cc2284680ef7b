use super::{load_router, read_input, record_decision};
use crate::event::{IgnoreReason, IssueEvent};
use crate::notify::{assignment_comment, assignment_labels};
use anyhow::Context;
use serde_json::{json, Value};
use tracing::info;
use vora_core::{Router, RoutingOptions, RoutingResult};
use vora_telemetry::{Paths, RoutingRecord, RoutingSource};

/// What happened to an incoming event
#[derive(Debug)]
pub enum Outcome {
    Ignored(IgnoreReason),
    Routed(Box<RoutingResult>),
}

/// Route the event's issue when it qualifies, taking overrides from its body
pub fn process(router: &Router, event: &IssueEvent) -> Outcome {
    let issue = match event.routable_issue() {
        Ok(issue) => issue,
        Err(reason) => {
            info!(action = %event.action, reason = reason.message(), "ignoring event");
            return Outcome::Ignored(reason);
        }
    };

    info!(issue = issue.number, title = %issue.title, "processing issue");

    let options = RoutingOptions::from_issue_body(issue.body());
    let result = router.route(&issue.title, issue.body(), &options);

    info!(
        agent = %result.agent.name,
        tier = result.agent.tier,
        entropy = %format!("{:.2}", result.analysis.entropy),
        rank = result.analysis.estimated_rank,
        cost = %format!("${:.4}", result.cost_estimate),
        "routed issue"
    );

    Outcome::Routed(Box::new(result))
}

/// JSON reply for an outcome, including the rendered comment and labels
pub fn response(event: &IssueEvent, outcome: &Outcome) -> Value {
    match outcome {
        Outcome::Ignored(reason) => json!({
            "message": "ignored",
            "reason": reason.message(),
        }),
        Outcome::Routed(result) => json!({
            "success": true,
            "issue": event.issue.number,
            "repository": event.repository_slug(),
            "agent": result.agent.name,
            "agentId": result.agent_id,
            "tier": result.agent.tier,
            "rank": result.analysis.estimated_rank,
            "costEstimate": result.cost_estimate,
            "timeEstimate": result.time_estimate,
            "labels": assignment_labels(result),
            "comment": assignment_comment(result),
        }),
    }
}

pub fn run(file: Option<&str>, record: bool) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let event: IssueEvent = serde_json::from_str(&input).context("invalid issue event")?;

    let paths = Paths::new()?;
    let router = load_router(&paths)?;
    let outcome = process(&router, &event);

    if let (true, Outcome::Routed(result)) = (record, &outcome) {
        let entry = RoutingRecord::from_result(
            RoutingSource::Webhook,
            &event.issue.title,
            Some(event.issue.number),
            result,
        );
        record_decision(&paths, &entry)?;
    }

    println!("{}", serde_json::to_string_pretty(&response(&event, &outcome))?);
    Ok(())
}
