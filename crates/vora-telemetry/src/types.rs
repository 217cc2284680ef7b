//! Routing history record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vora_core::RoutingResult;

/// Entry point a routing decision came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingSource {
    Cli,
    Webhook,
}

/// One recorded routing decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingRecord {
    pub timestamp: DateTime<Utc>,
    pub source: RoutingSource,
    pub title: String,
    #[serde(default)]
    pub issue: Option<u64>,
    pub tier: u8,
    pub agent: String,
    pub agent_id: String,
    pub estimated_rank: u32,
    pub entropy: f64,
    pub cost_estimate: f64,
    pub time_estimate: f64,
}

impl RoutingRecord {
    pub fn from_result(
        source: RoutingSource,
        title: &str,
        issue: Option<u64>,
        result: &RoutingResult,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            source,
            title: title.to_string(),
            issue,
            tier: result.agent.tier,
            agent: result.agent.name.clone(),
            agent_id: result.agent_id.clone(),
            estimated_rank: result.analysis.estimated_rank,
            entropy: result.analysis.entropy,
            cost_estimate: result.cost_estimate,
            time_estimate: result.time_estimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vora_core::{route_task, RoutingOptions};

    #[test]
    fn test_record_from_result() {
        let result = route_task("x", "", &RoutingOptions::default());
        let record = RoutingRecord::from_result(RoutingSource::Webhook, "x", Some(42), &result);

        assert_eq!(record.tier, 6);
        assert_eq!(record.agent, "Script");
        assert_eq!(record.estimated_rank, 2);
        assert_eq!(record.issue, Some(42));
        assert_eq!(record.time_estimate, 50.0);
    }

    #[test]
    fn test_record_json_shape() {
        let result = route_task("x", "", &RoutingOptions::default());
        let record = RoutingRecord::from_result(RoutingSource::Cli, "x", None, &result);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source"], "cli");
        assert_eq!(json["agent_id"], "a-s-worker_v1.0-bash_20251105-r2");
    }

    #[test]
    fn test_record_without_issue_parses() {
        let json = r#"{"timestamp":"2025-11-05T00:00:00Z","source":"cli","title":"t","tier":3,"agent":"Worker","agent_id":"a-w-worker_v1.0-deepseek_20251105-r6","estimated_rank":5,"entropy":3.2,"cost_estimate":0.0,"time_estimate":20.0}"#;
        let parsed: RoutingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.issue, None);
        assert_eq!(parsed.source, RoutingSource::Cli);
    }
}
