use super::{load_router, read_input, record_decision};
use crate::event::RouteRequest;
use vora_core::RoutingOptions;
use vora_telemetry::{Paths, RoutingRecord, RoutingSource};

/// Route inputs as given on the command line
pub struct RouteArgs {
    pub title: Option<String>,
    pub body: String,
    pub difficulty: Option<String>,
    pub cost_tolerance: Option<String>,
    /// JSON request source; replaces the other fields when set
    pub request: Option<String>,
}

impl RouteArgs {
    fn into_request(self) -> anyhow::Result<RouteRequest> {
        if let Some(source) = self.request.as_deref() {
            let input = read_input(Some(source))?;
            return Ok(serde_json::from_str(&input)?);
        }

        Ok(RouteRequest {
            title: self.title,
            body: Some(self.body),
            options: Some(RoutingOptions {
                difficulty: self.difficulty,
                cost_tolerance: self.cost_tolerance,
            }),
        })
    }
}

pub fn run(args: RouteArgs, record: bool) -> anyhow::Result<()> {
    let request = args.into_request()?;
    let paths = Paths::new()?;
    let router = load_router(&paths)?;
    let result = request.route(&router)?;

    tracing::info!(
        agent = %result.agent.name,
        tier = result.agent.tier,
        rank = result.analysis.estimated_rank,
        "routed task"
    );

    if record {
        let title = request.title.as_deref().unwrap_or_default();
        let entry = RoutingRecord::from_result(RoutingSource::Cli, title, None, &result);
        record_decision(&paths, &entry)?;
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
