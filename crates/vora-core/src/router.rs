//! Five-stage routing pipeline: entropy, signals, rank, tier, estimates

use crate::config::Config;
use crate::entropy::shannon_entropy;
use crate::error::CoreError;
use crate::estimate::{estimate_cost, estimate_time, estimate_tokens, BASE_MINUTES};
use crate::options::RoutingOptions;
use crate::rank::estimate_rank;
use crate::reasoning::{agent_id, reasoning, FREE_ONLY_REASONING};
use crate::signals::SignalExtractor;
use crate::tiers::TierCatalog;
use crate::types::{AgentTier, ComplexitySignals, RoutingResult};
use std::sync::OnceLock;
use tracing::debug;

static DEFAULT_ROUTER: OnceLock<Router> = OnceLock::new();

/// Route a task with the built-in vocabulary and tier catalog
pub fn route_task(title: &str, body: &str, options: &RoutingOptions) -> RoutingResult {
    DEFAULT_ROUTER
        .get_or_init(|| Router::new(Config::new()).unwrap())
        .route(title, body, options)
}

/// Immutable routing pipeline; safe to share across threads
#[derive(Debug, Clone)]
pub struct Router {
    extractor: SignalExtractor,
    catalog: TierCatalog,
}

impl Router {
    pub fn new(config: Config) -> Result<Self, CoreError> {
        Ok(Self {
            extractor: SignalExtractor::new(&config.vocabulary)?,
            catalog: config.catalog,
        })
    }

    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    /// Compute complexity signals for a task
    pub fn analyze(&self, title: &str, body: &str) -> ComplexitySignals {
        let text = format!("{title} {body}").to_lowercase();

        let entropy = shannon_entropy(&text);
        let technical_count = self.extractor.technical_count(&text);
        let uncertainty_count = self.extractor.uncertainty_count(&text);
        let cross_file_deps = self.extractor.cross_file_deps(&text);
        let band = estimate_rank(entropy, technical_count, uncertainty_count);

        debug!(
            entropy,
            technical_count,
            uncertainty_count,
            cross_file_deps,
            rank = band.rank(),
            band = band.label(),
            "analyzed task"
        );

        ComplexitySignals {
            entropy,
            technical_count,
            uncertainty_count,
            cross_file_deps,
            estimated_rank: band.rank(),
        }
    }

    /// Analyze a task and assign it to a tier.
    ///
    /// Precedence: a free-only cost tolerance wins outright, then a manual
    /// `R<n>` difficulty, then the estimated rank.
    pub fn route(&self, title: &str, body: &str, options: &RoutingOptions) -> RoutingResult {
        let analysis = self.analyze(title, body);

        if options.is_free_only() {
            if let Some(free) = self.catalog.free_tier() {
                debug!(tier = free.tier, agent = %free.name, "free-only constraint applied");
                return RoutingResult {
                    agent: free.clone(),
                    analysis,
                    reasoning: FREE_ONLY_REASONING.to_string(),
                    cost_estimate: 0.0,
                    time_estimate: BASE_MINUTES,
                    agent_id: agent_id(free),
                };
            }
        }

        let manual_rank = options.manual_rank();
        let target_rank = manual_rank.unwrap_or(analysis.estimated_rank);
        let agent: &AgentTier = self.catalog.select(target_rank);

        debug!(
            target_rank,
            manual = manual_rank.is_some(),
            cost_tolerance = ?options.cost_tolerance(),
            tier = agent.tier,
            agent = %agent.name,
            "selected tier"
        );

        let tokens = estimate_tokens(title, body);
        RoutingResult {
            agent: agent.clone(),
            reasoning: reasoning(&analysis),
            analysis,
            cost_estimate: estimate_cost(tokens, agent),
            time_estimate: estimate_time(agent),
            agent_id: agent_id(agent),
        }
    }
}
