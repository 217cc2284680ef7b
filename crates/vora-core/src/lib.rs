//! Complexity analysis and agent-tier routing for incoming tasks

mod config;
mod entropy;
mod error;
mod estimate;
mod options;
mod rank;
mod reasoning;
mod router;
mod signals;
mod tiers;
mod types;

pub use config::{Config, Vocabulary};
pub use entropy::shannon_entropy;
pub use error::CoreError;
pub use estimate::{estimate_cost, estimate_time, estimate_tokens};
pub use options::{CostTolerance, RoutingOptions};
pub use rank::{estimate_rank, RankBand};
pub use reasoning::{agent_id, reasoning, FREE_ONLY_REASONING};
pub use router::{route_task, Router};
pub use signals::SignalExtractor;
pub use tiers::TierCatalog;
pub use types::{AgentTier, ComplexitySignals, RoutingResult};
