#![allow(dead_code)]

use vora_core::{Config, Router, RoutingOptions};

pub fn sample_router() -> Router {
    Router::new(Config::new()).unwrap()
}

pub fn no_options() -> RoutingOptions {
    RoutingOptions::default()
}

pub fn free_only() -> RoutingOptions {
    RoutingOptions {
        difficulty: None,
        cost_tolerance: Some("Free only (Tier 5-6)".to_string()),
    }
}

pub fn manual(difficulty: &str) -> RoutingOptions {
    RoutingOptions {
        difficulty: Some(difficulty.to_string()),
        cost_tolerance: None,
    }
}
