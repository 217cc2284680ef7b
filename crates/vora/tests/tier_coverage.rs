mod common;

use common::{free_only, manual, sample_router};
use vora_core::{RankBand, TierCatalog};

#[test]
fn test_every_manual_rank_selects_qualifying_tier() {
    let router = sample_router();
    let catalog = TierCatalog::standard();

    for rank in 1..=9u32 {
        let result = router.route("x", "", &manual(&format!("R{rank}")));
        assert!(result.agent.min_rank <= rank, "rank {}", rank);
        // No better tier would also have qualified
        let better = catalog
            .tiers()
            .iter()
            .take_while(|t| t.name != result.agent.name)
            .any(|t| rank >= t.min_rank);
        assert!(!better, "rank {} skipped a qualifying tier", rank);
    }
}

#[test]
fn test_manual_r7_selects_manager_regardless_of_text() {
    let router = sample_router();
    for (title, body) in [
        ("x", ""),
        ("Implement login", "oauth pkce jwt webhook api authentication"),
    ] {
        let result = router.route(title, body, &manual("R7"));
        assert_eq!(result.agent.tier, 2);
        assert_eq!(result.agent.name, "Manager");
    }
}

#[test]
fn test_free_only_precedes_every_rank() {
    let router = sample_router();
    for rank in 1..=9u32 {
        let mut options = free_only();
        options.difficulty = Some(format!("R{rank}"));
        let result = router.route("x", "", &options);
        assert_eq!(result.agent.tier, 5);
        assert_eq!(result.cost_estimate, 0.0);
        assert_eq!(result.time_estimate, 10.0);
    }
}

#[test]
fn test_estimated_ranks_are_canonical() {
    let router = sample_router();
    let texts = [
        ("x", ""),
        ("Fix bug", "why does this fail"),
        ("Fix typo in README", "There is a typo in line 42 of README.md"),
        ("Implement login", "oauth pkce jwt webhook api authentication"),
    ];
    for (title, body) in texts {
        let rank = router.analyze(title, body).estimated_rank;
        assert!([2, 3, 5, 7, 9].contains(&rank), "Got {}", rank);
        assert_eq!(RankBand::from_rank(rank).rank(), rank);
    }
}
