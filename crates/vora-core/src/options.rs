//! Caller-supplied routing overrides and their parsing

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::sync::OnceLock;

static MANUAL_RANK_RE: OnceLock<Regex> = OnceLock::new();
static DIFFICULTY_FIELD_RE: OnceLock<Regex> = OnceLock::new();
static COST_FIELD_RE: OnceLock<Regex> = OnceLock::new();

/// Cost tolerance categories offered by the task template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTolerance {
    FreeOnly,
    CheapPreferred,
    Standard,
    PremiumOk,
    Critical,
}

impl CostTolerance {
    /// The only label that changes routing
    pub const FREE_ONLY_LABEL: &'static str = "Free only (Tier 5-6)";

    pub const ALL: [CostTolerance; 5] = [
        CostTolerance::FreeOnly,
        CostTolerance::CheapPreferred,
        CostTolerance::Standard,
        CostTolerance::PremiumOk,
        CostTolerance::Critical,
    ];

    /// Leading phrase identifying the category in free text
    pub fn phrase(self) -> &'static str {
        match self {
            CostTolerance::FreeOnly => "Free only",
            CostTolerance::CheapPreferred => "Cheap preferred",
            CostTolerance::Standard => "Standard",
            CostTolerance::PremiumOk => "Premium OK",
            CostTolerance::Critical => "Critical",
        }
    }

    /// Category of a label by its leading phrase (case-insensitive)
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| label.starts_with(&c.phrase().to_lowercase()))
    }
}

/// Optional manual overrides for a routing call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingOptions {
    /// Manual rank such as `R7`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Cost tolerance label such as `Free only (Tier 5-6)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_tolerance: Option<String>,
}

impl RoutingOptions {
    /// Rank parsed from `difficulty`; absent, malformed or zero yields `None`.
    /// Values too large for `u32` saturate.
    pub fn manual_rank(&self) -> Option<u32> {
        let difficulty = self.difficulty.as_deref()?;
        let re = MANUAL_RANK_RE.get_or_init(|| Regex::new(r"R(\d+)").unwrap());
        let digits = re.captures(difficulty)?.get(1)?.as_str();
        let rank = match digits.parse::<u32>() {
            Ok(rank) => rank,
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => u32::MAX,
            Err(_) => return None,
        };
        (rank > 0).then_some(rank)
    }

    /// Whether the free-only constraint applies (exact label match)
    pub fn is_free_only(&self) -> bool {
        self.cost_tolerance.as_deref() == Some(CostTolerance::FREE_ONLY_LABEL)
    }

    /// Recognized cost tolerance category, if any
    pub fn cost_tolerance(&self) -> Option<CostTolerance> {
        self.cost_tolerance.as_deref().and_then(CostTolerance::parse)
    }

    /// Extract overrides from the free-text metadata of a task body.
    ///
    /// Recognizes `Difficulty ... R<n>` and `Cost Tolerance ...: <category>`,
    /// each within a single line. Only the category phrase itself is kept, so
    /// body metadata never carries the full free-only label.
    pub fn from_issue_body(body: &str) -> Self {
        let difficulty_re = DIFFICULTY_FIELD_RE
            .get_or_init(|| Regex::new(r"(?i)Difficulty.*?(R\d+)").unwrap());
        let cost_re = COST_FIELD_RE.get_or_init(|| {
            let phrases = CostTolerance::ALL
                .iter()
                .map(|c| regex::escape(c.phrase()))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?i)Cost Tolerance.*?:.*?({phrases})")).unwrap()
        });

        let capture = |re: &Regex| {
            re.captures(body)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
        };

        Self {
            difficulty: capture(difficulty_re),
            cost_tolerance: capture(cost_re),
        }
    }
}
