//! Discrete complexity ranks

/// Complexity band a rank falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankBand {
    /// R2: basic execution
    Trivial,
    /// R3: clear requirements
    Simple,
    /// R5: moderate complexity
    Standard,
    /// R7: architectural implications
    Complex,
    /// R9: novel or critical
    Critical,
}

impl RankBand {
    /// Band for an arbitrary rank value (manual overrides included)
    pub fn from_rank(rank: u32) -> Self {
        if rank >= 9 {
            RankBand::Critical
        } else if rank >= 7 {
            RankBand::Complex
        } else if rank >= 5 {
            RankBand::Standard
        } else if rank >= 3 {
            RankBand::Simple
        } else {
            RankBand::Trivial
        }
    }

    /// Canonical rank produced by the estimator for this band
    pub fn rank(self) -> u32 {
        match self {
            RankBand::Trivial => 2,
            RankBand::Simple => 3,
            RankBand::Standard => 5,
            RankBand::Complex => 7,
            RankBand::Critical => 9,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RankBand::Trivial => "Trivial",
            RankBand::Simple => "Simple",
            RankBand::Standard => "Standard",
            RankBand::Complex => "Complex",
            RankBand::Critical => "Novel/Critical",
        }
    }
}

/// Map entropy and vocabulary counts to a rank band. First matching row wins.
pub fn estimate_rank(entropy: f64, technical_count: usize, uncertainty_count: usize) -> RankBand {
    if entropy > 4.5 || technical_count > 5 || uncertainty_count > 3 {
        RankBand::Critical
    } else if entropy > 3.8 || technical_count > 3 {
        RankBand::Complex
    } else if entropy > 3.0 || technical_count > 1 {
        RankBand::Standard
    } else if entropy > 2.0 {
        RankBand::Simple
    } else {
        RankBand::Trivial
    }
}
