use serde::{Deserialize, Serialize};

use crate::error::{LeafscopeError, Result};
use crate::frame::Bgr;

/// Health classification of a false-colored pixel.
///
/// Ordered from least to most healthy; `Other` covers every color outside the
/// four scoring tiers and never contributes to the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Tier1,
    Tier2,
    Tier3,
    Tier4,
    Other,
}

impl HealthTier {
    /// The four tiers that take part in scoring, least healthy first.
    pub const SCORING: [HealthTier; 4] = [Self::Tier1, Self::Tier2, Self::Tier3, Self::Tier4];

    /// Ordinal weight (1..=4 for scoring tiers, 5 for `Other`).
    pub fn weight(self) -> u32 {
        match self {
            Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
            Self::Tier4 => 4,
            Self::Other => 5,
        }
    }

    pub fn is_scoring(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl std::fmt::Display for HealthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tier1 => write!(f, "TIER_1"),
            Self::Tier2 => write!(f, "TIER_2"),
            Self::Tier3 => write!(f, "TIER_3"),
            Self::Tier4 => write!(f, "TIER_4"),
            Self::Other => write!(f, "OTHER"),
        }
    }
}

/// Inclusive per-channel BGR range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: Bgr,
    pub upper: Bgr,
}

impl ColorRange {
    pub fn new(lower: Bgr, upper: Bgr) -> Self {
        Self { lower, upper }
    }

    /// `lower <= px <= upper` on every channel.
    pub fn contains(&self, px: Bgr) -> bool {
        (0..3).all(|c| self.lower[c] <= px[c] && px[c] <= self.upper[c])
    }

    /// True if some color lies in both ranges.
    pub fn overlaps(&self, other: &ColorRange) -> bool {
        (0..3).all(|c| self.lower[c] <= other.upper[c] && other.lower[c] <= self.upper[c])
    }

    pub fn validate(&self) -> Result<()> {
        if (0..3).any(|c| self.lower[c] > self.upper[c]) {
            return Err(LeafscopeError::Configuration(format!(
                "color range lower bound {:?} exceeds upper bound {:?}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

/// Calibration of one scoring tier: the false colors that belong to it and
/// the share of vegetation pixels expected in it for a fully healthy plant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    pub tier: HealthTier,
    /// Target fraction in (0, 1].
    pub target: f64,
    pub range: ColorRange,
}

impl TierProfile {
    pub fn new(tier: HealthTier, range: (Bgr, Bgr), target: f64) -> Self {
        Self {
            tier,
            target,
            range: ColorRange::new(range.0, range.1),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tier.is_scoring() {
            return Err(LeafscopeError::Configuration(format!(
                "{} cannot be calibrated as a scoring tier",
                self.tier
            )));
        }
        if !(self.target > 0.0 && self.target <= 1.0) {
            return Err(LeafscopeError::Configuration(format!(
                "{} target fraction must be in (0, 1], got {}",
                self.tier, self.target
            )));
        }
        self.range.validate()
    }
}
