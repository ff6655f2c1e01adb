use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::palette::Palette;
use crate::consts::{
    DEFAULT_TIER1_RANGE, DEFAULT_TIER1_TARGET, DEFAULT_TIER2_RANGE, DEFAULT_TIER2_TARGET,
    DEFAULT_TIER3_RANGE, DEFAULT_TIER3_TARGET, DEFAULT_TIER4_RANGE, DEFAULT_TIER4_TARGET,
};
use crate::error::{LeafscopeError, Result};
use crate::filters::contrast::DegeneratePolicy;
use crate::frame::Bgr;
use crate::visualize::overlay::OverlayStyle;

use super::tier::{HealthTier, TierProfile};

/// Calibration constants as read from a config file.
///
/// Nothing here is checked until it is turned into a [`Calibration`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// One entry per scoring tier, with its color range and target fraction.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierProfile>,
    /// Behavior when a stretch has zero percentile spread.
    #[serde(default)]
    pub on_degenerate: DegeneratePolicy,
    #[serde(default)]
    pub overlay: OverlayStyle,
    /// 256 BGR triples.
    #[serde(default)]
    pub palette: Palette,
}

pub fn default_tiers() -> Vec<TierProfile> {
    vec![
        TierProfile::new(HealthTier::Tier4, DEFAULT_TIER4_RANGE, DEFAULT_TIER4_TARGET),
        TierProfile::new(HealthTier::Tier3, DEFAULT_TIER3_RANGE, DEFAULT_TIER3_TARGET),
        TierProfile::new(HealthTier::Tier2, DEFAULT_TIER2_RANGE, DEFAULT_TIER2_TARGET),
        TierProfile::new(HealthTier::Tier1, DEFAULT_TIER1_RANGE, DEFAULT_TIER1_TARGET),
    ]
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            on_degenerate: DegeneratePolicy::default(),
            overlay: OverlayStyle::default(),
            palette: Palette::default(),
        }
    }
}

/// Validated, immutable calibration.
#[derive(Clone, Debug)]
pub struct Calibration {
    tiers: BTreeMap<HealthTier, TierProfile>,
    total_weight: u32,
    pub on_degenerate: DegeneratePolicy,
    pub overlay: OverlayStyle,
    pub palette: Palette,
}

impl Calibration {
    /// Check every constraint on `config` and freeze it.
    ///
    /// Rejects: non-scoring or duplicate tiers, missing scoring tiers, target
    /// fractions outside (0, 1], inverted or overlapping color ranges, a
    /// palette that is not 256 entries long, and a zero stroke width.
    pub fn new(config: CalibrationConfig) -> Result<Self> {
        let mut tiers = BTreeMap::new();
        for profile in config.tiers {
            profile.validate()?;
            let tier = profile.tier;
            if tiers.insert(tier, profile).is_some() {
                return Err(LeafscopeError::Configuration(format!(
                    "{tier} is calibrated more than once"
                )));
            }
        }

        for tier in HealthTier::SCORING {
            if !tiers.contains_key(&tier) {
                return Err(LeafscopeError::Configuration(format!(
                    "missing calibration for {tier}"
                )));
            }
        }

        let profiles: Vec<&TierProfile> = tiers.values().collect();
        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                if a.range.overlaps(&b.range) {
                    return Err(LeafscopeError::Configuration(format!(
                        "color ranges of {} and {} overlap",
                        a.tier, b.tier
                    )));
                }
            }
        }

        config.palette.validate()?;
        config.overlay.validate()?;

        let total_weight = tiers.keys().map(|t| t.weight()).sum();
        debug!(tiers = tiers.len(), total_weight, "Calibration loaded");

        Ok(Self {
            tiers,
            total_weight,
            on_degenerate: config.on_degenerate,
            overlay: config.overlay,
            palette: config.palette,
        })
    }

    /// Scoring tiers, least healthy first.
    pub fn tiers(&self) -> impl DoubleEndedIterator<Item = &TierProfile> {
        self.tiers.values()
    }

    pub fn profile(&self, tier: HealthTier) -> Option<&TierProfile> {
        self.tiers.get(&tier)
    }

    /// Sum of the weights of all scoring tiers.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// The tier whose range contains `px`, or `Other`.
    pub fn classify(&self, px: Bgr) -> HealthTier {
        self.tiers
            .values()
            .find(|p| p.range.contains(px))
            .map_or(HealthTier::Other, |p| p.tier)
    }
}

impl Default for Calibration {
    /// The built-in constants, frozen without going through [`Calibration::new`].
    fn default() -> Self {
        let config = CalibrationConfig::default();
        let tiers: BTreeMap<HealthTier, TierProfile> =
            config.tiers.into_iter().map(|p| (p.tier, p)).collect();
        let total_weight = tiers.keys().map(|t| t.weight()).sum();
        Self {
            tiers,
            total_weight,
            on_degenerate: config.on_degenerate,
            overlay: config.overlay,
            palette: config.palette,
        }
    }
}
