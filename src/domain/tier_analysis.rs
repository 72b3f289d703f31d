//! Per-side tier histograms.

use crate::domain::asset::TradeAsset;
use serde::Serialize;
use std::collections::BTreeMap;

pub const ELITE_TIER: u8 = 1;
pub const DEPTH_TIER: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierAnalysis {
    pub team_a_tiers: BTreeMap<u8, usize>,
    pub team_b_tiers: BTreeMap<u8, usize>,
    /// Exactly one side gives up a tier-1 asset.
    pub elite_split: bool,
    /// Absolute difference in tier-1 counts.
    pub tier_disparity: usize,
}

impl TierAnalysis {
    pub fn analyze(team_a: &[TradeAsset], team_b: &[TradeAsset]) -> Self {
        let team_a_tiers = tier_histogram(team_a);
        let team_b_tiers = tier_histogram(team_b);

        let elite_a = count_at(&team_a_tiers, ELITE_TIER);
        let elite_b = count_at(&team_b_tiers, ELITE_TIER);

        Self {
            elite_split: (elite_a > 0) != (elite_b > 0),
            tier_disparity: elite_a.abs_diff(elite_b),
            team_a_tiers,
            team_b_tiers,
        }
    }

    pub fn team_a_count(&self, tier: u8) -> usize {
        count_at(&self.team_a_tiers, tier)
    }

    pub fn team_b_count(&self, tier: u8) -> usize {
        count_at(&self.team_b_tiers, tier)
    }
}

/// Counts non-pick assets by tier. Assets without a tier are skipped.
pub fn tier_histogram(assets: &[TradeAsset]) -> BTreeMap<u8, usize> {
    let mut histogram = BTreeMap::new();
    for asset in assets.iter().filter(|a| !a.is_pick()) {
        if let Some(tier) = asset.tier {
            *histogram.entry(tier).or_insert(0) += 1;
        }
    }
    histogram
}

fn count_at(histogram: &BTreeMap<u8, usize>, tier: u8) -> usize {
    histogram.get(&tier).copied().unwrap_or(0)
}
