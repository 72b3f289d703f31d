//! Per-side position histograms, scarcity and weighted imbalance.

use crate::domain::asset::{Position, TradeAsset};
use crate::domain::weights::positional_weight;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionalAnalysis {
    pub team_a_positions: BTreeMap<Position, usize>,
    pub team_b_positions: BTreeMap<Position, usize>,
    pub scarcity_violation: bool,
    pub positional_imbalance: f64,
}

impl PositionalAnalysis {
    pub fn analyze(team_a: &[TradeAsset], team_b: &[TradeAsset]) -> Self {
        let team_a_positions = position_histogram(team_a);
        let team_b_positions = position_histogram(team_b);

        let mut positions: Vec<Position> = team_a_positions
            .keys()
            .chain(team_b_positions.keys())
            .copied()
            .collect();
        positions.sort();
        positions.dedup();

        let scarcity_violation = positions.iter().filter(|pos| pos.is_scarce()).any(|&pos| {
            let a = count_at(&team_a_positions, pos);
            let b = count_at(&team_b_positions, pos);
            (a >= 2 && b == 0) || (b >= 2 && a == 0)
        });

        let positional_imbalance = positions
            .into_iter()
            .map(|pos| {
                let diff = count_at(&team_a_positions, pos).abs_diff(count_at(&team_b_positions, pos));
                diff as f64 * positional_weight(pos)
            })
            .sum();

        Self {
            team_a_positions,
            team_b_positions,
            scarcity_violation,
            positional_imbalance,
        }
    }

    pub fn team_a_count(&self, position: Position) -> usize {
        count_at(&self.team_a_positions, position)
    }

    pub fn team_b_count(&self, position: Position) -> usize {
        count_at(&self.team_b_positions, position)
    }
}

/// Counts non-pick assets by position.
pub fn position_histogram(assets: &[TradeAsset]) -> BTreeMap<Position, usize> {
    let mut histogram = BTreeMap::new();
    for asset in assets.iter().filter(|a| !a.is_pick()) {
        *histogram.entry(asset.position).or_insert(0) += 1;
    }
    histogram
}

fn count_at(histogram: &BTreeMap<Position, usize>, position: Position) -> usize {
    histogram.get(&position).copied().unwrap_or(0)
}
