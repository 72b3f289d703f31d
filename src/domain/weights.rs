//! Fairness weighting constants.
//!
//! These weights only feed the adjusted (scoring-space) totals. They never
//! change an asset's displayed value.

use crate::domain::asset::{EvaluateOptions, Position, SeasonPhase, TradeAsset};

/// Extra multiplier on QB weight in superflex leagues.
pub const SUPERFLEX_QB_PREMIUM: f64 = 1.15;

pub fn positional_weight(position: Position) -> f64 {
    match position {
        Position::Qb => 1.25,
        Position::Rb => 1.10,
        Position::Wr => 1.00,
        Position::Te => 1.15,
        p if p.is_idp() => 0.70,
        _ => 1.00,
    }
}

/// Uncertainty discount on picks as the season approaches the deadline.
pub fn pick_phase_multiplier(phase: SeasonPhase) -> f64 {
    match phase {
        SeasonPhase::Preseason | SeasonPhase::Offseason => 1.0,
        SeasonPhase::RegularSeason => 0.95,
        SeasonPhase::Playoffs => 0.85,
    }
}

pub fn adjusted_value(asset: &TradeAsset, options: &EvaluateOptions) -> f64 {
    let mut adjusted = asset.value * positional_weight(asset.position);
    if asset.position == Position::Qb && options.is_superflex {
        adjusted *= SUPERFLEX_QB_PREMIUM;
    }
    if asset.is_pick() {
        adjusted *= pick_phase_multiplier(options.current_phase);
    }
    adjusted
}

pub fn adjusted_total(assets: &[TradeAsset], options: &EvaluateOptions) -> f64 {
    assets.iter().map(|a| adjusted_value(a, options)).sum()
}
