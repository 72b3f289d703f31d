//! Rule evaluators.
//!
//! Each evaluator inspects the asset lists or a derived analysis and returns
//! the flags it raises. Evaluators are independent; their penalties stack.

use crate::domain::asset::{SeasonPhase, TradeAsset, TradeSide};
use crate::domain::flag::{FairnessFlag, FlagType, Severity};
use crate::domain::positional_analysis::PositionalAnalysis;
use crate::domain::tier_analysis::{DEPTH_TIER, ELITE_TIER, TierAnalysis};

pub const ELITE_SPLIT_PENALTY: u32 = 15;
pub const ELITE_FOR_DEPTH_PENALTY: u32 = 25;
pub const ELITE_FOR_DEPTH_MIN_PIECES: usize = 3;
pub const TIER_DISPARITY_PENALTY: u32 = 10;
pub const TIER_DISPARITY_THRESHOLD: usize = 2;

pub const PACKAGE_MIN_ASSETS: usize = 4;
pub const PACKAGE_FAIR_RATIO: f64 = 1.65;
pub const PACKAGE_CRITICAL_RATIO: f64 = 1.3;
pub const PACKAGE_PENALTY: u32 = 20;

pub const SCARCITY_PENALTY: u32 = 12;
pub const IMBALANCE_THRESHOLD: f64 = 5.0;
pub const IMBALANCE_MAX_PENALTY: u32 = 15;

pub const PICK_DOMINANCE_SHARE: f64 = 0.60;
pub const PICK_PREMIUM_RATIO: f64 = 1.20;
pub const PICK_OVERPAY_PENALTY: u32 = 8;
pub const PLAYOFF_PICK_MIN: usize = 2;
pub const PLAYOFF_PICK_PENALTY: u32 = 3;

fn directions<'a>(
    team_a: &'a [TradeAsset],
    team_b: &'a [TradeAsset],
) -> [(TradeSide, &'a [TradeAsset], &'a [TradeAsset]); 2] {
    let assets = |side: TradeSide| match side {
        TradeSide::A => team_a,
        TradeSide::B => team_b,
    };
    [TradeSide::A, TradeSide::B].map(|side| (side, assets(side), assets(side.other())))
}

fn total(assets: &[TradeAsset]) -> f64 {
    assets.iter().map(|a| a.value).sum()
}

/// Elite split, elite-for-depth and tier-1 disparity.
pub fn tier_break_flags(analysis: &TierAnalysis) -> Vec<FairnessFlag> {
    let mut flags = Vec::new();

    if analysis.elite_split {
        let giver = if analysis.team_a_count(ELITE_TIER) > 0 {
            TradeSide::A
        } else {
            TradeSide::B
        };
        flags.push(FairnessFlag::new(
            FlagType::ElitePlayerSplit,
            Severity::Critical,
            ELITE_SPLIT_PENALTY,
            format!("{giver} gives up an elite player without receiving an elite player back"),
        ));
    }

    let sides = [
        (TradeSide::A, analysis.team_a_count(ELITE_TIER), analysis.team_b_count(DEPTH_TIER)),
        (TradeSide::B, analysis.team_b_count(ELITE_TIER), analysis.team_a_count(DEPTH_TIER)),
    ];
    for (side, elite, depth_returned) in sides {
        if elite > 0 && depth_returned >= ELITE_FOR_DEPTH_MIN_PIECES {
            flags.push(
                FairnessFlag::new(
                    FlagType::TierMismatch,
                    Severity::Critical,
                    ELITE_FOR_DEPTH_PENALTY,
                    format!(
                        "{side} trades elite talent for {depth_returned} depth pieces; quantity does not replace a tier-1 player"
                    ),
                )
                .with_detail("elite_count", elite as f64)
                .with_detail("depth_count", depth_returned as f64),
            );
        }
    }

    if analysis.tier_disparity >= TIER_DISPARITY_THRESHOLD {
        flags.push(
            FairnessFlag::new(
                FlagType::TierMismatch,
                Severity::High,
                TIER_DISPARITY_PENALTY,
                format!(
                    "tier-1 counts differ by {} between the two sides",
                    analysis.tier_disparity
                ),
            )
            .with_detail("tier_disparity", analysis.tier_disparity as f64),
        );
    }

    if !flags.is_empty() {
        tracing::debug!(count = flags.len(), "tier-break rule fired");
    }
    flags
}

/// Package value over star value, when `package` (four or more assets) is
/// sent for a lone star worth more than zero.
pub fn package_ratio(package: &[TradeAsset], star_side: &[TradeAsset]) -> Option<f64> {
    match star_side {
        [star] if package.len() >= PACKAGE_MIN_ASSETS && star.value > 0.0 => {
            Some(total(package) / star.value)
        }
        _ => None,
    }
}

/// Many-for-one consolidation: a package of four or more assets for a single star.
pub fn package_for_star_flags(team_a: &[TradeAsset], team_b: &[TradeAsset]) -> Vec<FairnessFlag> {
    let mut flags = Vec::new();

    for (side, package, star_side) in directions(team_a, team_b) {
        let Some(ratio) = package_ratio(package, star_side) else {
            continue;
        };
        if ratio >= PACKAGE_FAIR_RATIO {
            continue;
        }
        let star = &star_side[0];
        let package_value = total(package);

        let severity = if ratio < PACKAGE_CRITICAL_RATIO {
            Severity::Critical
        } else {
            Severity::High
        };
        let shortfall_pct = (PACKAGE_FAIR_RATIO - ratio) / PACKAGE_FAIR_RATIO * 100.0;
        flags.push(
            FairnessFlag::new(
                FlagType::PackageForStar,
                severity,
                PACKAGE_PENALTY,
                format!(
                    "{side} sends {} assets for {}: package is {:.2}x the star's value, {:.0}% short of the {:.2}x needed",
                    package.len(),
                    star.name,
                    ratio,
                    shortfall_pct,
                    PACKAGE_FAIR_RATIO
                ),
            )
            .with_detail("ratio", ratio)
            .with_detail("package_value", package_value)
            .with_detail("star_value", star.value)
            .with_detail("shortfall_pct", shortfall_pct),
        );
    }

    if !flags.is_empty() {
        tracing::debug!(count = flags.len(), "package-for-star rule fired");
    }
    flags
}

/// Scarcity violation and weighted positional imbalance.
pub fn positional_balance_flags(analysis: &PositionalAnalysis) -> Vec<FairnessFlag> {
    let mut flags = Vec::new();

    if analysis.scarcity_violation {
        flags.push(FairnessFlag::new(
            FlagType::ScarcityViolation,
            Severity::High,
            SCARCITY_PENALTY,
            "one side gives up multiple QB/RB/TE without any returned at that position".to_string(),
        ));
    }

    let imbalance = analysis.positional_imbalance;
    if imbalance > IMBALANCE_THRESHOLD {
        let penalty = ((imbalance / 2.0).floor() as u32).min(IMBALANCE_MAX_PENALTY);
        let severity = if penalty > 10 {
            Severity::High
        } else {
            Severity::Medium
        };
        flags.push(
            FairnessFlag::new(
                FlagType::PositionalImbalance,
                severity,
                penalty,
                format!("position mix is lopsided (weighted imbalance {imbalance:.2})"),
            )
            .with_detail("positional_imbalance", imbalance),
        );
    }

    if !flags.is_empty() {
        tracing::debug!(count = flags.len(), "positional-balance rule fired");
    }
    flags
}

/// Pick-heavy offers for proven players, plus the playoff uncertainty note.
///
/// Picks dominate an offer when they make up at least 60% of the offering
/// side's total value.
pub fn pick_overpay_flags(
    team_a: &[TradeAsset],
    team_b: &[TradeAsset],
    phase: SeasonPhase,
) -> Vec<FairnessFlag> {
    let mut flags = Vec::new();

    for (side, offer, received) in directions(team_a, team_b) {
        let picks: Vec<&TradeAsset> = offer.iter().filter(|a| a.is_pick()).collect();
        let players: Vec<&TradeAsset> = received.iter().filter(|a| !a.is_pick()).collect();
        if picks.is_empty() || players.is_empty() {
            continue;
        }

        let pick_value: f64 = picks.iter().map(|a| a.value).sum();
        let player_value: f64 = players.iter().map(|a| a.value).sum();
        let offer_value = total(offer);

        let dominates = offer_value > 0.0 && pick_value / offer_value >= PICK_DOMINANCE_SHARE;
        if dominates && player_value > 0.0 {
            let ratio = pick_value / player_value;
            if ratio < PICK_PREMIUM_RATIO {
                flags.push(
                    FairnessFlag::new(
                        FlagType::PickOverpay,
                        Severity::Medium,
                        PICK_OVERPAY_PENALTY,
                        format!(
                            "{side} offers picks without sufficient premium over proven players ({ratio:.2}x, {PICK_PREMIUM_RATIO:.2}x expected)"
                        ),
                    )
                    .with_detail("ratio", ratio)
                    .with_detail("pick_value", pick_value)
                    .with_detail("player_value", player_value),
                );
            }
        }

        if phase == SeasonPhase::Playoffs && picks.len() >= PLAYOFF_PICK_MIN {
            flags.push(
                FairnessFlag::new(
                    FlagType::PickOverpay,
                    Severity::Low,
                    PLAYOFF_PICK_PENALTY,
                    format!(
                        "{side} offers {} picks during the playoffs; a 15% uncertainty discount is already applied to adjusted values",
                        picks.len()
                    ),
                )
                .with_detail("pick_count", picks.len() as f64),
            );
        }
    }

    if !flags.is_empty() {
        tracing::debug!(count = flags.len(), "pick-overpay rule fired");
    }
    flags
}

/// Percentage gap between raw totals, as a fraction of the larger side.
pub fn value_gap_percent(team_a_value: f64, team_b_value: f64) -> f64 {
    let larger = team_a_value.max(team_b_value);
    if larger <= 0.0 {
        return 0.0;
    }
    (team_a_value - team_b_value).abs() / larger * 100.0
}

pub fn disparity_penalty(percent: f64) -> u32 {
    if percent > 30.0 {
        20
    } else if percent > 20.0 {
        15
    } else if percent > 15.0 {
        10
    } else if percent > 10.0 {
        5
    } else {
        0
    }
}

/// Raw (unadjusted) value gap. Only the highest matching band applies.
pub fn value_disparity_flags(team_a_value: f64, team_b_value: f64) -> Vec<FairnessFlag> {
    let percent = value_gap_percent(team_a_value, team_b_value);
    let penalty = disparity_penalty(percent);
    if penalty == 0 {
        return Vec::new();
    }

    let gap = (team_a_value - team_b_value).abs();
    let severity = if penalty > 15 {
        Severity::High
    } else {
        Severity::Medium
    };
    tracing::debug!(percent, penalty, "value-disparity rule fired");
    vec![
        FairnessFlag::new(
            FlagType::ConsolidationAbuse,
            severity,
            penalty,
            format!("value gap of {gap:.0} points ({percent:.1}%) between the two sides"),
        )
        .with_detail("value_gap", gap)
        .with_detail("percent_gap", percent),
    ]
}
