//! Trade fairness evaluation.
//!
//! One synchronous pass: raw totals, adjusted totals, tier analysis, package
//! detection, positional analysis, pick evaluation, value disparity, then the
//! score clamp, recommendation and warnings. The result is built fresh per
//! call and nothing is shared between calls.

use crate::domain::asset::{EvaluateOptions, LeagueFormat, TradeAsset, TradeSide};
use crate::domain::flag::{FairnessFlag, FlagType, Severity};
use crate::domain::positional_analysis::PositionalAnalysis;
use crate::domain::rules;
use crate::domain::tier_analysis::TierAnalysis;
use crate::domain::weights::adjusted_total;
use serde::Serialize;
use std::fmt;

pub const MAX_SCORE: u32 = 100;
pub const UNFAIR_BELOW: u32 = 60;
pub const RISKY_BELOW: u32 = 75;
pub const LEAN_BELOW: u32 = 90;
pub const UNFAIR_CRITICAL_FLAGS: usize = 2;

pub const WARN_ELITE_SPLIT: &str = "elite player given up without elite return";
pub const WARN_CONSOLIDATION: &str = "consolidation trade detected, verify package value";
pub const WARN_SCARCITY: &str = "positional scarcity imbalance detected";
pub const WARN_STRUCTURAL: &str = "structural concerns detected, review carefully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Fair,
    LeanA,
    LeanB,
    Risky,
    Unfair,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Fair => "fair",
            Recommendation::LeanA => "lean_a",
            Recommendation::LeanB => "lean_b",
            Recommendation::Risky => "risky",
            Recommendation::Unfair => "unfair",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Outcome of one evaluation.
///
/// The adjusted values live in scoring space only; the raw values are the
/// ones to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeEvaluationResult {
    pub team_a_value: f64,
    pub team_b_value: f64,
    pub team_a_adjusted_value: f64,
    pub team_b_adjusted_value: f64,
    pub diff: f64,
    pub fairness_score: u32,
    pub flags: Vec<FairnessFlag>,
    pub recommendation: Recommendation,
    pub warnings: Vec<String>,
    pub tier_analysis: TierAnalysis,
    pub positional_analysis: PositionalAnalysis,
}

impl TradeEvaluationResult {
    pub fn total_penalty(&self) -> u32 {
        self.flags.iter().map(|f| f.penalty).sum()
    }

    pub fn critical_count(&self) -> usize {
        count_critical(&self.flags)
    }

    pub fn has_flag(&self, flag_type: FlagType) -> bool {
        self.flags.iter().any(|f| f.flag_type == flag_type)
    }

    pub fn flags_of(&self, flag_type: FlagType) -> impl Iterator<Item = &FairnessFlag> {
        self.flags.iter().filter(move |f| f.flag_type == flag_type)
    }
}

/// Evaluate a trade where each side's list is what that side gives up.
///
/// `format` is accepted for forward compatibility and does not change scoring.
pub fn evaluate(
    team_a: &[TradeAsset],
    team_b: &[TradeAsset],
    format: LeagueFormat,
    options: EvaluateOptions,
) -> TradeEvaluationResult {
    let team_a_value: f64 = team_a.iter().map(|a| a.value).sum();
    let team_b_value: f64 = team_b.iter().map(|a| a.value).sum();
    let diff = (team_a_value - team_b_value).abs();

    let team_a_adjusted_value = adjusted_total(team_a, &options);
    let team_b_adjusted_value = adjusted_total(team_b, &options);

    let mut flags = Vec::new();

    let tier_analysis = TierAnalysis::analyze(team_a, team_b);
    flags.extend(rules::tier_break_flags(&tier_analysis));

    flags.extend(rules::package_for_star_flags(team_a, team_b));

    let positional_analysis = PositionalAnalysis::analyze(team_a, team_b);
    flags.extend(rules::positional_balance_flags(&positional_analysis));

    flags.extend(rules::pick_overpay_flags(team_a, team_b, options.current_phase));

    flags.extend(rules::value_disparity_flags(team_a_value, team_b_value));

    let total_penalty: u32 = flags.iter().map(|f| f.penalty).sum();
    let fairness_score = MAX_SCORE.saturating_sub(total_penalty);

    let recommendation = recommend(
        fairness_score,
        count_critical(&flags),
        favored_side(team_a_adjusted_value, team_b_adjusted_value),
    );

    let warnings = build_warnings(&flags, &tier_analysis, &positional_analysis, fairness_score);

    tracing::debug!(
        %format,
        team_a_value,
        team_b_value,
        fairness_score,
        flags = flags.len(),
        %recommendation,
        "trade evaluated"
    );

    TradeEvaluationResult {
        team_a_value,
        team_b_value,
        team_a_adjusted_value,
        team_b_adjusted_value,
        diff,
        fairness_score,
        flags,
        recommendation,
        warnings,
        tier_analysis,
        positional_analysis,
    }
}

/// The side that receives more adjusted value. Each side receives the other's
/// assets, so Team A is favoured when Team B gives up more. Ties go to Team A.
pub fn favored_side(team_a_adjusted: f64, team_b_adjusted: f64) -> TradeSide {
    if team_b_adjusted >= team_a_adjusted {
        TradeSide::A
    } else {
        TradeSide::B
    }
}

pub fn recommend(fairness_score: u32, critical_flags: usize, favored: TradeSide) -> Recommendation {
    if critical_flags >= UNFAIR_CRITICAL_FLAGS || fairness_score < UNFAIR_BELOW {
        Recommendation::Unfair
    } else if fairness_score < RISKY_BELOW {
        Recommendation::Risky
    } else if fairness_score < LEAN_BELOW {
        match favored {
            TradeSide::A => Recommendation::LeanA,
            TradeSide::B => Recommendation::LeanB,
        }
    } else {
        Recommendation::Fair
    }
}

fn count_critical(flags: &[FairnessFlag]) -> usize {
    flags
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .count()
}

fn build_warnings(
    flags: &[FairnessFlag],
    tier_analysis: &TierAnalysis,
    positional_analysis: &PositionalAnalysis,
    fairness_score: u32,
) -> Vec<String> {
    let mut warnings = Vec::new();
    if tier_analysis.elite_split {
        warnings.push(WARN_ELITE_SPLIT.to_string());
    }
    if flags.iter().any(|f| f.flag_type == FlagType::PackageForStar) {
        warnings.push(WARN_CONSOLIDATION.to_string());
    }
    if positional_analysis.scarcity_violation {
        warnings.push(WARN_SCARCITY.to_string());
    }
    if fairness_score < RISKY_BELOW {
        warnings.push(WARN_STRUCTURAL.to_string());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::{Position, SeasonPhase};
    use approx::assert_relative_eq;

    fn wr(value: f64, tier: u8) -> TradeAsset {
        TradeAsset::player("WR", Position::Wr, value, Some(tier))
    }

    fn run(a: &[TradeAsset], b: &[TradeAsset]) -> TradeEvaluationResult {
        evaluate(a, b, LeagueFormat::Dynasty, EvaluateOptions::default())
    }

    #[test]
    fn empty_trade_is_fair() {
        let result = run(&[], &[]);
        assert_eq!(result.fairness_score, 100);
        assert!(result.flags.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.recommendation, Recommendation::Fair);
        assert_relative_eq!(result.team_a_value, 0.0);
        assert_relative_eq!(result.diff, 0.0);
    }

    #[test]
    fn totals_and_diff() {
        let result = run(&[wr(5000.0, 2)], &[wr(5100.0, 2)]);
        assert_relative_eq!(result.team_a_value, 5000.0);
        assert_relative_eq!(result.team_b_value, 5100.0);
        assert_relative_eq!(result.diff, 100.0);
    }

    #[test]
    fn adjusted_totals_use_league_context() {
        let a = vec![TradeAsset::player("QB", Position::Qb, 4000.0, Some(1))];
        let b = vec![TradeAsset::pick("2026 1st", 4000.0, Some(1), None)];
        let options = EvaluateOptions {
            is_superflex: true,
            current_phase: SeasonPhase::RegularSeason,
        };
        let result = evaluate(&a, &b, LeagueFormat::Dynasty, options);
        assert_relative_eq!(result.team_a_adjusted_value, 5750.0, epsilon = 1e-9);
        assert_relative_eq!(result.team_b_adjusted_value, 3800.0, epsilon = 1e-9);
        assert_relative_eq!(result.team_a_value, 4000.0);
        assert_relative_eq!(result.team_b_value, 4000.0);
    }

    #[test]
    fn format_does_not_change_scoring() {
        let a = vec![wr(9000.0, 1)];
        let b = vec![wr(1200.0, 4), wr(1100.0, 4), wr(1000.0, 4)];
        let dynasty = evaluate(&a, &b, LeagueFormat::Dynasty, EvaluateOptions::default());
        let redraft = evaluate(&a, &b, LeagueFormat::Redraft, EvaluateOptions::default());
        assert_eq!(dynasty, redraft);
    }

    #[test]
    fn recommendation_thresholds() {
        assert_eq!(recommend(100, 0, TradeSide::A), Recommendation::Fair);
        assert_eq!(recommend(90, 0, TradeSide::A), Recommendation::Fair);
        assert_eq!(recommend(89, 0, TradeSide::A), Recommendation::LeanA);
        assert_eq!(recommend(75, 1, TradeSide::B), Recommendation::LeanB);
        assert_eq!(recommend(74, 0, TradeSide::A), Recommendation::Risky);
        assert_eq!(recommend(60, 1, TradeSide::A), Recommendation::Risky);
        assert_eq!(recommend(59, 0, TradeSide::A), Recommendation::Unfair);
    }

    #[test]
    fn two_critical_flags_are_unfair_regardless_of_score() {
        assert_eq!(recommend(95, 2, TradeSide::A), Recommendation::Unfair);
    }

    #[test]
    fn favored_side_receives_more() {
        assert_eq!(favored_side(5000.0, 6000.0), TradeSide::A);
        assert_eq!(favored_side(6000.0, 5000.0), TradeSide::B);
        assert_eq!(favored_side(5000.0, 5000.0), TradeSide::A);
    }

    #[test]
    fn lean_points_at_side_receiving_more() {
        // 16% gap costs 10 points, which still rounds out as fair
        let result = run(&[wr(8400.0, 2)], &[wr(10000.0, 2)]);
        assert_eq!(result.fairness_score, 90);
        assert_eq!(result.recommendation, Recommendation::Fair);

        let result = run(&[wr(10000.0, 2)], &[wr(7500.0, 2)]);
        assert_eq!(result.fairness_score, 85);
        assert_eq!(result.recommendation, Recommendation::LeanB);

        let result = run(&[wr(7500.0, 2)], &[wr(10000.0, 2)]);
        assert_eq!(result.recommendation, Recommendation::LeanA);
    }

    #[test]
    fn score_floors_at_zero() {
        let a: Vec<TradeAsset> = (0..30)
            .map(|_| TradeAsset::player("RB", Position::Rb, 100.0, Some(4)))
            .collect();
        let b = vec![TradeAsset::player("QB", Position::Qb, 9000.0, Some(1))];
        let result = run(&a, &b);
        assert!(result.total_penalty() > 100);
        assert_eq!(result.fairness_score, 0);
        assert_eq!(result.recommendation, Recommendation::Unfair);
    }

    #[test]
    fn warnings_follow_flags() {
        let a = vec![wr(9000.0, 1)];
        let b = vec![wr(1200.0, 4), wr(1100.0, 4), wr(1000.0, 4)];
        let result = run(&a, &b);
        assert_eq!(
            result.warnings,
            vec![WARN_ELITE_SPLIT.to_string(), WARN_STRUCTURAL.to_string()]
        );
    }

    #[test]
    fn consolidation_warning_for_package() {
        let a = vec![wr(1500.0, 3); 4];
        let b = vec![wr(5000.0, 2)];
        let result = run(&a, &b);
        assert!(result.warnings.iter().any(|w| w == WARN_CONSOLIDATION));
    }

    #[test]
    fn scarcity_warning() {
        let a = vec![
            TradeAsset::player("RB1", Position::Rb, 3000.0, Some(2)),
            TradeAsset::player("RB2", Position::Rb, 3000.0, Some(2)),
        ];
        let b = vec![wr(3000.0, 2), wr(3000.0, 2)];
        let result = run(&a, &b);
        assert_eq!(result.warnings, vec![WARN_SCARCITY.to_string()]);
        assert_eq!(result.fairness_score, 88);
    }

    #[test]
    fn flag_order_follows_pass_order() {
        let a = vec![wr(9000.0, 1)];
        let b = vec![wr(1200.0, 4), wr(1100.0, 4), wr(1000.0, 4)];
        let result = run(&a, &b);
        let types: Vec<FlagType> = result.flags.iter().map(|f| f.flag_type).collect();
        assert_eq!(
            types,
            vec![
                FlagType::ElitePlayerSplit,
                FlagType::TierMismatch,
                FlagType::ConsolidationAbuse
            ]
        );
    }

    #[test]
    fn helpers_summarise_flags() {
        let a = vec![wr(9000.0, 1)];
        let b = vec![wr(1200.0, 4), wr(1100.0, 4), wr(1000.0, 4)];
        let result = run(&a, &b);
        assert_eq!(result.total_penalty(), 60);
        assert_eq!(result.critical_count(), 2);
        assert!(result.has_flag(FlagType::TierMismatch));
        assert_eq!(result.flags_of(FlagType::TierMismatch).count(), 1);
        assert!(!result.has_flag(FlagType::PickOverpay));
    }

    #[test]
    fn input_assets_are_not_modified() {
        let a = vec![TradeAsset::player("QB", Position::Qb, 4000.0, Some(1))];
        let b = vec![TradeAsset::pick("2026 1st", 4000.0, Some(1), None)];
        let before = (a.clone(), b.clone());
        let _ = evaluate(
            &a,
            &b,
            LeagueFormat::Dynasty,
            EvaluateOptions {
                is_superflex: true,
                current_phase: SeasonPhase::Playoffs,
            },
        );
        assert_eq!((a, b), before);
    }
}
