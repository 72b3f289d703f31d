//! Plain-text report adapter implementing ReportPort.

use crate::domain::asset::{TradeAsset, TradeSide};
use crate::domain::error::TradefairError;
use crate::domain::evaluation::TradeEvaluationResult;
use crate::domain::league::LeagueContext;
use crate::domain::proposal::TradeProposal;
use crate::domain::roster::RosterReport;
use crate::ports::report_port::ReportPort;
use std::fmt::Write;

#[derive(Debug, Default)]
pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn render(
        &self,
        proposal: &TradeProposal,
        league: &LeagueContext,
        result: &TradeEvaluationResult,
    ) -> Result<String, TradefairError> {
        render_text(proposal, league, result).map_err(format_error)
    }

    fn render_roster(
        &self,
        league: &LeagueContext,
        report: &RosterReport,
    ) -> Result<String, TradefairError> {
        render_roster_text(league, report).map_err(format_error)
    }
}

fn format_error(e: std::fmt::Error) -> TradefairError {
    TradefairError::Report {
        reason: format!("failed to format report: {e}"),
    }
}

fn superflex_label(league: &LeagueContext) -> &'static str {
    if league.options.is_superflex {
        ", superflex"
    } else {
        ""
    }
}

fn render_text(
    proposal: &TradeProposal,
    league: &LeagueContext,
    result: &TradeEvaluationResult,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "=== Trade Evaluation ({}, {}{}) ===",
        league.format,
        league.options.current_phase,
        superflex_label(league)
    )?;

    for side in [TradeSide::A, TradeSide::B] {
        let total = match side {
            TradeSide::A => result.team_a_value,
            TradeSide::B => result.team_b_value,
        };
        write_side(&mut out, &format!("{side} gives"), proposal.side(side), total)?;
    }

    writeln!(out)?;
    writeln!(out, "Value Gap:        {:.0}", result.diff)?;
    writeln!(out, "Fairness Score:   {}/100", result.fairness_score)?;
    writeln!(out, "Recommendation:   {}", result.recommendation)?;

    if !result.flags.is_empty() {
        writeln!(out, "\n=== Flags ===")?;
        for flag in &result.flags {
            writeln!(
                out,
                "  [{}] {} (-{}): {}",
                flag.severity, flag.flag_type, flag.penalty, flag.message
            )?;
        }
    }

    if !result.warnings.is_empty() {
        writeln!(out, "\n=== Warnings ===")?;
        for warning in &result.warnings {
            writeln!(out, "  - {}", warning)?;
        }
    }

    Ok(out)
}

fn write_side(
    out: &mut String,
    label: &str,
    assets: &[TradeAsset],
    total: f64,
) -> std::fmt::Result {
    writeln!(out, "\n{} ({:.0}):", label, total)?;
    if assets.is_empty() {
        writeln!(out, "  (nothing)")?;
    }
    for asset in assets {
        let tier = asset
            .tier
            .map(|t| format!(" tier {}", t))
            .unwrap_or_default();
        writeln!(
            out,
            "  {:<24} {:<4} {:>8.0}{}",
            asset.name, asset.position, asset.value, tier
        )?;
    }
    Ok(())
}

fn render_roster_text(
    league: &LeagueContext,
    report: &RosterReport,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "=== Roster Analysis: {} ({}{}) ===",
        report.team,
        league.options.current_phase,
        superflex_label(league)
    )?;
    writeln!(
        out,
        "\n  {:<4} {:>5} {:>10} {:>10}  {:<8} {}",
        "Pos", "Count", "Avg", "Total", "Strength", "Top Player"
    )?;
    for (position, grade) in &report.strengths {
        writeln!(
            out,
            "  {:<4} {:>5} {:>10.0} {:>10.0}  {:<8} {}",
            position,
            grade.count,
            grade.average_value,
            grade.total_value,
            grade.strength,
            grade.top_player.as_deref().unwrap_or("-")
        )?;
    }

    writeln!(out, "\n=== Trade Suggestions ===")?;
    if report.suggestions.is_empty() {
        writeln!(out, "  (no complementary trades found)")?;
    }
    for (i, suggestion) in report.suggestions.iter().enumerate() {
        writeln!(
            out,
            "  {}. with {}: give {} ({}) for {} ({}), gain {:+.0}",
            i + 1,
            suggestion.with_team,
            suggestion.give.name,
            suggestion.give.position,
            suggestion.receive.name,
            suggestion.receive.position,
            suggestion.gain
        )?;
        writeln!(
            out,
            "     {}; fairness {}/100 ({})",
            suggestion.rationale, suggestion.fairness_score, suggestion.recommendation
        )?;
    }

    Ok(out)
}
