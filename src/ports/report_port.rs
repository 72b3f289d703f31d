//! Report generation port trait.

use crate::domain::error::TradefairError;
use crate::domain::evaluation::TradeEvaluationResult;
use crate::domain::league::LeagueContext;
use crate::domain::proposal::TradeProposal;
use crate::domain::roster::RosterReport;
use std::io::Write;
use std::path::Path;

/// Port for writing trade evaluation and roster reports.
pub trait ReportPort {
    fn render(
        &self,
        proposal: &TradeProposal,
        league: &LeagueContext,
        result: &TradeEvaluationResult,
    ) -> Result<String, TradefairError>;

    fn render_roster(
        &self,
        league: &LeagueContext,
        report: &RosterReport,
    ) -> Result<String, TradefairError>;

    /// Default implementation: render, then write to the file or stdout.
    fn write(
        &self,
        proposal: &TradeProposal,
        league: &LeagueContext,
        result: &TradeEvaluationResult,
        output_path: Option<&Path>,
    ) -> Result<(), TradefairError> {
        let content = self.render(proposal, league, result)?;
        write_output(&content, output_path)
    }

    fn write_roster(
        &self,
        league: &LeagueContext,
        report: &RosterReport,
        output_path: Option<&Path>,
    ) -> Result<(), TradefairError> {
        let content = self.render_roster(league, report)?;
        write_output(&content, output_path)
    }
}

fn write_output(content: &str, output_path: Option<&Path>) -> Result<(), TradefairError> {
    match output_path {
        Some(path) => std::fs::write(path, content)?,
        None => std::io::stdout().write_all(content.as_bytes())?,
    }
    Ok(())
}
