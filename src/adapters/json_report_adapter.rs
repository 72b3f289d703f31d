//! JSON report adapter implementing ReportPort.

use crate::domain::asset::{LeagueFormat, SeasonPhase, TradeAsset};
use crate::domain::error::TradefairError;
use crate::domain::evaluation::TradeEvaluationResult;
use crate::domain::league::LeagueContext;
use crate::domain::proposal::TradeProposal;
use crate::domain::roster::RosterReport;
use crate::ports::report_port::ReportPort;
use serde::Serialize;

#[derive(Serialize)]
struct LeagueSummary {
    format: LeagueFormat,
    superflex: bool,
    phase: SeasonPhase,
    season: i32,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    league: LeagueSummary,
    team_a: &'a [TradeAsset],
    team_b: &'a [TradeAsset],
    evaluation: &'a TradeEvaluationResult,
}

impl LeagueSummary {
    fn new(league: &LeagueContext) -> Self {
        Self {
            format: league.format,
            superflex: league.options.is_superflex,
            phase: league.options.current_phase,
            season: league.season,
        }
    }
}

#[derive(Serialize)]
struct JsonRosterReport<'a> {
    league: LeagueSummary,
    #[serde(flatten)]
    roster: &'a RosterReport,
}

#[derive(Debug, Default)]
pub struct JsonReportAdapter {
    pub pretty: bool,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, TradefairError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        let mut json = rendered.map_err(|e| TradefairError::Report {
            reason: format!("failed to serialize report: {e}"),
        })?;
        json.push('\n');
        Ok(json)
    }
}

impl ReportPort for JsonReportAdapter {
    fn render(
        &self,
        proposal: &TradeProposal,
        league: &LeagueContext,
        result: &TradeEvaluationResult,
    ) -> Result<String, TradefairError> {
        self.to_json(&JsonReport {
            league: LeagueSummary::new(league),
            team_a: &proposal.team_a,
            team_b: &proposal.team_b,
            evaluation: result,
        })
    }

    fn render_roster(
        &self,
        league: &LeagueContext,
        report: &RosterReport,
    ) -> Result<String, TradefairError> {
        self.to_json(&JsonRosterReport {
            league: LeagueSummary::new(league),
            roster: report,
        })
    }
}
