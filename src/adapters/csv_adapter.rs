//! CSV trade sheet adapter.
//!
//! One row per asset:
//!
//! ```text
//! side,name,position,value,tier,pick_round,pick_position,pick
//! A,Star Receiver,WR,9000,1,,,
//! B,,PICK,,,,,2027 1st (Early)
//! ```
//!
//! Pick rows may leave `value` empty; the baseline for the `pick` descriptor
//! (or `pick_round` / `pick_position`) is used instead.
//!
//! League rosters use one row per player, every value given:
//!
//! ```text
//! team,name,position,value,tier
//! Gridiron Kings,Star Receiver,WR,9000,1
//! ```

use crate::domain::asset::{PickSlot, Position, TradeAsset, TradeSide};
use crate::domain::error::TradefairError;
use crate::domain::pick_value::PickDescriptor;
use crate::domain::proposal::TradeProposal;
use crate::domain::roster::LeagueRosters;
use crate::ports::roster_port::RosterPort;
use crate::ports::trade_port::TradePort;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct SheetRow {
    side: String,
    #[serde(default)]
    name: Option<String>,
    position: String,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    tier: Option<u8>,
    #[serde(default)]
    pick_round: Option<u8>,
    #[serde(default)]
    pick_position: Option<String>,
    #[serde(default)]
    pick: Option<String>,
}

pub struct CsvTradeAdapter {
    path: PathBuf,
    season: i32,
}

impl CsvTradeAdapter {
    pub fn new(path: PathBuf, season: i32) -> Self {
        Self { path, season }
    }
}

impl TradePort for CsvTradeAdapter {
    fn load_trade(&self) -> Result<TradeProposal, TradefairError> {
        let content = fs::read_to_string(&self.path)?;
        parse_trade_sheet(&content, self.season)
    }
}

pub fn parse_trade_sheet(content: &str, season: i32) -> Result<TradeProposal, TradefairError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let headers = rdr
        .headers()
        .map_err(|e| TradefairError::TradeSheet {
            line: 1,
            reason: format!("CSV header error: {}", e),
        })?
        .clone();

    let mut proposal = TradeProposal::default();
    for result in rdr.records() {
        let record = result.map_err(|e| TradefairError::TradeSheet {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: format!("CSV parse error: {}", e),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let sheet_error = |reason: String| TradefairError::TradeSheet { line, reason };

        let row: SheetRow = record
            .deserialize(Some(&headers))
            .map_err(|e| sheet_error(format!("invalid row: {}", e)))?;

        let side: TradeSide = row.side.parse().map_err(|e| sheet_error(format!("{e}")))?;
        let asset = build_asset(row, season).map_err(|e| match e {
            TradefairError::TradeSheet { reason, .. } => sheet_error(reason),
            TradefairError::UnknownPick { descriptor } => TradefairError::UnknownPick {
                descriptor: format!("{descriptor} (line {line})"),
            },
            other => sheet_error(other.to_string()),
        })?;
        proposal.push(side, asset);
    }

    tracing::debug!(
        team_a = proposal.team_a.len(),
        team_b = proposal.team_b.len(),
        "trade sheet parsed"
    );
    Ok(proposal)
}

fn build_asset(row: SheetRow, season: i32) -> Result<TradeAsset, TradefairError> {
    let position: Position = row.position.parse()?;
    let name = row.name.filter(|n| !n.is_empty());

    if position != Position::Pick {
        let name = name.ok_or_else(|| row_error("player rows need a name"))?;
        let value = row
            .value
            .ok_or_else(|| row_error(format!("missing value for {name}")))?;
        check_value(value)?;
        return Ok(TradeAsset::player(&name, position, value, row.tier));
    }

    let slot = match row.pick_position.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(s.parse::<PickSlot>()?),
        None => None,
    };
    let descriptor = match row.pick.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(s.parse::<PickDescriptor>()?),
        None => row
            .pick_round
            .map(|round| PickDescriptor::new(None, round, slot.unwrap_or(PickSlot::Mid))),
    };

    let value = match (row.value, descriptor) {
        (Some(value), _) => value,
        (None, Some(d)) => d.baseline_value(season)?,
        (None, None) => {
            return Err(row_error(
                "pick rows need a value, a pick descriptor or a pick_round",
            ));
        }
    };
    check_value(value)?;

    let name = name
        .or_else(|| descriptor.map(|d| d.to_string()))
        .unwrap_or_else(|| "Draft pick".to_string());
    Ok(TradeAsset::pick(
        &name,
        value,
        row.pick_round.or(descriptor.map(|d| d.round)),
        slot.or(descriptor.map(|d| d.slot)),
    ))
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    team: String,
    name: String,
    position: String,
    value: f64,
    #[serde(default)]
    tier: Option<u8>,
}

pub struct CsvRosterAdapter {
    path: PathBuf,
}

impl CsvRosterAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RosterPort for CsvRosterAdapter {
    fn load_rosters(&self) -> Result<LeagueRosters, TradefairError> {
        let content = fs::read_to_string(&self.path)?;
        parse_roster_sheet(&content)
    }
}

pub fn parse_roster_sheet(content: &str) -> Result<LeagueRosters, TradefairError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let headers = rdr
        .headers()
        .map_err(|e| TradefairError::RosterSheet {
            line: 1,
            reason: format!("CSV header error: {}", e),
        })?
        .clone();

    let mut rosters = LeagueRosters::new();
    for result in rdr.records() {
        let record = result.map_err(|e| TradefairError::RosterSheet {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: format!("CSV parse error: {}", e),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let roster_error = |reason: String| TradefairError::RosterSheet { line, reason };

        let row: RosterRow = record
            .deserialize(Some(&headers))
            .map_err(|e| roster_error(format!("invalid row: {}", e)))?;
        if row.team.is_empty() || row.name.is_empty() {
            return Err(roster_error("rows need a team and a name".to_string()));
        }
        let position: Position = row
            .position
            .parse()
            .map_err(|e| roster_error(format!("{e}")))?;
        check_value(row.value).map_err(|e| match e {
            TradefairError::TradeSheet { reason, .. } => roster_error(reason),
            other => roster_error(other.to_string()),
        })?;

        let asset = if position == Position::Pick {
            TradeAsset::pick(&row.name, row.value, None, None)
        } else {
            TradeAsset::player(&row.name, position, row.value, row.tier)
        };
        rosters.entry(row.team).or_default().push(asset);
    }

    tracing::debug!(teams = rosters.len(), "roster sheet parsed");
    Ok(rosters)
}

fn check_value(value: f64) -> Result<(), TradefairError> {
    if !value.is_finite() || value < 0.0 {
        return Err(row_error(format!(
            "value must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

fn row_error(reason: impl Into<String>) -> TradefairError {
    TradefairError::TradeSheet {
        line: 0,
        reason: reason.into(),
    }
}
