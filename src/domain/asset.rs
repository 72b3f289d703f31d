//! Trade asset types and league context enums.
//!
//! - `Position`: offensive, IDP, or the `PICK` sentinel
//! - `PickSlot`: early / mid / late placement of a draft pick within its round
//! - `TradeAsset`: one valued item on one side of a proposed trade
//! - `SeasonPhase`, `LeagueFormat`: league context supplied by the caller

use crate::domain::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    Dl,
    Lb,
    Db,
    Pick,
}

impl Position {
    /// QB, RB and TE have less tradable depth than WR.
    pub fn is_scarce(self) -> bool {
        matches!(self, Position::Qb | Position::Rb | Position::Te)
    }

    pub fn is_idp(self) -> bool {
        matches!(self, Position::Dl | Position::Lb | Position::Db)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Qb => "QB",
            Position::Rb => "RB",
            Position::Wr => "WR",
            Position::Te => "TE",
            Position::Dl => "DL",
            Position::Lb => "LB",
            Position::Db => "DB",
            Position::Pick => "PICK",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::Qb),
            "RB" => Ok(Position::Rb),
            "WR" => Ok(Position::Wr),
            "TE" => Ok(Position::Te),
            "DL" => Ok(Position::Dl),
            "LB" => Ok(Position::Lb),
            "DB" => Ok(Position::Db),
            "PICK" => Ok(Position::Pick),
            _ => Err(ParseEnumError::new("position", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickSlot {
    Early,
    Mid,
    Late,
}

impl PickSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            PickSlot::Early => "early",
            PickSlot::Mid => "mid",
            PickSlot::Late => "late",
        }
    }
}

impl fmt::Display for PickSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PickSlot {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(PickSlot::Early),
            "mid" | "middle" => Ok(PickSlot::Mid),
            "late" => Ok(PickSlot::Late),
            _ => Err(ParseEnumError::new("pick position", s)),
        }
    }
}

/// One item on one side of a proposed trade.
///
/// `value` is the canonical display value and is never modified by the
/// evaluator. Picks normally carry no tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeAsset {
    pub name: String,
    pub position: Position,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<u8>,
    #[serde(default)]
    pub is_pick: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_round: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick_position: Option<PickSlot>,
}

impl TradeAsset {
    pub fn player(name: &str, position: Position, value: f64, tier: Option<u8>) -> Self {
        Self {
            name: name.to_string(),
            position,
            value,
            tier,
            is_pick: false,
            pick_round: None,
            pick_position: None,
        }
    }

    pub fn pick(name: &str, value: f64, round: Option<u8>, slot: Option<PickSlot>) -> Self {
        Self {
            name: name.to_string(),
            position: Position::Pick,
            value,
            tier: None,
            is_pick: true,
            pick_round: round,
            pick_position: slot,
        }
    }

    /// An asset is a pick if flagged as one or listed under the `PICK` position.
    pub fn is_pick(&self) -> bool {
        self.is_pick || self.position == Position::Pick
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    #[default]
    Preseason,
    RegularSeason,
    Playoffs,
    Offseason,
}

impl SeasonPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SeasonPhase::Preseason => "preseason",
            SeasonPhase::RegularSeason => "regular_season",
            SeasonPhase::Playoffs => "playoffs",
            SeasonPhase::Offseason => "offseason",
        }
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SeasonPhase {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "preseason" => Ok(SeasonPhase::Preseason),
            "regular_season" | "regular" => Ok(SeasonPhase::RegularSeason),
            "playoffs" => Ok(SeasonPhase::Playoffs),
            "offseason" => Ok(SeasonPhase::Offseason),
            _ => Err(ParseEnumError::new("season phase", s)),
        }
    }
}

/// League format. Accepted by the evaluator but does not yet change scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeagueFormat {
    #[default]
    Dynasty,
    Redraft,
}

impl LeagueFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LeagueFormat::Dynasty => "dynasty",
            LeagueFormat::Redraft => "redraft",
        }
    }
}

impl fmt::Display for LeagueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LeagueFormat {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dynasty" => Ok(LeagueFormat::Dynasty),
            "redraft" => Ok(LeagueFormat::Redraft),
            _ => Err(ParseEnumError::new("league format", s)),
        }
    }
}

/// One of the two parties to a trade. Each side's assets are what it gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    A,
    B,
}

impl TradeSide {
    pub fn other(self) -> Self {
        match self {
            TradeSide::A => TradeSide::B,
            TradeSide::B => TradeSide::A,
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::A => f.write_str("Team A"),
            TradeSide::B => f.write_str("Team B"),
        }
    }
}

impl FromStr for TradeSide {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" | "TEAM A" => Ok(TradeSide::A),
            "B" | "TEAM B" => Ok(TradeSide::B),
            _ => Err(ParseEnumError::new("side", s)),
        }
    }
}

/// League context flags for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluateOptions {
    pub is_superflex: bool,
    pub current_phase: SeasonPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parses_case_insensitively() {
        assert_eq!("qb".parse::<Position>().unwrap(), Position::Qb);
        assert_eq!(" Te ".parse::<Position>().unwrap(), Position::Te);
        assert_eq!("PICK".parse::<Position>().unwrap(), Position::Pick);
        assert!("K".parse::<Position>().is_err());
    }

    #[test]
    fn scarce_positions() {
        assert!(Position::Qb.is_scarce());
        assert!(Position::Rb.is_scarce());
        assert!(Position::Te.is_scarce());
        assert!(!Position::Wr.is_scarce());
        assert!(!Position::Lb.is_scarce());
        assert!(!Position::Pick.is_scarce());
    }

    #[test]
    fn idp_positions() {
        assert!(Position::Dl.is_idp());
        assert!(Position::Lb.is_idp());
        assert!(Position::Db.is_idp());
        assert!(!Position::Qb.is_idp());
    }

    #[test]
    fn pick_detection_uses_flag_or_position() {
        let flagged = TradeAsset {
            is_pick: true,
            ..TradeAsset::player("2026 1st", Position::Wr, 5000.0, None)
        };
        assert!(flagged.is_pick());

        let by_position = TradeAsset {
            is_pick: false,
            ..TradeAsset::pick("2026 2nd", 2000.0, Some(2), None)
        };
        assert!(by_position.is_pick());

        let player = TradeAsset::player("Player", Position::Rb, 4000.0, Some(2));
        assert!(!player.is_pick());
    }

    #[test]
    fn season_phase_round_trips_through_display() {
        for phase in [
            SeasonPhase::Preseason,
            SeasonPhase::RegularSeason,
            SeasonPhase::Playoffs,
            SeasonPhase::Offseason,
        ] {
            assert_eq!(phase.to_string().parse::<SeasonPhase>().unwrap(), phase);
        }
        assert_eq!(
            "regular-season".parse::<SeasonPhase>().unwrap(),
            SeasonPhase::RegularSeason
        );
    }

    #[test]
    fn league_format_defaults_to_dynasty() {
        assert_eq!(LeagueFormat::default(), LeagueFormat::Dynasty);
        assert_eq!("Redraft".parse::<LeagueFormat>().unwrap(), LeagueFormat::Redraft);
        assert!("keeper".parse::<LeagueFormat>().is_err());
    }

    #[test]
    fn pick_slot_accepts_middle() {
        assert_eq!("middle".parse::<PickSlot>().unwrap(), PickSlot::Mid);
        assert_eq!("EARLY".parse::<PickSlot>().unwrap(), PickSlot::Early);
        assert!("first".parse::<PickSlot>().is_err());
    }

    #[test]
    fn trade_side_parsing_and_other() {
        assert_eq!("a".parse::<TradeSide>().unwrap(), TradeSide::A);
        assert_eq!("Team B".parse::<TradeSide>().unwrap(), TradeSide::B);
        assert!("C".parse::<TradeSide>().is_err());
        assert_eq!(TradeSide::A.other(), TradeSide::B);
        assert_eq!(TradeSide::B.to_string(), "Team B");
    }

    #[test]
    fn default_options() {
        let opts = EvaluateOptions::default();
        assert!(!opts.is_superflex);
        assert_eq!(opts.current_phase, SeasonPhase::Preseason);
    }
}
