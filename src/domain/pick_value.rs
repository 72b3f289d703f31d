//! Draft pick baseline values.
//!
//! Baselines are a fallback reference for picks whose value the caller did
//! not resolve. The evaluator itself always scores the supplied `value`.
//!
//! Descriptors come in two shapes:
//! - table keys: `early_1`, `mid_2`, `late_4`
//! - sheet labels: `2026 1st (Early)`, `2027 2nd`, `3rd (Late)`

use crate::domain::asset::PickSlot;
use crate::domain::error::TradefairError;
use std::fmt;
use std::str::FromStr;

pub const MAX_PICK_ROUND: u8 = 4;

pub fn baseline_for(slot: PickSlot, round: u8) -> Option<f64> {
    let value = match (slot, round) {
        (PickSlot::Early, 1) => 8500.0,
        (PickSlot::Mid, 1) => 7300.0,
        (PickSlot::Late, 1) => 6100.0,
        (PickSlot::Early, 2) => 3650.0,
        (PickSlot::Mid, 2) => 2900.0,
        (PickSlot::Late, 2) => 2400.0,
        (PickSlot::Early, 3) => 1500.0,
        (PickSlot::Mid, 3) => 1200.0,
        (PickSlot::Late, 3) => 1000.0,
        (PickSlot::Early, 4) => 600.0,
        (PickSlot::Mid, 4) => 500.0,
        (PickSlot::Late, 4) => 400.0,
        _ => return None,
    };
    Some(value)
}

/// Look up a baseline by `{early|mid|late}_{round}` key.
pub fn pick_baseline_value(key: &str) -> Option<f64> {
    let (slot, round) = key.trim().split_once('_')?;
    let slot: PickSlot = slot.parse().ok()?;
    let round: u8 = round.parse().ok()?;
    baseline_for(slot, round)
}

/// Multiplier for picks in future drafts. `None` for drafts already held.
pub fn season_discount(pick_season: i32, current_season: i32) -> Option<f64> {
    match pick_season - current_season {
        n if n < 0 => None,
        0 => Some(1.0),
        1 => Some(0.90),
        _ => Some(0.80),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickDescriptor {
    pub season: Option<i32>,
    pub round: u8,
    pub slot: PickSlot,
}

impl PickDescriptor {
    pub fn new(season: Option<i32>, round: u8, slot: PickSlot) -> Self {
        Self {
            season,
            round,
            slot,
        }
    }

    pub fn table_key(&self) -> String {
        format!("{}_{}", self.slot, self.round)
    }

    /// Baseline for this pick, discounted for drafts after `current_season`.
    /// A descriptor without a season is treated as the current draft.
    pub fn baseline_value(&self, current_season: i32) -> Result<f64, TradefairError> {
        let unknown = || TradefairError::UnknownPick {
            descriptor: self.to_string(),
        };
        let base = pick_baseline_value(&self.table_key()).ok_or_else(unknown)?;
        let discount =
            season_discount(self.season.unwrap_or(current_season), current_season)
                .ok_or_else(unknown)?;
        Ok(base * discount)
    }
}

impl fmt::Display for PickDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(season) = self.season {
            write!(f, "{} ", season)?;
        }
        let slot = match self.slot {
            PickSlot::Early => "Early",
            PickSlot::Mid => "Mid",
            PickSlot::Late => "Late",
        };
        write!(f, "{} ({})", ordinal(self.round), slot)
    }
}

fn ordinal(round: u8) -> String {
    let suffix = match round {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{}{}", round, suffix)
}

fn parse_ordinal(token: &str) -> Option<u8> {
    let lower = token.to_lowercase();
    let digits = lower
        .strip_suffix("st")
        .or_else(|| lower.strip_suffix("nd"))
        .or_else(|| lower.strip_suffix("rd"))
        .or_else(|| lower.strip_suffix("th"))?;
    let round: u8 = digits.parse().ok()?;
    if ordinal(round).to_lowercase() != lower {
        return None;
    }
    (1..=MAX_PICK_ROUND).contains(&round).then_some(round)
}

impl FromStr for PickDescriptor {
    type Err = TradefairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TradefairError::UnknownPick {
            descriptor: s.to_string(),
        };
        let input = s.trim();

        if let Some((slot, round)) = input.split_once('_') {
            let slot: PickSlot = slot.parse().map_err(|_| unknown())?;
            let round: u8 = round.parse().map_err(|_| unknown())?;
            if baseline_for(slot, round).is_none() {
                return Err(unknown());
            }
            return Ok(Self::new(None, round, slot));
        }

        let (head, slot) = match input.split_once('(') {
            Some((head, rest)) => {
                let inner = rest.strip_suffix(')').ok_or_else(unknown)?;
                let slot: PickSlot = inner.parse().map_err(|_| unknown())?;
                (head.trim(), slot)
            }
            None => (input, PickSlot::Mid),
        };

        let tokens: Vec<&str> = head.split_whitespace().collect();
        let (season, round_token) = match tokens.as_slice() {
            [round] => (None, *round),
            [season, round] => {
                let season: i32 = season.parse().map_err(|_| unknown())?;
                (Some(season), *round)
            }
            _ => return Err(unknown()),
        };
        let round = parse_ordinal(round_token).ok_or_else(unknown)?;

        Ok(Self::new(season, round, slot))
    }
}
