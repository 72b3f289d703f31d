//! A proposed trade: the assets each side gives up.

use crate::domain::asset::{TradeAsset, TradeSide};
use crate::domain::evaluation::{self, TradeEvaluationResult};
use crate::domain::league::LeagueContext;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeProposal {
    pub team_a: Vec<TradeAsset>,
    pub team_b: Vec<TradeAsset>,
}

impl TradeProposal {
    pub fn new(team_a: Vec<TradeAsset>, team_b: Vec<TradeAsset>) -> Self {
        Self { team_a, team_b }
    }

    pub fn side(&self, side: TradeSide) -> &[TradeAsset] {
        match side {
            TradeSide::A => &self.team_a,
            TradeSide::B => &self.team_b,
        }
    }

    pub fn push(&mut self, side: TradeSide, asset: TradeAsset) {
        match side {
            TradeSide::A => self.team_a.push(asset),
            TradeSide::B => self.team_b.push(asset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }

    pub fn evaluate(&self, league: &LeagueContext) -> TradeEvaluationResult {
        evaluation::evaluate(&self.team_a, &self.team_b, league.format, league.options)
    }
}
