//! Roster strength analysis and complementary trade suggestions.
//!
//! Strength is bucketed per position from the average adjusted value of the
//! players held there. A team with a deep, strong position (surplus) and a
//! weak or empty one (need) is matched against teams with the opposite shape,
//! and close 1-for-1 swaps that upgrade the need are proposed. Every
//! suggestion is run through the fairness evaluator before it is returned.

use crate::domain::asset::{Position, TradeAsset};
use crate::domain::error::TradefairError;
use crate::domain::evaluation::{self, Recommendation};
use crate::domain::league::LeagueContext;
use crate::domain::weights::adjusted_value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const STRONG_AVERAGE: f64 = 4500.0;
pub const AVERAGE_AVERAGE: f64 = 3000.0;
pub const SURPLUS_MIN_COUNT: usize = 3;
pub const CANDIDATES_PER_POSITION: usize = 3;
pub const MAX_SWAP_GAP: f64 = 900.0;
pub const MIN_SWAP_GAIN: f64 = 300.0;
pub const MAX_SUGGESTIONS: usize = 5;

/// Positions a roster is graded on.
pub const ROSTER_POSITIONS: [Position; 7] = [
    Position::Qb,
    Position::Rb,
    Position::Wr,
    Position::Te,
    Position::Dl,
    Position::Lb,
    Position::Db,
];

/// Every team's roster, keyed by team name.
pub type LeagueRosters = BTreeMap<String, Vec<TradeAsset>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Strong,
    Average,
    Weak,
    Empty,
}

impl Strength {
    pub fn classify(average_value: f64) -> Self {
        if average_value > STRONG_AVERAGE {
            Strength::Strong
        } else if average_value > AVERAGE_AVERAGE {
            Strength::Average
        } else {
            Strength::Weak
        }
    }

    /// Weak or empty positions are worth trading into.
    pub fn is_need(self) -> bool {
        matches!(self, Strength::Weak | Strength::Empty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Strong => "strong",
            Strength::Average => "average",
            Strength::Weak => "weak",
            Strength::Empty => "empty",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionStrength {
    pub count: usize,
    pub average_value: f64,
    pub total_value: f64,
    pub strength: Strength,
    pub top_player: Option<String>,
}

impl PositionStrength {
    fn empty() -> Self {
        Self {
            count: 0,
            average_value: 0.0,
            total_value: 0.0,
            strength: Strength::Empty,
            top_player: None,
        }
    }
}

pub type RosterStrengths = BTreeMap<Position, PositionStrength>;

/// Grade every roster position. Picks are ignored.
pub fn analyze_roster(roster: &[TradeAsset], league: &LeagueContext) -> RosterStrengths {
    ROSTER_POSITIONS
        .into_iter()
        .map(|position| {
            let players = ranked_at(roster, position, league);
            let Some((top, _)) = players.first() else {
                return (position, PositionStrength::empty());
            };
            let total_value: f64 = players.iter().map(|(_, v)| v).sum();
            let average_value = total_value / players.len() as f64;
            let grade = PositionStrength {
                count: players.len(),
                average_value,
                total_value,
                strength: Strength::classify(average_value),
                top_player: Some(top.name.clone()),
            };
            (position, grade)
        })
        .collect()
}

/// Non-pick players at `position`, best adjusted value first.
fn ranked_at<'a>(
    roster: &'a [TradeAsset],
    position: Position,
    league: &LeagueContext,
) -> Vec<(&'a TradeAsset, f64)> {
    let mut players: Vec<(&TradeAsset, f64)> = roster
        .iter()
        .filter(|a| !a.is_pick() && a.position == position)
        .map(|a| (a, adjusted_value(a, &league.options)))
        .collect();
    players.sort_by(|a, b| b.1.total_cmp(&a.1));
    players
}

fn strength_at(strengths: &RosterStrengths, position: Position) -> Strength {
    strengths
        .get(&position)
        .map(|s| s.strength)
        .unwrap_or(Strength::Empty)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeSuggestion {
    pub with_team: String,
    pub give: TradeAsset,
    pub receive: TradeAsset,
    /// Adjusted value gained by making the swap.
    pub gain: f64,
    pub rationale: String,
    pub fairness_score: u32,
    pub recommendation: Recommendation,
}

/// Up to five 1-for-1 swaps for `team`, largest gain first.
pub fn suggest_trades(
    team: &str,
    rosters: &LeagueRosters,
    league: &LeagueContext,
) -> Result<Vec<TradeSuggestion>, TradefairError> {
    let own_roster = rosters.get(team).ok_or_else(|| TradefairError::UnknownTeam {
        team: team.to_string(),
    })?;
    let own = analyze_roster(own_roster, league);

    let surplus: Vec<Position> = own
        .iter()
        .filter(|(_, s)| s.strength == Strength::Strong && s.count >= SURPLUS_MIN_COUNT)
        .map(|(p, _)| *p)
        .collect();
    let needs: Vec<Position> = own
        .iter()
        .filter(|(_, s)| s.strength.is_need())
        .map(|(p, _)| *p)
        .collect();
    if surplus.is_empty() || needs.is_empty() {
        tracing::debug!(team, "no surplus/need pair to trade from");
        return Ok(Vec::new());
    }

    let mut suggestions = Vec::new();
    for (other_team, other_roster) in rosters.iter().filter(|(name, _)| name.as_str() != team) {
        let theirs = analyze_roster(other_roster, league);

        for &give_position in &surplus {
            for &need_position in &needs {
                let they_need = matches!(
                    strength_at(&theirs, give_position),
                    Strength::Weak | Strength::Average
                );
                let they_have = strength_at(&theirs, need_position) == Strength::Strong;
                if !(they_need && they_have) {
                    continue;
                }

                let offers = ranked_at(own_roster, give_position, league);
                let targets = ranked_at(other_roster, need_position, league);
                for (give, give_value) in offers.iter().take(CANDIDATES_PER_POSITION) {
                    for (receive, receive_value) in targets.iter().take(CANDIDATES_PER_POSITION) {
                        if (give_value - receive_value).abs() >= MAX_SWAP_GAP {
                            continue;
                        }
                        let gain = receive_value - give_value;
                        if gain <= MIN_SWAP_GAIN {
                            continue;
                        }
                        suggestions.push(build_suggestion(
                            other_team,
                            give,
                            receive,
                            gain,
                            format!("upgrade {need_position} by trading surplus {give_position}"),
                            league,
                        ));
                    }
                }
            }
        }
    }

    suggestions.sort_by(|a, b| b.gain.total_cmp(&a.gain));
    suggestions.truncate(MAX_SUGGESTIONS);
    tracing::debug!(team, count = suggestions.len(), "trade suggestions built");
    Ok(suggestions)
}

fn build_suggestion(
    with_team: &str,
    give: &TradeAsset,
    receive: &TradeAsset,
    gain: f64,
    rationale: String,
    league: &LeagueContext,
) -> TradeSuggestion {
    let result = evaluation::evaluate(
        std::slice::from_ref(give),
        std::slice::from_ref(receive),
        league.format,
        league.options,
    );
    TradeSuggestion {
        with_team: with_team.to_string(),
        give: give.clone(),
        receive: receive.clone(),
        gain,
        rationale,
        fairness_score: result.fairness_score,
        recommendation: result.recommendation,
    }
}

/// Strength table and suggestions for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    pub team: String,
    pub strengths: RosterStrengths,
    pub suggestions: Vec<TradeSuggestion>,
}

impl RosterReport {
    pub fn build(
        team: &str,
        rosters: &LeagueRosters,
        league: &LeagueContext,
    ) -> Result<Self, TradefairError> {
        let roster = rosters.get(team).ok_or_else(|| TradefairError::UnknownTeam {
            team: team.to_string(),
        })?;
        Ok(Self {
            team: team.to_string(),
            strengths: analyze_roster(roster, league),
            suggestions: suggest_trades(team, rosters, league)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, position: Position, value: f64) -> TradeAsset {
        TradeAsset::player(name, position, value, None)
    }

    fn league() -> LeagueContext {
        LeagueContext {
            season: 2026,
            ..LeagueContext::default()
        }
    }

    /// Deep at WR, nothing at TE.
    fn receiver_heavy() -> Vec<TradeAsset> {
        vec![
            player("WR One", Position::Wr, 6000.0),
            player("WR Two", Position::Wr, 5800.0),
            player("WR Three", Position::Wr, 5600.0),
            player("RB One", Position::Rb, 3500.0),
        ]
    }

    /// Strong at TE, thin at WR.
    fn tight_end_heavy() -> Vec<TradeAsset> {
        vec![
            player("TE One", Position::Te, 5700.0),
            player("TE Two", Position::Te, 4500.0),
            player("WR Lone", Position::Wr, 2000.0),
        ]
    }

    fn rosters() -> LeagueRosters {
        let mut rosters = LeagueRosters::new();
        rosters.insert("Receivers".to_string(), receiver_heavy());
        rosters.insert("Tight Ends".to_string(), tight_end_heavy());
        rosters
    }

    mod strength {
        use super::*;

        #[test]
        fn buckets_by_average_adjusted_value() {
            assert_eq!(Strength::classify(4600.0), Strength::Strong);
            assert_eq!(Strength::classify(4500.0), Strength::Average);
            assert_eq!(Strength::classify(3000.0), Strength::Weak);
            assert!(Strength::Empty.is_need());
            assert!(Strength::Weak.is_need());
            assert!(!Strength::Average.is_need());
        }

        #[test]
        fn grades_every_position() {
            let strengths = analyze_roster(&receiver_heavy(), &league());
            assert_eq!(strengths.len(), ROSTER_POSITIONS.len());

            let wr = &strengths[&Position::Wr];
            assert_eq!(wr.count, 3);
            assert!((wr.average_value - 5800.0).abs() < 1e-9);
            assert!((wr.total_value - 17400.0).abs() < 1e-9);
            assert_eq!(wr.strength, Strength::Strong);
            assert_eq!(wr.top_player.as_deref(), Some("WR One"));

            // 3500 * 1.10
            assert_eq!(strengths[&Position::Rb].strength, Strength::Average);
            assert_eq!(strengths[&Position::Te].strength, Strength::Empty);
            assert_eq!(strengths[&Position::Te].top_player, None);
        }

        #[test]
        fn picks_do_not_count() {
            let roster = vec![TradeAsset::pick("1st", 8500.0, Some(1), None)];
            let strengths = analyze_roster(&roster, &league());
            assert!(strengths.values().all(|s| s.strength == Strength::Empty));
        }
    }

    mod suggestions {
        use super::*;

        #[test]
        fn swaps_surplus_for_need() {
            let suggestions = suggest_trades("Receivers", &rosters(), &league()).unwrap();

            // TE One adjusts to 6555. WR One and WR Two are within 900 of it;
            // TE Two (5175) is a downgrade for every receiver.
            assert_eq!(suggestions.len(), 2);
            assert_eq!(suggestions[0].give.name, "WR Two");
            assert_eq!(suggestions[0].receive.name, "TE One");
            assert!((suggestions[0].gain - 755.0).abs() < 1e-6);
            assert_eq!(suggestions[1].give.name, "WR One");
            assert!((suggestions[1].gain - 555.0).abs() < 1e-6);
            assert!(suggestions.iter().all(|s| s.with_team == "Tight Ends"));
            assert_eq!(suggestions[0].rationale, "upgrade TE by trading surplus WR");
        }

        #[test]
        fn suggestions_carry_a_fairness_check() {
            let suggestions = suggest_trades("Receivers", &rosters(), &league()).unwrap();
            let first = &suggestions[0];
            let expected = evaluation::evaluate(
                std::slice::from_ref(&first.give),
                std::slice::from_ref(&first.receive),
                league().format,
                league().options,
            );
            assert_eq!(first.fairness_score, expected.fairness_score);
            assert_eq!(first.recommendation, expected.recommendation);
        }

        #[test]
        fn no_surplus_means_no_suggestions() {
            let suggestions = suggest_trades("Tight Ends", &rosters(), &league()).unwrap();
            assert!(suggestions.is_empty());
        }

        #[test]
        fn partner_without_matching_shape_is_skipped() {
            let mut rosters = rosters();
            rosters.insert(
                "Also Receivers".to_string(),
                vec![
                    player("Other WR", Position::Wr, 6000.0),
                    player("Other TE", Position::Te, 2000.0),
                ],
            );
            let suggestions = suggest_trades("Receivers", &rosters, &league()).unwrap();
            assert!(suggestions.iter().all(|s| s.with_team == "Tight Ends"));
        }

        #[test]
        fn capped_at_five_sorted_by_gain() {
            let mut rosters = LeagueRosters::new();
            rosters.insert("Receivers".to_string(), receiver_heavy());
            for i in 0..4 {
                rosters.insert(
                    format!("Partner {i}"),
                    vec![
                        player(&format!("TE A{i}"), Position::Te, 5600.0 + i as f64 * 10.0),
                        player(&format!("TE B{i}"), Position::Te, 5400.0),
                        player(&format!("WR {i}"), Position::Wr, 1000.0),
                    ],
                );
            }
            let suggestions = suggest_trades("Receivers", &rosters, &league()).unwrap();
            assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
            assert!(suggestions.windows(2).all(|w| w[0].gain >= w[1].gain));
        }

        #[test]
        fn unknown_team_is_an_error() {
            let err = suggest_trades("Nobody", &rosters(), &league()).unwrap_err();
            assert!(matches!(err, TradefairError::UnknownTeam { team } if team == "Nobody"));
        }

        #[test]
        fn report_combines_grades_and_suggestions() {
            let report = RosterReport::build("Receivers", &rosters(), &league()).unwrap();
            assert_eq!(report.team, "Receivers");
            assert_eq!(report.strengths[&Position::Wr].strength, Strength::Strong);
            assert_eq!(report.suggestions.len(), 2);
        }
    }
}
