//! League context resolved from configuration.

use crate::domain::asset::{EvaluateOptions, LeagueFormat, SeasonPhase};
use crate::domain::error::TradefairError;
use crate::ports::config_port::ConfigPort;
use chrono::Datelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueContext {
    pub format: LeagueFormat,
    pub options: EvaluateOptions,
    /// Season year used to discount future draft picks.
    pub season: i32,
}

impl Default for LeagueContext {
    fn default() -> Self {
        Self {
            format: LeagueFormat::default(),
            options: EvaluateOptions::default(),
            season: current_season(),
        }
    }
}

impl LeagueContext {
    /// Read the `[league]` section. Missing keys fall back to defaults.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, TradefairError> {
        let format = match config.get_string("league", "format") {
            Some(s) => s.parse().map_err(|_| invalid("format", &s))?,
            None => LeagueFormat::default(),
        };
        let current_phase = match config.get_string("league", "phase") {
            Some(s) => s.parse::<SeasonPhase>().map_err(|_| invalid("phase", &s))?,
            None => SeasonPhase::default(),
        };
        let season = config.get_int("league", "season", current_season() as i64);

        Ok(Self {
            format,
            options: EvaluateOptions {
                is_superflex: config.get_bool("league", "superflex", false),
                current_phase,
            },
            season: i32::try_from(season).map_err(|_| TradefairError::ConfigInvalid {
                section: "league".to_string(),
                key: "season".to_string(),
                reason: format!("season {season} is out of range"),
            })?,
        })
    }
}

pub fn current_season() -> i32 {
    chrono::Utc::now().year()
}

fn invalid(key: &str, value: &str) -> TradefairError {
    TradefairError::ConfigInvalid {
        section: "league".to_string(),
        key: key.to_string(),
        reason: format!("unrecognised value {value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    #[test]
    fn reads_full_league_section() {
        let config = FileConfigAdapter::parse(
            "[league]\nformat = redraft\nsuperflex = yes\nphase = playoffs\nseason = 2026\n",
        )
        .unwrap();
        let ctx = LeagueContext::from_config(&config).unwrap();
        assert_eq!(ctx.format, LeagueFormat::Redraft);
        assert!(ctx.options.is_superflex);
        assert_eq!(ctx.options.current_phase, SeasonPhase::Playoffs);
        assert_eq!(ctx.season, 2026);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = FileConfigAdapter::parse("[league]\n").unwrap();
        let ctx = LeagueContext::from_config(&config).unwrap();
        assert_eq!(ctx.format, LeagueFormat::Dynasty);
        assert!(!ctx.options.is_superflex);
        assert_eq!(ctx.options.current_phase, SeasonPhase::Preseason);
        assert_eq!(ctx.season, current_season());
    }

    #[test]
    fn unknown_phase_is_invalid() {
        let config = FileConfigAdapter::parse("[league]\nphase = midseason\n").unwrap();
        let err = LeagueContext::from_config(&config).unwrap_err();
        assert!(matches!(err, TradefairError::ConfigInvalid { key, .. } if key == "phase"));
    }
}
