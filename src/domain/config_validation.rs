//! Configuration validation.
//!
//! Validates the league and report sections before a trade is evaluated.

use crate::domain::asset::{LeagueFormat, SeasonPhase};
use crate::domain::error::TradefairError;
use crate::ports::config_port::{ConfigPort, parse_flag};

pub fn validate_league_config(config: &dyn ConfigPort) -> Result<(), TradefairError> {
    validate_format(config)?;
    validate_phase(config)?;
    validate_superflex(config)?;
    validate_season(config)?;
    validate_report(config)?;
    Ok(())
}

fn validate_format(config: &dyn ConfigPort) -> Result<(), TradefairError> {
    if let Some(value) = config.get_string("league", "format") {
        if value.parse::<LeagueFormat>().is_err() {
            return Err(TradefairError::ConfigInvalid {
                section: "league".to_string(),
                key: "format".to_string(),
                reason: "format must be dynasty or redraft".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_phase(config: &dyn ConfigPort) -> Result<(), TradefairError> {
    if let Some(value) = config.get_string("league", "phase") {
        if value.parse::<SeasonPhase>().is_err() {
            return Err(TradefairError::ConfigInvalid {
                section: "league".to_string(),
                key: "phase".to_string(),
                reason: "phase must be preseason, regular_season, playoffs or offseason"
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn validate_superflex(config: &dyn ConfigPort) -> Result<(), TradefairError> {
    if let Some(value) = config.get_string("league", "superflex") {
        // get_bool silently falls back to the default, so check the raw text here
        if parse_flag(&value).is_none() {
            return Err(TradefairError::ConfigInvalid {
                section: "league".to_string(),
                key: "superflex".to_string(),
                reason: "superflex must be true or false".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_season(config: &dyn ConfigPort) -> Result<(), TradefairError> {
    let Some(value) = config.get_string("league", "season") else {
        return Ok(());
    };
    match value.trim().parse::<i32>() {
        Ok(season) if season > 0 => Ok(()),
        _ => Err(TradefairError::ConfigInvalid {
            section: "league".to_string(),
            key: "season".to_string(),
            reason: "season must be a positive year".to_string(),
        }),
    }
}

fn validate_report(config: &dyn ConfigPort) -> Result<(), TradefairError> {
    if let Some(value) = config.get_string("report", "format") {
        match value.trim().to_lowercase().as_str() {
            "text" | "json" => {}
            _ => {
                return Err(TradefairError::ConfigInvalid {
                    section: "report".to_string(),
                    key: "format".to_string(),
                    reason: "report format must be text or json".to_string(),
                })
            }
        }
    }
    if let Some(value) = config.get_string("report", "output") {
        if value.trim().is_empty() {
            return Err(TradefairError::ConfigInvalid {
                section: "report".to_string(),
                key: "output".to_string(),
                reason: "output path must not be empty".to_string(),
            });
        }
    }
    Ok(())
}
