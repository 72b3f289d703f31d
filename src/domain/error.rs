//! Domain error types.
//!
//! The evaluation engine itself has no error states; these errors belong to
//! the layers that build its inputs (config, trade sheets, pick descriptors)
//! and write its outputs.

/// Failure to parse one of the domain's string-keyed enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Top-level error type for tradefair.
#[derive(Debug, thiserror::Error)]
pub enum TradefairError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trade sheet error on line {line}: {reason}")]
    TradeSheet { line: u64, reason: String },

    #[error("roster sheet error on line {line}: {reason}")]
    RosterSheet { line: u64, reason: String },

    #[error("team {team:?} not found in rosters")]
    UnknownTeam { team: String },

    #[error(transparent)]
    UnknownValue(#[from] ParseEnumError),

    #[error("unknown pick descriptor: {descriptor}")]
    UnknownPick { descriptor: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradefairError> for std::process::ExitCode {
    fn from(err: &TradefairError) -> Self {
        let code: u8 = match err {
            TradefairError::Io(_) | TradefairError::Report { .. } => 1,
            TradefairError::ConfigParse { .. }
            | TradefairError::ConfigMissing { .. }
            | TradefairError::ConfigInvalid { .. } => 2,
            TradefairError::TradeSheet { .. }
            | TradefairError::RosterSheet { .. }
            | TradefairError::UnknownTeam { .. }
            | TradefairError::UnknownValue(_) => 3,
            TradefairError::UnknownPick { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
