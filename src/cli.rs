//! CLI definition and dispatch.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::{CsvRosterAdapter, CsvTradeAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::asset::{LeagueFormat, SeasonPhase};
use crate::domain::config_validation::validate_league_config;
use crate::domain::error::TradefairError;
use crate::domain::league::{LeagueContext, current_season};
use crate::domain::pick_value::PickDescriptor;
use crate::domain::roster::RosterReport;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::roster_port::RosterPort;
use crate::ports::trade_port::TradePort;

#[derive(Parser, Debug)]
#[command(name = "tradefair", about = "Dynasty trade fairness evaluator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a trade sheet
    Evaluate {
        #[arg(short, long)]
        trade: PathBuf,
        #[command(flatten)]
        league: LeagueArgs,
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Grade a team's roster and suggest complementary trades
    Roster {
        #[arg(short, long)]
        rosters: PathBuf,
        /// Team to analyze; falls back to `[league] team`
        #[arg(long)]
        team: Option<String>,
        #[command(flatten)]
        league: LeagueArgs,
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a league configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the baseline value of a draft pick
    PickValue {
        descriptor: String,
        #[arg(long)]
        season: Option<i32>,
    },
}

/// League flags shared by `evaluate` and `roster`.
#[derive(Args, Debug, Clone, Default)]
pub struct LeagueArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long, conflicts_with = "no_superflex")]
    pub superflex: bool,
    #[arg(long)]
    pub no_superflex: bool,
    #[arg(long)]
    pub phase: Option<SeasonPhase>,
    #[arg(long)]
    pub format: Option<LeagueFormat>,
    #[arg(long)]
    pub season: Option<i32>,
}

impl LeagueArgs {
    pub fn overrides(&self) -> LeagueOverrides {
        let superflex = match (self.superflex, self.no_superflex) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        LeagueOverrides {
            superflex,
            phase: self.phase,
            format: self.format,
            season: self.season,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct LeagueOverrides {
    pub superflex: Option<bool>,
    pub phase: Option<SeasonPhase>,
    pub format: Option<LeagueFormat>,
    pub season: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Evaluate {
            trade,
            league,
            json,
            output,
        } => run_evaluate(
            &trade,
            league.config.as_ref(),
            &league.overrides(),
            json,
            output.as_ref(),
        ),
        Command::Roster {
            rosters,
            team,
            league,
            json,
            output,
        } => run_roster(
            &rosters,
            team.as_deref(),
            league.config.as_ref(),
            &league.overrides(),
            json,
            output.as_ref(),
        ),
        Command::Validate { config } => run_validate(&config),
        Command::PickValue { descriptor, season } => run_pick_value(&descriptor, season),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::load(path)
        .inspect(|adapter| tracing::debug!(source = adapter.source(), "config loaded"))
        .map_err(|err| {
            tracing::error!("{err}");
            ExitCode::from(&err)
        })
}

fn load_optional_config(path: Option<&PathBuf>) -> Result<Option<FileConfigAdapter>, ExitCode> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            load_config(path).map(Some)
        }
        None => Ok(None),
    }
}

pub fn build_league_context(
    config: Option<&dyn ConfigPort>,
    overrides: &LeagueOverrides,
) -> Result<LeagueContext, TradefairError> {
    let mut league = match config {
        Some(config) => {
            validate_league_config(config)?;
            LeagueContext::from_config(config)?
        }
        None => LeagueContext::default(),
    };

    if let Some(superflex) = overrides.superflex {
        league.options.is_superflex = superflex;
    }
    if let Some(phase) = overrides.phase {
        league.options.current_phase = phase;
    }
    if let Some(format) = overrides.format {
        league.format = format;
    }
    if let Some(season) = overrides.season {
        league.season = season;
    }
    Ok(league)
}

/// `--json` wins over `[report] format`; text is the default.
pub fn resolve_report_format(json_flag: bool, config: Option<&dyn ConfigPort>) -> ReportFormat {
    if json_flag {
        return ReportFormat::Json;
    }
    match config.and_then(|c| c.get_string("report", "format")) {
        Some(f) if f.trim().eq_ignore_ascii_case("json") => ReportFormat::Json,
        _ => ReportFormat::Text,
    }
}

/// `--team` wins over `[league] team`; one of them is required.
pub fn resolve_team(
    team_flag: Option<&str>,
    config: Option<&dyn ConfigPort>,
) -> Result<String, TradefairError> {
    team_flag
        .map(str::to_string)
        .or_else(|| config.and_then(|c| c.get_string("league", "team")))
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| TradefairError::ConfigMissing {
            section: "league".to_string(),
            key: "team".to_string(),
        })
}

fn report_adapter(format: ReportFormat) -> Box<dyn ReportPort> {
    match format {
        ReportFormat::Json => Box::new(JsonReportAdapter::new(true)),
        ReportFormat::Text => Box::new(TextReportAdapter),
    }
}

fn resolve_league(
    config: Option<&dyn ConfigPort>,
    overrides: &LeagueOverrides,
) -> Result<LeagueContext, ExitCode> {
    let league = build_league_context(config, overrides).map_err(|e| {
        tracing::error!("{e}");
        ExitCode::from(&e)
    })?;
    tracing::info!(
        format = %league.format,
        phase = %league.options.current_phase,
        superflex = league.options.is_superflex,
        season = league.season,
        "League context resolved"
    );
    Ok(league)
}

/// `--output` wins over `[report] output`; stdout when neither is set.
pub fn resolve_output_path(
    output_flag: Option<&PathBuf>,
    config: Option<&dyn ConfigPort>,
) -> Option<PathBuf> {
    output_flag.cloned().or_else(|| {
        config
            .and_then(|c| c.get_string("report", "output"))
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
}

pub fn run_evaluate(
    trade_path: &PathBuf,
    config_path: Option<&PathBuf>,
    overrides: &LeagueOverrides,
    json: bool,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: Load config
    let adapter = match load_optional_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let config = adapter.as_ref().map(|a| a as &dyn ConfigPort);

    // Stage 2: Resolve league context
    let league = match resolve_league(config, overrides) {
        Ok(l) => l,
        Err(code) => return code,
    };

    // Stage 3: Load trade sheet
    tracing::info!("Loading trade from {}", trade_path.display());
    let trade_port = CsvTradeAdapter::new(trade_path.clone(), league.season);
    let proposal = match trade_port.load_trade() {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };
    if proposal.is_empty() {
        tracing::warn!("trade sheet has no assets");
    }

    // Stage 4: Evaluate
    let result = proposal.evaluate(&league);
    tracing::info!(
        score = result.fairness_score,
        recommendation = %result.recommendation,
        flags = result.flags.len(),
        "Trade evaluated"
    );

    // Stage 5: Write report
    let output = resolve_output_path(output_path, config);
    let report = report_adapter(resolve_report_format(json, config));

    match report.write(&proposal, &league, &result, output.as_deref()) {
        Ok(()) => {
            if let Some(path) = output.as_deref() {
                tracing::info!("Report written to: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("failed to write report: {e}");
            (&e).into()
        }
    }
}

pub fn run_roster(
    rosters_path: &PathBuf,
    team_flag: Option<&str>,
    config_path: Option<&PathBuf>,
    overrides: &LeagueOverrides,
    json: bool,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    // Stage 1: Load config
    let adapter = match load_optional_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let config = adapter.as_ref().map(|a| a as &dyn ConfigPort);

    // Stage 2: Resolve league context and team
    let league = match resolve_league(config, overrides) {
        Ok(l) => l,
        Err(code) => return code,
    };
    let team = match resolve_team(team_flag, config) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };

    // Stage 3: Load rosters
    tracing::info!("Loading rosters from {}", rosters_path.display());
    let rosters = match CsvRosterAdapter::new(rosters_path.clone()).load_rosters() {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };

    // Stage 4: Analyze
    let report = match RosterReport::build(&team, &rosters, &league) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("{e}");
            return (&e).into();
        }
    };
    tracing::info!(
        team = %report.team,
        suggestions = report.suggestions.len(),
        "Roster analyzed"
    );

    // Stage 5: Write report
    let output = resolve_output_path(output_path, config);
    let writer = report_adapter(resolve_report_format(json, config));
    match writer.write_roster(&league, &report, output.as_deref()) {
        Ok(()) => {
            if let Some(path) = output.as_deref() {
                tracing::info!("Report written to: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("failed to write report: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    tracing::info!("Validating league config: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    if let Err(e) = validate_league_config(&adapter) {
        tracing::error!("{e}");
        return (&e).into();
    }

    match LeagueContext::from_config(&adapter) {
        Ok(league) => {
            println!("format:    {}", league.format);
            println!("superflex: {}", league.options.is_superflex);
            println!("phase:     {}", league.options.current_phase);
            println!("season:    {}", league.season);
            tracing::info!("League configuration is valid.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            (&e).into()
        }
    }
}

/// Parse a pick descriptor and value it against `season` (or the current year).
pub fn pick_value(
    descriptor: &str,
    season: Option<i32>,
) -> Result<(PickDescriptor, f64), TradefairError> {
    let parsed: PickDescriptor = descriptor.parse()?;
    let value = parsed.baseline_value(season.unwrap_or_else(current_season))?;
    Ok((parsed, value))
}

fn run_pick_value(descriptor: &str, season: Option<i32>) -> ExitCode {
    match pick_value(descriptor, season) {
        Ok((parsed, value)) => {
            println!("{}: {:.0}", parsed, value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            (&e).into()
        }
    }
}

