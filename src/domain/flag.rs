//! Fairness flags emitted by the rule evaluators.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    ElitePlayerSplit,
    TierMismatch,
    PackageForStar,
    ScarcityViolation,
    PositionalImbalance,
    PickOverpay,
    ConsolidationAbuse,
}

impl FlagType {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagType::ElitePlayerSplit => "ELITE_PLAYER_SPLIT",
            FlagType::TierMismatch => "TIER_MISMATCH",
            FlagType::PackageForStar => "PACKAGE_FOR_STAR",
            FlagType::ScarcityViolation => "SCARCITY_VIOLATION",
            FlagType::PositionalImbalance => "POSITIONAL_IMBALANCE",
            FlagType::PickOverpay => "PICK_OVERPAY",
            FlagType::ConsolidationAbuse => "CONSOLIDATION_ABUSE",
        }
    }
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FairnessFlag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub severity: Severity,
    pub penalty: u32,
    pub message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, f64>,
}

impl FairnessFlag {
    pub fn new(flag_type: FlagType, severity: Severity, penalty: u32, message: String) -> Self {
        Self {
            flag_type,
            severity,
            penalty,
            message,
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: f64) -> Self {
        self.details.insert(key.to_string(), value);
        self
    }
}
