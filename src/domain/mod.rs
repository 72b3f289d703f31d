//! Core domain types and trade evaluation logic.

pub mod asset;
pub mod config_validation;
pub mod error;
pub mod evaluation;
pub mod flag;
pub mod league;
pub mod pick_value;
pub mod positional_analysis;
pub mod proposal;
pub mod roster;
pub mod rules;
pub mod tier_analysis;
pub mod weights;
