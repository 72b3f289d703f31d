//! Port traits at the boundary between the evaluator and the outside world.

pub mod config_port;
pub mod report_port;
pub mod roster_port;
pub mod trade_port;
