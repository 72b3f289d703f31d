//! Trade source port trait.
//!
//! Implementations resolve asset values before the proposal reaches the
//! evaluator; the evaluator trusts them verbatim.

use crate::domain::error::TradefairError;
use crate::domain::proposal::TradeProposal;

pub trait TradePort {
    fn load_trade(&self) -> Result<TradeProposal, TradefairError>;
}
