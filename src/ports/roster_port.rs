//! League roster source port trait.

use crate::domain::error::TradefairError;
use crate::domain::roster::LeagueRosters;

pub trait RosterPort {
    fn load_rosters(&self) -> Result<LeagueRosters, TradefairError>;
}
