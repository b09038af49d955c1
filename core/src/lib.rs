//! Assigns a league roster to teams with an even split of experienced and
//! inexperienced players, and serves a text menu of per-team stats.

pub mod balance;
pub mod logging;
pub mod menu;
pub mod normalize;
pub mod roster;
pub mod stats;
pub mod types;

pub use balance::{balance_teams, BalanceError};
pub use normalize::{clean_roster, normalize_player, NormalizeError};
pub use stats::TeamStats;
pub use types::{Player, Team, TeamName, TeamRoster};
