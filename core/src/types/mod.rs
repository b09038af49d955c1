//! Generic types used throughout the core codebase.

use serde::{Deserialize, Serialize};

mod teams;

pub use teams::{TeamRoster, TeamRosterError};

/// The name of a team, unique within a `TeamRoster`.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct TeamName(pub String);

impl TeamName {
    pub fn as_str(&self) -> &'_ str {
        &self.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamName {
    fn from(name: &str) -> Self {
        TeamName(name.to_string())
    }
}

/// A normalized player record. Never mutated after normalization.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) guardians: Vec<String>,
    /// Height in inches.
    pub(crate) height: u32,
    pub(crate) experienced: bool,
}

impl Player {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        guardians: Vec<String>,
        height: u32,
        experienced: bool,
    ) -> Self {
        Self {
            name: name.into(),
            guardians,
            height,
            experienced,
        }
    }

    pub fn name(&self) -> &'_ str {
        &self.name
    }

    pub fn guardians(&self) -> &'_ [String] {
        &self.guardians
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_experienced(&self) -> bool {
        self.experienced
    }
}

/// A team and the players assigned to it, in assignment order.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Team {
    pub(crate) name: TeamName,
    pub(crate) players: Vec<Player>,
}

impl Team {
    #[must_use]
    pub fn new(name: TeamName, players: Vec<Player>) -> Self {
        Self { name, players }
    }

    pub fn name(&self) -> &'_ TeamName {
        &self.name
    }

    pub fn players(&self) -> &'_ [Player] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn num_experienced(&self) -> usize {
        self.players.iter().filter(|p| p.experienced).count()
    }

    pub fn num_inexperienced(&self) -> usize {
        self.num_players() - self.num_experienced()
    }
}
