use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Team, TeamName};

/// The full set of balanced teams. Built once, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct TeamRoster {
    /// The ordered list of team names, used for menu listing.
    team_names: Vec<TeamName>,
    /// The storage for team-state. Note that the team's name is replicated
    /// inside the map -- the redundancy of keeping `team_names` alongside the
    /// map is to ensure that ordering is not lost after ser/de.
    teams: HashMap<TeamName, Team>,
}

impl TeamRoster {
    /// Build a roster from teams in display order. Team names must be unique.
    pub fn new(teams: Vec<Team>) -> Result<Self, TeamRosterError> {
        let mut team_names = Vec::with_capacity(teams.len());
        let mut by_name = HashMap::with_capacity(teams.len());
        for team in teams {
            if by_name.contains_key(&team.name) {
                return Err(TeamRosterError::DuplicateTeamName(team.name));
            }
            team_names.push(team.name.clone());
            by_name.insert(team.name.clone(), team);
        }
        Ok(Self {
            team_names,
            teams: by_name,
        })
    }

    pub fn team_names(&self) -> &'_ [TeamName] {
        &self.team_names
    }

    /// Get all of the teams, in display order.
    pub fn teams(&self) -> impl Iterator<Item = &'_ Team> {
        self.team_names
            .iter()
            .flat_map(move |name| self.teams.get(name))
    }

    /// Get a team by name. Returns `TeamDoesntExist` if not found.
    pub fn team(&self, name: &TeamName) -> Result<&'_ Team, TeamRosterError> {
        self.teams.get(name).ok_or(TeamRosterError::TeamDoesntExist)
    }

    /// Get the team at the zero-based display `index`.
    pub fn team_at(&self, index: usize) -> Option<&'_ Team> {
        self.team_names
            .get(index)
            .and_then(|name| self.teams.get(name))
    }

    pub fn len(&self) -> usize {
        self.team_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_names.is_empty()
    }

    /// Total number of players across every team.
    pub fn num_players(&self) -> usize {
        self.teams.values().map(Team::num_players).sum()
    }
}

#[derive(Error, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum TeamRosterError {
    #[error("Team does not exist")]
    TeamDoesntExist,
    #[error("Team name {0} is used more than once")]
    DuplicateTeamName(TeamName),
}
