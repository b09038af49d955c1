//! Splits a normalized roster into teams of equal size and equal experience.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{Player, Team, TeamName, TeamRoster, TeamRosterError};

/// Assign every player to exactly one team, handing out one experienced and
/// one inexperienced player at a time. Players are taken from the back of
/// each cohort, so the last experienced player in `players` lands on the
/// first team.
pub fn balance_teams(
    players: &[Player],
    team_names: &[&str],
) -> Result<TeamRoster, BalanceError> {
    if team_names.is_empty() {
        return Err(BalanceError::NoTeams);
    }
    let mut seen = HashSet::with_capacity(team_names.len());
    if let Some(dup) = team_names.iter().find(|name| !seen.insert(**name)) {
        return Err(TeamRosterError::DuplicateTeamName(TeamName::from(*dup)).into());
    }

    let (experienced, inexperienced): (Vec<&Player>, Vec<&Player>) =
        players.iter().partition(|p| p.is_experienced());
    if experienced.len() != inexperienced.len() {
        return Err(BalanceError::RosterImbalance {
            experienced: experienced.len(),
            inexperienced: inexperienced.len(),
        });
    }

    let teams = populate_teams(&experienced, &inexperienced, team_names)?;
    info!(
        players = players.len(),
        teams = teams.len(),
        "All players have been assigned to a team"
    );
    Ok(TeamRoster::new(teams)?)
}

/// Fill each team, in name order, with pairs drawn from the tails of the two
/// (equal-length) cohorts.
fn populate_teams(
    experienced: &[&Player],
    inexperienced: &[&Player],
    team_names: &[&str],
) -> Result<Vec<Team>, BalanceError> {
    let num_players = experienced.len() + inexperienced.len();
    let num_teams = team_names.len();
    if num_players % num_teams != 0 {
        return Err(BalanceError::UnevenDistribution {
            players: num_players,
            teams: num_teams,
        });
    }
    let per_team = num_players / num_teams;
    if per_team % 2 != 0 {
        return Err(BalanceError::UnevenCohortSplit { per_team });
    }

    let pairs_per_team = per_team / 2;
    let last = experienced.len();
    Ok(team_names
        .iter()
        .enumerate()
        .map(|(t, name)| {
            let players = (0..pairs_per_team)
                .flat_map(|round| {
                    let idx = last - 1 - (t * pairs_per_team + round);
                    vec![experienced[idx].clone(), inexperienced[idx].clone()]
                })
                .collect::<Vec<_>>();
            debug!(team = *name, players = players.len(), "filled team");
            Team::new(TeamName::from(*name), players)
        })
        .collect())
}

#[derive(Error, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum BalanceError {
    #[error("No teams to assign players to")]
    NoTeams,
    #[error("Invalid team list: {0}")]
    Roster(#[from] TeamRosterError),
    #[error(
        "Unbalanced experience among players.\n\
         You currently have {experienced} experienced players and {inexperienced} inexperienced players.\n\
         Please adjust roster."
    )]
    RosterImbalance {
        experienced: usize,
        inexperienced: usize,
    },
    #[error(
        "Uneven number of players per team ({:.1}), unable to distribute evenly. Please adjust roster.",
        quotient(.players, .teams)
    )]
    UnevenDistribution { players: usize, teams: usize },
    #[error(
        "Teams of {per_team} players cannot be split evenly between experienced and inexperienced players. Please adjust roster."
    )]
    UnevenCohortSplit { per_team: usize },
}

fn quotient(players: &usize, teams: &usize) -> f64 {
    *players as f64 / *teams as f64
}
