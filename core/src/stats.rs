use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Player, Team, TeamName};

/// Summary numbers for a single team, as shown in the team menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamStats {
    pub name: TeamName,
    pub players: Vec<Player>,
    pub total: usize,
    pub experienced: usize,
    pub inexperienced: usize,
    /// Mean height in inches; zero for a team with no players.
    pub average_height: f64,
}

impl TeamStats {
    pub fn from_team(team: &Team) -> Self {
        let total = team.num_players();
        let average_height = if total == 0 {
            0.0
        } else {
            team.players().iter().map(|p| p.height() as f64).sum::<f64>() / total as f64
        };
        Self {
            name: team.name().clone(),
            players: team.players().to_vec(),
            total,
            experienced: team.num_experienced(),
            inexperienced: team.num_inexperienced(),
            average_height,
        }
    }
}

impl fmt::Display for TeamStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team: {} Stats", self.name)?;
        writeln!(f, "--------------------")?;
        writeln!(f, "Total players: {}", self.total)?;
        writeln!(f, "Total experienced: {}", self.experienced)?;
        writeln!(f, "Total inexperienced: {}", self.inexperienced)?;
        writeln!(f, "Average height: {:.1}", self.average_height)?;
        writeln!(f)?;
        writeln!(f, "Players on Team:")?;
        for p in &self.players {
            writeln!(f, "  {} (guardians: {})", p.name(), p.guardians().join(", "))?;
        }
        Ok(())
    }
}
