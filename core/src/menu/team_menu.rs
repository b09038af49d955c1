use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::prompt::SelectionError;
use crate::stats::TeamStats;
use crate::types::TeamRoster;

/// Lists every team with a 1-based index; selecting one yields its stats.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct TeamMenu {
    num_teams: usize,
}

impl TeamMenu {
    pub const PROMPT: &'static str = "Please select a team";

    pub fn new(roster: &TeamRoster) -> Self {
        Self {
            num_teams: roster.len(),
        }
    }

    pub fn num_options(self) -> usize {
        self.num_teams
    }

    pub fn render<W: Write>(self, roster: &TeamRoster, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        writeln!(output, "    -\\/\\/\\/- TEAMS -\\/\\/\\/-")?;
        writeln!(output)?;
        for (i, name) in roster.team_names().iter().enumerate() {
            writeln!(output, "    {} {}", i + 1, name)?;
        }
        writeln!(output)
    }

    /// Compute stats for the team at the 1-based `selection`.
    pub fn select(
        self,
        selection: usize,
        roster: &TeamRoster,
    ) -> Result<TeamStats, SelectionError> {
        selection
            .checked_sub(1)
            .and_then(|i| roster.team_at(i))
            .map(TeamStats::from_team)
            .ok_or(SelectionError::OutOfRange {
                selection: selection as i64,
                upper: self.num_teams,
            })
    }
}
