use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::prompt::SelectionError;
use super::team_menu::TeamMenu;
use super::MenuState;
use crate::types::TeamRoster;

#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum MainMenuOption {
    DisplayTeamStats,
    Quit,
}

impl MainMenuOption {
    pub fn label(self) -> &'static str {
        match self {
            MainMenuOption::DisplayTeamStats => "Display Team Stats",
            MainMenuOption::Quit => "Quit",
        }
    }
}

/// The top-level menu. Choosing `DisplayTeamStats` moves to the `TeamMenu`,
/// `Quit` ends the session.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct MainMenu;

impl MainMenu {
    pub const PROMPT: &'static str = "Please select from the above menu";
    pub const OPTIONS: [MainMenuOption; 2] =
        [MainMenuOption::DisplayTeamStats, MainMenuOption::Quit];

    pub fn num_options(self) -> usize {
        Self::OPTIONS.len()
    }

    pub fn render<W: Write>(self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        writeln!(output, "    -\\/\\/\\/- MENU -\\/\\/\\/-")?;
        writeln!(output)?;
        for (i, option) in Self::OPTIONS.iter().enumerate() {
            writeln!(output, "    {} {}", i + 1, option.label())?;
        }
        writeln!(output)
    }

    /// Apply a 1-based `selection`.
    pub fn select(
        self,
        selection: usize,
        roster: &TeamRoster,
    ) -> Result<MenuState, SelectionError> {
        let option = selection
            .checked_sub(1)
            .and_then(|i| Self::OPTIONS.get(i).copied())
            .ok_or(SelectionError::OutOfRange {
                selection: selection as i64,
                upper: self.num_options(),
            })?;
        Ok(match option {
            MainMenuOption::DisplayTeamStats => MenuState::Teams(TeamMenu::new(roster)),
            MainMenuOption::Quit => MenuState::Exit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::prompt::SelectionError;
    use super::super::team_menu::TeamMenu;
    use super::super::MenuState;
    use super::MainMenu;
    use crate::types::TeamRoster;

    #[test]
    pub fn test_main_menu_transitions() {
        let roster = TeamRoster::new(vec![]).unwrap();

        assert_eq!(
            MainMenu.select(1, &roster).unwrap(),
            MenuState::Teams(TeamMenu::new(&roster))
        );
        assert_eq!(MainMenu.select(2, &roster).unwrap(), MenuState::Exit);
        assert_eq!(
            MainMenu.select(3, &roster).unwrap_err(),
            SelectionError::OutOfRange {
                selection: 3,
                upper: 2
            }
        );
        assert!(MainMenu.select(0, &roster).is_err());
    }

    #[test]
    pub fn test_main_menu_render() {
        let mut output = vec![];
        MainMenu.render(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("1 Display Team Stats"));
        assert!(text.contains("2 Quit"));
    }
}
