//! The interactive stats menu. The roster is only ever read here.

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::TeamRoster;

pub mod main_menu;
pub mod prompt;
pub mod team_menu;

pub use main_menu::{MainMenu, MainMenuOption};
pub use prompt::{parse_selection, read_selection, wait_for_enter, SelectionError};
pub use team_menu::TeamMenu;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub enum MenuState {
    Main(MainMenu),
    Teams(TeamMenu),
    Exit,
}

pub fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "***BASKETBALL TEAM ASSIGNMENT & STATS TOOL***")?;
    writeln!(output)?;
    writeln!(output, "[All players have been successfully assigned to a team]")
}

/// Drive the menu until the user quits or the input runs out.
pub fn run<R: BufRead, W: Write>(
    roster: &TeamRoster,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    print_banner(&mut output)?;

    let mut state = MenuState::Main(MainMenu);
    loop {
        debug!(?state, "menu");
        state = match state {
            MenuState::Main(menu) => {
                menu.render(&mut output)?;
                let upper = menu.num_options();
                match read_selection(&mut input, &mut output, MainMenu::PROMPT, upper)? {
                    Some(selection) => menu.select(selection, roster).unwrap_or_else(|e| {
                        warn!(%e, "main menu selection");
                        MenuState::Main(menu)
                    }),
                    None => MenuState::Exit,
                }
            }
            MenuState::Teams(menu) if menu.num_options() == 0 => {
                writeln!(output, "There are no teams to display.")?;
                MenuState::Main(MainMenu)
            }
            MenuState::Teams(menu) => {
                menu.render(roster, &mut output)?;
                let upper = menu.num_options();
                match read_selection(&mut input, &mut output, TeamMenu::PROMPT, upper)? {
                    Some(selection) => match menu.select(selection, roster) {
                        Ok(stats) => {
                            writeln!(output)?;
                            write!(output, "{}", stats)?;
                            writeln!(output)?;
                            if wait_for_enter(&mut input, &mut output)? {
                                MenuState::Main(MainMenu)
                            } else {
                                MenuState::Exit
                            }
                        }
                        Err(e) => {
                            warn!(%e, "team menu selection");
                            MenuState::Teams(menu)
                        }
                    },
                    None => MenuState::Exit,
                }
            }
            MenuState::Exit => {
                writeln!(output)?;
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::run;
    use crate::balance::balance_teams;
    use crate::normalize::clean_roster;
    use crate::roster::{PLAYERS, TEAMS};
    use crate::types::TeamRoster;

    fn session(roster: &TeamRoster, input: &str) -> String {
        let mut output = vec![];
        run(roster, Cursor::new(input.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn builtin() -> TeamRoster {
        balance_teams(&clean_roster(&PLAYERS).unwrap(), &TEAMS).unwrap()
    }

    #[test]
    pub fn test_quit_immediately() {
        let text = session(&builtin(), "2\n");

        assert!(text.contains("BASKETBALL TEAM ASSIGNMENT & STATS TOOL"));
        assert!(text.contains("1 Display Team Stats"));
        assert!(!text.contains("TEAMS"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    pub fn test_view_team_then_quit() {
        let text = session(&builtin(), "1\n3\n\n2\n");

        assert!(text.contains("1 Panthers"));
        assert!(text.contains("3 Warriors"));
        assert!(text.contains("Team: Warriors Stats"));
        assert!(text.contains("Total players: 6"));
        assert!(text.contains("Total experienced: 3"));
        assert!(text.contains("Total inexperienced: 3"));
        assert!(text.contains("Karl Saygan (guardians: Heather Bledsoe)"));
        assert_eq!(text.matches("MENU -").count(), 2);
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    pub fn test_bad_input_reprompts() {
        let text = session(&builtin(), "abc\n99\n1\nfoo\n0\n1\n\n2\n");

        assert!(text.contains("\"abc\" is not a number"));
        assert!(text.contains("99 is not an option"));
        assert!(text.contains("\"foo\" is not a number"));
        assert!(text.contains("0 is not an option"));
        assert!(text.contains("Team: Panthers Stats"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    pub fn test_end_of_input_exits() {
        let text = session(&builtin(), "1\n");
        assert!(text.contains("Please select a team"));
        assert!(text.contains("Goodbye!"));

        let text = session(&builtin(), "");
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    pub fn test_no_teams() {
        let roster = TeamRoster::new(vec![]).unwrap();
        let text = session(&roster, "1\n2\n");

        assert!(text.contains("There are no teams to display."));
        assert!(text.contains("Goodbye!"));
    }
}
