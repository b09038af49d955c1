use std::io;

use anyhow::{Context, Result};

use league_core::roster::{PLAYERS, TEAMS};
use league_core::{balance_teams, clean_roster, logging, menu, TeamRoster};

fn build_teams() -> Result<TeamRoster> {
    let players = clean_roster(&PLAYERS).context("Roster data could not be read")?;
    Ok(balance_teams(&players, &TEAMS)?)
}

fn main() {
    logging::init();

    // Bad roster data can't be fixed from the prompt: report it and stop.
    let teams = match build_teams() {
        Ok(teams) => teams,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(err) = menu::run(&teams, stdin.lock(), io::stdout()).context("Menu session failed")
    {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
