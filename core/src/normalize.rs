//! Turns `RawPlayer` records into `Player`s.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::roster::RawPlayer;
use crate::types::Player;

const GUARDIAN_SEPARATOR: &str = " and ";
const EXPERIENCED: &str = "YES";

/// Normalize every raw record, in order. The input is only borrowed, so the
/// static data can never be modified through the result.
pub fn clean_roster(raw: &[RawPlayer<'_>]) -> Result<Vec<Player>, NormalizeError> {
    raw.iter().map(normalize_player).collect()
}

pub fn normalize_player(raw: &RawPlayer<'_>) -> Result<Player, NormalizeError> {
    let height = parse_height(raw.height).ok_or_else(|| NormalizeError::InvalidHeight {
        player: raw.name.to_string(),
        raw: raw.height.to_string(),
    })?;
    Ok(Player::new(
        raw.name,
        split_guardians(raw.guardians),
        height,
        raw.experience == EXPERIENCED,
    ))
}

/// Heights are recorded with the inches up front (`"42 inches"`); the first
/// two digits are the value.
fn parse_height(raw: &str) -> Option<u32> {
    let digits = raw
        .chars()
        .filter_map(|c| c.to_digit(10))
        .take(2)
        .collect::<Vec<_>>();
    if digits.is_empty() {
        None
    } else {
        Some(digits.iter().fold(0, |acc, d| acc * 10 + d))
    }
}

fn split_guardians(raw: &str) -> Vec<String> {
    raw.split(GUARDIAN_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Error, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Height {raw:?} for {player} does not start with a number of inches")]
    InvalidHeight { player: String, raw: String },
}

#[cfg(test)]
mod tests {
    use super::{clean_roster, normalize_player, NormalizeError};
    use crate::roster::{RawPlayer, PLAYERS};

    fn raw<'a>(height: &'a str, experience: &'a str, guardians: &'a str) -> RawPlayer<'a> {
        RawPlayer {
            name: "Test Player",
            guardians,
            experience,
            height,
        }
    }

    #[test]
    pub fn test_height_parsing() {
        assert_eq!(normalize_player(&raw("42 inches", "NO", "A")).unwrap().height(), 42);
        assert_eq!(normalize_player(&raw("6'2\"", "NO", "A")).unwrap().height(), 62);
        assert_eq!(normalize_player(&raw("9 inches", "NO", "A")).unwrap().height(), 9);
        assert_eq!(
            normalize_player(&raw("tall", "NO", "A")).unwrap_err(),
            NormalizeError::InvalidHeight {
                player: "Test Player".to_string(),
                raw: "tall".to_string(),
            }
        );
    }

    #[test]
    pub fn test_experience_mapping() {
        assert!(normalize_player(&raw("40", "YES", "A")).unwrap().is_experienced());
        assert!(!normalize_player(&raw("40", "NO", "A")).unwrap().is_experienced());
        assert!(!normalize_player(&raw("40", "yes", "A")).unwrap().is_experienced());
        assert!(!normalize_player(&raw("40", "", "A")).unwrap().is_experienced());
    }

    #[test]
    pub fn test_guardian_split() {
        let p = normalize_player(&raw("40", "NO", "Alice and Bob")).unwrap();
        assert_eq!(p.guardians(), &["Alice".to_string(), "Bob".to_string()]);

        let p = normalize_player(&raw("40", "NO", "Heather Bledsoe")).unwrap();
        assert_eq!(p.guardians(), &["Heather Bledsoe".to_string()]);

        let p = normalize_player(&raw("40", "NO", "Wendy and Mike Gordon")).unwrap();
        assert_eq!(p.guardians(), &["Wendy".to_string(), "Mike Gordon".to_string()]);
    }

    #[test]
    pub fn test_clean_roster_leaves_source_untouched() {
        let before = PLAYERS;
        let players = clean_roster(&PLAYERS).unwrap();

        assert_eq!(PLAYERS, before);
        assert_eq!(players.len(), PLAYERS.len());
        assert_eq!(players[0].name(), "Karl Saygan");
        assert_eq!(players[0].height(), 42);
        assert!(players[0].is_experienced());
        assert_eq!(players[1].guardians().len(), 2);
    }

    #[test]
    pub fn test_clean_roster_stops_on_first_bad_record() {
        let records = [raw("40", "NO", "A"), raw("?", "NO", "A")];
        assert!(clean_roster(&records).is_err());
    }
}
