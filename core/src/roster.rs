//! The built-in league data, as it was handed over: heights as text,
//! experience as a `YES`/`NO` token and guardians joined into one string.

use serde::{Deserialize, Serialize};

/// A player record before normalization.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct RawPlayer<'a> {
    pub name: &'a str,
    pub guardians: &'a str,
    pub experience: &'a str,
    pub height: &'a str,
}

pub const TEAMS: [&str; 3] = ["Panthers", "Bandits", "Warriors"];

pub const PLAYERS: [RawPlayer<'static>; 18] = [
    RawPlayer {
        name: "Karl Saygan",
        guardians: "Heather Bledsoe",
        experience: "YES",
        height: "42 inches",
    },
    RawPlayer {
        name: "Matt Gill",
        guardians: "Charles Gill and Sylvia Gill",
        experience: "NO",
        height: "40 inches",
    },
    RawPlayer {
        name: "Sammy Adams",
        guardians: "Jeff Adams and Gary Adams",
        experience: "NO",
        height: "45 inches",
    },
    RawPlayer {
        name: "Chloe Alaska",
        guardians: "David Alaska and Jamie Alaska",
        experience: "NO",
        height: "47 inches",
    },
    RawPlayer {
        name: "Bill Bon",
        guardians: "Sara Bon and Jenny Bon",
        experience: "YES",
        height: "43 inches",
    },
    RawPlayer {
        name: "Joe Kavalier",
        guardians: "Sam Kavalier and Elaine Kavalier",
        experience: "NO",
        height: "39 inches",
    },
    RawPlayer {
        name: "Phillip Helm",
        guardians: "Thomas Helm and Eva Jones",
        experience: "YES",
        height: "44 inches",
    },
    RawPlayer {
        name: "Les Clay",
        guardians: "Wynonna Brown",
        experience: "YES",
        height: "42 inches",
    },
    RawPlayer {
        name: "Herschel Krustofski",
        guardians: "Hyman Krustofski and Rachel Krustofski",
        experience: "YES",
        height: "45 inches",
    },
    RawPlayer {
        name: "Sal Dali",
        guardians: "Gala Dali",
        experience: "NO",
        height: "41 inches",
    },
    RawPlayer {
        name: "Suzane Greenberg",
        guardians: "Henrietta Dumas",
        experience: "YES",
        height: "44 inches",
    },
    RawPlayer {
        name: "Eva Gordon",
        guardians: "Wendy and Mike Gordon",
        experience: "NO",
        height: "45 inches",
    },
    RawPlayer {
        name: "Arnold Willis",
        guardians: "Claire Willis",
        experience: "NO",
        height: "43 inches",
    },
    RawPlayer {
        name: "Ben Finkelstein",
        guardians: "Aaron and Jill Finkelstein",
        experience: "NO",
        height: "44 inches",
    },
    RawPlayer {
        name: "Kimmy Stein",
        guardians: "Bill Stein and Hillary Stein",
        experience: "NO",
        height: "41 inches",
    },
    RawPlayer {
        name: "Jill Tanner",
        guardians: "Mark Tanner",
        experience: "YES",
        height: "36 inches",
    },
    RawPlayer {
        name: "Doug Mitchell",
        guardians: "Kyle Mitchell and Helen Mitchell",
        experience: "YES",
        height: "42 inches",
    },
    RawPlayer {
        name: "Joe Smith",
        guardians: "Jim Smith and Jan Smith",
        experience: "YES",
        height: "42 inches",
    },
];
