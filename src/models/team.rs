//! Game format, Team, and Draft (result of a balancing run).

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Match format: how many players make up one team.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameFormat {
    #[default]
    Duo,
    Trio,
    Quintet,
}

impl GameFormat {
    pub const ALL: [GameFormat; 3] = [GameFormat::Duo, GameFormat::Trio, GameFormat::Quintet];

    pub fn players_per_team(self) -> usize {
        match self {
            GameFormat::Duo => 2,
            GameFormat::Trio => 3,
            GameFormat::Quintet => 5,
        }
    }

    /// Format for a team size, if it is one of the supported ones (2, 3 or 5).
    pub fn from_players_per_team(players: usize) -> Option<Self> {
        GameFormat::ALL
            .into_iter()
            .find(|f| f.players_per_team() == players)
    }
}

/// One drafted team, players in the order they were picked.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<Player>,
}

impl Team {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Full result of one balancing run. Recomputed wholesale on every draft.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub teams: Vec<Team>,
    /// Players that did not fit into a full team (lowest tiers first to be cut).
    pub left_out: Vec<Player>,
}

impl Draft {
    /// Iterate over every drafted player, team by team.
    pub fn drafted_players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.players.iter())
    }
}
