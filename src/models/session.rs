//! Session: roster, chosen format, current draft and scoreboard.

use crate::models::player::{normalize_name, Player, PlayerId, SkillTier};
use crate::models::score::{MatchScore, Side};
use crate::models::team::{Draft, GameFormat, Team};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during session operations. `Display` is the user-facing message.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SessionError {
    /// Player name is empty once normalized.
    #[error("Player name must not be empty")]
    EmptyName,
    /// Player not found in the roster.
    #[error("Player not found")]
    PlayerNotFound(PlayerId),
    /// Team size is not one of the supported formats (2, 3 or 5).
    #[error("Unsupported format: {0} players per team")]
    UnsupportedFormat(usize),
    /// Team size of zero handed to the balancer.
    #[error("Players per team must be at least 1")]
    InvalidTeamSize,
    /// Fewer than two full teams can be formed.
    #[error("Not enough players to form at least 2 teams of {players_per_team}")]
    InsufficientPlayers { players_per_team: usize },
    /// Session is not in a view that allows this action.
    #[error("Invalid state for this action")]
    InvalidState,
    /// No teams have been drafted yet.
    #[error("No teams have been drafted")]
    NoActiveDraft,
    /// Fewer than two teams, so there is no scoreboard.
    #[error("No match in progress")]
    NoActiveMatch,
}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Which screen the session is on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionView {
    /// Editing the roster and format.
    #[default]
    Edit,
    /// Teams drafted; scoreboard active when there are at least two teams.
    Result,
}

/// Everything one user works on: the roster plus derived draft state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    /// Registered players in insertion order.
    pub players: Vec<Player>,
    pub format: GameFormat,
    pub search_query: String,
    /// Current draft; `None` while editing.
    pub draft: Option<Draft>,
    /// Present only while `draft` has two or more teams.
    pub score: Option<MatchScore>,
    /// Message from the last failed draft attempt.
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session in the Edit view.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            players: Vec::new(),
            format: GameFormat::default(),
            search_query: String::new(),
            draft: None,
            score: None,
            error: None,
        }
    }

    /// Create a session with initial players (still in Edit until drafted).
    pub fn with_players(players: Vec<Player>, format: GameFormat) -> Self {
        Self {
            players,
            format,
            ..Self::new()
        }
    }

    pub fn view(&self) -> SessionView {
        if self.draft.is_some() {
            SessionView::Result
        } else {
            SessionView::Edit
        }
    }

    fn require_edit(&self) -> Result<(), SessionError> {
        if self.view() != SessionView::Edit {
            return Err(SessionError::InvalidState);
        }
        Ok(())
    }

    /// Register a player (Edit view only). Returns the new player's id.
    /// Names that are blank once normalized are rejected.
    pub fn add_player(&mut self, name: &str, skill: SkillTier) -> Result<PlayerId, SessionError> {
        self.require_edit()?;
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        let player = Player::new(&name, skill);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player by id (Edit view only).
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), SessionError> {
        self.require_edit()?;
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(SessionError::PlayerNotFound(player_id))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Remove every player and reset the search box (Edit view only). Safe to repeat.
    pub fn clear_all(&mut self) -> Result<(), SessionError> {
        self.require_edit()?;
        self.players.clear();
        self.search_query.clear();
        Ok(())
    }

    /// Pick the format by team size; only 2, 3 and 5 are offered (Edit view only).
    pub fn set_format(&mut self, players_per_team: usize) -> Result<(), SessionError> {
        self.require_edit()?;
        self.format = GameFormat::from_players_per_team(players_per_team)
            .ok_or(SessionError::UnsupportedFormat(players_per_team))?;
        Ok(())
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Players whose name contains the search query (case-insensitive), roster order.
    pub fn filtered_players(&self) -> Vec<&Player> {
        let query = self.search_query.trim();
        self.players.iter().filter(|p| p.name_matches(query)).collect()
    }

    /// Players not placed in any team of the current draft (all players while editing).
    pub fn remaining_players(&self) -> Vec<&Player> {
        match &self.draft {
            None => self.players.iter().collect(),
            Some(draft) => self
                .players
                .iter()
                .filter(|p| !draft.drafted_players().any(|d| d.id == p.id))
                .collect(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        self.draft.as_ref().map(|d| d.teams.as_slice()).unwrap_or(&[])
    }

    /// Add points to one side; clamps at zero. Needs an active match.
    pub fn adjust_score(&mut self, side: Side, delta: i32) -> Result<MatchScore, SessionError> {
        let score = self.score.as_mut().ok_or(SessionError::NoActiveMatch)?;
        score.adjust(side, delta);
        Ok(*score)
    }

    /// Back to 0 x 0. Needs an active match.
    pub fn reset_score(&mut self) -> Result<(), SessionError> {
        self.score
            .as_mut()
            .ok_or(SessionError::NoActiveMatch)?
            .reset();
        Ok(())
    }

    /// Current winner, derived from the score on every call.
    pub fn winner(&self) -> Option<Side> {
        self.score.as_ref().and_then(MatchScore::winner)
    }

    /// Read-only view of the session for API responses.
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            id: self.id,
            created_at: self.created_at,
            view: self.view(),
            players: &self.players,
            filtered_players: self.filtered_players(),
            format: self.format,
            players_per_team: self.format.players_per_team(),
            search_query: &self.search_query,
            teams: self.draft.as_ref().map(|d| d.teams.as_slice()),
            left_out: self.draft.as_ref().map(|d| d.left_out.as_slice()),
            score: self.score,
            winner: self.winner(),
            error: self.error.as_deref(),
        }
    }
}

/// Serialized state surface: roster, partition, score, winner and pending error.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub view: SessionView,
    pub players: &'a [Player],
    pub filtered_players: Vec<&'a Player>,
    pub format: GameFormat,
    pub players_per_team: usize,
    pub search_query: &'a str,
    pub teams: Option<&'a [Team]>,
    pub left_out: Option<&'a [Player]>,
    pub score: Option<MatchScore>,
    pub winner: Option<Side>,
    pub error: Option<&'a str>,
}
