//! Volleyball draft web app: library with models, balancing logic and the HTTP layer.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;
pub mod web;

pub use config::AppConfig;
pub use logic::{
    balance, export_text, generate_teams, parse_export, return_to_edit, serpentine_distribute,
    shuffle_by_tier, ExportError, ExportedPlayer, ExportedResult,
};
pub use models::{
    Draft, GameFormat, MatchScore, Player, PlayerId, Session, SessionError, SessionId,
    SessionSnapshot, SessionView, Side, SkillTier, Team, GAME_POINT, WIN_MARGIN,
};
pub use store::{SessionStore, StoreError};
