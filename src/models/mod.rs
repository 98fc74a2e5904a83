//! Data structures for the volleyball draft: players, teams, scoreboard, session state.

mod player;
mod score;
mod session;
mod team;

pub use player::{normalize_name, Player, PlayerId, SkillTier};
pub use score::{MatchScore, Side, GAME_POINT, WIN_MARGIN};
pub use session::{Session, SessionError, SessionId, SessionSnapshot, SessionView};
pub use team::{Draft, GameFormat, Team};
