//! Draft phase: generate (or redo) teams and go back to editing.

use crate::logic::balance::balance;
use crate::models::{MatchScore, Session, SessionError};
use rand::Rng;

/// Balance the roster with the session's format and switch to the Result view.
///
/// On success the previous draft and score are replaced and a fresh 0 x 0 scoreboard is
/// created (there are always at least two teams). On failure the error message is kept
/// on the session, any previous draft and score are dropped, and the roster is untouched.
/// Calling this again in the Result view redraws the teams.
pub fn generate_teams<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> Result<(), SessionError> {
    let players_per_team = session.format.players_per_team();
    match balance(&session.players, players_per_team, rng) {
        Ok(draft) => {
            log::info!(
                "Session {}: drafted {} team(s) of {}, {} left out",
                session.id,
                draft.teams.len(),
                players_per_team,
                draft.left_out.len()
            );
            session.score = (draft.teams.len() >= 2).then(MatchScore::new);
            session.draft = Some(draft);
            session.error = None;
            Ok(())
        }
        Err(e) => {
            log::debug!("Session {}: draft rejected: {}", session.id, e);
            session.draft = None;
            session.score = None;
            session.error = Some(e.to_string());
            Err(e)
        }
    }
}

/// Leave the Result view: drop the draft and scoreboard, keep the roster.
pub fn return_to_edit(session: &mut Session) -> Result<(), SessionError> {
    if session.draft.is_none() {
        return Err(SessionError::NoActiveDraft);
    }
    session.draft = None;
    session.score = None;
    Ok(())
}
