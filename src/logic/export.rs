//! Share text: render the current draft and score, and read it back.

use crate::models::{MatchScore, Session, SessionError, SkillTier};
use thiserror::Error;

/// First line of every shared draft.
pub const EXPORT_HEADER: &str = "🏐 Volleyball Draft 🏐";

const SCORE_PREFIX: &str = "Score: Team 1 ";
const SCORE_SUFFIX: &str = " Team 2";

/// Errors reading back an exported draft.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ExportError {
    #[error("Missing header line")]
    MissingHeader,
    #[error("Line {line}: player listed before any team")]
    PlayerOutsideTeam { line: usize },
    #[error("Line {line}: malformed player entry")]
    MalformedPlayer { line: usize },
    #[error("Line {line}: malformed score")]
    MalformedScore { line: usize },
    #[error("Line {line}: unexpected content")]
    UnexpectedLine { line: usize },
}

/// A player as it appears in the share text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportedPlayer {
    pub name: String,
    pub skill: SkillTier,
}

/// Team membership and score recovered from share text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExportedResult {
    pub teams: Vec<Vec<ExportedPlayer>>,
    pub score: Option<MatchScore>,
}

/// Render the session's draft as shareable text.
///
/// ```text
/// 🏐 Volleyball Draft 🏐
///
/// Team 1:
/// - Ana (★★★)
///
/// Team 2:
/// - Bia (★★)
///
/// Score: Team 1 0 x 0 Team 2
/// ```
pub fn export_text(session: &Session) -> Result<String, SessionError> {
    let draft = session.draft.as_ref().ok_or(SessionError::NoActiveDraft)?;
    let mut out = format!("{EXPORT_HEADER}\n\n");
    for (idx, team) in draft.teams.iter().enumerate() {
        out.push_str(&format!("Team {}:\n", idx + 1));
        for p in &team.players {
            out.push_str(&format!("- {} ({})\n", p.name, p.skill.stars()));
        }
        out.push('\n');
    }
    if let Some(score) = &session.score {
        out.push_str(&format!(
            "{SCORE_PREFIX}{} x {}{SCORE_SUFFIX}\n",
            score.team1, score.team2
        ));
    }
    Ok(out)
}

/// Parse text produced by [`export_text`].
pub fn parse_export(text: &str) -> Result<ExportedResult, ExportError> {
    let mut lines = text.lines().enumerate();
    match lines.next() {
        Some((_, first)) if first.trim() == EXPORT_HEADER => {}
        _ => return Err(ExportError::MissingHeader),
    }

    let mut result = ExportedResult::default();
    for (idx, raw) in lines {
        let line_no = idx + 1;
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(entry) = line.strip_prefix("- ") {
            let team = result
                .teams
                .last_mut()
                .ok_or(ExportError::PlayerOutsideTeam { line: line_no })?;
            team.push(parse_player(entry).ok_or(ExportError::MalformedPlayer { line: line_no })?);
        } else if line.starts_with("Team ") && line.ends_with(':') {
            result.teams.push(Vec::new());
        } else if line.starts_with(SCORE_PREFIX) {
            result.score = Some(parse_score(line).ok_or(ExportError::MalformedScore { line: line_no })?);
        } else {
            return Err(ExportError::UnexpectedLine { line: line_no });
        }
    }
    Ok(result)
}

fn parse_player(entry: &str) -> Option<ExportedPlayer> {
    let (name, stars) = entry.rsplit_once(" (")?;
    let stars = stars.strip_suffix(')')?;
    if stars.chars().any(|c| c != '★') {
        return None;
    }
    let weight = u8::try_from(stars.chars().count()).ok()?;
    Some(ExportedPlayer {
        name: name.to_string(),
        skill: SkillTier::from_weight(weight)?,
    })
}

fn parse_score(line: &str) -> Option<MatchScore> {
    let body = line.strip_prefix(SCORE_PREFIX)?.strip_suffix(SCORE_SUFFIX)?;
    let (team1, team2) = body.split_once(" x ")?;
    Some(MatchScore {
        team1: team1.trim().parse().ok()?,
        team2: team2.trim().parse().ok()?,
    })
}
