//! Player and SkillTier data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (stable for the whole session).
pub type PlayerId = Uuid;

/// Skill tier of a player, ordered `Good > Medium > Beginner`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Good,
    #[default]
    Medium,
    Beginner,
}

impl SkillTier {
    /// All tiers, strongest first. This is the order tiers are concatenated in a draft.
    pub const ALL: [SkillTier; 3] = [SkillTier::Good, SkillTier::Medium, SkillTier::Beginner];

    /// Weight used for grouping and star display (3 / 2 / 1).
    pub fn weight(self) -> u8 {
        match self {
            SkillTier::Good => 3,
            SkillTier::Medium => 2,
            SkillTier::Beginner => 1,
        }
    }

    /// One star per weight point, e.g. `★★★` for `Good`.
    pub fn stars(self) -> String {
        "★".repeat(usize::from(self.weight()))
    }

    /// Inverse of [`SkillTier::weight`].
    pub fn from_weight(weight: u8) -> Option<Self> {
        SkillTier::ALL.into_iter().find(|t| t.weight() == weight)
    }
}

/// Display form of a player name: control characters dropped, runs of whitespace
/// (line breaks included) collapsed to one space, ends trimmed. Keeps a name on one line.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub skill: SkillTier,
}

impl Player {
    /// Create a new player with a fresh id. The name goes through [`normalize_name`];
    /// callers reject names that normalize to empty (see `Session::add_player`).
    pub fn new(name: impl AsRef<str>, skill: SkillTier) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: normalize_name(name.as_ref()),
            skill,
        }
    }

    /// Case-insensitive substring match on the name (used by the roster search box).
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
