//! Match scoreboard for the first two drafted teams.

use serde::{Deserialize, Serialize};

/// Points needed to win a game.
pub const GAME_POINT: u32 = 21;

/// Minimum lead over the opponent once game point is reached.
pub const WIN_MARGIN: u32 = 2;

/// Which side of the scoreboard (Team 1 or Team 2).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// Score of the match between Team 1 and Team 2. Never negative.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub team1: u32,
    pub team2: u32,
}

impl MatchScore {
    /// Fresh 0 x 0 scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` points to one side. Going below zero clamps to zero.
    pub fn adjust(&mut self, side: Side, delta: i32) {
        let score = match side {
            Side::One => &mut self.team1,
            Side::Two => &mut self.team2,
        };
        *score = score.saturating_add_signed(delta);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::One => self.team1,
            Side::Two => self.team2,
        }
    }

    /// Side that has reached [`GAME_POINT`] with a lead of at least [`WIN_MARGIN`].
    ///
    /// Recomputed from the current scores on every call: adjusting after a win can
    /// take the win away again.
    pub fn winner(&self) -> Option<Side> {
        let wins = |own: u32, other: u32| own >= GAME_POINT && own >= other.saturating_add(WIN_MARGIN);
        if wins(self.team1, self.team2) {
            Some(Side::One)
        } else if wins(self.team2, self.team1) {
            Some(Side::Two)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(team1: u32, team2: u32) -> MatchScore {
        MatchScore { team1, team2 }
    }

    #[test]
    fn adjust_clamps_at_zero() {
        let mut s = score(2, 0);
        s.adjust(Side::One, -5);
        assert_eq!(s, score(0, 0));
        s.adjust(Side::Two, -1);
        assert_eq!(s.team2, 0);
    }

    #[test]
    fn adjust_has_no_upper_bound_below_u32_max() {
        let mut s = score(40, 39);
        s.adjust(Side::One, 1);
        s.adjust(Side::Two, 3);
        assert_eq!(s, score(41, 42));
    }

    #[test]
    fn reset_goes_back_to_zero() {
        let mut s = score(12, 9);
        s.reset();
        assert_eq!(s, MatchScore::new());
    }

    #[test]
    fn winner_requires_game_point_and_two_point_lead() {
        assert_eq!(score(20, 0).winner(), None);
        assert_eq!(score(21, 19).winner(), Some(Side::One));
        assert_eq!(score(21, 20).winner(), None);
        assert_eq!(score(22, 20).winner(), Some(Side::One));
        assert_eq!(score(19, 21).winner(), Some(Side::Two));
        assert_eq!(score(20, 21).winner(), None);
        assert_eq!(score(20, 22).winner(), Some(Side::Two));
        assert_eq!(score(30, 30).winner(), None);
    }

    #[test]
    fn winner_is_not_sticky() {
        let mut s = score(21, 10);
        assert_eq!(s.winner(), Some(Side::One));
        s.adjust(Side::One, -1);
        assert_eq!(s.winner(), None);
    }
}
