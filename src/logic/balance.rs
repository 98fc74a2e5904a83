//! Team balancing: tier-grouped shuffle, cut to full teams, serpentine distribution.

use crate::models::{Draft, Player, SessionError, SkillTier, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Split `roster` into balanced teams of `players_per_team`.
///
/// 1. `num_teams = roster.len() / players_per_team`; fewer than 2 teams is an error.
/// 2. Group by tier and shuffle each tier (Good, Medium, Beginner).
/// 3. Keep the first `num_teams * players_per_team`; the rest are left out.
/// 4. Deal the kept players to teams in serpentine order.
///
/// The roster itself is never modified, so calling this again redraws the teams.
pub fn balance<R: Rng + ?Sized>(
    roster: &[Player],
    players_per_team: usize,
    rng: &mut R,
) -> Result<Draft, SessionError> {
    if players_per_team == 0 {
        return Err(SessionError::InvalidTeamSize);
    }
    let num_teams = roster.len() / players_per_team;
    if num_teams < 2 {
        return Err(SessionError::InsufficientPlayers { players_per_team });
    }

    let mut candidates = shuffle_by_tier(roster, rng);
    let left_out = candidates.split_off(num_teams * players_per_team);
    let teams = serpentine_distribute(candidates, num_teams);

    Ok(Draft { teams, left_out })
}

/// Players grouped by tier, strongest tier first, each tier in uniformly random order.
pub fn shuffle_by_tier<R: Rng + ?Sized>(roster: &[Player], rng: &mut R) -> Vec<Player> {
    let mut ordered = Vec::with_capacity(roster.len());
    for tier in SkillTier::ALL {
        let mut group: Vec<Player> = roster.iter().filter(|p| p.skill == tier).cloned().collect();
        group.shuffle(rng);
        ordered.append(&mut group);
    }
    ordered
}

/// Team index for the `i`-th pick: left to right on even rounds, right to left on odd ones.
pub fn serpentine_index(i: usize, num_teams: usize) -> usize {
    let round = i / num_teams;
    let pos = i % num_teams;
    if round % 2 == 0 {
        pos
    } else {
        num_teams - 1 - pos
    }
}

/// Deal `sequence` across `num_teams` teams in serpentine (snake draft) order.
///
/// Deterministic: the same sequence always yields the same teams.
pub fn serpentine_distribute(sequence: Vec<Player>, num_teams: usize) -> Vec<Team> {
    let mut teams = vec![Team::default(); num_teams];
    if num_teams == 0 {
        return teams;
    }
    for (i, player) in sequence.into_iter().enumerate() {
        teams[serpentine_index(i, num_teams)].players.push(player);
    }
    teams
}
