//! Integration tests for team balancing: partition sizes, leftovers, fairness.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use volley_draft_web::{balance, shuffle_by_tier, Draft, Player, PlayerId, SessionError, SkillTier};

fn roster(good: usize, medium: usize, beginner: usize) -> Vec<Player> {
    let mut players = Vec::new();
    for (count, skill, prefix) in [
        (good, SkillTier::Good, "G"),
        (medium, SkillTier::Medium, "M"),
        (beginner, SkillTier::Beginner, "B"),
    ] {
        players.extend((0..count).map(|i| Player::new(format!("{prefix}{i}"), skill)));
    }
    players
}

fn ids(draft: &Draft) -> Vec<PlayerId> {
    draft.drafted_players().map(|p| p.id).collect()
}

#[test]
fn fewer_than_two_teams_fails_and_leaves_roster_alone() {
    let mut rng = StdRng::seed_from_u64(1);
    for (players, per_team) in [(0, 2), (3, 2), (5, 3), (9, 5), (1, 1)] {
        let r = roster(players, 0, 0);
        let before = r.clone();
        assert_eq!(
            balance(&r, per_team, &mut rng),
            Err(SessionError::InsufficientPlayers {
                players_per_team: per_team
            })
        );
        assert_eq!(r, before);
    }
}

#[test]
fn insufficient_message_names_team_size() {
    let err = balance(&roster(1, 1, 1), 2, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert_eq!(err.to_string(), "Not enough players to form at least 2 teams of 2");
}

#[test]
fn valid_balances_have_full_disjoint_teams() {
    let mut rng = StdRng::seed_from_u64(42);
    for total in 4..=23 {
        let r = roster(total / 3, total / 3, total - 2 * (total / 3));
        for per_team in [1, 2, 3, 5] {
            let num_teams = total / per_team;
            if num_teams < 2 {
                continue;
            }
            let draft = balance(&r, per_team, &mut rng).unwrap();
            assert_eq!(draft.teams.len(), num_teams);
            assert!(draft.teams.iter().all(|t| t.len() == per_team));
            assert_eq!(draft.left_out.len(), total - num_teams * per_team);

            let drafted = ids(&draft);
            let unique: HashSet<_> = drafted.iter().copied().collect();
            assert_eq!(unique.len(), drafted.len(), "teams must be disjoint");

            let mut all: HashSet<_> = unique;
            all.extend(draft.left_out.iter().map(|p| p.id));
            let roster_ids: HashSet<_> = r.iter().map(|p| p.id).collect();
            assert_eq!(all, roster_ids);
        }
    }
}

#[test]
fn lowest_tier_is_left_out() {
    let r = roster(3, 3, 3);
    let draft = balance(&r, 4, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(draft.left_out.len(), 1);
    assert_eq!(draft.left_out[0].skill, SkillTier::Beginner);
}

#[test]
fn each_team_gets_one_strong_player_in_duos() {
    let r = roster(2, 0, 2);
    for seed in 0..20 {
        let draft = balance(&r, 2, &mut StdRng::seed_from_u64(seed)).unwrap();
        for team in &draft.teams {
            let good = team.players.iter().filter(|p| p.skill == SkillTier::Good).count();
            assert_eq!(good, 1);
        }
    }
}

#[test]
fn team_weights_stay_close() {
    let r = roster(4, 5, 3);
    let draft = balance(&r, 3, &mut StdRng::seed_from_u64(9)).unwrap();
    let sums: Vec<u32> = draft
        .teams
        .iter()
        .map(|t| t.players.iter().map(|p| u32::from(p.skill.weight())).sum())
        .collect();
    let max = sums.iter().max().unwrap();
    let min = sums.iter().min().unwrap();
    assert!(max - min <= 2, "weights too far apart: {sums:?}");
}

#[test]
fn same_seed_same_draft_and_redo_differs() {
    let r = roster(4, 4, 4);
    let first = balance(&r, 3, &mut StdRng::seed_from_u64(11)).unwrap();
    let again = balance(&r, 3, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(first, again);

    let differs = (12..40).any(|seed| balance(&r, 3, &mut StdRng::seed_from_u64(seed)).unwrap() != first);
    assert!(differs);
}

#[test]
fn tier_shuffle_is_roughly_uniform() {
    let r = roster(0, 3, 0);
    let mut rng = StdRng::seed_from_u64(2024);
    let runs = 6000;
    let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
    for _ in 0..runs {
        let order: Vec<String> = shuffle_by_tier(&r, &mut rng).into_iter().map(|p| p.name).collect();
        *counts.entry(order).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    let expected = runs / 6;
    for (perm, count) in &counts {
        assert!(
            count.abs_diff(expected) < expected / 5,
            "permutation {perm:?} seen {count} times"
        );
    }
}
