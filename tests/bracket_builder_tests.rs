// tests/bracket_builder_tests.rs
//
// Построение начальной сетки:
//  1) размер сетки = max(T - 1, 0)
//  2) нумерация 1..=N, финал = 1, parent = id / 2
//  3) листья = ceil(T / 2), каждая команда ровно в одном слоте
//  4) конкретные сценарии на 5 и 2 команды
//  5) ошибки входа и детерминированность

use std::collections::HashSet;

use bracket_engine::bracket::{build_initial_matches, draw_roster, tree, BracketError};
use bracket_engine::domain::{Match, Team, TeamId};
use bracket_engine::infra::rng::DeterministicRng;

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

/// Состав T1..Tn с id 1..=n.
fn roster(n: usize) -> Vec<Team> {
    (1..=n as TeamId)
        .map(|id| Team::new(id, format!("T{id}")))
        .collect()
}

fn by_id(matches: &[Match], id: u32) -> &Match {
    matches
        .iter()
        .find(|m| m.id_in_tournament == id)
        .unwrap_or_else(|| panic!("match {id} not found"))
}

//
// TEST 1 — количество матчей
//
#[test]
fn match_count_is_team_count_minus_one() {
    for n in 0..=40 {
        let matches = build_initial_matches(&roster(n), 7).unwrap();
        assert_eq!(matches.len(), n.saturating_sub(1), "teams = {n}");
    }
}

#[test]
fn empty_and_single_team_rosters_give_no_matches() {
    assert!(build_initial_matches(&[], 1).unwrap().is_empty());
    assert!(build_initial_matches(&roster(1), 1).unwrap().is_empty());
}

//
// TEST 2 — нумерация и родители
//
#[test]
fn ids_are_contiguous_and_parents_follow_arithmetic() {
    for n in 2..=40 {
        let matches = build_initial_matches(&roster(n), 3).unwrap();
        let total = matches.len() as u32;

        let ids: HashSet<u32> = matches.iter().map(|m| m.id_in_tournament).collect();
        assert_eq!(ids.len(), matches.len(), "duplicate ids, teams = {n}");
        assert_eq!(ids, (1..=total).collect::<HashSet<u32>>());

        let roots: Vec<&Match> = matches.iter().filter(|m| m.id_in_tournament == 1).collect();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id_parent, None);

        for m in matches.iter().filter(|m| m.id_in_tournament > 1) {
            let parent = m.id_in_tournament / 2;
            assert_eq!(m.id_parent, Some(parent));
            assert!(ids.contains(&parent));
        }

        assert!(matches.iter().all(|m| m.tournament == 3));
    }
}

//
// TEST 3 — листья и распределение команд
//
#[test]
fn every_team_lands_in_exactly_one_leaf_slot() {
    for n in 2..=40 {
        let teams = roster(n);
        let matches = build_initial_matches(&teams, 1).unwrap();

        let placed: Vec<TeamId> = matches
            .iter()
            .flat_map(|m| [m.team1, m.team2])
            .flatten()
            .collect();

        let unique: HashSet<TeamId> = placed.iter().copied().collect();
        assert_eq!(placed.len(), n, "teams = {n}");
        assert_eq!(unique.len(), n);

        let leaves = matches
            .iter()
            .filter(|m| m.team1.is_some() || m.team2.is_some())
            .count();
        assert_eq!(leaves, tree::leaf_count(n));

        // Ни один матч не ждёт победителя несуществующего матча.
        let total = matches.len() as u32;
        for m in &matches {
            let (left, right) = tree::children_of(m.id_in_tournament);
            assert_eq!(m.team1.is_none(), left <= total);
            assert_eq!(m.team2.is_none(), right <= total);
        }

        assert!(matches.iter().all(|m| m.score1.is_none() && m.score2.is_none()));
    }
}

#[test]
fn round_numbers_are_tagged_at_creation() {
    for n in 2..=64 {
        let matches = build_initial_matches(&roster(n), 1).unwrap();
        let rounds = tree::round_count(tree::leaf_count(n));

        assert_eq!(rounds, tree::round_count_for_matches(matches.len()));

        for m in &matches {
            assert_eq!(m.round_nb, tree::round_of(m.id_in_tournament, rounds));
        }
        assert_eq!(by_id(&matches, 1).round_nb, Some(rounds));
        assert!(matches.iter().any(|m| m.round_nb == Some(1)));
    }
}

//
// TEST 4 — сценарии
//
#[test]
fn five_teams_scenario() {
    let teams = roster(5);
    let matches = build_initial_matches(&teams, 42).unwrap();

    assert_eq!(matches.len(), 4);

    // Пары с конца состава: (T5, T4), (T3, T2), затем T1 ждёт победителя матча 4.
    let m4 = by_id(&matches, 4);
    assert_eq!((m4.team1, m4.team2), (Some(5), Some(4)));
    assert_eq!(m4.id_parent, Some(2));
    assert_eq!(m4.round_nb, Some(1));

    let m3 = by_id(&matches, 3);
    assert_eq!((m3.team1, m3.team2), (Some(3), Some(2)));
    assert_eq!(m3.id_parent, Some(1));
    assert_eq!(m3.round_nb, Some(2));

    let m2 = by_id(&matches, 2);
    assert_eq!((m2.team1, m2.team2), (None, Some(1)));
    assert_eq!(m2.id_parent, Some(1));
    assert_eq!(m2.round_nb, Some(2));

    let m1 = by_id(&matches, 1);
    assert_eq!((m1.team1, m1.team2), (None, None));
    assert_eq!(m1.id_parent, None);
    assert_eq!(m1.round_nb, Some(3));

    let with_teams: Vec<&Match> = matches
        .iter()
        .filter(|m| m.team1.is_some() || m.team2.is_some())
        .collect();
    assert_eq!(with_teams.len(), 3);
    assert_eq!(with_teams.iter().filter(|m| !m.is_ready()).count(), 1);
}

#[test]
fn two_teams_scenario() {
    let matches = build_initial_matches(&roster(2), 9).unwrap();

    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.id_in_tournament, 1);
    assert_eq!(m.id_parent, None);
    assert_eq!(m.round_nb, Some(1));
    assert_eq!((m.team1, m.team2), (Some(2), Some(1)));
}

#[test]
fn power_of_two_roster_fills_only_the_deepest_round() {
    let matches = build_initial_matches(&roster(8), 1).unwrap();

    for m in &matches {
        if m.id_in_tournament >= 4 {
            assert!(m.is_ready());
            assert_eq!(m.round_nb, Some(1));
        } else {
            assert_eq!((m.team1, m.team2), (None, None));
        }
    }
}

//
// TEST 5 — ошибки и детерминированность
//
#[test]
fn absent_tournament_id_is_invalid_argument() {
    let err = build_initial_matches(&roster(4), 0).unwrap_err();
    assert!(matches!(err, BracketError::InvalidArgument(_)));
}

#[test]
fn malformed_roster_is_invalid_argument() {
    let mut dup = roster(3);
    dup.push(Team::new(2, "again"));
    assert!(matches!(
        build_initial_matches(&dup, 1),
        Err(BracketError::InvalidArgument(_))
    ));

    let reserved = vec![Team::new(0, "none"), Team::new(1, "T1")];
    assert!(matches!(
        build_initial_matches(&reserved, 1),
        Err(BracketError::InvalidArgument(_))
    ));
}

#[test]
fn construction_is_deterministic_and_leaves_input_untouched() {
    let teams = roster(11);
    let before = teams.clone();

    let a = build_initial_matches(&teams, 5).unwrap();
    let b = build_initial_matches(&teams, 5).unwrap();

    assert_eq!(a, b);
    assert_eq!(teams, before);
}

#[test]
fn draw_is_a_seeded_permutation() {
    let teams = roster(16);

    let a = draw_roster(&teams, &mut DeterministicRng::from_seed(2024));
    let b = draw_roster(&teams, &mut DeterministicRng::from_seed(2024));
    assert_eq!(a, b);

    let mut ids: Vec<TeamId> = a.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=16).collect::<Vec<TeamId>>());

    // Исходный состав не перемешан.
    assert_eq!(teams, roster(16));
}
