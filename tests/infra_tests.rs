// tests/infra_tests.rs
//
// Хранилище, формат бэкенда, сессия, генератор id.

use bracket_engine::bracket::{build_initial_matches, build_rounds};
use bracket_engine::domain::{
    BracketConfig, Match, Referee, Team, TeamId, Tournament, TournamentSettings,
};
use bracket_engine::infra::{
    matches_from_json, matches_to_json, referee_usernames, referees_from_usernames,
    BracketStorage, IdGenerator, InMemoryBracketStorage, SessionContext, StorageError,
};

fn settings() -> TournamentSettings {
    TournamentSettings {
        name: "Cup".into(),
        game_name: "Chess".into(),
        match_duration: 30,
        break_duration: 0,
        dead_line_ts: 0,
        nb_team: 16,
    }
}

fn session() -> SessionContext {
    SessionContext::authenticated("alice", "t0k3n")
}

/// Хранилище с турниром 1 и командами 1..=n в порядке регистрации.
fn storage_with_roster(n: TeamId) -> InMemoryBracketStorage {
    let mut storage = InMemoryBracketStorage::new();
    let mut tournament = Tournament::new(1, "alice", settings()).unwrap();

    for id in 1..=n {
        storage
            .save_team(&session(), &Team::new(id, format!("T{id}")))
            .unwrap();
        tournament.register_team(id).unwrap();
    }
    storage.save_tournament(&session(), &tournament).unwrap();
    storage
}

//
// TEST 1 — хранилище
//
#[test]
fn teams_come_back_in_registration_order() {
    let mut storage = InMemoryBracketStorage::new();
    let mut tournament = Tournament::new(1, "alice", settings()).unwrap();

    for id in [30, 10, 20] {
        storage
            .save_team(&session(), &Team::new(id, format!("T{id}")))
            .unwrap();
        tournament.register_team(id).unwrap();
    }
    storage.save_tournament(&session(), &tournament).unwrap();

    let ids: Vec<TeamId> = storage.fetch_teams(1).unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}

#[test]
fn saved_matches_replace_previous_list() {
    let mut storage = storage_with_roster(6);
    assert!(storage.fetch_matches(1).unwrap().is_empty());

    let teams = storage.fetch_teams(1).unwrap();
    let matches = build_initial_matches(&teams, 1).unwrap();
    storage.save_matches(&session(), 1, &matches).unwrap();
    assert_eq!(storage.fetch_matches(1).unwrap(), matches);

    storage.save_matches(&session(), 1, &matches[..2]).unwrap();
    assert_eq!(storage.fetch_matches(1).unwrap().len(), 2);
}

#[test]
fn storage_rejects_unknown_tournament_and_foreign_matches() {
    let mut storage = storage_with_roster(4);

    assert_eq!(
        storage.fetch_teams(2).unwrap_err(),
        StorageError::TournamentNotFound(2)
    );
    assert_eq!(
        storage.fetch_matches(2).unwrap_err(),
        StorageError::TournamentNotFound(2)
    );

    let foreign = build_initial_matches(&storage.fetch_teams(1).unwrap(), 2).unwrap();
    assert!(matches!(
        storage.save_matches(&session(), 1, &foreign),
        Err(StorageError::ForeignMatch {
            expected: 1,
            found: 2,
            ..
        })
    ));
    assert!(storage.fetch_matches(1).unwrap().is_empty());
}

#[test]
fn writes_require_authenticated_session() {
    let mut storage = storage_with_roster(2);
    let guest = SessionContext::anonymous();

    assert_eq!(
        storage.save_team(&guest, &Team::new(5, "T5")),
        Err(StorageError::Unauthorized)
    );
    assert_eq!(
        storage.save_matches(&guest, 1, &[]),
        Err(StorageError::Unauthorized)
    );

    let tournament = storage.load_tournament(1).unwrap();
    assert_eq!(
        storage.save_tournament(&guest, &tournament),
        Err(StorageError::Unauthorized)
    );

    // Чтение доступно всем.
    assert_eq!(storage.fetch_teams(1).unwrap().len(), 2);
}

//
// TEST 2 — формат бэкенда
//
#[test]
fn match_json_uses_backend_field_names() {
    let teams: Vec<Team> = (1..=2).map(|id| Team::new(id, "T")).collect();
    let matches = build_initial_matches(&teams, 3).unwrap();

    let json = matches_to_json(&matches).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &value[0];

    assert_eq!(record["idInTournament"], 1);
    assert_eq!(record["idParent"], serde_json::Value::Null);
    assert_eq!(record["roundNb"], 1);
    assert_eq!(record["tournament"], 3);
    assert_eq!(record["team1"], 2);
    assert_eq!(record["team2"], 1);
    assert_eq!(record["score1"], serde_json::Value::Null);

    assert_eq!(matches_from_json(&json).unwrap(), matches);
}

#[test]
fn legacy_records_without_round_are_accepted() {
    let json = r#"[
        {"team1": null, "team2": null, "score1": null, "score2": null,
         "tournament": 7, "idInTournament": 1, "idParent": null},
        {"team1": 4, "team2": 3, "score1": 2, "score2": 0,
         "tournament": 7, "idInTournament": 3, "idParent": 1},
        {"team1": 2, "team2": 1, "score1": null, "score2": null,
         "tournament": 7, "idInTournament": 2, "idParent": 1}
    ]"#;

    let matches: Vec<Match> = matches_from_json(json).unwrap();
    assert!(matches.iter().all(|m| m.round_nb.is_none()));

    let teams: Vec<Team> = (1..=4).map(|id| Team::new(id, format!("T{id}"))).collect();
    let view = build_rounds::<Referee>(&matches, &teams, None, &BracketConfig::default());

    assert!(view.is_clean());
    assert_eq!(view.rounds.len(), 2);
    assert_eq!(view.rounds[0].games.len(), 2);
    assert_eq!(view.rounds[1].games[0].match_record.id_in_tournament, 1);
    assert!(view.rounds[0].games[0].team1.winner);
}

#[test]
fn referee_usernames_round_trip() {
    let names = vec!["alice".to_string(), "bob".to_string()];
    let referees = referees_from_usernames(&names);

    assert_eq!(referees[1], Referee::new("bob"));
    assert_eq!(referee_usernames(&referees), names);
}

//
// TEST 3 — сессия и id
//
#[test]
fn session_lifecycle() {
    let mut s = session();
    assert!(s.is_authenticated());
    assert_eq!(s.username(), Some("alice"));

    s.logout();
    assert!(!s.is_authenticated());
    assert_eq!(s.username(), None);

    assert!(!SessionContext::authenticated("bob", "").is_authenticated());
    assert!(!SessionContext::anonymous().is_authenticated());
}

#[test]
fn id_generator_never_issues_zero() {
    let ids = IdGenerator::new();

    assert_eq!(ids.next_team_id(), 1);
    assert_eq!(ids.next_team_id(), 2);
    assert_eq!(ids.next_tournament_id(), 1);
    assert_eq!(ids.next_team_id(), 3);
}

#[test]
fn deterministic_draw_keeps_its_seed() {
    use bracket_engine::bracket::RandomSource;
    use bracket_engine::infra::DeterministicRng;

    let mut rng = DeterministicRng::from_seed(31);
    assert_eq!(rng.seed(), 31);

    let mut a: Vec<u32> = (0..10).collect();
    let mut b = a.clone();
    rng.shuffle(&mut a);
    DeterministicRng::from_seed(31).shuffle(&mut b);
    assert_eq!(a, b);
}
