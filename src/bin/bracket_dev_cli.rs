// src/bin/bracket_dev_cli.rs

use bracket_engine::bracket::{BracketView, Slot};
use bracket_engine::domain::config::BracketConfig;
use bracket_engine::domain::referee::Referee;
use bracket_engine::domain::team::Team;
use bracket_engine::domain::tournament::TournamentSettings;
use bracket_engine::infra::ids::IdGenerator;
use bracket_engine::infra::mapping::matches_to_json;
use bracket_engine::infra::persistence::{BracketStorage, InMemoryBracketStorage};
use bracket_engine::infra::session::SessionContext;
use bracket_engine::tournament::{LobbyError, TournamentLobby};
use tracing_subscriber::EnvFilter;

fn main() {
    setup_tracing();

    // Размер состава можно передать первым аргументом: `bracket_dev_cli 7`.
    let team_count: usize = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(5);

    println!("=== BRACKET DEV CLI ({team_count} teams) ===\n");

    if let Err(err) = run(team_count) {
        eprintln!("Ошибка: {err}");
        std::process::exit(1);
    }

    println!("=== BRACKET DEV CLI DONE ===");
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(team_count: usize) -> Result<(), LobbyError> {
    let ids = IdGenerator::new();
    let session = SessionContext::authenticated("organizer", "dev-token");
    let mut lobby = TournamentLobby::new(InMemoryBracketStorage::new(), BracketConfig::default())?;

    let settings = TournamentSettings {
        name: "Dev Cup".to_string(),
        game_name: "Rocket League".to_string(),
        match_duration: 15,
        break_duration: 5,
        dead_line_ts: 0,
        nb_team: team_count.max(2) as u32,
    };

    let tournament_id = ids.next_tournament_id();
    lobby.create_tournament(&session, tournament_id, settings)?;
    lobby.add_referee(&session, tournament_id, "referee")?;

    for n in 1..=team_count {
        let team =
            Team::new(ids.next_team_id(), format!("Team {n}")).with_leader(format!("captain{n}"));
        lobby.register_team(&session, tournament_id, &team)?;
    }

    let matches = lobby.generate_bracket(&session, tournament_id, None)?;
    println!("Сохранено матчей: {}", matches.len());
    match matches_to_json(&matches) {
        Ok(json) => println!("JSON для бэкенда: {json}\n"),
        Err(err) => println!("JSON не собрался: {err}\n"),
    }

    print_view(&lobby.bracket_view(tournament_id, None)?);

    // Играем сетку до конца: в каждом готовом матче побеждает team1.
    loop {
        let matches = lobby.storage().fetch_matches(tournament_id)?;
        let Some(next) = matches
            .iter()
            .filter(|m| m.is_ready() && !m.is_played())
            .max_by_key(|m| m.id_in_tournament)
        else {
            break;
        };

        println!("Матч #{}: счёт 2:1", next.id_in_tournament);
        lobby.report_score(&session, tournament_id, next.id_in_tournament, 2, 1)?;
    }

    println!();
    print_view(&lobby.bracket_view(tournament_id, None)?);

    let tournament = lobby.get(tournament_id)?;
    println!(
        "Статус: {:?}, победитель: {:?}\n",
        tournament.status, tournament.champion
    );

    Ok(())
}

fn print_view(view: &BracketView<Referee>) {
    for round in &view.rounds {
        println!("Раунд {}:", round.number);
        for game in &round.games {
            println!(
                "    #{:<3} {:<12} vs {:<12} | {}",
                game.match_record.id_in_tournament,
                slot_label(&game.team1),
                slot_label(&game.team2),
                score_label(game.match_record.score1, game.match_record.score2),
            );
        }
    }

    for issue in &view.issues {
        println!("  ! {issue}");
    }
    println!();
}

fn slot_label(slot: &Slot) -> String {
    if slot.winner {
        format!("*{}", slot.name)
    } else {
        slot.name.clone()
    }
}

fn score_label(score1: Option<u32>, score2: Option<u32>) -> String {
    match (score1, score2) {
        (Some(s1), Some(s2)) => format!("{s1}:{s2}"),
        _ => "-".to_string(),
    }
}
