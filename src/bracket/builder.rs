use std::collections::HashSet;

use tracing::debug;

use crate::bracket::errors::BracketError;
use crate::bracket::tree;
use crate::bracket::RandomSource;
use crate::domain::{Match, MatchNumber, Team, TournamentId};

/// Построить полный список матчей нового турнира.
///
/// Шаги:
///   1. провизорная нумерация `p = 1..=N` от самого глубокого матча к финалу;
///   2. слоты, которые не являются матчами, заполняются командами
///      с конца состава: `teams[n-1]`, `teams[n-2]`, ...
///      первые `ceil(T/2)` провизорных матчей — листья;
///   3. перенумерация `id = N - p + 1`, `id_parent = id / 2`, `round_nb` по глубине.
///
/// При нечётном составе одна команда проходит в лист одна: она стоит в `team2`,
/// а `team1 = None` ждёт победителя самого глубокого матча.
///
/// Состав из 0 или 1 команды даёт пустой список: играть некому.
/// Вход не изменяется, результат — новые записи, ещё не сохранённые.
pub fn build_initial_matches(
    teams: &[Team],
    tournament_id: TournamentId,
) -> Result<Vec<Match>, BracketError> {
    if tournament_id == 0 {
        return Err(BracketError::InvalidArgument(
            "tournament id is absent (0)".into(),
        ));
    }

    validate_roster(teams)?;

    let total = MatchNumber::try_from(tree::match_count(teams.len())).map_err(|_| {
        BracketError::InvalidArgument(format!("roster of {} teams is too large", teams.len()))
    })?;

    if total == 0 {
        debug!(tournament_id, teams = teams.len(), "roster too small, no matches");
        return Ok(Vec::new());
    }

    let rounds = tree::round_count(tree::leaf_count(teams.len()));

    // Команды берём с конца состава, по две на матч.
    let mut roster = teams.iter().rev();
    let mut matches = Vec::with_capacity(total as usize);
    let mut leaves = 0usize;

    for provisional in 1..=total {
        let (left, right) = tree::children_of(tree::reindex(provisional, total));
        let mut m = Match::empty(tournament_id, provisional);

        if left > total {
            m.team1 = roster.next().map(|t| t.id);
        }
        if right > total {
            m.team2 = roster.next().map(|t| t.id);
        }
        if m.team1.is_some() || m.team2.is_some() {
            leaves += 1;
        }

        matches.push(m);
    }

    debug_assert_eq!(leaves, tree::leaf_count(teams.len()));
    debug_assert!(roster.next().is_none());

    reverse_match_numbers(&mut matches, total, rounds);

    debug!(
        tournament_id,
        teams = teams.len(),
        matches = total,
        leaves,
        rounds,
        "initial bracket built"
    );

    Ok(matches)
}

/// Перенумерация: в провизорной нумерации финал создан последним,
/// а для арифметики `parent = id / 2` он должен получить 1.
fn reverse_match_numbers(matches: &mut [Match], total: MatchNumber, rounds: u32) {
    for m in matches.iter_mut() {
        let id = tree::reindex(m.id_in_tournament, total);
        m.id_in_tournament = id;
        m.id_parent = tree::parent_of(id);
        m.round_nb = tree::round_of(id, rounds);
    }
}

/// Состав должен ссылаться на реальные и уникальные команды.
fn validate_roster(teams: &[Team]) -> Result<(), BracketError> {
    let mut seen = HashSet::with_capacity(teams.len());

    for team in teams {
        if team.id == 0 {
            return Err(BracketError::InvalidArgument(format!(
                "team \"{}\" uses reserved id 0",
                team.name
            )));
        }
        if !seen.insert(team.id) {
            return Err(BracketError::InvalidArgument(format!(
                "team id {} appears twice in the roster",
                team.id
            )));
        }
    }

    Ok(())
}

/// Жеребьёвка: перемешанная копия состава.
///
/// Сам движок детерминирован; случайность подаётся только через `rng`,
/// поэтому с `DeterministicRng` результат воспроизводим.
pub fn draw_roster<R: RandomSource>(teams: &[Team], rng: &mut R) -> Vec<Team> {
    let mut drawn = teams.to_vec();
    rng.shuffle(&mut drawn);
    drawn
}
