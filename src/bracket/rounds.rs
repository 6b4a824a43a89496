use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bracket::errors::BracketIssue;
use crate::bracket::tree;
use crate::bracket::validation::validate_bracket;
use crate::domain::{BracketConfig, Match, MatchNumber, Referee, RoundOrder, Team, TeamId};

/// Один слот матча для отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    /// `Some(0)` — заглушка "none", `None` — заглушка "tbd".
    pub id: Option<TeamId>,
    pub name: String,
    /// Команда выиграла этот матч.
    pub winner: bool,
}

impl Slot {
    /// Слот, который уже никогда не заполнится (или команда не найдена).
    pub fn none(label: &str) -> Self {
        Self {
            id: Some(0),
            name: label.to_string(),
            winner: false,
        }
    }

    /// Слот, ждущий победителя дочернего матча.
    pub fn tbd(label: &str) -> Self {
        Self {
            id: None,
            name: label.to_string(),
            winner: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.id, None | Some(0))
    }
}

/// Матч в виде для отрисовки. Не сохраняется, строится заново при каждом вызове.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Game<R = Referee> {
    /// Исходная запись матча.
    #[serde(rename = "match")]
    pub match_record: Match,
    pub team1: Slot,
    pub team2: Slot,
    pub referees: Vec<R>,
}

/// Все матчи одного уровня дерева.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round<R = Referee> {
    /// 1 = самый глубокий раунд, финал — последний номер.
    pub number: u32,
    pub games: Vec<Game<R>>,
}

/// Результат восстановления сетки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BracketView<R = Referee> {
    /// Раунды в порядке `BracketConfig::round_order`.
    pub rounds: Vec<Round<R>>,
    /// Найденные аномалии (нефатальные).
    pub issues: Vec<BracketIssue>,
    /// Матчи, для которых не удалось определить раунд.
    pub orphans: Vec<Game<R>>,
}

impl<R> BracketView<R> {
    /// Сколько всего игр в представлении (включая orphans).
    pub fn game_count(&self) -> usize {
        self.rounds.iter().map(|r| r.games.len()).sum::<usize>() + self.orphans.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.orphans.is_empty()
    }
}

/// Восстановить сетку по раундам из плоского списка матчей.
///
/// Раунд берётся из `round_nb`, а если его нет или он вне `1..=R` — из номера матча.
/// Число матчей сверяется с размером состава `teams`.
/// Команды ищутся только по id, позиция в `teams` значения не имеет.
/// Неизвестный id даёт заглушку "none" и `BracketIssue::ReferentialIntegrity`,
/// восстановление при этом продолжается.
pub fn build_rounds<R: Clone>(
    matches: &[Match],
    teams: &[Team],
    referees: Option<&[R]>,
    config: &BracketConfig,
) -> BracketView<R> {
    let teams_by_id: HashMap<TeamId, &Team> = teams.iter().map(|t| (t.id, t)).collect();
    let present: HashSet<MatchNumber> = matches.iter().map(|m| m.id_in_tournament).collect();
    let referees: Vec<R> = referees.map(|r| r.to_vec()).unwrap_or_default();
    let rounds_expected = tree::round_count_for_matches(matches.len());

    let mut issues = validate_bracket(matches, Some(teams.len()));
    let mut by_round: Vec<Vec<Game<R>>> = Vec::new();
    let mut orphans = Vec::new();

    for m in matches {
        let (left, right) = tree::children_of(m.id_in_tournament);

        let team1 = resolve_slot(m, m.team1, left, &teams_by_id, &present, config, &mut issues);
        let team2 = resolve_slot(m, m.team2, right, &teams_by_id, &present, config, &mut issues);

        let game = Game {
            match_record: m.clone(),
            team1,
            team2,
            referees: referees.clone(),
        };

        // Заявленный раунд вне сетки не принимаем: берём раунд по номеру матча.
        let round = m
            .round_nb
            .filter(|r| (1..=rounds_expected).contains(r))
            .or_else(|| tree::round_of(m.id_in_tournament, rounds_expected));

        match round {
            Some(round) => {
                let idx = (round - 1) as usize;
                if by_round.len() <= idx {
                    by_round.resize_with(idx + 1, Vec::new);
                }
                by_round[idx].push(game);
            }
            None => orphans.push(game),
        }
    }

    for issue in &issues {
        warn!(%issue, "bracket reconstruction issue");
    }

    // Пустой раунд возможен только при сдвинутых roundNb, в результат он не попадает.
    let mut rounds: Vec<Round<R>> = by_round
        .into_iter()
        .enumerate()
        .filter(|(_, games)| !games.is_empty())
        .map(|(idx, games)| Round {
            number: idx as u32 + 1,
            games,
        })
        .collect();

    if config.round_order == RoundOrder::RootFirst {
        rounds.reverse();
    }

    BracketView {
        rounds,
        issues,
        orphans,
    }
}

/// Найти команду слота по id.
///
/// `feeder` — номер дочернего матча, из которого в этот слот придёт победитель.
fn resolve_slot(
    m: &Match,
    team: Option<TeamId>,
    feeder: MatchNumber,
    teams_by_id: &HashMap<TeamId, &Team>,
    present: &HashSet<MatchNumber>,
    config: &BracketConfig,
    issues: &mut Vec<BracketIssue>,
) -> Slot {
    let Some(team_id) = team else {
        return if present.contains(&feeder) {
            Slot::tbd(&config.tbd_label)
        } else {
            Slot::none(&config.none_label)
        };
    };

    match teams_by_id.get(&team_id) {
        Some(t) => Slot {
            id: Some(t.id),
            name: t.name.clone(),
            winner: m.winner() == Some(t.id),
        },
        None => {
            issues.push(BracketIssue::ReferentialIntegrity {
                id_in_tournament: m.id_in_tournament,
                team_id,
            });
            Slot::none(&config.none_label)
        }
    }
}
