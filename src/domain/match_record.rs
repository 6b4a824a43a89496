use serde::{Deserialize, Serialize};

use crate::domain::{MatchNumber, TeamId, TournamentId};

/// Один узел турнирной сетки в "плоском" виде — ровно то, что уходит в хранилище.
///
/// Имена полей при сериализации совпадают с REST-бэкендом:
/// `team1`, `team2`, `score1`, `score2`, `tournament`,
/// `idInTournament`, `idParent`, `roundNb`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Первая команда (None = ещё не известна).
    pub team1: Option<TeamId>,
    /// Вторая команда (None = ещё не известна).
    pub team2: Option<TeamId>,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    /// Турнир-владелец.
    pub tournament: TournamentId,
    /// Номер матча внутри турнира, финал = 1.
    pub id_in_tournament: MatchNumber,
    /// Кэш `id_in_tournament / 2`, у финала None.
    pub id_parent: Option<MatchNumber>,
    /// Номер раунда: 1 = самый глубокий уровень сетки, финал = последний.
    ///
    /// Старые записи могут его не содержать, тогда раунд считается по id.
    #[serde(default)]
    pub round_nb: Option<u32>,
}

impl Match {
    /// Пустой матч (обе команды ждут победителей предыдущих матчей).
    pub fn empty(tournament: TournamentId, id_in_tournament: MatchNumber) -> Self {
        Self {
            team1: None,
            team2: None,
            score1: None,
            score2: None,
            tournament,
            id_in_tournament,
            id_parent: None,
            round_nb: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.id_in_tournament == 1
    }

    /// Обе команды известны.
    pub fn is_ready(&self) -> bool {
        self.team1.is_some() && self.team2.is_some()
    }

    /// Счёт внесён.
    pub fn is_played(&self) -> bool {
        self.score1.is_some() && self.score2.is_some()
    }

    /// Победитель матча, если он определён.
    ///
    /// Ничья победителя не даёт.
    pub fn winner(&self) -> Option<TeamId> {
        let (s1, s2) = (self.score1?, self.score2?);

        if s1 > s2 {
            self.team1
        } else if s2 > s1 {
            self.team2
        } else {
            None
        }
    }
}
