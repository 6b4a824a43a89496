use serde::{Deserialize, Serialize};

use crate::domain::match_record::Match;
use crate::domain::TournamentId;

use super::dto::{BracketViewDto, TournamentViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Получить минимальную инфу о турнире.
    GetTournament { tournament_id: TournamentId },

    /// Плоский список матчей (как в хранилище).
    GetMatches { tournament_id: TournamentId },

    /// Сетка по раундам.
    ///
    /// `root_first` переворачивает порядок раундов: финал первым.
    GetBracket {
        tournament_id: TournamentId,
        root_first: bool,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    TournamentInfo(TournamentViewDto),
    Matches(Vec<Match>),
    Bracket(BracketViewDto),
}
