use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{MatchNumber, TeamId};

/// Фатальные ошибки движка сетки: вызов целиком отклоняется,
/// частичный результат не возвращается.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("Некорректные входные данные: {0}")]
    InvalidArgument(String),

    #[error("Матч {id_in_tournament} не найден")]
    MatchNotFound { id_in_tournament: MatchNumber },

    #[error("В матче {id_in_tournament} ещё не определены обе команды")]
    MatchNotReady { id_in_tournament: MatchNumber },

    #[error("Ничья невозможна в матче на выбывание (матч {id_in_tournament})")]
    DrawNotAllowed { id_in_tournament: MatchNumber },

    #[error("Следующий матч {parent} уже сыгран, результат матча {id_in_tournament} менять нельзя")]
    ParentAlreadyPlayed {
        id_in_tournament: MatchNumber,
        parent: MatchNumber,
    },

    #[error("Нарушена структура сетки у матча {id_in_tournament}: {reason}")]
    StructuralInconsistency {
        id_in_tournament: MatchNumber,
        reason: String,
    },
}

/// Нефатальные проблемы, найденные при восстановлении сетки.
///
/// Матч с такой проблемой всё равно попадает в результат,
/// а вызывающая сторона решает, показывать ли предупреждение.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketIssue {
    #[error("Матч {id_in_tournament} ссылается на команду {team_id}, которой нет в составе")]
    ReferentialIntegrity {
        id_in_tournament: MatchNumber,
        team_id: TeamId,
    },

    #[error("Матч {id_in_tournament} не вписывается в сетку: {reason}")]
    StructuralInconsistency {
        id_in_tournament: MatchNumber,
        reason: String,
    },
}
