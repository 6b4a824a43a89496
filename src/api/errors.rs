use serde::{Deserialize, Serialize};

use crate::bracket::BracketError;
use crate::domain::tournament::TournamentError;
use crate::domain::TournamentId;
use crate::infra::persistence::StorageError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    BadRequest(String),

    /// Нет авторизации.
    Unauthorized,

    /// Турнир не найден.
    TournamentNotFound(TournamentId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка сетки.
    BracketError(String),

    /// Внутренняя ошибка хранилища.
    Internal(String),
}

impl From<BracketError> for ApiError {
    fn from(err: BracketError) -> Self {
        match err {
            BracketError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            other => ApiError::BracketError(other.to_string()),
        }
    }
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        match err {
            TournamentError::TournamentNotFound { tournament_id } => {
                ApiError::TournamentNotFound(tournament_id)
            }
            TournamentError::InvalidSettings(msg) => ApiError::BadRequest(msg),
            e @ TournamentError::ReservedId(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::InvalidCommand(other.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unauthorized => ApiError::Unauthorized,
            StorageError::TournamentNotFound(id) => ApiError::TournamentNotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
