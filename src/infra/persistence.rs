use std::collections::HashMap;

use thiserror::Error;

use crate::domain::match_record::Match;
use crate::domain::team::Team;
use crate::domain::tournament::Tournament;
use crate::domain::{MatchNumber, TeamId, TournamentId};
use crate::infra::session::SessionContext;

/// Ошибки хранилища.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Операция требует авторизации")]
    Unauthorized,

    #[error("Турнир {0} не найден")]
    TournamentNotFound(TournamentId),

    #[error("Матч {id_in_tournament} принадлежит турниру {found}, а сохраняется в турнир {expected}")]
    ForeignMatch {
        id_in_tournament: MatchNumber,
        expected: TournamentId,
        found: TournamentId,
    },
}

/// Абстракция хранилища для турнирной сетки.
///
/// Движок с хранилищем не разговаривает: вызывающий слой достаёт
/// команды и матчи, отдаёт их движку и сохраняет то, что тот вернул.
/// В Linera-режиме реализацию даёт приложение, исполняющее `BracketOperation`.
pub trait BracketStorage {
    /// Состав турнира в порядке регистрации.
    fn fetch_teams(&self, tournament_id: TournamentId) -> Result<Vec<Team>, StorageError>;

    /// Все матчи турнира.
    fn fetch_matches(&self, tournament_id: TournamentId) -> Result<Vec<Match>, StorageError>;

    /// Заменить матчи турнира переданным списком.
    fn save_matches(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        matches: &[Match],
    ) -> Result<(), StorageError>;

    /// Загрузить турнир.
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament>;

    /// Сохранить турнир.
    fn save_tournament(
        &mut self,
        session: &SessionContext,
        tournament: &Tournament,
    ) -> Result<(), StorageError>;

    /// Сохранить команду (создание или обновление).
    fn save_team(&mut self, session: &SessionContext, team: &Team) -> Result<(), StorageError>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryBracketStorage {
    teams: HashMap<TeamId, Team>,
    tournaments: HashMap<TournamentId, Tournament>,
    matches: HashMap<TournamentId, Vec<Match>>,
}

impl InMemoryBracketStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn tournament(&self, id: TournamentId) -> Result<&Tournament, StorageError> {
        self.tournaments
            .get(&id)
            .ok_or(StorageError::TournamentNotFound(id))
    }
}

fn require_auth(session: &SessionContext) -> Result<(), StorageError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(StorageError::Unauthorized)
    }
}

impl BracketStorage for InMemoryBracketStorage {
    fn fetch_teams(&self, tournament_id: TournamentId) -> Result<Vec<Team>, StorageError> {
        let tournament = self.tournament(tournament_id)?;

        Ok(tournament
            .teams
            .iter()
            .filter_map(|id| self.teams.get(id).cloned())
            .collect())
    }

    fn fetch_matches(&self, tournament_id: TournamentId) -> Result<Vec<Match>, StorageError> {
        self.tournament(tournament_id)?;

        Ok(self
            .matches
            .get(&tournament_id)
            .cloned()
            .unwrap_or_default())
    }

    fn save_matches(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        matches: &[Match],
    ) -> Result<(), StorageError> {
        require_auth(session)?;
        self.tournament(tournament_id)?;

        if let Some(m) = matches.iter().find(|m| m.tournament != tournament_id) {
            return Err(StorageError::ForeignMatch {
                id_in_tournament: m.id_in_tournament,
                expected: tournament_id,
                found: m.tournament,
            });
        }

        self.matches.insert(tournament_id, matches.to_vec());
        Ok(())
    }

    fn load_tournament(&self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.get(&id).cloned()
    }

    fn save_tournament(
        &mut self,
        session: &SessionContext,
        tournament: &Tournament,
    ) -> Result<(), StorageError> {
        require_auth(session)?;
        self.tournaments.insert(tournament.id, tournament.clone());
        Ok(())
    }

    fn save_team(&mut self, session: &SessionContext, team: &Team) -> Result<(), StorageError> {
        require_auth(session)?;
        self.teams.insert(team.id, team.clone());
        Ok(())
    }
}
