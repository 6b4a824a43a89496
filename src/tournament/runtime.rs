// src/tournament/runtime.rs

use crate::api::commands::{Command, CommandResponse};
use crate::api::dto::{map_bracket_view, TournamentViewDto};
use crate::api::errors::ApiError;
use crate::api::queries::{Query, QueryResponse};
use crate::bracket;
use crate::domain::config::RoundOrder;
use crate::infra::persistence::BracketStorage;
use crate::infra::session::SessionContext;
use crate::BracketOperation;

use super::lobby::{LobbyError, TournamentLobby};

impl From<LobbyError> for ApiError {
    fn from(err: LobbyError) -> Self {
        match err {
            LobbyError::Unauthorized => ApiError::Unauthorized,
            LobbyError::TournamentNotFound { tournament_id } => {
                ApiError::TournamentNotFound(tournament_id)
            }
            LobbyError::InvalidConfig(msg) => ApiError::Internal(msg),
            LobbyError::Tournament(e) => e.into(),
            LobbyError::Bracket(e) => e.into(),
            LobbyError::Storage(e) => e.into(),
        }
    }
}

/// Рантайм-слой: разбирает команды и запросы API и вызывает лобби.
///
/// Это то, что делает контракт/сервис Linera (или оффчейн-сервер)
/// на каждую операцию.
pub struct TournamentRuntime;

impl TournamentRuntime {
    /// Выполнить команду от имени пользователя сессии.
    pub fn execute_command<S: BracketStorage>(
        lobby: &mut TournamentLobby<S>,
        session: &SessionContext,
        command: Command,
    ) -> Result<CommandResponse, ApiError> {
        match command {
            Command::CreateTournament(cmd) => {
                let t = lobby.create_tournament(session, cmd.tournament_id, cmd.settings)?;
                Ok(CommandResponse::TournamentState(TournamentViewDto::from(&t)))
            }

            Command::RegisterTeam(cmd) => {
                let t = lobby.register_team(session, cmd.tournament_id, &cmd.team)?;
                Ok(CommandResponse::TournamentState(TournamentViewDto::from(&t)))
            }

            Command::AddReferee(cmd) => {
                if cmd.username.trim().is_empty() {
                    return Err(ApiError::BadRequest("referee username is empty".into()));
                }
                let t = lobby.add_referee(session, cmd.tournament_id, &cmd.username)?;
                Ok(CommandResponse::TournamentState(TournamentViewDto::from(&t)))
            }

            Command::GenerateBracket(cmd) => {
                let matches = lobby.generate_bracket(session, cmd.tournament_id, cmd.draw_seed)?;
                Ok(CommandResponse::BracketGenerated(matches))
            }

            Command::ReportScore(cmd) => {
                let view = lobby.report_score(
                    session,
                    cmd.tournament_id,
                    cmd.id_in_tournament,
                    cmd.score1,
                    cmd.score2,
                )?;
                let champion = lobby.get(cmd.tournament_id)?.champion;
                Ok(CommandResponse::Bracket(map_bracket_view(
                    cmd.tournament_id,
                    view,
                    champion,
                )))
            }
        }
    }

    /// Выполнить операцию контракта (`BracketAbi::Operation`).
    pub fn execute_operation<S: BracketStorage>(
        lobby: &mut TournamentLobby<S>,
        session: &SessionContext,
        operation: BracketOperation,
    ) -> Result<CommandResponse, ApiError> {
        Self::execute_command(lobby, session, operation.into_command())
    }

    /// Выполнить запрос "только чтение".
    pub fn execute_query<S: BracketStorage>(
        lobby: &TournamentLobby<S>,
        query: Query,
    ) -> Result<QueryResponse, ApiError> {
        match query {
            Query::GetTournament { tournament_id } => {
                let t = lobby.get(tournament_id)?;
                Ok(QueryResponse::TournamentInfo(TournamentViewDto::from(&t)))
            }

            Query::GetMatches { tournament_id } => {
                lobby.get(tournament_id)?;
                let matches = lobby.storage().fetch_matches(tournament_id)?;
                Ok(QueryResponse::Matches(matches))
            }

            Query::GetBracket {
                tournament_id,
                root_first,
            } => {
                let order = if root_first {
                    RoundOrder::RootFirst
                } else {
                    RoundOrder::LeavesFirst
                };
                let view = lobby.bracket_view(tournament_id, Some(order))?;
                let matches = lobby.storage().fetch_matches(tournament_id)?;
                Ok(QueryResponse::Bracket(map_bracket_view(
                    tournament_id,
                    view,
                    bracket::champion(&matches),
                )))
            }
        }
    }
}
