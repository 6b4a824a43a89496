use serde::{Deserialize, Serialize};

use crate::domain::match_record::Match;
use crate::domain::team::Team;
use crate::domain::tournament::TournamentSettings;
use crate::domain::{MatchNumber, TournamentId};

use super::dto::{BracketViewDto, TournamentViewDto};

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`BracketOperation`),
/// которые Linera экспонирует наружу в виде GraphQL mutations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать турнир. Организатор — пользователь из сессии.
    CreateTournament(CreateTournamentCommand),

    /// Зарегистрировать команду в турнире.
    RegisterTeam(RegisterTeamCommand),

    /// Назначить судью турнира.
    AddReferee(AddRefereeCommand),

    /// Закрыть регистрацию и построить сетку.
    GenerateBracket(GenerateBracketCommand),

    /// Внести счёт матча.
    ReportScore(ReportScoreCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateTournamentCommand {
    pub tournament_id: TournamentId,
    pub settings: TournamentSettings,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterTeamCommand {
    pub tournament_id: TournamentId,
    pub team: Team,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddRefereeCommand {
    pub tournament_id: TournamentId,
    pub username: String,
}

/// Построение сетки.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateBracketCommand {
    pub tournament_id: TournamentId,
    /// Seed жеребьёвки. None — команды идут в порядке регистрации.
    pub draw_seed: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportScoreCommand {
    pub tournament_id: TournamentId,
    pub id_in_tournament: MatchNumber,
    pub score1: u32,
    pub score2: u32,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Состояние турнира после турнирной команды.
    TournamentState(TournamentViewDto),

    /// Сетка построена: сохранённые матчи.
    BracketGenerated(Vec<Match>),

    /// Сетка после внесения счёта.
    Bracket(BracketViewDto),
}
