// src/tournament/lobby.rs

use thiserror::Error;
use tracing::info;

use crate::bracket::{self, BracketError, BracketView};
use crate::domain::config::{BracketConfig, RoundOrder};
use crate::domain::match_record::Match;
use crate::domain::referee::Referee;
use crate::domain::team::Team;
use crate::domain::tournament::{Tournament, TournamentError, TournamentSettings, TournamentStatus};
use crate::domain::{MatchNumber, TournamentId};
use crate::infra::mapping::referees_from_usernames;
use crate::infra::persistence::{BracketStorage, StorageError};
use crate::infra::session::SessionContext;

/// Ошибки лобби: всё, что может пойти не так между хранилищем и движком.
#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("Операция требует авторизации")]
    Unauthorized,

    #[error("Турнир {tournament_id} не найден")]
    TournamentNotFound { tournament_id: TournamentId },

    #[error("Некорректный конфиг сетки: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Tournament(#[from] TournamentError),

    #[error(transparent)]
    Bracket(#[from] BracketError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Турнирное лобби поверх хранилища:
/// - создаёт турниры и регистрирует команды;
/// - строит сетку при закрытии регистрации;
/// - вносит счёт и продвигает победителей;
/// - отдаёт сетку по раундам для отрисовки.
///
/// Движок вызывается синхронно, один раз на действие пользователя.
pub struct TournamentLobby<S: BracketStorage> {
    storage: S,
    config: BracketConfig,
}

impl<S: BracketStorage> TournamentLobby<S> {
    pub fn new(storage: S, config: BracketConfig) -> Result<Self, LobbyError> {
        config.validate().map_err(LobbyError::InvalidConfig)?;
        Ok(Self { storage, config })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &BracketConfig {
        &self.config
    }

    /// Создать новый турнир. Организатор — пользователь сессии.
    ///
    /// Занятый id не перезаписывается.
    pub fn create_tournament(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        settings: TournamentSettings,
    ) -> Result<Tournament, LobbyError> {
        let organizer = session.username().ok_or(LobbyError::Unauthorized)?;
        if self.storage.load_tournament(tournament_id).is_some() {
            return Err(TournamentError::TournamentExists { tournament_id }.into());
        }
        let tournament = Tournament::new(tournament_id, organizer, settings)?;

        self.storage.save_tournament(session, &tournament)?;
        info!(tournament_id, organizer, "tournament created");

        Ok(tournament)
    }

    /// Получить турнир по id.
    pub fn get(&self, tournament_id: TournamentId) -> Result<Tournament, LobbyError> {
        self.storage
            .load_tournament(tournament_id)
            .ok_or(LobbyError::TournamentNotFound { tournament_id })
    }

    /// Зарегистрировать команду в турнир (команда сохраняется в хранилище).
    pub fn register_team(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        team: &Team,
    ) -> Result<Tournament, LobbyError> {
        let mut tournament = self.get(tournament_id)?;
        tournament.register_team(team.id)?;

        self.storage.save_team(session, team)?;
        self.storage.save_tournament(session, &tournament)?;

        Ok(tournament)
    }

    pub fn add_referee(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        username: &str,
    ) -> Result<Tournament, LobbyError> {
        let mut tournament = self.get(tournament_id)?;
        tournament.add_referee(username);

        self.storage.save_tournament(session, &tournament)?;

        Ok(tournament)
    }

    /// Закрыть регистрацию и построить сетку.
    ///
    /// `draw_seed` — детерминированная жеребьёвка; без него состав идёт
    /// в порядке регистрации.
    pub fn generate_bracket(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        draw_seed: Option<u64>,
    ) -> Result<Vec<Match>, LobbyError> {
        let mut tournament = self.get(tournament_id)?;
        tournament.start()?;

        let teams = self.storage.fetch_teams(tournament_id)?;
        let roster = draw(&teams, draw_seed);
        let matches = bracket::build_initial_matches(&roster, tournament_id)?;

        self.storage.save_matches(session, tournament_id, &matches)?;
        self.storage.save_tournament(session, &tournament)?;

        info!(
            tournament_id,
            teams = teams.len(),
            matches = matches.len(),
            "bracket generated"
        );

        Ok(matches)
    }

    /// Внести счёт матча. Если это финал — турнир завершается.
    pub fn report_score(
        &mut self,
        session: &SessionContext,
        tournament_id: TournamentId,
        id_in_tournament: MatchNumber,
        score1: u32,
        score2: u32,
    ) -> Result<BracketView<Referee>, LobbyError> {
        let mut tournament = self.get(tournament_id)?;
        if tournament.status != TournamentStatus::Running {
            return Err(TournamentError::InvalidStatus {
                expected: TournamentStatus::Running,
                found: tournament.status,
            }
            .into());
        }

        let matches = self.storage.fetch_matches(tournament_id)?;
        let updated = bracket::report_score(&matches, id_in_tournament, score1, score2)?;
        self.storage.save_matches(session, tournament_id, &updated)?;

        if let Some(champion) = bracket::champion(&updated) {
            tournament.finish(champion)?;
            self.storage.save_tournament(session, &tournament)?;
            info!(tournament_id, champion, "tournament finished");
        }

        self.bracket_view(tournament_id, None)
    }

    /// Сетка по раундам. `order` переопределяет порядок из конфига.
    pub fn bracket_view(
        &self,
        tournament_id: TournamentId,
        order: Option<RoundOrder>,
    ) -> Result<BracketView<Referee>, LobbyError> {
        let tournament = self.get(tournament_id)?;
        let teams = self.storage.fetch_teams(tournament_id)?;
        let matches = self.storage.fetch_matches(tournament_id)?;

        // До жеребьёвки сетки нет, сверять её с составом нечего.
        if matches.is_empty() {
            return Ok(BracketView {
                rounds: Vec::new(),
                issues: Vec::new(),
                orphans: Vec::new(),
            });
        }

        let referees = referees_from_usernames(&tournament.referees);

        let mut config = self.config.clone();
        if let Some(order) = order {
            config.round_order = order;
        }

        Ok(bracket::build_rounds(
            &matches,
            &teams,
            Some(referees.as_slice()),
            &config,
        ))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn draw(teams: &[Team], draw_seed: Option<u64>) -> Vec<Team> {
    use crate::infra::rng::DeterministicRng;

    match draw_seed {
        Some(seed) => {
            let mut rng = DeterministicRng::from_seed(seed);
            tracing::debug!(seed = rng.seed(), teams = teams.len(), "roster draw");
            bracket::draw_roster(teams, &mut rng)
        }
        None => teams.to_vec(),
    }
}

#[cfg(target_arch = "wasm32")]
fn draw(teams: &[Team], draw_seed: Option<u64>) -> Vec<Team> {
    use crate::infra::rng::SystemRng;

    match draw_seed {
        Some(_) => bracket::draw_roster(teams, &mut SystemRng),
        None => teams.to_vec(),
    }
}
