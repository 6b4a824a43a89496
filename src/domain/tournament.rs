// src/domain/tournament.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{TeamId, TournamentId};

/// Настройки турнира, которые приходят при создании через фронт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSettings {
    /// Название турнира.
    pub name: String,

    /// Дисциплина (название игры).
    pub game_name: String,

    /// Длительность одного матча в минутах.
    pub match_duration: u32,

    /// Перерыв между матчами в минутах.
    pub break_duration: u32,

    /// Дедлайн регистрации (Unix timestamp, секунды UTC).
    ///
    /// 0 – без дедлайна.
    pub dead_line_ts: u64,

    /// Максимальное количество команд.
    pub nb_team: u32,
}

impl TournamentSettings {
    /// Жёсткая валидация настроек.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidSettings(
                "TournamentSettings: name is empty".into(),
            ));
        }

        if self.game_name.trim().is_empty() {
            return Err(TournamentError::InvalidSettings(
                "TournamentSettings: game_name is empty".into(),
            ));
        }

        if self.match_duration == 0 {
            return Err(TournamentError::InvalidSettings(
                "TournamentSettings: match_duration = 0".into(),
            ));
        }

        if self.nb_team < 2 {
            return Err(TournamentError::InvalidSettings(
                "TournamentSettings: nb_team must be >= 2".into(),
            ));
        }

        Ok(())
    }
}

/// Статус турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    /// Команды регистрируются, сетки ещё нет.
    Registering,
    /// Сетка построена, идут матчи.
    Running,
    /// Финал сыгран.
    Finished,
}

/// Ошибки турнирной логики.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Некорректные настройки турнира: {0}")]
    InvalidSettings(String),

    #[error("Турнир {tournament_id} не найден")]
    TournamentNotFound { tournament_id: TournamentId },

    #[error("Турнир {tournament_id} уже существует")]
    TournamentExists { tournament_id: TournamentId },

    #[error("Id 0 зарезервирован: {0}")]
    ReservedId(String),

    #[error("Турнир {tournament_id} заполнен")]
    TournamentFull { tournament_id: TournamentId },

    #[error("Команда {team_id} уже зарегистрирована в турнире {tournament_id}")]
    AlreadyRegistered {
        team_id: TeamId,
        tournament_id: TournamentId,
    },

    #[error("Неверный статус турнира: ожидали {expected:?}, сейчас {found:?}")]
    InvalidStatus {
        expected: TournamentStatus,
        found: TournamentStatus,
    },

    #[error("Для сетки нужно минимум 2 команды, зарегистрировано {registered}")]
    NotEnoughTeams { registered: u32 },
}

/// Основной объект турнира.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tournament {
    pub id: TournamentId,
    /// Username организатора.
    pub organizer: String,
    pub settings: TournamentSettings,
    pub status: TournamentStatus,
    /// Зарегистрированные команды в порядке регистрации.
    ///
    /// Этот порядок и есть порядок состава для `build_initial_matches`.
    pub teams: Vec<TeamId>,
    /// Username'ы судей.
    pub referees: Vec<String>,
    /// Победитель (когда финал сыгран).
    pub champion: Option<TeamId>,
}

impl Tournament {
    pub fn new(
        id: TournamentId,
        organizer: impl Into<String>,
        settings: TournamentSettings,
    ) -> Result<Self, TournamentError> {
        if id == 0 {
            return Err(TournamentError::ReservedId("tournament id".into()));
        }
        settings.validate()?;

        Ok(Self {
            id,
            organizer: organizer.into(),
            settings,
            status: TournamentStatus::Registering,
            teams: Vec::new(),
            referees: Vec::new(),
            champion: None,
        })
    }

    /// Регистрируем команду (пока турнир в статусе Registering).
    pub fn register_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        self.expect_status(TournamentStatus::Registering)?;

        // 0 занят заглушкой "none", сетку с такой командой не построить.
        if team_id == 0 {
            return Err(TournamentError::ReservedId("team id".into()));
        }

        if self.teams.len() as u32 >= self.settings.nb_team {
            return Err(TournamentError::TournamentFull {
                tournament_id: self.id,
            });
        }

        if self.teams.contains(&team_id) {
            return Err(TournamentError::AlreadyRegistered {
                team_id,
                tournament_id: self.id,
            });
        }

        self.teams.push(team_id);
        Ok(())
    }

    /// Добавить судью. Повторное добавление игнорируется.
    pub fn add_referee(&mut self, username: impl Into<String>) {
        let username = username.into();
        if !self.referees.contains(&username) {
            self.referees.push(username);
        }
    }

    /// Закрыть регистрацию: дальше работаем с сеткой.
    pub fn start(&mut self) -> Result<(), TournamentError> {
        self.expect_status(TournamentStatus::Registering)?;

        if self.teams.len() < 2 {
            return Err(TournamentError::NotEnoughTeams {
                registered: self.teams.len() as u32,
            });
        }

        self.status = TournamentStatus::Running;
        Ok(())
    }

    /// Зафиксировать победителя.
    pub fn finish(&mut self, champion: TeamId) -> Result<(), TournamentError> {
        self.expect_status(TournamentStatus::Running)?;

        self.champion = Some(champion);
        self.status = TournamentStatus::Finished;
        Ok(())
    }

    fn expect_status(&self, expected: TournamentStatus) -> Result<(), TournamentError> {
        if self.status != expected {
            return Err(TournamentError::InvalidStatus {
                expected,
                found: self.status,
            });
        }
        Ok(())
    }
}
