use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{TeamId, TournamentId};

/// Простая генерация ID на основе монотонных счётчиков.
/// Это удобно для локальных тестов, оффчейн-сервисов и CLI.
///
/// Движок сам идентификаторы команд не придумывает: их выдаёт хранилище
/// (или этот генератор, когда хранилище in-memory).
/// `0` никогда не выдаётся — он занят заглушкой "none".
#[derive(Debug)]
pub struct IdGenerator {
    tournament_counter: AtomicU64,
    team_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            tournament_counter: AtomicU64::new(1),
            team_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_tournament_id(&self) -> TournamentId {
        self.tournament_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_team_id(&self) -> TeamId {
        self.team_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
