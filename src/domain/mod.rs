//! Доменная модель турнирной сетки: команды, судьи, матчи, турниры, конфиг.

pub mod config;
pub mod match_record;
pub mod referee;
pub mod team;
pub mod tournament;

// Базовые идентификаторы.
pub type TeamId = u64;
pub type TournamentId = u64;

/// Номер матча внутри турнира (`idInTournament`).
///
/// Инвариант сетки: `parent(id) = id / 2`, финал всегда `1`.
pub type MatchNumber = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Team и т.п.
pub use config::*;
pub use match_record::*;
pub use referee::*;
pub use team::*;
pub use tournament::*;
