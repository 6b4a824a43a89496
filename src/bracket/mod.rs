//! Движок турнирной сетки на выбывание.
//!
//! Чистые синхронные функции без I/O и без общего состояния:
//!   - `build_initial_matches` – плоский список матчей для нового турнира
//!   - `build_rounds` – сетка по раундам из сохранённого списка
//!   - `report_score` – внести счёт и продвинуть победителя
//!   - `validate_bracket` – проверить сохранённые данные на форму дерева

pub mod builder;
pub mod errors;
pub mod results;
pub mod rounds;
pub mod tree;
pub mod validation;

pub use builder::{build_initial_matches, draw_roster};
pub use errors::{BracketError, BracketIssue};
pub use results::{champion, report_score};
pub use rounds::{build_rounds, BracketView, Game, Round, Slot};
pub use validation::validate_bracket;

/// RNG интерфейс для жеребьёвки.
/// Реализации лежат в infra (обёртка над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
