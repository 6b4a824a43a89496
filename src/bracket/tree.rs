//! Арифметика дерева сетки.
//!
//! Матчи нумеруются как узлы двоичной кучи: финал = 1, у матча `i`
//! дочерние слоты `2i` и `2i + 1`, родитель `i / 2`. Слот с номером
//! `<= N` — победитель матча с этим номером, слот `> N` — команда из состава.

use crate::domain::MatchNumber;

/// Сколько матчей содержат исходные команды: `ceil(T / 2)`.
pub fn leaf_count(team_count: usize) -> usize {
    team_count.div_ceil(2)
}

/// Сколько всего матчей в сетке на `T` команд: `max(T - 1, 0)`.
pub fn match_count(team_count: usize) -> usize {
    team_count.saturating_sub(1)
}

/// Количество раундов: `ceil(log2(leaf_count)) + 1`, минимум 1.
pub fn round_count(leaf_count: usize) -> u32 {
    if leaf_count <= 1 {
        return 1;
    }
    (leaf_count - 1).ilog2() + 2
}

/// Количество раундов по числу матчей: `floor(log2 N) + 1`, минимум 1.
///
/// Для сетки из `build_initial_matches` совпадает с `round_count(leaf_count(T))`.
pub fn round_count_for_matches(match_count: usize) -> u32 {
    if match_count <= 1 {
        return 1;
    }
    match_count.ilog2() + 1
}

/// Родитель матча, у финала None.
#[inline]
pub fn parent_of(id: MatchNumber) -> Option<MatchNumber> {
    if id > 1 {
        Some(id / 2)
    } else {
        None
    }
}

/// Дочерние слоты матча: (слот team1, слот team2).
#[inline]
pub fn children_of(id: MatchNumber) -> (MatchNumber, MatchNumber) {
    let left = id.saturating_mul(2);
    (left, left.saturating_add(1))
}

/// Победитель матча `child` попадает в team1 родителя (иначе в team2).
#[inline]
pub fn feeds_team1(child: MatchNumber) -> bool {
    child % 2 == 0
}

/// Номер раунда матча: 1 = самый глубокий уровень, `rounds` = финал.
///
/// None, если id = 0 или матч глубже, чем позволяет `rounds`.
pub fn round_of(id: MatchNumber, rounds: u32) -> Option<u32> {
    if id == 0 {
        return None;
    }
    rounds.checked_sub(id.ilog2()).filter(|r| *r >= 1)
}

/// Провизорный номер -> итоговый: `N - p + 1` (и обратно, операция симметрична).
#[inline]
pub fn reindex(provisional: MatchNumber, total: MatchNumber) -> MatchNumber {
    total - provisional + 1
}
