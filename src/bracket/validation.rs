use std::collections::HashSet;

use crate::bracket::errors::BracketIssue;
use crate::bracket::tree;
use crate::domain::{Match, MatchNumber};

/// Проверка плоского списка матчей на соответствие форме дерева.
///
/// `team_count` — размер состава, если он известен: тогда дополнительно
/// сверяется ожидаемое число матчей `max(T - 1, 0)`.
///
/// Ничего не исправляет, только перечисляет аномалии.
pub fn validate_bracket(matches: &[Match], team_count: Option<usize>) -> Vec<BracketIssue> {
    let mut issues = Vec::new();

    let total = matches.len();
    let rounds = tree::round_count_for_matches(total);
    let ids: HashSet<MatchNumber> = matches.iter().map(|m| m.id_in_tournament).collect();
    let mut seen = HashSet::with_capacity(total);

    if let Some(team_count) = team_count {
        let expected = tree::match_count(team_count);
        if expected != total {
            issues.push(BracketIssue::StructuralInconsistency {
                id_in_tournament: 0,
                reason: format!("{team_count} teams need {expected} matches, found {total}"),
            });
        }
    }

    for m in matches {
        let id = m.id_in_tournament;

        if id == 0 || id as usize > total {
            issues.push(structural(id, format!("id is outside 1..={total}")));
            continue;
        }

        if !seen.insert(id) {
            issues.push(structural(id, "id is used twice".into()));
            continue;
        }

        let parent = tree::parent_of(id);
        if m.id_parent != parent {
            issues.push(structural(
                id,
                format!("idParent is {:?}, expected {:?}", m.id_parent, parent),
            ));
        }

        if let Some(parent) = parent {
            if !ids.contains(&parent) {
                issues.push(structural(id, format!("parent match {parent} is missing")));
            }
        }

        if let Some(round_nb) = m.round_nb {
            let expected = tree::round_of(id, rounds);
            if Some(round_nb) != expected {
                issues.push(structural(
                    id,
                    format!("roundNb is {round_nb}, expected {expected:?}"),
                ));
            }
        }
    }

    issues
}

fn structural(id_in_tournament: MatchNumber, reason: String) -> BracketIssue {
    BracketIssue::StructuralInconsistency {
        id_in_tournament,
        reason,
    }
}
