use tracing::debug;

use crate::bracket::errors::BracketError;
use crate::bracket::tree;
use crate::domain::{Match, MatchNumber, TeamId};

/// Внести счёт матча и продвинуть победителя в следующий матч.
///
/// Возвращает новый список: входной срез не меняется.
/// Победитель чётного матча становится team1 родителя, нечётного — team2.
/// Повторный ввод счёта разрешён, пока родитель не сыгран.
pub fn report_score(
    matches: &[Match],
    id_in_tournament: MatchNumber,
    score1: u32,
    score2: u32,
) -> Result<Vec<Match>, BracketError> {
    let pos = position_of(matches, id_in_tournament)
        .ok_or(BracketError::MatchNotFound { id_in_tournament })?;

    if !matches[pos].is_ready() {
        return Err(BracketError::MatchNotReady { id_in_tournament });
    }

    if score1 == score2 {
        return Err(BracketError::DrawNotAllowed { id_in_tournament });
    }

    let parent_pos = match tree::parent_of(id_in_tournament) {
        Some(parent) => {
            let parent_pos = position_of(matches, parent).ok_or_else(|| {
                BracketError::StructuralInconsistency {
                    id_in_tournament,
                    reason: format!("parent match {parent} is missing"),
                }
            })?;

            if matches[parent_pos].is_played() {
                return Err(BracketError::ParentAlreadyPlayed {
                    id_in_tournament,
                    parent,
                });
            }

            Some(parent_pos)
        }
        None => None,
    };

    let mut out = matches.to_vec();
    out[pos].score1 = Some(score1);
    out[pos].score2 = Some(score2);

    let winner = out[pos].winner();

    if let Some(parent_pos) = parent_pos {
        let parent = &mut out[parent_pos];
        if tree::feeds_team1(id_in_tournament) {
            parent.team1 = winner;
        } else {
            parent.team2 = winner;
        }
    }

    debug!(id_in_tournament, score1, score2, ?winner, "score reported");

    Ok(out)
}

/// Победитель турнира — победитель финала, если финал сыгран.
pub fn champion(matches: &[Match]) -> Option<TeamId> {
    matches.iter().find(|m| m.is_root()).and_then(Match::winner)
}

fn position_of(matches: &[Match], id_in_tournament: MatchNumber) -> Option<usize> {
    matches
        .iter()
        .position(|m| m.id_in_tournament == id_in_tournament)
}
