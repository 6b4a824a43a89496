use serde::{Deserialize, Serialize};

use crate::bracket::{BracketView, Game, Slot};
use crate::domain::referee::Referee;
use crate::domain::tournament::Tournament;
use crate::domain::{MatchNumber, TeamId, TournamentId};
use crate::infra::mapping::referee_usernames;

/// DTO одного матча сетки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameDto {
    pub id_in_tournament: MatchNumber,
    pub id_parent: Option<MatchNumber>,
    pub team1: Slot,
    pub team2: Slot,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    /// Username'ы судей.
    pub referees: Vec<String>,
}

/// DTO раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundDto {
    pub number: u32,
    pub games: Vec<GameDto>,
}

/// DTO всей сетки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BracketViewDto {
    pub tournament_id: TournamentId,
    pub rounds: Vec<RoundDto>,
    /// Матчи без раунда (битые данные), показываются отдельно.
    pub unplaced: Vec<GameDto>,
    /// Предупреждения для фронта (текст `BracketIssue`).
    pub warnings: Vec<String>,
    pub champion: Option<TeamId>,
}

/// DTO турнира (минимальное представление для лобби).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentViewDto {
    pub tournament_id: TournamentId,
    pub name: String,
    pub game_name: String,
    pub organizer: String,
    /// Статус в текстовом виде: "Registering", "Running", "Finished".
    pub status: String,
    pub teams_registered: u32,
    pub max_teams: u32,
    pub referees: Vec<String>,
    pub champion: Option<TeamId>,
}

impl From<&Tournament> for TournamentViewDto {
    fn from(t: &Tournament) -> Self {
        Self {
            tournament_id: t.id,
            name: t.settings.name.clone(),
            game_name: t.settings.game_name.clone(),
            organizer: t.organizer.clone(),
            status: format!("{:?}", t.status),
            teams_registered: t.teams.len() as u32,
            max_teams: t.settings.nb_team,
            referees: t.referees.clone(),
            champion: t.champion,
        }
    }
}

/// Помощник: BracketView движка -> DTO.
pub fn map_bracket_view(
    tournament_id: TournamentId,
    view: BracketView<Referee>,
    champion: Option<TeamId>,
) -> BracketViewDto {
    let warnings = view.issues.iter().map(|i| i.to_string()).collect();

    BracketViewDto {
        tournament_id,
        rounds: view
            .rounds
            .into_iter()
            .map(|r| RoundDto {
                number: r.number,
                games: r.games.into_iter().map(map_game).collect(),
            })
            .collect(),
        unplaced: view.orphans.into_iter().map(map_game).collect(),
        warnings,
        champion,
    }
}

fn map_game(game: Game<Referee>) -> GameDto {
    GameDto {
        id_in_tournament: game.match_record.id_in_tournament,
        id_parent: game.match_record.id_parent,
        score1: game.match_record.score1,
        score2: game.match_record.score2,
        referees: referee_usernames(&game.referees),
        team1: game.team1,
        team2: game.team2,
    }
}
